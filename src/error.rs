//! Error types for list serialization and deserialization.
//!
//! Every failure is surfaced as its own [`Error`] variant so callers can
//! tell a truncated document from a dangling reference without string
//! matching.
//!
//! ## Error Categories
//!
//! - **Structure**: [`Error::EmptyStream`], [`Error::UnexpectedEnd`],
//!   [`Error::UnexpectedChar`], [`Error::UnexpectedField`]
//! - **References**: [`Error::MalformedReference`], [`Error::UnconnectedNode`]
//! - **Serialization**: [`Error::UnrepresentableReference`], [`Error::UnrepresentableData`]
//! - **Environment**: [`Error::Io`], [`Error::LimitExceeded`]
//!
//! ## Examples
//!
//! ```rust
//! use randlist::{from_str, Error};
//!
//! let result = from_str("[{Data='x',Prev=null,Next=null,Rand=null}!]");
//! match result {
//!     Err(Error::UnexpectedChar { byte, .. }) => assert_eq!(byte, b'!'),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use crate::list::NodeId;
use std::fmt;
use thiserror::Error;

/// Which reference an error refers to: one of a node's links, or the
/// list's own `head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Head,
    Prev,
    Next,
    Rand,
}

impl Field {
    /// The field name as it appears in the wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Head => "Head",
            Field::Prev => "Prev",
            Field::Next => "Next",
            Field::Rand => "Rand",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all possible errors that can occur while serializing or
/// deserializing a list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source was empty or did not start with `[`.
    #[error("Empty stream: document must start with '['")]
    EmptyStream,

    /// The source ended while more input was required.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEnd { expected: String },

    /// A byte other than `{`, `,` or `]` appeared between records.
    #[error("Unexpected character {} at byte offset {offset}", display_byte(.byte))]
    UnexpectedChar { byte: u8, offset: usize },

    /// A record field did not carry the name required at its position.
    #[error("Record {record}: expected field '{expected}', found '{found}'")]
    UnexpectedField {
        record: usize,
        expected: &'static str,
        found: String,
    },

    /// A reference is neither `null` nor an in-range decimal index.
    #[error("Record {record}: malformed {field} reference '{value}'")]
    MalformedReference {
        record: usize,
        field: Field,
        value: String,
    },

    /// In a multi-record document, a record has neither `Prev` nor `Next`.
    #[error("Record {record} is not connected: both Prev and Next are null")]
    UnconnectedNode { record: usize },

    /// A node refers to a node outside its list's forward chain.
    #[error("Node {node:?}: {field} refers to a node outside the forward chain")]
    UnrepresentableReference { node: NodeId, field: Field },

    /// A node's payload cannot be written: it contains the quote byte, or
    /// string output was requested for a payload that is not UTF-8.
    #[error("Node {node:?}: data {reason}")]
    UnrepresentableData { node: NodeId, reason: &'static str },

    /// A configured limit was exceeded.
    #[error("Limit exceeded: more than {limit} {what}")]
    LimitExceeded { what: &'static str, limit: usize },

    /// IO error from the underlying byte reader or writer
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an unexpected end-of-input error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randlist::Error;
    ///
    /// let err = Error::unexpected_end("']'");
    /// assert!(err.to_string().contains("expected ']'"));
    /// ```
    pub fn unexpected_end(expected: &str) -> Self {
        Error::UnexpectedEnd {
            expected: expected.to_string(),
        }
    }

    pub fn malformed_reference(record: usize, field: Field, value: &str) -> Self {
        Error::MalformedReference {
            record,
            field,
            value: value.to_string(),
        }
    }

    /// Creates an I/O error for reader or writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if the error was raised while reading a document.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        !matches!(
            self,
            Error::UnrepresentableReference { .. } | Error::UnrepresentableData { .. } | Error::Io(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

fn display_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() || *byte == b' ' {
        format!("'{}'", *byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
