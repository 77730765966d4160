//! # randlist
//!
//! Text serialization for doubly-linked lists whose nodes carry a third,
//! arbitrary `rand` reference.
//!
//! ## What it handles
//!
//! - **Cycles**: a `next` chain that loops back is written once and stops
//! - **Aliasing**: `prev`, `next` and `rand` may all point at the same node
//! - **Forward references**: `rand` may point at a node not yet written
//! - **Delimiters in payloads**: quoted payloads may contain `,`, `{`, `}`, `]`
//!
//! Nodes live in an arena inside [`LinkedList`] and link to each other by
//! [`NodeId`] handles, so no reference counting is involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use randlist::{from_str, to_string, LinkedList};
//!
//! let mut list = LinkedList::new();
//! let a = list.push_back("first");
//! let b = list.push_back("second, with a comma");
//! list.set_rand(a, Some(b));
//! list.set_rand(b, Some(b));
//!
//! let doc = to_string(&list).unwrap();
//! assert_eq!(
//!     doc,
//!     "[{Data='first',Prev=null,Next=1,Rand=1},\
//!       {Data='second, with a comma',Prev=0,Next=null,Rand=1}]"
//! );
//!
//! let back = from_str(&doc).unwrap();
//! assert_eq!(back.len(), 2);
//! let tail = back.tail().unwrap();
//! assert_eq!(back.rand(tail), Some(tail));
//! ```
//!
//! ## Streams
//!
//! [`serialize`] and [`deserialize`] work over [`std::io::Write`] and
//! [`std::io::Read`]. Deserialization fills a caller-provided list and
//! leaves it untouched when the document is rejected:
//!
//! ```rust
//! use randlist::{deserialize, Error, LinkedList};
//!
//! let mut list = LinkedList::new();
//! list.push_back("keep me");
//!
//! let err = deserialize(&b""[..], &mut list).unwrap_err();
//! assert_eq!(err, Error::EmptyStream);
//! assert_eq!(list.len(), 1);
//! ```
//!
//! ## Format
//!
//! See the [`format`] module for the grammar.

pub mod de;
pub mod error;
pub mod format;
#[cfg(feature = "generate")]
pub mod generate;
pub mod index;
pub mod link;
pub mod list;
pub mod options;
pub mod read;
pub mod record;
pub mod ser;

pub use de::Deserializer;
pub use error::{Error, Field, Result};
pub use index::ChainIndex;
pub use list::{LinkedList, Node, NodeId};
pub use options::Options;
pub use record::RawRecord;
pub use ser::Serializer;

use std::io;

/// Writes the document form of `list` to `sink`.
///
/// The document is built in memory first; nothing is written if the list
/// cannot be represented.
///
/// # Errors
///
/// Returns [`Error::UnrepresentableReference`] if `head` is not a node of
/// `list` or a link leaves the forward chain,
/// [`Error::UnrepresentableData`] if a payload contains `'`, and
/// [`Error::Io`] if writing fails.
pub fn serialize<W>(list: &LinkedList, sink: W) -> Result<()>
where
    W: io::Write,
{
    to_writer(sink, list)
}

/// Reads a document from `source` into `list`.
///
/// `list` is replaced only once the whole document parsed and linked.
///
/// # Errors
///
/// Returns the parse, reference or I/O error that stopped the read; `list`
/// is unchanged in that case.
pub fn deserialize<R>(source: R, list: &mut LinkedList) -> Result<()>
where
    R: io::Read,
{
    *list = from_reader(source)?;
    Ok(())
}

/// Serialize a list to a document string.
///
/// Payloads are byte strings; use [`to_vec`] or [`to_writer`] for lists
/// whose payloads are not UTF-8.
///
/// # Examples
///
/// ```rust
/// use randlist::{to_string, LinkedList};
///
/// assert_eq!(to_string(&LinkedList::new()).unwrap(), "[]");
/// ```
///
/// # Errors
///
/// Returns an error if the list cannot be represented, including
/// [`Error::UnrepresentableData`] for a payload that is not UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(list: &LinkedList) -> Result<String> {
    let document = to_vec(list)?;
    if let Some(node) = list.forward().find(|&id| list[id].text().is_none()) {
        return Err(Error::UnrepresentableData {
            node,
            reason: ser::NOT_UTF8,
        });
    }
    // Every payload is UTF-8 and everything around them is ASCII.
    Ok(String::from_utf8_lossy(&document).into_owned())
}

/// Serialize a list to document bytes.
///
/// # Errors
///
/// Returns an error if the list cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(list: &LinkedList) -> Result<Vec<u8>> {
    let mut serializer = Serializer::new();
    serializer.serialize_list(list)?;
    Ok(serializer.into_inner())
}

/// Serialize a list to a writer.
///
/// # Errors
///
/// Returns an error if the list cannot be represented or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, list: &LinkedList) -> Result<()>
where
    W: io::Write,
{
    let document = to_vec(list)?;
    writer.write_all(&document)?;
    writer.flush()?;
    Ok(())
}

/// Deserialize a list from a document string.
///
/// # Examples
///
/// ```rust
/// use randlist::from_str;
///
/// let list = from_str("[]").unwrap();
/// assert!(list.is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if the document is malformed or its references do not
/// resolve.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<LinkedList> {
    from_slice(s.as_bytes())
}

/// Deserialize a list from a document string with custom options.
///
/// # Errors
///
/// As [`from_str`], plus [`Error::LimitExceeded`] when an option limit is hit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &Options) -> Result<LinkedList> {
    from_slice_with_options(s.as_bytes(), options)
}

/// Deserialize a list from document bytes.
///
/// # Errors
///
/// Returns an error if the document is malformed or its references do not
/// resolve.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<LinkedList> {
    Deserializer::from_slice(v).deserialize()
}

/// Deserialize a list from document bytes with custom options.
///
/// # Errors
///
/// As [`from_slice`], plus [`Error::LimitExceeded`] when an option limit is hit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options(v: &[u8], options: &Options) -> Result<LinkedList> {
    Deserializer::from_slice(v)
        .with_options(options.clone())
        .deserialize()
}

/// Deserialize a list from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use randlist::from_reader;
/// use std::io::Cursor;
///
/// let doc = Cursor::new(b"[{Data='x',Prev=null,Next=null,Rand=null}]");
/// let list = from_reader(doc).unwrap();
/// assert_eq!(list.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the document is malformed, or its
/// references do not resolve.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<LinkedList>
where
    R: io::Read,
{
    Deserializer::from_reader(reader).deserialize()
}

/// Deserialize a list from an I/O stream with custom options.
///
/// # Errors
///
/// As [`from_reader`], plus [`Error::LimitExceeded`] when an option limit is hit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(reader: R, options: &Options) -> Result<LinkedList>
where
    R: io::Read,
{
    Deserializer::from_reader(reader)
        .with_options(options.clone())
        .deserialize()
}
