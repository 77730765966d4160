//! Document Format
//!
//! This module documents the text format written by [`to_string`](crate::to_string)
//! and read by [`from_str`](crate::from_str). It contains no code.
//!
//! # Overview
//!
//! A document is a bracketed, comma-separated sequence of records, one per
//! node on the list's forward chain:
//!
//! ```text
//! [{Data='a',Prev=null,Next=1,Rand=1},{Data='b',Prev=0,Next=null,Rand=null}]
//! ```
//!
//! # Grammar
//!
//! ```text
//! document   := '[' records ']'
//! records    := '' | record (',' record)*
//! record     := '{' "Data='" text "'," "Prev=" ref ',' "Next=" ref ',' "Rand=" ref '}'
//! ref        := 'null' | decimal-integer
//! text       := any bytes; a quote byte starts/ends a span copied verbatim
//! ```
//!
//! **Rules**:
//! - Field order is fixed: `Data`, `Prev`, `Next`, `Rand`
//! - Whitespace is never skipped. Between records it is an unexpected byte;
//!   inside a field it is content
//! - A trailing `,` before `]` is tolerated by the reader; the writer never
//!   produces one
//! - Bytes after the closing `]` are not read
//!
//! # Node Numbering
//!
//! Nodes are numbered by walking `next` from `head`, starting at 0. The walk
//! stops at the end of the chain or at the first node seen twice, so a
//! looping list is written with each node exactly once:
//!
//! ```text
//! a -> b -> c -> (back to a)
//! [{Data='a',Prev=null,Next=1,Rand=null},{Data='b',Prev=0,Next=2,Rand=null},{Data='c',Prev=1,Next=0,Rand=null}]
//! ```
//!
//! A `Prev`, `Next` or `Rand` value is the number of the node it points at.
//! Nodes reachable only through `prev` or `rand` get no number, and writing
//! a list that points at such a node fails with
//! [`Error::UnrepresentableReference`](crate::Error::UnrepresentableReference).
//!
//! # Quoting
//!
//! A field value is read up to its terminator (`,` for the first three
//! fields, `}` for `Rand`). A `'` byte opens a span that runs to the next
//! `'`; the span's bytes are kept as-is, terminators included, and the
//! quotes themselves are dropped. The writer always quotes `Data`:
//!
//! | Payload       | Field text          |
//! |---------------|---------------------|
//! | `plain`       | `Data='plain'`      |
//! | `a, b`        | `Data='a, b'`       |
//! | `{x}`         | `Data='{x}'`        |
//! | (empty)       | `Data=''`           |
//!
//! There is no escape for `'` itself, so payloads containing it cannot be
//! written ([`Error::UnrepresentableData`](crate::Error::UnrepresentableData)).
//! Every other byte is carried as-is; payloads need not be UTF-8.
//!
//! # Validation on Read
//!
//! - The first byte must be `[` ([`Error::EmptyStream`](crate::Error::EmptyStream))
//! - Every reference must be `null` or an index below the record count
//!   ([`Error::MalformedReference`](crate::Error::MalformedReference))
//! - With more than one record, each record needs a non-null `Prev` or
//!   `Next` ([`Error::UnconnectedNode`](crate::Error::UnconnectedNode)); a
//!   `Rand` link alone does not count
//! - Record 0 becomes the list head, the last record its tail
