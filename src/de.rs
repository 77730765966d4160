//! Document parsing.
//!
//! [`Deserializer`] reads a document one byte at a time and rebuilds the
//! list it describes. Parsing happens in three layers:
//!
//! - **Field scanning** ([`Deserializer::read_until`]): raw bytes up to a
//!   stop byte, where a `'`-quoted span is copied verbatim even if it holds
//!   the stop byte.
//! - **Records**: four `Name=value` fields in fixed order.
//! - **Structure**: the `[`, `{`, `,`, `]` state machine around records.
//!
//! Records are linked into a list only after the whole document parsed, so
//! a failure never yields a half-built list.
//!
//! ## Usage
//!
//! ```rust
//! use randlist::from_str;
//!
//! let list = from_str("[{Data='a, b',Prev=null,Next=null,Rand=0}]").unwrap();
//! let head = list.head().unwrap();
//! assert_eq!(list.text(head), Some("a, b"));
//! assert_eq!(list.rand(head), Some(head));
//! ```

use crate::link;
use crate::read::{IoRead, Read, SliceRead};
use crate::record::RawRecord;
use crate::{Error, LinkedList, Options, Result};
use std::io;
use tracing::{debug, trace};

/// Opens and closes a verbatim span inside a field.
pub(crate) const QUOTE: u8 = b'\'';

/// Top-level parser state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    ExpectOpenBracket,
    /// `after_record` is set right after a record closed, when only `,`
    /// or `]` may follow.
    ScanningBody { after_record: bool },
    Done,
}

/// The document deserializer.
///
/// Created via [`Deserializer::from_slice`], [`Deserializer::from_reader`]
/// or [`Deserializer::new`] over any [`Read`] source.
pub struct Deserializer<R> {
    read: R,
    options: Options,
}

impl<'a> Deserializer<SliceRead<'a>> {
    pub fn from_slice(input: &'a [u8]) -> Self {
        Deserializer::new(SliceRead::new(input))
    }
}

impl<R: io::Read> Deserializer<IoRead<R>> {
    pub fn from_reader(reader: R) -> Self {
        Deserializer::new(IoRead::new(reader))
    }
}

impl<R: Read> Deserializer<R> {
    pub fn new(read: R) -> Self {
        Deserializer {
            read,
            options: Options::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Parses the whole document and links it into a list.
    ///
    /// # Errors
    ///
    /// Any structural, reference or I/O error aborts the parse; see
    /// [`Error`] for the kinds.
    pub fn deserialize(mut self) -> Result<LinkedList> {
        let records = self.parse_records()?;
        link::link(records, &self.options)
    }

    /// Parses the document into unlinked records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStream`] if the input does not open with `[`,
    /// [`Error::UnexpectedChar`] for a stray byte between records and
    /// [`Error::UnexpectedEnd`] if the input stops before `]`.
    pub fn parse_records(&mut self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        let mut state = State::ExpectOpenBracket;

        loop {
            state = match state {
                State::ExpectOpenBracket => match self.read.next()? {
                    Some(b'[') => State::ScanningBody {
                        after_record: false,
                    },
                    _ => return Err(Error::EmptyStream),
                },
                State::ScanningBody { after_record } => {
                    let offset = self.read.offset();
                    match self.read.next()? {
                        None => return Err(Error::unexpected_end("'{', ',' or ']'")),
                        Some(b'{') if !after_record => {
                            self.check_record_limit(records.len())?;
                            let record = self.parse_record(records.len())?;
                            records.push(record);
                            State::ScanningBody { after_record: true }
                        }
                        Some(b',') if after_record => State::ScanningBody {
                            after_record: false,
                        },
                        Some(b']') => State::Done,
                        Some(byte) => return Err(Error::UnexpectedChar { byte, offset }),
                    }
                }
                State::Done => break,
            };
        }

        debug!(records = records.len(), "parsed document");
        Ok(records)
    }

    fn check_record_limit(&self, parsed: usize) -> Result<()> {
        match self.options.max_records {
            Some(limit) if parsed >= limit => Err(Error::LimitExceeded {
                what: "records",
                limit,
            }),
            _ => Ok(()),
        }
    }

    /// Parses one record body; the opening `{` has been consumed.
    fn parse_record(&mut self, record: usize) -> Result<RawRecord> {
        let data = self.parse_field(record, "Data", b',')?;
        let prev = self.parse_reference(record, "Prev", b',')?;
        let next = self.parse_reference(record, "Next", b',')?;
        let rand = self.parse_reference(record, "Rand", b'}')?;

        trace!(record, len = data.len(), %prev, %next, %rand, "parsed record");
        Ok(RawRecord::new(data, prev, next, rand))
    }

    fn parse_reference(&mut self, record: usize, name: &'static str, stop: u8) -> Result<String> {
        let value = self.parse_field(record, name, stop)?;
        // Non-UTF-8 bytes cannot form `null` or digits; the linker rejects them.
        Ok(String::from_utf8_lossy(&value).into_owned())
    }

    /// Reads one `name=value` field up to `stop` and returns the value bytes.
    fn parse_field(&mut self, record: usize, name: &'static str, stop: u8) -> Result<Vec<u8>> {
        let mut field = Vec::new();
        self.read_until(stop, &mut field)?;

        let split = field.iter().position(|&b| b == b'=');
        match split {
            Some(eq) if &field[..eq] == name.as_bytes() => {
                field.drain(..=eq);
                Ok(field)
            }
            _ => {
                let found = &field[..split.unwrap_or(field.len())];
                Err(Error::UnexpectedField {
                    record,
                    expected: name,
                    found: String::from_utf8_lossy(found).into_owned(),
                })
            }
        }
    }

    /// Appends bytes to `out` up to and consuming `stop`.
    ///
    /// A quote byte switches to reading up to the next quote; that span is
    /// appended without its quotes and scanning for `stop` resumes after it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEnd`] if the input ends before `stop` or
    /// before a span's closing quote.
    pub fn read_until(&mut self, stop: u8, out: &mut Vec<u8>) -> Result<()> {
        loop {
            let byte = self
                .read
                .next()?
                .ok_or_else(|| Error::unexpected_end(&format!("'{}'", stop as char)))?;
            if byte == stop {
                return Ok(());
            }
            if byte == QUOTE {
                self.read_until(QUOTE, out)?;
                continue;
            }
            if let Some(limit) = self.options.max_field_len {
                if out.len() >= limit {
                    return Err(Error::LimitExceeded {
                        what: "bytes in a field",
                        limit,
                    });
                }
            }
            out.push(byte);
        }
    }
}
