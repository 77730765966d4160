//! Sequential byte sources for the [`Deserializer`](crate::Deserializer).
//!
//! The parser only ever asks for the next byte, so a source needs no
//! lookahead, seeking or rewinding.

use crate::{Error, Result};
use std::io;

/// A forward-only byte source.
pub trait Read {
    /// Returns the next byte, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the underlying source fails.
    fn next(&mut self) -> Result<Option<u8>>;

    /// Number of bytes consumed so far.
    fn offset(&self) -> usize;
}

/// Reads from an in-memory byte slice.
pub struct SliceRead<'a> {
    slice: &'a [u8],
    index: usize,
}

impl<'a> SliceRead<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }
}

impl<'a> Read for SliceRead<'a> {
    #[inline]
    fn next(&mut self) -> Result<Option<u8>> {
        let byte = self.slice.get(self.index).copied();
        if byte.is_some() {
            self.index += 1;
        }
        Ok(byte)
    }

    fn offset(&self) -> usize {
        self.index
    }
}

/// Reads from any [`io::Read`], buffered internally.
pub struct IoRead<R: io::Read> {
    bytes: io::Bytes<io::BufReader<R>>,
    offset: usize,
}

impl<R: io::Read> IoRead<R> {
    pub fn new(reader: R) -> Self {
        IoRead {
            bytes: io::Read::bytes(io::BufReader::new(reader)),
            offset: 0,
        }
    }
}

impl<R: io::Read> Read for IoRead<R> {
    fn next(&mut self) -> Result<Option<u8>> {
        match self.bytes.next() {
            None => Ok(None),
            Some(Ok(byte)) => {
                self.offset += 1;
                Ok(Some(byte))
            }
            Some(Err(e)) => Err(Error::io(&e.to_string())),
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_read() {
        let mut read = SliceRead::new(b"ab");
        assert_eq!(read.next().unwrap(), Some(b'a'));
        assert_eq!(read.offset(), 1);
        assert_eq!(read.next().unwrap(), Some(b'b'));
        assert_eq!(read.next().unwrap(), None);
        assert_eq!(read.offset(), 2);
    }

    #[test]
    fn test_io_read() {
        let mut read = IoRead::new(io::Cursor::new(b"[]".to_vec()));
        assert_eq!(read.next().unwrap(), Some(b'['));
        assert_eq!(read.next().unwrap(), Some(b']'));
        assert_eq!(read.next().unwrap(), None);
        assert_eq!(read.offset(), 2);
    }

    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_io_read_surfaces_errors() {
        let mut read = IoRead::new(Broken);
        assert_eq!(read.next(), Err(Error::Io("device gone".to_string())));
    }
}
