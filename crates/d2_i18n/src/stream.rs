//! Primitive decoding of D2I streams
//!

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

use crate::error::Result;

/// Atomic reads used by the index parser and the lookups.
///
/// Every operation may fail on a short read or a failed seek.
pub trait PrimitiveReader {
    /// Read a 4 byte signed integer
    fn read_int32(&mut self) -> Result<i32>;

    /// Read a 1 byte flag, anything but zero is `true`
    fn read_boolean(&mut self) -> Result<bool>;

    /// Read a length-prefixed string
    fn read_string(&mut self) -> Result<String>;

    /// Current absolute position in the stream
    fn position(&mut self) -> Result<u64>;

    /// Seek to an absolute position in the stream
    fn goto(&mut self, offset: u64) -> Result<()>;

    /// Number of bytes between the current position and the end of the stream
    fn remaining(&mut self) -> Result<u64>;
}

/// Big-endian [`PrimitiveReader`] over any seekable source
///
/// Strings are prefixed by their length in bytes as an unsigned 16 bit integer, and decoded as
/// UTF8, replacing invalid sequences.
#[derive(Debug)]
pub struct D2iStream<R> {
    inner: R,
}

impl<R: Read + Seek> D2iStream<R> {
    /// Wrap a seekable source, starting at its current position
    pub fn new(inner: R) -> Self {
        D2iStream { inner }
    }

    /// Unwrap and return the inner reader object
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> PrimitiveReader for D2iStream<R> {
    fn read_int32(&mut self) -> Result<i32> {
        Ok(self.inner.read_i32::<BigEndian>()?)
    }

    fn read_boolean(&mut self) -> Result<bool> {
        Ok(self.inner.read_u8()? != 0)
    }

    fn read_string(&mut self) -> Result<String> {
        let length = self.inner.read_u16::<BigEndian>()? as usize;

        let mut buffer = vec![0u8; length];
        self.inner.read_exact(&mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    fn goto(&mut self, offset: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn remaining(&mut self) -> Result<u64> {
        let position = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(position))?;

        Ok(end.saturating_sub(position))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::{
        error::{Error, Result},
        stream::{D2iStream, PrimitiveReader},
    };

    #[test]
    fn read_primitives() -> Result<()> {
        #[rustfmt::skip]
        let input = [
            0xFF, 0xFF, 0xFF, 0xFE,  // -2
            0x00,                    // false
            0x02,                    // true
            0x00, 0x03, b'a', b'b', b'c',
            0x00, 0x00,              // empty string
        ];

        let mut stream = D2iStream::new(Cursor::new(input));
        assert_eq!(stream.read_int32()?, -2);
        assert!(!stream.read_boolean()?);
        assert!(stream.read_boolean()?);
        assert_eq!(stream.read_string()?, "abc");
        assert_eq!(stream.read_string()?, "");
        assert_eq!(stream.position()?, 13);

        Ok(())
    }

    #[test]
    fn read_utf8_string() -> Result<()> {
        let input = [0x00, 0x05, b'E', 0xCC, 0x81, 0xC3, 0xA9];

        let mut stream = D2iStream::new(Cursor::new(input));
        assert_eq!(stream.read_string()?, "E\u{301}é");

        Ok(())
    }

    #[test]
    fn read_string_replaces_invalid_utf8() -> Result<()> {
        let input = [0x00, 0x02, b'a', 0xFF];

        let mut stream = D2iStream::new(Cursor::new(input));
        assert_eq!(stream.read_string()?, "a\u{FFFD}");

        Ok(())
    }

    #[test]
    fn goto_and_position() -> Result<()> {
        let input = [0x00u8, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02];

        let mut stream = D2iStream::new(Cursor::new(input));
        stream.goto(4)?;
        assert_eq!(stream.position()?, 4);
        assert_eq!(stream.read_int32()?, 2);

        stream.goto(0)?;
        assert_eq!(stream.read_int32()?, 1);

        Ok(())
    }

    #[test]
    fn remaining_keeps_position() -> Result<()> {
        let input = [0x00u8, 0x00, 0x00, 0x01, 0x00, 0x00];

        let mut stream = D2iStream::new(Cursor::new(input));
        assert_eq!(stream.remaining()?, 6);

        assert_eq!(stream.read_int32()?, 1);
        assert_eq!(stream.remaining()?, 2);
        assert_eq!(stream.position()?, 4);

        stream.goto(6)?;
        assert_eq!(stream.remaining()?, 0);

        Ok(())
    }

    #[test]
    fn short_reads_fail() {
        let mut stream = D2iStream::new(Cursor::new([0x00u8, 0x01]));
        assert!(matches!(stream.read_int32(), Err(Error::IOError(_))));

        let mut stream = D2iStream::new(Cursor::new([0x00, 0x04, b'a']));
        assert!(matches!(stream.read_string(), Err(Error::IOError(_))));

        let mut stream = D2iStream::new(Cursor::new(Vec::<u8>::new()));
        assert!(matches!(stream.read_boolean(), Err(Error::IOError(_))));
    }
}
