// SPDX-License-Identifier: Apache-2.0

//! A convenience Reader implementation for in-memory documents.
//!
//! [`ChunkReader`] can hand a whole byte slice to the parser or simulate a
//! streaming source by limiting every `read()` call to a fixed chunk size.
//!
//! For production input, implement [`Reader`] for your source or, with the
//! `std` feature, wrap any `std::io::Read` in [`crate::IoReader`].
//!
//! # Examples
//!
//! ```rust
//! use tomlsax::{parse, ChunkReader, Event, EventHandler, ParseError};
//!
//! let toml = b"name = \"Alice\"\nage = 30\n";
//! let mut count = 0;
//! let mut handler = EventHandler::new(|_event: Event<'_>| -> Result<(), ParseError> {
//!     count += 1;
//!     Ok(())
//! });
//! parse(ChunkReader::full_slice(toml), &mut handler).unwrap();
//! drop(handler);
//! assert_eq!(count, 6);
//! ```

use crate::Reader;

/// A [`Reader`] that reads from a byte slice, optionally in fixed-size chunks.
///
/// 1.  **Full Slice Reading**: [`ChunkReader::full_slice()`] serves the whole
///     slice as fast as the caller's buffer allows.
///
/// 2.  **Chunked Reading**: [`ChunkReader::new()`] limits each `read()` to a
///     maximum chunk size, which is useful for stress-testing stream handling.
#[derive(Debug)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a new chunked reader from a byte slice.
    ///
    /// Each call to `read()` will return at most `chunk_size` bytes
    /// (minimum 1).
    pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Create a new reader that consumes the entire byte slice at once.
    pub fn full_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }
}

impl Reader for ChunkReader<'_> {
    type Error = core::convert::Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.remaining();
        let to_copy = remaining.len().min(buf.len()).min(self.chunk_size);

        if let (Some(dest), Some(src)) = (buf.get_mut(..to_copy), remaining.get(..to_copy)) {
            dest.copy_from_slice(src);
            self.pos = self.pos.saturating_add(to_copy);
            Ok(to_copy)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_slice_reader_basic() {
        let data = b"hello world";
        let mut reader = ChunkReader::full_slice(data);

        let mut buf = [0u8; 5];
        assert_eq!(reader.read(&mut buf).unwrap(), 5);
        assert_eq!(&buf, b"hello");

        let mut buf = [0u8; 10];
        assert_eq!(reader.read(&mut buf).unwrap(), 6);
        assert_eq!(&buf[..6], b" world");

        // EOF
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_full_slice_reader_empty() {
        let mut reader = ChunkReader::full_slice(b"");
        let mut buf = [0u8; 10];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_chunk_reader_basic() {
        let mut reader = ChunkReader::new(b"a = 1\nb", 3);

        let mut buf = [0u8; 10];
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"a =");
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b" 1\n");
        assert_eq!(reader.remaining(), b"b");
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_chunk_reader_zero_chunk_size() {
        // Clamped to 1
        let mut reader = ChunkReader::new(b"hello", 0);

        let mut buf = [0u8; 10];
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'h');
    }
}
