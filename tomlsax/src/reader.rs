// SPDX-License-Identifier: Apache-2.0

//! Input sources for the parser.

/// Trait for input sources that can provide data to the parser.
pub trait Reader {
    /// The error type returned by read operations
    type Error;

    /// Read data into the provided buffer.
    /// Returns the number of bytes read, or an error.
    ///
    /// # Contract
    /// - A return value of 0 **MUST** indicate true end of stream
    /// - Implementations **MUST NOT** return 0 unless no more data will ever be available
    /// - Returning 0 followed by non-zero reads in subsequent calls violates this contract
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    type Error = R::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

/// A [`Reader`] over any [`std::io::Read`] source.
///
/// The parser pulls one byte per call, so unbuffered sources such as
/// `std::fs::File` should be wrapped in a `std::io::BufReader` first.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoReader<T> {
    inner: T,
}

#[cfg(feature = "std")]
impl<T: std::io::Read> IoReader<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<T: std::io::Read> Reader for IoReader<T> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}
