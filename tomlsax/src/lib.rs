// SPDX-License-Identifier: Apache-2.0

//! A streaming, SAX-style TOML parser.
//!
//! The parser pulls bytes from a [`Reader`] with one byte of lookahead and
//! reports every construct it recognizes to a [`TomlHandler`] as it goes. No
//! document tree is built; callers that need one assemble it from the events.
//!
//! ```rust
//! use tomlsax::{parse_str, ParseError, TomlHandler};
//!
//! #[derive(Default)]
//! struct SumIntegers(i64);
//!
//! impl TomlHandler<ParseError> for SumIntegers {
//!     fn integer(&mut self, value: i64) -> Result<(), ParseError> {
//!         self.0 += value;
//!         Ok(())
//!     }
//! }
//!
//! let mut sum = SumIntegers::default();
//! parse_str("[server]\nports = [8000, 8001]\nworkers = 4\n", &mut sum).unwrap();
//! assert_eq!(sum.0, 16005);
//! ```
//!
//! Keys, strings, comments and datetimes are handed out as `&str`, so their
//! bytes must be UTF-8. Other encodings are not transcoded: a Latin-1 `é`
//! fails with [`ErrKind::InvalidUtf8`] at the start of the token.
//!
//! Errors carry the byte offset at which parsing stopped:
//!
//! ```rust
//! use tomlsax::{parse_slice, parse_str, ErrKind, ParseError, TomlHandler};
//!
//! struct Ignore;
//! impl TomlHandler<ParseError> for Ignore {}
//!
//! let err = parse_str("key = 01", &mut Ignore).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrKind::LeadingZero));
//! assert_eq!(err.offset(), 6);
//!
//! let err = parse_slice(b"k = 'caf\xe9'", &mut Ignore).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrKind::InvalidUtf8));
//! assert_eq!(err.offset(), 4);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod byte_cursor;

mod chunk_reader;
pub use chunk_reader::ChunkReader;

mod config;
pub use config::{DefaultConfig, Limits, ParserConfig};

mod escape_processor;

mod handler;
pub use handler::{EventHandler, TomlHandler};

mod int_parser;

mod number_parser;

mod parse_error;
pub use parse_error::{ErrKind, ParseError};

mod reader;
#[cfg(feature = "std")]
pub use reader::IoReader;
pub use reader::Reader;

mod sax_parser;
pub use sax_parser::SaxParser;

mod shared;
pub use shared::Event;

/// Parse a document from `reader` with the default limits.
pub fn parse<R, H, E>(reader: R, handler: &mut H) -> Result<(), E>
where
    R: Reader,
    H: TomlHandler<E> + ?Sized,
    E: From<ParseError>,
{
    parse_with_config::<DefaultConfig, R, H, E>(reader, handler)
}

/// Parse a document from `reader` with the limits of `C`.
pub fn parse_with_config<C, R, H, E>(reader: R, handler: &mut H) -> Result<(), E>
where
    C: ParserConfig,
    R: Reader,
    H: TomlHandler<E> + ?Sized,
    E: From<ParseError>,
{
    SaxParser::<R, C>::with_config(reader).parse(handler)
}

/// Parse an in-memory document.
pub fn parse_slice<H, E>(input: &[u8], handler: &mut H) -> Result<(), E>
where
    H: TomlHandler<E> + ?Sized,
    E: From<ParseError>,
{
    parse(ChunkReader::full_slice(input), handler)
}

/// Parse an in-memory document.
pub fn parse_str<H, E>(input: &str, handler: &mut H) -> Result<(), E>
where
    H: TomlHandler<E> + ?Sized,
    E: From<ParseError>,
{
    parse_slice(input.as_bytes(), handler)
}

/// Parse a document from any [`std::io::Read`] source.
///
/// Read failures are reported as [`ParseError::Stream`]. The parser pulls one
/// byte per call, so wrap unbuffered sources in a `std::io::BufReader`.
#[cfg(feature = "std")]
pub fn parse_io<T, H, E>(source: T, handler: &mut H) -> Result<(), E>
where
    T: std::io::Read,
    H: TomlHandler<E> + ?Sized,
    E: From<ParseError>,
{
    parse(IoReader::new(source), handler)
}
