// SPDX-License-Identifier: Apache-2.0

/// Configuration trait for parser resource limits.
///
/// The grammar engine recurses once per nested array or inline table, and
/// collects every numeral into a scratch buffer. Both are bounded so that
/// untrusted input cannot exhaust the stack or the heap.
pub trait ParserConfig {
    /// Maximum nesting of arrays and inline tables.
    const MAX_DEPTH: usize;
    /// Maximum length in bytes of a number or datetime token.
    const MAX_NUMBER_LEN: usize;
}

/// Default limits: 128 levels of nesting, 800-byte numerals.
pub struct DefaultConfig;

impl ParserConfig for DefaultConfig {
    const MAX_DEPTH: usize = 128;
    const MAX_NUMBER_LEN: usize = 800;
}

/// Parser configuration with custom limits.
///
/// Example use:
/// ```rust
/// # use tomlsax::{parse_with_config, ChunkReader, ErrKind, Limits, TomlHandler, ParseError};
/// struct Ignore;
/// impl TomlHandler<ParseError> for Ignore {}
///
/// let err = parse_with_config::<Limits<2, 800>, _, _, _>(
///     ChunkReader::full_slice(b"a = [[[1]]]"),
///     &mut Ignore,
/// )
/// .unwrap_err();
/// assert_eq!(err.kind(), Some(ErrKind::MaxDepthReached));
/// ```
pub struct Limits<const DEPTH: usize, const NUMBER_LEN: usize>;

impl<const DEPTH: usize, const NUMBER_LEN: usize> ParserConfig for Limits<DEPTH, NUMBER_LEN> {
    const MAX_DEPTH: usize = DEPTH;
    const MAX_NUMBER_LEN: usize = NUMBER_LEN;
}
