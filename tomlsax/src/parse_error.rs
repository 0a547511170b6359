// SPDX-License-Identifier: Apache-2.0

/// The grammar rule a syntax error was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    /// Input ended after the synthetic trailing newline was already consumed.
    UnexpectedEof,
    /// A line terminator was required (end of an expression).
    ExpectedNewline,
    /// A line terminator appeared where the construct must stay on one line.
    UnexpectedNewline,
    /// A specific punctuation symbol was required.
    ExpectedSymbol(&'static str),
    /// A control character appeared inside a comment.
    InvalidCharacter,
    /// A raw control character appeared inside a string.
    UnescapedControlCharacter,
    /// No bare or quoted key where one was required.
    MissingKey,
    /// A quoted key decoded to the empty string.
    EmptyKey,
    /// A value could not start, or a literal word did not match.
    UnexpectedCharacter,
    /// An array element differs in kind from the first element.
    HeterogeneousArray,
    /// A comma directly before the closing brace of an inline table.
    TrailingComma,
    /// Unknown escape letter after a backslash.
    InvalidEscape,
    /// Non-hex digit inside a `\u` or `\U` escape.
    InvalidUnicodeHex,
    /// Escape decoded to a surrogate or to a value above 0x10FFFF.
    InvalidCodepoint,
    /// Datetime did not follow `YYYY-MM-DDThh:mm:ss[.frac](Z|+hh:mm)`.
    InvalidDatetime,
    /// Integer part or exponent starts with a superfluous zero.
    LeadingZero,
    /// Underscore not placed between two digits.
    InvalidUnderscore,
    /// A fraction or exponent without digits.
    ExpectedDigit,
    /// Numeral exceeded the configured scratch length.
    NumberTooLong,
    /// Integer outside the signed 64-bit range.
    IntegerOverflow,
    /// Float literal overflowed to infinity.
    FloatOverflow,
    /// Scanned numeral was rejected by float conversion.
    InvalidNumber,
    /// Arrays and inline tables nested deeper than the configured limit.
    MaxDepthReached,
    /// Decoded text handed to the handler was not valid UTF-8.
    InvalidUtf8,
}

impl ErrKind {
    /// Human readable description of the failure.
    pub const fn message(&self) -> &'static str {
        match self {
            ErrKind::UnexpectedEof => "Unexpected end of input",
            ErrKind::ExpectedNewline => "Expected new-line",
            ErrKind::UnexpectedNewline => "Unexpected new-line",
            ErrKind::ExpectedSymbol(expected) => expected,
            ErrKind::InvalidCharacter => "Control characters are not allowed in comments",
            ErrKind::UnescapedControlCharacter => "Control characters must be escaped",
            ErrKind::MissingKey => "Expected a key",
            ErrKind::EmptyKey => "Expected a non-empty key",
            ErrKind::UnexpectedCharacter => "Unexpected character",
            ErrKind::HeterogeneousArray => "All array elements must be of the same type",
            ErrKind::TrailingComma => "Trailing comma is not allowed in an inline table",
            ErrKind::InvalidEscape => "Invalid escape-sequence",
            ErrKind::InvalidUnicodeHex => "Expected hex-digit",
            ErrKind::InvalidCodepoint => "Escaped codepoint is not a Unicode scalar value",
            ErrKind::InvalidDatetime => "Bad datetime",
            ErrKind::LeadingZero => "Leading zeros are not allowed",
            ErrKind::InvalidUnderscore => "Underscores must be surrounded by digits",
            ErrKind::ExpectedDigit => "Expected digit",
            ErrKind::NumberTooLong => "Number is too long",
            ErrKind::IntegerOverflow => {
                "The number cannot be represented as 64-bit signed integer"
            }
            ErrKind::FloatOverflow => {
                "The number cannot be represented as 64-bit floating point number"
            }
            ErrKind::InvalidNumber => "Bad number",
            ErrKind::MaxDepthReached => "Maximum nesting depth reached",
            ErrKind::InvalidUtf8 => "Invalid UTF-8",
        }
    }
}

/// Errors that can occur during TOML parsing.
///
/// Every error carries the byte offset into the input that was genuinely
/// consumed from the reader when the failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The document violates the grammar.
    Syntax { kind: ErrKind, offset: usize },
    /// The underlying reader failed (I/O error, not end-of-stream).
    Stream { offset: usize },
}

impl ParseError {
    pub(crate) const fn syntax(kind: ErrKind, offset: usize) -> Self {
        ParseError::Syntax { kind, offset }
    }

    /// Byte offset of the failure.
    pub const fn offset(&self) -> usize {
        match self {
            ParseError::Syntax { offset, .. } | ParseError::Stream { offset } => *offset,
        }
    }

    /// Syntax error kind, `None` for reader failures.
    pub const fn kind(&self) -> Option<ErrKind> {
        match self {
            ParseError::Syntax { kind, .. } => Some(*kind),
            ParseError::Stream { .. } => None,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ParseError::Syntax { kind, .. } => kind.message(),
            ParseError::Stream { .. } => "Unable to read data from the stream",
        }
    }

    /// True if the reader failed rather than the document being malformed.
    pub const fn is_stream_error(&self) -> bool {
        matches!(self, ParseError::Stream { .. })
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.message(), self.offset())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
