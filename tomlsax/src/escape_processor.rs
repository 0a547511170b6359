// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ErrKind;

/// Pure helpers for decoding backslash escapes in basic strings.
///
/// Errors are returned as bare [`ErrKind`]s; the caller knows which byte
/// offset the failure belongs to.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n').unwrap(), b'\n');
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ErrKind> {
        match escape_char {
            b'b' => Ok(0x08),
            b't' => Ok(b'\t'),
            b'n' => Ok(b'\n'),
            b'f' => Ok(0x0C),
            b'r' => Ok(b'\r'),
            b'"' => Ok(b'"'),
            b'\\' => Ok(b'\\'),
            _ => Err(ErrKind::InvalidEscape),
        }
    }

    /// Number of hex digits following `u` or `U`, `None` for other letters.
    pub fn unicode_escape_width(escape_char: u8) -> Option<usize> {
        match escape_char {
            b'u' => Some(4),
            b'U' => Some(8),
            _ => None,
        }
    }

    /// Validate that a byte represents a valid hexadecimal digit.
    ///
    /// # Returns
    /// The numeric value (0-15) of the hex digit, or an error if invalid.
    pub fn validate_hex_digit(byte: u8) -> Result<u32, ErrKind> {
        match byte {
            b'0'..=b'9' => Ok((byte - b'0') as u32),
            b'a'..=b'f' => Ok(byte.wrapping_sub(b'a').wrapping_add(10) as u32),
            b'A'..=b'F' => Ok(byte.wrapping_sub(b'A').wrapping_add(10) as u32),
            _ => Err(ErrKind::InvalidUnicodeHex),
        }
    }

    /// Encode a codepoint as UTF-8 into `utf8_buffer`.
    ///
    /// Surrogates (0xD800-0xDFFF) and values above 0x10FFFF are rejected.
    pub fn encode_codepoint(codepoint: u32, utf8_buffer: &mut [u8; 4]) -> Result<&[u8], ErrKind> {
        let ch = char::from_u32(codepoint).ok_or(ErrKind::InvalidCodepoint)?;
        Ok(ch.encode_utf8(utf8_buffer).as_bytes())
    }
}

/// Collects the hex digits of one `\uXXXX` or `\UXXXXXXXX` escape.
#[derive(Debug)]
pub struct UnicodeEscapeCollector {
    codepoint: u32,
    width: usize,
    collected: usize,
}

impl UnicodeEscapeCollector {
    /// Create a collector expecting `width` hex digits (4 or 8).
    pub fn new(width: usize) -> Self {
        Self {
            codepoint: 0,
            width,
            collected: 0,
        }
    }

    /// Add a hex digit to the collector.
    /// Returns true if this completes the sequence.
    pub fn add_hex_digit(&mut self, digit: u8) -> Result<bool, ErrKind> {
        let value = EscapeProcessor::validate_hex_digit(digit)?;
        // Eight digits fill exactly 32 bits, nothing is shifted out early.
        self.codepoint = (self.codepoint << 4) | value;
        self.collected = self.collected.saturating_add(1);
        Ok(self.is_complete())
    }

    pub fn is_complete(&self) -> bool {
        self.collected >= self.width
    }

    /// Encode the collected codepoint as UTF-8.
    pub fn process_to_utf8<'a>(&self, utf8_buffer: &'a mut [u8; 4]) -> Result<&'a [u8], ErrKind> {
        EscapeProcessor::encode_codepoint(self.codepoint, utf8_buffer)
    }
}
