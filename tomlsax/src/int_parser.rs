// SPDX-License-Identifier: Apache-2.0

// Int parser module, mostly borrowed from core::num::parse::radix

/// A custom error type for const integer parsing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConstParseIntegerError {
    /// The input byte slice was empty.
    Empty,
    /// The input consisted only of a sign character (`+` or `-`).
    SignOnly,
    /// An invalid character was found that was not a base-10 digit.
    InvalidDigit,
    /// The number overflowed or underflowed the target integer type.
    Overflow,
}

/// Parses a byte slice into an `i64` in a `const` context.
///
/// The grammar engine strips underscores before calling this, so only an
/// optional sign and decimal digits are accepted.
///
/// This function is guaranteed not to panic.
pub const fn from_ascii_i64(src: &[u8]) -> Result<i64, ConstParseIntegerError> {
    let (is_negative, mut digits) = match src {
        [] => return Err(ConstParseIntegerError::Empty),
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, src),
    };

    if digits.is_empty() {
        return Err(ConstParseIntegerError::SignOnly);
    }

    let mut result: i64 = 0;

    while let Some((&byte, rest)) = digits.split_first() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as i64,
            _ => return Err(ConstParseIntegerError::InvalidDigit),
        };

        result = match result.checked_mul(10) {
            Some(val) => val,
            None => return Err(ConstParseIntegerError::Overflow),
        };

        // Building the number negatively handles i64::MIN.
        result = if is_negative {
            match result.checked_sub(digit) {
                Some(val) => val,
                None => return Err(ConstParseIntegerError::Overflow),
            }
        } else {
            match result.checked_add(digit) {
                Some(val) => val,
                None => return Err(ConstParseIntegerError::Overflow),
            }
        };

        digits = rest;
    }

    Ok(result)
}
