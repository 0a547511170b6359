// SPDX-License-Identifier: Apache-2.0

use crate::int_parser::{from_ascii_i64, ConstParseIntegerError};
use crate::parse_error::ErrKind;

/// Converted value of a scanned numeral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberResult {
    Integer(i64),
    Float(f64),
}

/// Convert scanned numeral bytes into a value.
///
/// `bytes` is what the grammar engine collected: an optional `-`, digits with
/// underscores removed, and for floats the `.` fraction and `e` exponent.
/// Grammar has already been validated, only range problems remain.
pub fn parse_numeral(bytes: &[u8], is_float: bool) -> Result<NumberResult, ErrKind> {
    if !is_float {
        return match from_ascii_i64(bytes) {
            Ok(value) => Ok(NumberResult::Integer(value)),
            Err(ConstParseIntegerError::Overflow) => Err(ErrKind::IntegerOverflow),
            Err(_) => Err(ErrKind::InvalidNumber),
        };
    }

    let text = core::str::from_utf8(bytes).map_err(|_| ErrKind::InvalidNumber)?;
    let value: f64 = text.parse().map_err(|_| ErrKind::InvalidNumber)?;
    if value.is_infinite() || value.is_nan() {
        return Err(ErrKind::FloatOverflow);
    }
    Ok(NumberResult::Float(value))
}
