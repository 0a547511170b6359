// SPDX-License-Identifier: Apache-2.0

/// Shared components for the TOML parser
use alloc::string::String;

/// Events produced by the parser, one per recognized construct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// Parsing has started.
    StartDocument,
    /// The whole input was accepted.
    FinishDocument,
    /// Comment text without the leading `#` and the line terminator.
    Comment(&'a str),
    /// A `[table]` header with its dotted key path.
    Table(&'a [String]),
    /// An `[[array-table]]` header with its dotted key path.
    ArrayTable(&'a [String]),
    /// The key of a key/value pair, followed by the value's events.
    Key(&'a str),
    /// An opening `[` of an array value.
    StartArray,
    /// The closing `]` of an array value, with its element count.
    FinishArray(usize),
    /// An opening `{` of an inline table.
    StartInlineTable,
    /// The closing `}` of an inline table, with its pair count.
    FinishInlineTable(usize),
    /// `true` or `false`.
    Boolean(bool),
    /// Decoded string value.
    String(&'a str),
    /// Datetime value as written in the document.
    Datetime(&'a str),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
}

/// Kind of a parsed value, used for array homogeneity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    Array,
    Table,
}

/// Utility for byte classification
pub struct ByteClass;

impl ByteClass {
    /// Bytes allowed in a bare key: `A-Za-z0-9_-`.
    pub const fn is_key_byte(byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
    }

    /// Any byte below 0x20, tab included.
    pub const fn is_control(byte: u8) -> bool {
        byte < 0x20
    }

    pub const fn is_space(byte: u8) -> bool {
        byte == b' ' || byte == b'\t'
    }

    pub const fn is_newline(byte: u8) -> bool {
        byte == b'\n' || byte == b'\r'
    }
}
