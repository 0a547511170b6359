// SPDX-License-Identifier: Apache-2.0

use crate::byte_cursor::ByteCursor;
use crate::config::{DefaultConfig, ParserConfig};
use crate::escape_processor::{EscapeProcessor, UnicodeEscapeCollector};
use crate::handler::TomlHandler;
use crate::number_parser::{parse_numeral, NumberResult};
use crate::parse_error::{ErrKind, ParseError};
use crate::shared::{ByteClass, ValueKind};
use crate::Reader;

use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

const EXPECTED_EQUALS: ErrKind = ErrKind::ExpectedSymbol("Expected '='");
const EXPECTED_HEADER_SEPARATOR: ErrKind = ErrKind::ExpectedSymbol("Expected '.' or ']'");
const EXPECTED_CLOSING_BRACKET: ErrKind = ErrKind::ExpectedSymbol("Expected ']'");
const EXPECTED_ARRAY_SEPARATOR: ErrKind =
    ErrKind::ExpectedSymbol("Expected ',' or ']' after an array element");
const EXPECTED_TABLE_SEPARATOR: ErrKind =
    ErrKind::ExpectedSymbol("Expected ',' or '}' after an inline table element");

/// Reports `kind` at `offset`, or `UnexpectedNewline` when the offending byte
/// was a line terminator.
fn unexpected(byte: u8, kind: ErrKind, offset: usize) -> ParseError {
    if ByteClass::is_newline(byte) {
        ParseError::syntax(ErrKind::UnexpectedNewline, offset)
    } else {
        ParseError::syntax(kind, offset)
    }
}

/// A streaming TOML parser that pushes events into a [`TomlHandler`].
///
/// Input is pulled from the [`Reader`] one byte at a time with a single byte
/// of lookahead. Nothing is backtracked, and only the token currently being
/// decoded is buffered.
pub struct SaxParser<R, C = DefaultConfig> {
    cursor: ByteCursor<R>,
    /// Segments of the table header being parsed
    path: Vec<String>,
    /// Decoded key, string or comment text
    text: Vec<u8>,
    /// Scanned numeral or datetime
    number: Vec<u8>,
    /// Current array/inline-table nesting
    depth: usize,
    _config: PhantomData<C>,
}

/// Methods for SaxParser using DefaultConfig
impl<R: Reader> SaxParser<R, DefaultConfig> {
    /// Create a new parser with the default limits.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader)
    }
}

impl<R: Reader, C: ParserConfig> SaxParser<R, C> {
    /// Create a new parser with custom limits.
    ///
    /// # Example
    /// ```
    /// use tomlsax::{ChunkReader, Limits, ParseError, SaxParser, TomlHandler};
    ///
    /// struct Ignore;
    /// impl TomlHandler<ParseError> for Ignore {}
    ///
    /// let mut parser =
    ///     SaxParser::<_, Limits<16, 64>>::with_config(ChunkReader::full_slice(b"a = [1]"));
    /// parser.parse(&mut Ignore).unwrap();
    /// assert_eq!(parser.position(), 7);
    /// ```
    pub fn with_config(reader: R) -> Self {
        Self {
            cursor: ByteCursor::new(reader),
            path: Vec::new(),
            text: Vec::new(),
            number: Vec::new(),
            depth: 0,
            _config: PhantomData,
        }
    }

    /// Number of input bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse the whole input, delivering events to `handler`.
    ///
    /// Stops at the first syntax error, reader failure or handler error.
    /// Handler errors are returned unchanged.
    pub fn parse<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        log::debug!("document start");
        let result = self.parse_document(handler);
        if result.is_ok() {
            log::debug!("document finished, {} bytes", self.cursor.position());
        } else {
            log::debug!("parse aborted at byte {}", self.cursor.position());
        }
        result
    }

    fn parse_document<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        handler.start_document()?;
        self.parse_expression(handler)?;
        while !self.cursor.at_end() {
            self.parse_newline()?;
            self.parse_expression(handler)?;
        }
        handler.finish_document()
    }

    /// One line: blank, comment, table header or key/value pair.
    /// Leaves the line terminator unconsumed.
    fn parse_expression<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        self.skip_whitespace()?;
        if self.cursor.at_end() {
            return Ok(());
        }
        match self.cursor.peek()? {
            b'\r' | b'\n' => Ok(()),
            b'#' => self.parse_comment(handler),
            b'[' => {
                self.parse_table_header(handler)?;
                self.parse_line_tail(handler)
            }
            _ => {
                self.parse_key_value(handler)?;
                self.parse_line_tail(handler)
            }
        }
    }

    /// Whitespace and an optional comment after a header or pair.
    fn parse_line_tail<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        self.skip_whitespace()?;
        if !self.cursor.at_end() && self.cursor.peek()? == b'#' {
            self.parse_comment(handler)?;
        }
        Ok(())
    }

    fn parse_comment<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        let start = self.cursor.position();
        self.cursor.consume()?;
        self.text.clear();
        loop {
            let byte = self.cursor.peek()?;
            if ByteClass::is_newline(byte) {
                break;
            }
            if byte != b'\t' && ByteClass::is_control(byte) {
                return Err(
                    ParseError::syntax(ErrKind::InvalidCharacter, self.cursor.position()).into(),
                );
            }
            self.cursor.consume()?;
            self.text.push(byte);
        }
        handler.comment(self.text_str(start)?)
    }

    fn parse_newline(&mut self) -> Result<(), ParseError> {
        let mut offset = self.cursor.position();
        let mut byte = self.cursor.consume()?;
        if byte == b'\r' {
            offset = self.cursor.position();
            byte = self.cursor.consume()?;
        }
        if byte != b'\n' {
            return Err(ParseError::syntax(ErrKind::ExpectedNewline, offset));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while !self.cursor.at_end() && ByteClass::is_space(self.cursor.peek()?) {
            self.cursor.consume()?;
        }
        Ok(())
    }

    /// Whitespace, line terminators and whole-line comments between array
    /// elements.
    fn skip_whitespace_and_newlines<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        while !self.cursor.at_end() {
            self.skip_whitespace()?;
            if self.cursor.at_end() {
                break;
            }
            match self.cursor.peek()? {
                b'#' => {
                    self.parse_comment(handler)?;
                    self.parse_newline()?;
                }
                b'\r' | b'\n' => self.parse_newline()?,
                _ => break,
            }
        }
        Ok(())
    }

    fn parse_table_header<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        self.cursor.consume()?;
        let is_array_table = self.cursor.peek()? == b'[';
        if is_array_table {
            self.cursor.consume()?;
        }

        self.path.clear();
        loop {
            self.skip_whitespace()?;
            let start = self.parse_key()?;
            let segment = String::from(self.text_str(start)?);
            self.path.push(segment);
            self.skip_whitespace()?;

            let offset = self.cursor.position();
            match self.cursor.consume()? {
                b']' => break,
                b'.' => {}
                byte => return Err(unexpected(byte, EXPECTED_HEADER_SEPARATOR, offset).into()),
            }
        }

        if is_array_table {
            self.expect_symbol(b']', EXPECTED_CLOSING_BRACKET)?;
            log::trace!("array table {:?}", self.path);
            handler.array_table(&self.path)
        } else {
            log::trace!("table {:?}", self.path);
            handler.table(&self.path)
        }
    }

    /// Key, `=`, value. The key event is emitted before `=` is checked.
    fn parse_key_value<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        let start = self.parse_key()?;
        handler.key(self.text_str(start)?)?;
        self.skip_whitespace()?;
        self.expect_symbol(b'=', EXPECTED_EQUALS)?;
        self.skip_whitespace()?;
        self.parse_value(handler)?;
        Ok(())
    }

    /// Decodes a bare or quoted key into `text`, returning its start offset.
    fn parse_key(&mut self) -> Result<usize, ParseError> {
        let start = self.cursor.position();
        let byte = self.cursor.peek()?;
        if byte == b'"' {
            self.cursor.consume()?;
            self.scan_basic_string()?;
            if self.text.is_empty() {
                return Err(ParseError::syntax(ErrKind::EmptyKey, start));
            }
        } else if ByteClass::is_key_byte(byte) {
            self.text.clear();
            while ByteClass::is_key_byte(self.cursor.peek()?) {
                let byte = self.cursor.consume()?;
                self.text.push(byte);
            }
        } else {
            return Err(unexpected(byte, ErrKind::MissingKey, start));
        }
        Ok(start)
    }

    fn parse_value<H, E>(&mut self, handler: &mut H) -> Result<ValueKind, E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        let start = self.cursor.position();
        match self.cursor.peek()? {
            b'{' => {
                self.parse_inline_table(handler)?;
                Ok(ValueKind::Table)
            }
            b'[' => {
                self.parse_array(handler)?;
                Ok(ValueKind::Array)
            }
            b'"' => {
                self.parse_basic_string()?;
                handler.string(self.text_str(start)?)?;
                Ok(ValueKind::String)
            }
            b'\'' => {
                self.parse_literal_string()?;
                handler.string(self.text_str(start)?)?;
                Ok(ValueKind::String)
            }
            b't' => {
                self.expect_word(b"true")?;
                handler.boolean(true)?;
                Ok(ValueKind::Boolean)
            }
            b'f' => {
                self.expect_word(b"false")?;
                handler.boolean(false)?;
                Ok(ValueKind::Boolean)
            }
            b'+' | b'-' | b'0'..=b'9' => self.parse_number_or_datetime(handler),
            byte => Err(unexpected(byte, ErrKind::UnexpectedCharacter, start).into()),
        }
    }

    fn parse_array<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        self.enter_container()?;
        self.cursor.consume()?;
        log::trace!("array start, depth {}", self.depth);
        handler.start_array()?;
        self.skip_whitespace_and_newlines(handler)?;

        let mut size = 0usize;
        let mut element_kind = None;
        loop {
            if self.cursor.peek()? == b']' {
                self.cursor.consume()?;
                break;
            }

            let element_offset = self.cursor.position();
            let kind = self.parse_value(handler)?;
            match element_kind {
                Some(first) if first != kind => {
                    return Err(
                        ParseError::syntax(ErrKind::HeterogeneousArray, element_offset).into(),
                    );
                }
                _ => element_kind = Some(kind),
            }
            size = size.saturating_add(1);

            self.skip_whitespace_and_newlines(handler)?;
            let offset = self.cursor.position();
            match self.cursor.consume()? {
                b']' => break,
                b',' => self.skip_whitespace_and_newlines(handler)?,
                byte => return Err(unexpected(byte, EXPECTED_ARRAY_SEPARATOR, offset).into()),
            }
        }

        self.leave_container();
        log::trace!("array end, {} elements", size);
        handler.finish_array(size)
    }

    fn parse_inline_table<H, E>(&mut self, handler: &mut H) -> Result<(), E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        self.enter_container()?;
        self.cursor.consume()?;
        log::trace!("inline table start, depth {}", self.depth);
        handler.start_inline_table()?;
        self.skip_whitespace()?;

        let mut size = 0usize;
        if self.cursor.peek()? == b'}' {
            self.cursor.consume()?;
        } else {
            loop {
                self.parse_key_value(handler)?;
                self.skip_whitespace()?;
                size = size.saturating_add(1);

                let offset = self.cursor.position();
                match self.cursor.consume()? {
                    b'}' => break,
                    b',' => {
                        self.skip_whitespace()?;
                        if self.cursor.peek()? == b'}' {
                            let offset = self.cursor.position();
                            return Err(ParseError::syntax(ErrKind::TrailingComma, offset).into());
                        }
                    }
                    byte => {
                        return Err(unexpected(byte, EXPECTED_TABLE_SEPARATOR, offset).into())
                    }
                }
            }
        }

        self.leave_container();
        log::trace!("inline table end, {} pairs", size);
        handler.finish_inline_table(size)
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= C::MAX_DEPTH {
            return Err(ParseError::syntax(
                ErrKind::MaxDepthReached,
                self.cursor.position(),
            ));
        }
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    fn leave_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `"..."`, `""` or `"""..."""` into `text`.
    fn parse_basic_string(&mut self) -> Result<(), ParseError> {
        self.cursor.consume()?;
        if self.cursor.peek()? != b'"' {
            return self.scan_basic_string();
        }
        self.cursor.consume()?;
        if self.cursor.peek()? == b'"' {
            self.cursor.consume()?;
            self.scan_multiline_basic_string()
        } else {
            self.text.clear();
            Ok(())
        }
    }

    /// `'...'`, `''` or `'''...'''` into `text`.
    fn parse_literal_string(&mut self) -> Result<(), ParseError> {
        self.cursor.consume()?;
        if self.cursor.peek()? != b'\'' {
            return self.scan_literal_string();
        }
        self.cursor.consume()?;
        if self.cursor.peek()? == b'\'' {
            self.cursor.consume()?;
            self.scan_multiline_literal_string()
        } else {
            self.text.clear();
            Ok(())
        }
    }

    /// Single-line basic string body, opening quote already consumed.
    fn scan_basic_string(&mut self) -> Result<(), ParseError> {
        self.text.clear();
        loop {
            let offset = self.cursor.position();
            match self.cursor.consume()? {
                b'"' => return Ok(()),
                b'\\' => self.scan_escape(offset)?,
                byte if ByteClass::is_newline(byte) => {
                    return Err(ParseError::syntax(ErrKind::UnexpectedNewline, offset));
                }
                byte if ByteClass::is_control(byte) => {
                    return Err(ParseError::syntax(
                        ErrKind::UnescapedControlCharacter,
                        offset,
                    ));
                }
                byte => self.text.push(byte),
            }
        }
    }

    fn scan_multiline_basic_string(&mut self) -> Result<(), ParseError> {
        self.text.clear();
        self.skip_leading_newline()?;
        loop {
            let byte = self.cursor.peek()?;
            if ByteClass::is_newline(byte) {
                self.parse_newline()?;
                self.text.push(b'\n');
                continue;
            }

            let offset = self.cursor.position();
            self.cursor.consume()?;
            match byte {
                b'"' => {
                    if self.scan_quote_run(b'"')? {
                        return Ok(());
                    }
                }
                b'\\' => {
                    if ByteClass::is_newline(self.cursor.peek()?) {
                        self.skip_line_continuation()?;
                    } else {
                        self.scan_escape(offset)?;
                    }
                }
                byte if ByteClass::is_control(byte) => {
                    return Err(ParseError::syntax(
                        ErrKind::UnescapedControlCharacter,
                        offset,
                    ));
                }
                byte => self.text.push(byte),
            }
        }
    }

    fn scan_literal_string(&mut self) -> Result<(), ParseError> {
        self.text.clear();
        loop {
            let offset = self.cursor.position();
            match self.cursor.consume()? {
                b'\'' => return Ok(()),
                byte if ByteClass::is_newline(byte) => {
                    return Err(ParseError::syntax(ErrKind::UnexpectedNewline, offset));
                }
                byte if byte != b'\t' && ByteClass::is_control(byte) => {
                    return Err(ParseError::syntax(
                        ErrKind::UnescapedControlCharacter,
                        offset,
                    ));
                }
                byte => self.text.push(byte),
            }
        }
    }

    fn scan_multiline_literal_string(&mut self) -> Result<(), ParseError> {
        self.text.clear();
        self.skip_leading_newline()?;
        loop {
            let byte = self.cursor.peek()?;
            if ByteClass::is_newline(byte) {
                self.parse_newline()?;
                self.text.push(b'\n');
                continue;
            }

            let offset = self.cursor.position();
            self.cursor.consume()?;
            match byte {
                b'\'' => {
                    if self.scan_quote_run(b'\'')? {
                        return Ok(());
                    }
                }
                byte if byte != b'\t' && ByteClass::is_control(byte) => {
                    return Err(ParseError::syntax(
                        ErrKind::UnescapedControlCharacter,
                        offset,
                    ));
                }
                byte => self.text.push(byte),
            }
        }
    }

    /// A line terminator right after an opening `"""` or `'''` is dropped.
    fn skip_leading_newline(&mut self) -> Result<(), ParseError> {
        if ByteClass::is_newline(self.cursor.peek()?) {
            self.parse_newline()?;
        }
        Ok(())
    }

    /// Handles a run of quotes inside a multiline string, the first one
    /// already consumed. The first three quotes close the string, shorter
    /// runs are content. Returns true when the string is closed.
    fn scan_quote_run(&mut self, quote: u8) -> Result<bool, ParseError> {
        let mut run = 1usize;
        while run < 3 && self.cursor.peek()? == quote {
            self.cursor.consume()?;
            run = run.saturating_add(1);
        }
        if run == 3 {
            return Ok(true);
        }
        self.text.extend(core::iter::repeat(quote).take(run));
        Ok(false)
    }

    /// Backslash directly followed by a line terminator: drop the terminator
    /// and everything up to the next non-whitespace byte.
    fn skip_line_continuation(&mut self) -> Result<(), ParseError> {
        self.parse_newline()?;
        while !self.cursor.at_end()
            && matches!(self.cursor.peek()?, b' ' | b'\t' | b'\r' | b'\n')
        {
            self.cursor.consume()?;
        }
        Ok(())
    }

    /// Escape sequence after the backslash at `backslash_offset`.
    fn scan_escape(&mut self, backslash_offset: usize) -> Result<(), ParseError> {
        let letter = self.cursor.consume()?;
        let Some(width) = EscapeProcessor::unicode_escape_width(letter) else {
            let byte = EscapeProcessor::process_simple_escape(letter)
                .map_err(|kind| ParseError::syntax(kind, backslash_offset))?;
            self.text.push(byte);
            return Ok(());
        };

        let mut collector = UnicodeEscapeCollector::new(width);
        while !collector.is_complete() {
            let offset = self.cursor.position();
            let digit = self.cursor.consume()?;
            collector
                .add_hex_digit(digit)
                .map_err(|kind| ParseError::syntax(kind, offset))?;
        }
        let mut utf8 = [0u8; 4];
        let encoded = collector
            .process_to_utf8(&mut utf8)
            .map_err(|kind| ParseError::syntax(kind, backslash_offset))?;
        self.text.extend_from_slice(encoded);
        Ok(())
    }

    fn expect_symbol(&mut self, expected: u8, kind: ErrKind) -> Result<(), ParseError> {
        let offset = self.cursor.position();
        let byte = self.cursor.consume()?;
        if byte != expected {
            return Err(unexpected(byte, kind, offset));
        }
        Ok(())
    }

    fn expect_word(&mut self, word: &[u8]) -> Result<(), ParseError> {
        for &expected in word {
            let offset = self.cursor.position();
            if self.cursor.consume()? != expected {
                return Err(ParseError::syntax(ErrKind::UnexpectedCharacter, offset));
            }
        }
        Ok(())
    }

    /// Integer, float or datetime. Four leading digits followed by `-` make
    /// a datetime, anything else is a number.
    fn parse_number_or_datetime<H, E>(&mut self, handler: &mut H) -> Result<ValueKind, E>
    where
        H: TomlHandler<E> + ?Sized,
        E: From<ParseError>,
    {
        let start = self.cursor.position();
        self.number.clear();

        let integer_offset;
        let integer_digits;
        match self.cursor.peek()? {
            sign @ (b'+' | b'-') => {
                self.cursor.consume()?;
                if sign == b'-' {
                    self.push_number(sign, start)?;
                }
                integer_offset = self.cursor.position();
                let byte = self.cursor.peek()?;
                if !byte.is_ascii_digit() {
                    return Err(unexpected(byte, ErrKind::UnexpectedCharacter, integer_offset).into());
                }
                integer_digits = self.scan_digit_run(0)?;
            }
            _ => {
                integer_offset = start;
                let mut lead = 0usize;
                while lead < 4 && self.cursor.peek()?.is_ascii_digit() {
                    let offset = self.cursor.position();
                    let digit = self.cursor.consume()?;
                    self.push_number(digit, offset)?;
                    lead = lead.saturating_add(1);
                }
                if lead == 4 && self.cursor.peek()? == b'-' {
                    self.scan_datetime()?;
                    handler.datetime(self.number_str(start)?)?;
                    return Ok(ValueKind::Datetime);
                }
                integer_digits = self.scan_digit_run(lead)?;
            }
        }

        let first_digit = usize::from(self.number.first() == Some(&b'-'));
        if integer_digits > 1 && self.number.get(first_digit) == Some(&b'0') {
            return Err(ParseError::syntax(ErrKind::LeadingZero, integer_offset).into());
        }

        let mut is_float = false;
        if self.cursor.peek()? == b'.' {
            let offset = self.cursor.position();
            self.cursor.consume()?;
            self.push_number(b'.', offset)?;
            self.expect_digit()?;
            self.scan_digit_run(0)?;
            is_float = true;
        }

        if matches!(self.cursor.peek()?, b'e' | b'E') {
            let offset = self.cursor.position();
            let marker = self.cursor.consume()?;
            self.push_number(marker, offset)?;
            if matches!(self.cursor.peek()?, b'+' | b'-') {
                let offset = self.cursor.position();
                let sign = self.cursor.consume()?;
                self.push_number(sign, offset)?;
            }
            let exponent_offset = self.cursor.position();
            self.expect_digit()?;
            let exponent_start = self.number.len();
            let exponent_digits = self.scan_digit_run(0)?;
            if exponent_digits > 1 && self.number.get(exponent_start) == Some(&b'0') {
                return Err(ParseError::syntax(ErrKind::LeadingZero, exponent_offset).into());
            }
            is_float = true;
        }

        match parse_numeral(&self.number, is_float)
            .map_err(|kind| ParseError::syntax(kind, start))?
        {
            NumberResult::Integer(value) => {
                handler.integer(value)?;
                Ok(ValueKind::Integer)
            }
            NumberResult::Float(value) => {
                handler.floating_point(value)?;
                Ok(ValueKind::Float)
            }
        }
    }

    fn expect_digit(&mut self) -> Result<(), ParseError> {
        if !self.cursor.peek()?.is_ascii_digit() {
            return Err(ParseError::syntax(
                ErrKind::ExpectedDigit,
                self.cursor.position(),
            ));
        }
        Ok(())
    }

    /// Digits with single underscores between them. `count` digits of the run
    /// were already collected. Returns the total digit count.
    fn scan_digit_run(&mut self, mut count: usize) -> Result<usize, ParseError> {
        loop {
            let byte = self.cursor.peek()?;
            let offset = self.cursor.position();
            if byte.is_ascii_digit() {
                self.cursor.consume()?;
                self.push_number(byte, offset)?;
                count = count.saturating_add(1);
            } else if byte == b'_' {
                self.cursor.consume()?;
                if count == 0 || !self.cursor.peek()?.is_ascii_digit() {
                    return Err(ParseError::syntax(ErrKind::InvalidUnderscore, offset));
                }
            } else {
                return Ok(count);
            }
        }
    }

    /// Rest of `YYYY-MM-DDThh:mm:ss[.frac](Z|+hh:mm|-hh:mm)`, year collected.
    fn scan_datetime(&mut self) -> Result<(), ParseError> {
        self.scan_datetime_pattern(b"-DD-DDTDD:DD:DD")?;
        if self.cursor.peek()? == b'.' {
            self.scan_datetime_pattern(b".D")?;
            while self.cursor.peek()?.is_ascii_digit() {
                let offset = self.cursor.position();
                let digit = self.cursor.consume()?;
                self.push_number(digit, offset)?;
            }
        }
        if matches!(self.cursor.peek()?, b'Z' | b'z') {
            self.scan_datetime_pattern(b"Z")
        } else {
            self.scan_datetime_pattern(b"SDD:DD")
        }
    }

    /// `D` digit, `T` date/time separator, `S` offset sign, `Z` UTC marker,
    /// anything else literal.
    fn scan_datetime_pattern(&mut self, pattern: &[u8]) -> Result<(), ParseError> {
        for &class in pattern {
            let offset = self.cursor.position();
            let byte = self.cursor.consume()?;
            let valid = match class {
                b'D' => byte.is_ascii_digit(),
                b'T' => byte == b'T' || byte == b't',
                b'S' => byte == b'+' || byte == b'-',
                b'Z' => byte == b'Z' || byte == b'z',
                literal => byte == literal,
            };
            if !valid {
                return Err(ParseError::syntax(ErrKind::InvalidDatetime, offset));
            }
            self.push_number(byte, offset)?;
        }
        Ok(())
    }

    fn push_number(&mut self, byte: u8, offset: usize) -> Result<(), ParseError> {
        if self.number.len() >= C::MAX_NUMBER_LEN {
            return Err(ParseError::syntax(ErrKind::NumberTooLong, offset));
        }
        self.number.push(byte);
        Ok(())
    }

    fn text_str(&self, offset: usize) -> Result<&str, ParseError> {
        core::str::from_utf8(&self.text)
            .map_err(|_| ParseError::syntax(ErrKind::InvalidUtf8, offset))
    }

    fn number_str(&self, offset: usize) -> Result<&str, ParseError> {
        core::str::from_utf8(&self.number)
            .map_err(|_| ParseError::syntax(ErrKind::InvalidUtf8, offset))
    }
}
