// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrKind, ParseError};
use crate::Reader;

/// Single-byte lookahead over a [`Reader`].
///
/// When the reader runs dry the cursor hands out one synthetic `\n`, so every
/// line-based grammar rule terminates without an end-of-input special case.
/// The synthetic newline is not counted by [`ByteCursor::position`].
pub struct ByteCursor<R> {
    reader: R,
    /// Next unconsumed byte, if one has been read.
    lookahead: Option<u8>,
    /// Reader has returned 0.
    exhausted: bool,
    /// Synthetic trailing newline still available.
    emit_eol: bool,
    /// Real bytes consumed so far.
    position: usize,
}

impl<R: Reader> ByteCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lookahead: None,
            exhausted: false,
            emit_eol: true,
            position: 0,
        }
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&mut self) -> Result<u8, ParseError> {
        match self.fill()? {
            Some(byte) => Ok(byte),
            None if self.emit_eol => Ok(b'\n'),
            None => Err(ParseError::syntax(ErrKind::UnexpectedEof, self.position)),
        }
    }

    /// Consumes and returns the next byte.
    pub fn consume(&mut self) -> Result<u8, ParseError> {
        match self.fill()? {
            Some(byte) => {
                self.lookahead = None;
                self.position = self.position.saturating_add(1);
                Ok(byte)
            }
            None if self.emit_eol => {
                self.emit_eol = false;
                Ok(b'\n')
            }
            None => Err(ParseError::syntax(ErrKind::UnexpectedEof, self.position)),
        }
    }

    /// True once the reader has reported end of data.
    ///
    /// Only becomes true after a `peek` or `consume` ran into the end, the
    /// synthetic newline may still be pending.
    pub fn at_end(&self) -> bool {
        self.exhausted
    }

    /// Number of real bytes consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    fn fill(&mut self) -> Result<Option<u8>, ParseError> {
        if self.lookahead.is_none() && !self.exhausted {
            let mut buf = [0u8; 1];
            let read = self.reader.read(&mut buf).map_err(|_| ParseError::Stream {
                offset: self.position,
            })?;
            if read == 0 {
                self.exhausted = true;
            } else {
                self.lookahead = Some(buf[0]);
            }
        }
        Ok(self.lookahead)
    }
}
