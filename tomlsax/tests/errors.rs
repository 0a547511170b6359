// SPDX-License-Identifier: Apache-2.0

// Reader failures, handler errors and error reporting
mod common;

use common::*;
use test_log::test;
use tomlsax::{
    parse, parse_io, parse_slice, parse_str, ChunkReader, ErrKind, Event, EventHandler,
    ParseError, Reader, SaxParser, TomlHandler,
};

/// Serves `data` one byte at a time, then fails instead of reporting the end.
struct FailingReader<'a> {
    data: &'a [u8],
}

impl Reader for FailingReader<'_> {
    type Error = &'static str;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.data.split_first() {
            Some((&byte, rest)) if !buf.is_empty() => {
                buf[0] = byte;
                self.data = rest;
                Ok(1)
            }
            _ => Err("device unplugged"),
        }
    }
}

/// Same as [`FailingReader`] for `std::io::Read`.
struct FailingIo<'a> {
    data: &'a [u8],
}

impl std::io::Read for FailingIo<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.data.is_empty() {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[derive(Debug, PartialEq)]
enum HandlerError {
    Parse(ParseError),
    Rejected(String),
}

impl From<ParseError> for HandlerError {
    fn from(err: ParseError) -> Self {
        HandlerError::Parse(err)
    }
}

#[test]
fn test_stream_error() {
    let mut recorder = Recorder::default();
    let err = parse(FailingReader { data: b"key = 1" }, &mut recorder).unwrap_err();
    assert_eq!(err, ParseError::Stream { offset: 7 });
    assert!(err.is_stream_error());
    assert_eq!(err.kind(), None);
    assert_eq!(err.to_string(), "Unable to read data from the stream at byte 7");
    // Nothing after the failure point is reported
    assert_eq!(recorder.events, vec![Recorded::StartDocument, key("key")]);
}

#[test]
fn test_stream_error_on_first_read() {
    let mut recorder = Recorder::default();
    let err = parse(FailingReader { data: b"" }, &mut recorder).unwrap_err();
    assert_eq!(err, ParseError::Stream { offset: 0 });
    assert_eq!(recorder.events, vec![Recorded::StartDocument]);
}

#[test]
fn test_stream_error_inside_string() {
    let err = parse(FailingReader { data: b"key = \"abc" }, &mut Recorder::default()).unwrap_err();
    assert_eq!(err, ParseError::Stream { offset: 10 });
}

#[test]
fn test_parse_io() {
    let mut recorder = Recorder::default();
    let source = std::io::Cursor::new(b"[server]\nport = 8080\n".to_vec());
    parse_io(source, &mut recorder).unwrap();
    assert_eq!(
        recorder.events,
        document(vec![table(&["server"]), key("port"), Recorded::Integer(8080)])
    );
}

#[test]
fn test_parse_io_buffered() {
    let mut recorder = Recorder::default();
    let source = std::io::BufReader::with_capacity(3, &b"a = 'x'\nb = [1, 2]"[..]);
    parse_io(source, &mut recorder).unwrap();
    assert_eq!(
        recorder.events,
        document(vec![
            key("a"),
            string("x"),
            key("b"),
            Recorded::StartArray,
            Recorded::Integer(1),
            Recorded::Integer(2),
            Recorded::FinishArray(2),
        ])
    );
}

#[test]
fn test_parse_io_failure() {
    let err = parse_io(FailingIo { data: b"a = 'abc" }, &mut Recorder::default()).unwrap_err();
    assert_eq!(err, ParseError::Stream { offset: 8 });
}

#[test]
fn test_handler_error_is_returned_verbatim() {
    let mut seen = Vec::new();
    let mut handler = EventHandler::new(|event: Event<'_>| -> Result<(), HandlerError> {
        if let Event::Key("stop") = event {
            return Err(HandlerError::Rejected("stop is reserved".to_owned()));
        }
        seen.push(Recorded::from(event));
        Ok(())
    });
    let result: Result<(), HandlerError> = parse_str("a = 1\nstop = 2\nc = 3\n", &mut handler);
    drop(handler);

    assert_eq!(result, Err(HandlerError::Rejected("stop is reserved".to_owned())));
    assert_eq!(seen, vec![Recorded::StartDocument, key("a"), Recorded::Integer(1)]);
}

#[test]
fn test_parse_error_converts_into_handler_error() {
    let mut handler = EventHandler::new(|_: Event<'_>| -> Result<(), HandlerError> { Ok(()) });
    let result: Result<(), HandlerError> = parse_str("a = 01", &mut handler);
    assert_eq!(
        result,
        Err(HandlerError::Parse(ParseError::Syntax {
            kind: ErrKind::LeadingZero,
            offset: 4
        }))
    );
}

#[test]
fn test_handler_error_from_finish_document() {
    struct RejectEmpty {
        keys: usize,
    }

    impl TomlHandler<HandlerError> for RejectEmpty {
        fn key(&mut self, _key: &str) -> Result<(), HandlerError> {
            self.keys += 1;
            Ok(())
        }
        fn finish_document(&mut self) -> Result<(), HandlerError> {
            if self.keys == 0 {
                return Err(HandlerError::Rejected("empty document".to_owned()));
            }
            Ok(())
        }
    }

    let mut handler = RejectEmpty { keys: 0 };
    assert_eq!(
        parse_str("# nothing here\n", &mut handler),
        Err(HandlerError::Rejected("empty document".to_owned()))
    );
    let mut handler = RejectEmpty { keys: 0 };
    assert_eq!(parse_str("x = true", &mut handler), Ok(()));
    assert_eq!(handler.keys, 1);
}

#[test]
fn test_events_stop_at_syntax_error() {
    let mut recorder = Recorder::default();
    let err = parse_str("a = [1, 2\nb = 3", &mut recorder).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ErrKind::ExpectedSymbol("Expected ',' or ']' after an array element"))
    );
    assert_eq!(err.offset(), 10);
    assert_eq!(
        recorder.events,
        vec![
            Recorded::StartDocument,
            key("a"),
            Recorded::StartArray,
            Recorded::Integer(1),
            Recorded::Integer(2),
        ]
    );
}

#[test]
fn test_invalid_utf8() {
    let cases: [(&[u8], usize); 7] = [
        (b"key = \"\xff\"", 6),
        (b"k = 'caf\xe9'", 4),
        (b"key = '\xfe'", 6),
        (b"key = \"\"\"a\xc3\"\"\"", 6),
        (b"\"\xff\" = 1", 0),
        (b"[\"a\xff\"]", 1),
        (b"a = 1 # \xe2\x9c", 6),
    ];
    for (input, offset) in cases {
        let err = error_bytes(input);
        assert_eq!(
            (err.kind(), err.offset()),
            (Some(ErrKind::InvalidUtf8), offset),
            "parsing {:?}",
            String::from_utf8_lossy(input)
        );
    }
    // Bytes above 0x7f are never bare key characters
    assert_eq!(error_bytes(b"\xff = 1").kind(), Some(ErrKind::MissingKey));
}

#[test]
fn test_error_display() {
    let err = error("key = 01");
    assert_eq!(err.to_string(), "Leading zeros are not allowed at byte 6");
    assert_eq!(err.message(), "Leading zeros are not allowed");

    let err = error("a = [1 2]");
    assert_eq!(
        err.to_string(),
        "Expected ',' or ']' after an array element at byte 7"
    );

    let boxed: Box<dyn std::error::Error> = Box::new(error("a ="));
    assert_eq!(boxed.to_string(), "Unexpected new-line at byte 3");
}

#[test]
fn test_chunk_sizes_agree() {
    let input = "# settings\n[a.b]\nx = \"\"\"\nline\\\n  more\"\"\"\ny = [1.5, 2e3]\nz = { w = 1979-05-27T07:32:00.5+01:00 }\n";
    let expected = try_events(input, usize::MAX).unwrap();
    for chunk_size in 1..=input.len() {
        assert_eq!(
            try_events(input, chunk_size).unwrap(),
            expected,
            "chunk size {}",
            chunk_size
        );
    }
}

#[test]
fn test_error_offsets_do_not_depend_on_chunking() {
    let input = "a = 1\nb = [1, {c = 2,}]\n";
    for chunk_size in [1, 2, 3, 7, 64] {
        let err = try_events(input, chunk_size).unwrap_err();
        assert_eq!((err.kind(), err.offset()), (Some(ErrKind::TrailingComma), 21));
    }
}

#[test]
fn test_parser_position() {
    let mut parser = SaxParser::new(ChunkReader::full_slice(b"a = 1\nb = \"xyz\"\n"));
    parser.parse(&mut Recorder::default()).unwrap();
    assert_eq!(parser.position(), 16);

    let mut parser = SaxParser::new(ChunkReader::full_slice(b"a = 1\nb = 1.x"));
    let err = parser.parse(&mut Recorder::default()).unwrap_err();
    assert_eq!(err.offset(), 12);
    assert_eq!(parser.position(), 12);
}

#[test]
fn test_parse_slice_accepts_bytes() {
    let mut recorder = Recorder::default();
    parse_slice(b"k = 'v'", &mut recorder).unwrap();
    assert_eq!(recorder.events, document(vec![key("k"), string("v")]));
}
