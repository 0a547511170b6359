// SPDX-License-Identifier: Apache-2.0

// Shared recording handler for the integration tests
#![allow(dead_code)]

use tomlsax::{parse, ChunkReader, ErrKind, Event, ParseError, TomlHandler};

/// Owned copy of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    StartDocument,
    FinishDocument,
    Comment(String),
    Table(Vec<String>),
    ArrayTable(Vec<String>),
    Key(String),
    StartArray,
    FinishArray(usize),
    StartInlineTable,
    FinishInlineTable(usize),
    Boolean(bool),
    String(String),
    Datetime(String),
    Integer(i64),
    Float(f64),
}

impl From<Event<'_>> for Recorded {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::StartDocument => Recorded::StartDocument,
            Event::FinishDocument => Recorded::FinishDocument,
            Event::Comment(text) => Recorded::Comment(text.to_owned()),
            Event::Table(path) => Recorded::Table(path.to_vec()),
            Event::ArrayTable(path) => Recorded::ArrayTable(path.to_vec()),
            Event::Key(key) => Recorded::Key(key.to_owned()),
            Event::StartArray => Recorded::StartArray,
            Event::FinishArray(size) => Recorded::FinishArray(size),
            Event::StartInlineTable => Recorded::StartInlineTable,
            Event::FinishInlineTable(size) => Recorded::FinishInlineTable(size),
            Event::Boolean(value) => Recorded::Boolean(value),
            Event::String(value) => Recorded::String(value.to_owned()),
            Event::Datetime(value) => Recorded::Datetime(value.to_owned()),
            Event::Integer(value) => Recorded::Integer(value),
            Event::Float(value) => Recorded::Float(value),
        }
    }
}

/// Handler that keeps every event it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Recorded>,
}

impl Recorder {
    fn record(&mut self, event: Event<'_>) -> Result<(), ParseError> {
        self.events.push(event.into());
        Ok(())
    }
}

impl TomlHandler<ParseError> for Recorder {
    fn start_document(&mut self) -> Result<(), ParseError> {
        self.record(Event::StartDocument)
    }
    fn finish_document(&mut self) -> Result<(), ParseError> {
        self.record(Event::FinishDocument)
    }
    fn comment(&mut self, text: &str) -> Result<(), ParseError> {
        self.record(Event::Comment(text))
    }
    fn table(&mut self, path: &[String]) -> Result<(), ParseError> {
        self.record(Event::Table(path))
    }
    fn array_table(&mut self, path: &[String]) -> Result<(), ParseError> {
        self.record(Event::ArrayTable(path))
    }
    fn key(&mut self, key: &str) -> Result<(), ParseError> {
        self.record(Event::Key(key))
    }
    fn start_array(&mut self) -> Result<(), ParseError> {
        self.record(Event::StartArray)
    }
    fn finish_array(&mut self, size: usize) -> Result<(), ParseError> {
        self.record(Event::FinishArray(size))
    }
    fn start_inline_table(&mut self) -> Result<(), ParseError> {
        self.record(Event::StartInlineTable)
    }
    fn finish_inline_table(&mut self, size: usize) -> Result<(), ParseError> {
        self.record(Event::FinishInlineTable(size))
    }
    fn boolean(&mut self, value: bool) -> Result<(), ParseError> {
        self.record(Event::Boolean(value))
    }
    fn string(&mut self, value: &str) -> Result<(), ParseError> {
        self.record(Event::String(value))
    }
    fn datetime(&mut self, value: &str) -> Result<(), ParseError> {
        self.record(Event::Datetime(value))
    }
    fn integer(&mut self, value: i64) -> Result<(), ParseError> {
        self.record(Event::Integer(value))
    }
    fn floating_point(&mut self, value: f64) -> Result<(), ParseError> {
        self.record(Event::Float(value))
    }
}

/// Parse `input` and return all events, panicking on error.
///
/// Every document is parsed twice, once in one piece and once one byte per
/// read, and both runs must agree.
pub fn events(input: &str) -> Vec<Recorded> {
    let full = try_events(input, usize::MAX)
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", input, e));
    let chunked = try_events(input, 1).unwrap_or_else(|e| panic!("chunked {:?}: {}", input, e));
    assert_eq!(full, chunked, "chunked parse differs for {:?}", input);
    full
}

pub fn try_events(input: &str, chunk_size: usize) -> Result<Vec<Recorded>, ParseError> {
    let mut recorder = Recorder::default();
    parse(ChunkReader::new(input.as_bytes(), chunk_size), &mut recorder)?;
    Ok(recorder.events)
}

/// Parse `input` expecting a failure.
pub fn error(input: &str) -> ParseError {
    error_bytes(input.as_bytes())
}

pub fn error_bytes(input: &[u8]) -> ParseError {
    let mut recorder = Recorder::default();
    match parse(ChunkReader::full_slice(input), &mut recorder) {
        Ok(()) => panic!(
            "expected {:?} to fail, got {:?}",
            String::from_utf8_lossy(input),
            recorder.events
        ),
        Err(e) => e,
    }
}

/// Asserts the kind and offset of the error produced by `input`.
#[track_caller]
pub fn assert_error(input: &str, kind: ErrKind, offset: usize) {
    let err = error(input);
    assert_eq!(
        (err.kind(), err.offset()),
        (Some(kind), offset),
        "wrong error for {:?}: {}",
        input,
        err
    );
}

/// Events of a document that is a single `key = <value>` line.
pub fn key_value(value: Vec<Recorded>) -> Vec<Recorded> {
    let mut events = vec![Recorded::StartDocument, key("key")];
    events.extend(value);
    events.push(Recorded::FinishDocument);
    events
}

/// Wraps events with start and finish of document.
pub fn document(body: Vec<Recorded>) -> Vec<Recorded> {
    let mut events = vec![Recorded::StartDocument];
    events.extend(body);
    events.push(Recorded::FinishDocument);
    events
}

pub fn key(name: &str) -> Recorded {
    Recorded::Key(name.to_owned())
}

pub fn string(value: &str) -> Recorded {
    Recorded::String(value.to_owned())
}

pub fn comment(text: &str) -> Recorded {
    Recorded::Comment(text.to_owned())
}

pub fn datetime(value: &str) -> Recorded {
    Recorded::Datetime(value.to_owned())
}

pub fn table(path: &[&str]) -> Recorded {
    Recorded::Table(path.iter().map(|s| s.to_string()).collect())
}

pub fn array_table(path: &[&str]) -> Recorded {
    Recorded::ArrayTable(path.iter().map(|s| s.to_string()).collect())
}

/// The single string value of a `key = <input>` document.
pub fn string_value(input: &str) -> String {
    match events(&format!("key = {}", input)).as_slice() {
        [Recorded::StartDocument, Recorded::Key(_), Recorded::String(value), Recorded::FinishDocument] => {
            value.clone()
        }
        other => panic!("unexpected events for {:?}: {:?}", input, other),
    }
}
