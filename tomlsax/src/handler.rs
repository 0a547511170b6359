// SPDX-License-Identifier: Apache-2.0

use crate::shared::Event;
use alloc::string::String;

/// Receives parse events in document order.
///
/// Every method defaults to `Ok(())`, so implementors only override the
/// events they care about. Returning an error aborts the parse and the error
/// is handed back to the caller of [`crate::parse`] unchanged.
///
/// Borrowed arguments are only valid for the duration of the call.
pub trait TomlHandler<E> {
    fn start_document(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn finish_document(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn comment(&mut self, _text: &str) -> Result<(), E> {
        Ok(())
    }

    fn table(&mut self, _path: &[String]) -> Result<(), E> {
        Ok(())
    }

    fn array_table(&mut self, _path: &[String]) -> Result<(), E> {
        Ok(())
    }

    fn key(&mut self, _key: &str) -> Result<(), E> {
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn finish_array(&mut self, _size: usize) -> Result<(), E> {
        Ok(())
    }

    fn start_inline_table(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn finish_inline_table(&mut self, _size: usize) -> Result<(), E> {
        Ok(())
    }

    fn boolean(&mut self, _value: bool) -> Result<(), E> {
        Ok(())
    }

    fn string(&mut self, _value: &str) -> Result<(), E> {
        Ok(())
    }

    fn datetime(&mut self, _value: &str) -> Result<(), E> {
        Ok(())
    }

    fn integer(&mut self, _value: i64) -> Result<(), E> {
        Ok(())
    }

    fn floating_point(&mut self, _value: f64) -> Result<(), E> {
        Ok(())
    }
}

/// Adapts a closure taking [`Event`]s into a [`TomlHandler`].
///
/// ```rust
/// use tomlsax::{parse_str, Event, EventHandler, ParseError};
///
/// let mut keys = Vec::new();
/// let mut handler = EventHandler::new(|event: Event<'_>| -> Result<(), ParseError> {
///     if let Event::Key(key) = event {
///         keys.push(key.to_string());
///     }
///     Ok(())
/// });
/// parse_str("a = 1\nb = { c = true }", &mut handler).unwrap();
/// drop(handler);
/// assert_eq!(keys, ["a", "b", "c"]);
/// ```
pub struct EventHandler<F> {
    callback: F,
}

impl<F> EventHandler<F> {
    pub fn new<E>(callback: F) -> Self
    where
        F: FnMut(Event<'_>) -> Result<(), E>,
    {
        Self { callback }
    }

    /// Returns the wrapped closure.
    pub fn into_inner(self) -> F {
        self.callback
    }
}

impl<E, F> TomlHandler<E> for EventHandler<F>
where
    F: FnMut(Event<'_>) -> Result<(), E>,
{
    fn start_document(&mut self) -> Result<(), E> {
        (self.callback)(Event::StartDocument)
    }

    fn finish_document(&mut self) -> Result<(), E> {
        (self.callback)(Event::FinishDocument)
    }

    fn comment(&mut self, text: &str) -> Result<(), E> {
        (self.callback)(Event::Comment(text))
    }

    fn table(&mut self, path: &[String]) -> Result<(), E> {
        (self.callback)(Event::Table(path))
    }

    fn array_table(&mut self, path: &[String]) -> Result<(), E> {
        (self.callback)(Event::ArrayTable(path))
    }

    fn key(&mut self, key: &str) -> Result<(), E> {
        (self.callback)(Event::Key(key))
    }

    fn start_array(&mut self) -> Result<(), E> {
        (self.callback)(Event::StartArray)
    }

    fn finish_array(&mut self, size: usize) -> Result<(), E> {
        (self.callback)(Event::FinishArray(size))
    }

    fn start_inline_table(&mut self) -> Result<(), E> {
        (self.callback)(Event::StartInlineTable)
    }

    fn finish_inline_table(&mut self, size: usize) -> Result<(), E> {
        (self.callback)(Event::FinishInlineTable(size))
    }

    fn boolean(&mut self, value: bool) -> Result<(), E> {
        (self.callback)(Event::Boolean(value))
    }

    fn string(&mut self, value: &str) -> Result<(), E> {
        (self.callback)(Event::String(value))
    }

    fn datetime(&mut self, value: &str) -> Result<(), E> {
        (self.callback)(Event::Datetime(value))
    }

    fn integer(&mut self, value: i64) -> Result<(), E> {
        (self.callback)(Event::Integer(value))
    }

    fn floating_point(&mut self, value: f64) -> Result<(), E> {
        (self.callback)(Event::Float(value))
    }
}
