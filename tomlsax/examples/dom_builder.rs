// SPDX-License-Identifier: Apache-2.0

// Example assembling a document tree from parser events.
//
// The handler returns its own error type, so semantic problems such as
// duplicate keys abort the parse just like syntax errors do.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tomlsax::{parse_str, ParseError, TomlHandler};

type Table = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(String),
    Array(Vec<Value>),
    Table(Table),
}

#[derive(Debug)]
enum DomError {
    Parse(ParseError),
    DuplicateKey(String),
    NotATable(String),
    TableRedefined(String),
}

impl From<ParseError> for DomError {
    fn from(err: ParseError) -> Self {
        DomError::Parse(err)
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::Parse(err) => write!(f, "syntax error: {}", err),
            DomError::DuplicateKey(key) => write!(f, "duplicate key '{}'", key),
            DomError::NotATable(key) => write!(f, "'{}' is not a table", key),
            DomError::TableRedefined(path) => write!(f, "table [{}] defined twice", path),
        }
    }
}

impl std::error::Error for DomError {}

/// Container whose closing event has not arrived yet
enum Frame {
    Array(Vec<Value>),
    Table { table: Table, key: Option<String> },
}

#[derive(Default)]
struct DomBuilder {
    root: Table,
    /// Header the following pairs belong to
    current: Vec<String>,
    /// Headers already opened with `[...]`
    defined: BTreeSet<Vec<String>>,
    key: Option<String>,
    stack: Vec<Frame>,
}

/// Walks `path` from `table`, creating missing tables. An array of tables
/// resolves to its last element.
fn table_at<'a>(mut table: &'a mut Table, path: &[String]) -> Result<&'a mut Table, DomError> {
    for segment in path {
        let value = table
            .entry(segment.clone())
            .or_insert_with(|| Value::Table(Table::new()));
        table = match value {
            Value::Table(inner) => inner,
            Value::Array(items) => match items.last_mut() {
                Some(Value::Table(inner)) => inner,
                _ => return Err(DomError::NotATable(segment.clone())),
            },
            _ => return Err(DomError::NotATable(segment.clone())),
        };
    }
    Ok(table)
}

fn insert_unique(table: &mut Table, key: String, value: Value) -> Result<(), DomError> {
    if table.contains_key(&key) {
        return Err(DomError::DuplicateKey(key));
    }
    table.insert(key, value);
    Ok(())
}

impl DomBuilder {
    fn add_value(&mut self, value: Value) -> Result<(), DomError> {
        match self.stack.last_mut() {
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
            Some(Frame::Table { table, key }) => {
                let key = key.take().unwrap_or_default();
                insert_unique(table, key, value)
            }
            None => {
                let key = self.key.take().unwrap_or_default();
                let table = table_at(&mut self.root, &self.current)?;
                insert_unique(table, key, value)
            }
        }
    }
}

impl TomlHandler<DomError> for DomBuilder {
    fn table(&mut self, path: &[String]) -> Result<(), DomError> {
        if !self.defined.insert(path.to_vec()) {
            return Err(DomError::TableRedefined(path.join(".")));
        }
        table_at(&mut self.root, path)?;
        self.current = path.to_vec();
        Ok(())
    }

    fn array_table(&mut self, path: &[String]) -> Result<(), DomError> {
        let Some((last, parent)) = path.split_last() else {
            return Ok(());
        };
        let parent = table_at(&mut self.root, parent)?;
        let entry = parent
            .entry(last.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(items) if items.iter().all(|v| matches!(v, Value::Table(_))) => {
                items.push(Value::Table(Table::new()));
            }
            _ => return Err(DomError::NotATable(last.clone())),
        }
        self.current = path.to_vec();
        Ok(())
    }

    fn key(&mut self, key: &str) -> Result<(), DomError> {
        match self.stack.last_mut() {
            Some(Frame::Table { key: pending, .. }) => *pending = Some(key.to_owned()),
            _ => self.key = Some(key.to_owned()),
        }
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), DomError> {
        self.stack.push(Frame::Array(Vec::new()));
        Ok(())
    }

    fn finish_array(&mut self, _size: usize) -> Result<(), DomError> {
        match self.stack.pop() {
            Some(Frame::Array(items)) => self.add_value(Value::Array(items)),
            _ => Ok(()),
        }
    }

    fn start_inline_table(&mut self) -> Result<(), DomError> {
        self.stack.push(Frame::Table {
            table: Table::new(),
            key: None,
        });
        Ok(())
    }

    fn finish_inline_table(&mut self, _size: usize) -> Result<(), DomError> {
        match self.stack.pop() {
            Some(Frame::Table { table, .. }) => self.add_value(Value::Table(table)),
            _ => Ok(()),
        }
    }

    fn boolean(&mut self, value: bool) -> Result<(), DomError> {
        self.add_value(Value::Boolean(value))
    }

    fn string(&mut self, value: &str) -> Result<(), DomError> {
        self.add_value(Value::String(value.to_owned()))
    }

    fn datetime(&mut self, value: &str) -> Result<(), DomError> {
        self.add_value(Value::Datetime(value.to_owned()))
    }

    fn integer(&mut self, value: i64) -> Result<(), DomError> {
        self.add_value(Value::Integer(value))
    }

    fn floating_point(&mut self, value: f64) -> Result<(), DomError> {
        self.add_value(Value::Float(value))
    }
}

fn build(input: &str) -> Result<Table, DomError> {
    let mut builder = DomBuilder::default();
    parse_str(input, &mut builder)?;
    Ok(builder.root)
}

fn dump(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Table(table) => {
            for (key, value) in table {
                match value {
                    Value::Table(_) | Value::Array(_) => {
                        println!("{}{}:", pad, key);
                        dump(value, indent + 1);
                    }
                    scalar => println!("{}{} = {}", pad, key, scalar_text(scalar)),
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Table(_) | Value::Array(_) => {
                        println!("{}[{}]", pad, i);
                        dump(item, indent + 1);
                    }
                    scalar => println!("{}[{}] {}", pad, i, scalar_text(scalar)),
                }
            }
        }
        scalar => println!("{}{}", pad, scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.clone(),
        Value::Array(_) | Value::Table(_) => String::from("..."),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let document = r#"
title = "Products"

[store]
name = "Hardware"
open = true
location = { lat = 52.37, lon = 4.89 }

[[store.products]]
name = "Hammer"
sku = 738594937
tags = [ "tool", "steel" ]

[[store.products]]
name = "Nail"
sku = 284758393
sizes = [ [1, 2], [3] ]
"#;

    println!("🌳 Building a tree from events");
    let root = build(document)?;
    dump(&Value::Table(root), 1);
    println!();

    for broken in [
        "a = 1\na = 2",
        "[t]\nx = 1\n[t]\ny = 2",
        "a = 1\n[a.b]",
        "p = { x = 1, x = 2 }",
        "a = [1, 2",
    ] {
        match build(broken) {
            Ok(_) => println!("⚠️  {:?} unexpectedly accepted", broken),
            Err(err) => println!("❌ {:?}: {}", broken, err),
        }
    }
    Ok(())
}
