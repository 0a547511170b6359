// SPDX-License-Identifier: Apache-2.0

// Example printing every parser event with indentation.
//
// Usage: cargo run --example event_printer [file.toml]

use tomlsax::{parse, parse_io, ChunkReader, ParseError, TomlHandler};

const SAMPLE: &[u8] = br#"# Sample configuration
title = "tomlsax demo"

[server]
host = "127.0.0.1"
ports = [ 8001, 8002 ]
limits = { connections = 5_000, timeout = 2.5 }
started = 1979-05-27T07:32:00Z

[[users]]
name = """
Ada \
Lovelace"""
admin = true
"#;

/// Prints events as they arrive, indenting nested containers
struct EventPrinter {
    indent: usize,
    event_count: usize,
}

impl EventPrinter {
    fn new() -> Self {
        Self {
            indent: 0,
            event_count: 0,
        }
    }

    fn print(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), ParseError> {
        self.event_count += 1;
        println!("{}{}", "  ".repeat(self.indent), line);
        Ok(())
    }
}

impl TomlHandler<ParseError> for EventPrinter {
    fn start_document(&mut self) -> Result<(), ParseError> {
        self.print(format_args!("🏁 StartDocument"))
    }

    fn finish_document(&mut self) -> Result<(), ParseError> {
        self.print(format_args!("🏁 FinishDocument"))
    }

    fn comment(&mut self, text: &str) -> Result<(), ParseError> {
        self.print(format_args!("💬 Comment: {:?}", text))
    }

    fn table(&mut self, path: &[String]) -> Result<(), ParseError> {
        self.print(format_args!("📂 Table: [{}]", path.join(".")))
    }

    fn array_table(&mut self, path: &[String]) -> Result<(), ParseError> {
        self.print(format_args!("📂 ArrayTable: [[{}]]", path.join(".")))
    }

    fn key(&mut self, key: &str) -> Result<(), ParseError> {
        self.print(format_args!("🔑 Key: '{}'", key))
    }

    fn start_array(&mut self) -> Result<(), ParseError> {
        self.print(format_args!("📋 StartArray"))?;
        self.indent += 1;
        Ok(())
    }

    fn finish_array(&mut self, size: usize) -> Result<(), ParseError> {
        self.indent = self.indent.saturating_sub(1);
        self.print(format_args!("📋 FinishArray ({} items)", size))
    }

    fn start_inline_table(&mut self) -> Result<(), ParseError> {
        self.print(format_args!("🗂 StartInlineTable"))?;
        self.indent += 1;
        Ok(())
    }

    fn finish_inline_table(&mut self, size: usize) -> Result<(), ParseError> {
        self.indent = self.indent.saturating_sub(1);
        self.print(format_args!("🗂 FinishInlineTable ({} pairs)", size))
    }

    fn boolean(&mut self, value: bool) -> Result<(), ParseError> {
        self.print(format_args!("✅ Boolean: {}", value))
    }

    fn string(&mut self, value: &str) -> Result<(), ParseError> {
        self.print(format_args!("📝 String: {:?}", value))
    }

    fn datetime(&mut self, value: &str) -> Result<(), ParseError> {
        self.print(format_args!("📅 Datetime: {}", value))
    }

    fn integer(&mut self, value: i64) -> Result<(), ParseError> {
        self.print(format_args!("🔢 Integer: {}", value))
    }

    fn floating_point(&mut self, value: f64) -> Result<(), ParseError> {
        self.print(format_args!("🔢 Float: {}", value))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 tomlsax event printer");
    println!("========================");

    let mut printer = EventPrinter::new();
    match std::env::args().nth(1) {
        Some(path) => {
            println!("📄 Input file: {}", path);
            println!();
            let file = std::fs::File::open(&path)?;
            parse_io(std::io::BufReader::new(file), &mut printer)?;
        }
        None => {
            println!("📄 Built-in sample, {} bytes read 8 at a time", SAMPLE.len());
            println!();
            parse(ChunkReader::new(SAMPLE, 8), &mut printer)?;
        }
    }

    println!();
    println!("✅ Parsed successfully, {} events", printer.event_count);
    Ok(())
}
