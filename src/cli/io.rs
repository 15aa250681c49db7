//! Output rendering for CLI
//!
//! - Text: one value per line, in field order
//! - JSON: single object per command via stdout

use std::io::{self, Write};

use serde_json::{Map, Value};

use super::errors::CliResult;

/// Named result values produced by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    fields: Vec<(&'static str, String)>,
}

impl CommandOutput {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Output holding a single value
    pub fn single(name: &'static str, value: impl Into<String>) -> Self {
        Self::new().with(name, value)
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Value of the named field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text rendering: each value on its own line
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (_, value) in &self.fields {
            text.push_str(value);
            text.push('\n');
        }
        text
    }

    /// JSON object of the fields
    pub fn to_json(&self) -> Value {
        let data: Map<String, Value> = self
            .fields
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.clone())))
            .collect();
        Value::Object(data)
    }
}

impl Default for CommandOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Write plain text output to stdout
pub fn write_text(output: &CommandOutput) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(output.to_text().as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
