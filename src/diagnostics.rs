//! Summarizing compiler diagnostics captured from `cargo check`
//!
//! The input is a raw `--message-format json` stream: one JSON record per
//! line, interleaved with whatever other record types cargo emits. Lines
//! that do not parse, and records that are not error-level compiler
//! messages, are skipped without comment — the stream comes from an
//! external tool and is not guaranteed uniform, so the scan is best effort.

use encoding_rs::UTF_16LE;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Write};
use thiserror::Error;

/// Default capture filename written by the build scripts.
pub const DEFAULT_INPUT: &str = "check_errors.json";

/// Error type for record parse failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// One record from the cargo JSON stream. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagnosticRecord {
    pub reason: String,
    pub message: Option<CompilerMessage>,
}

/// The `message` payload of a `compiler-message` record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompilerMessage {
    pub level: String,
    pub message: String,
    pub code: Option<DiagnosticCode>,
    #[serde(default)]
    pub spans: Vec<DiagnosticSpan>,
}

/// The `code` payload; absent for errors without a registered code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagnosticCode {
    pub code: String,
}

/// A source location attached to a compiler message.
///
/// `text` is kept as raw JSON so the report can show whatever the compiler
/// put there without modeling its shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagnosticSpan {
    pub file_name: String,
    pub line_start: u64,
    pub column_start: u64,
    #[serde(default)]
    pub text: Vec<Value>,
}

/// Decode the raw capture bytes to text.
///
/// The capture is produced by redirecting cargo output through PowerShell,
/// which writes UTF-16. Decoding sniffs a BOM of either endianness and
/// falls back to little-endian; malformed sequences are replaced rather
/// than rejected.
pub fn decode_capture(bytes: &[u8]) -> String {
    let (text, _, _) = UTF_16LE.decode(bytes);
    text.into_owned()
}

/// Parse a single line of the stream into a record.
pub fn parse_record(line: &str, line_number: usize) -> Result<DiagnosticRecord, ParseError> {
    serde_json::from_str(line).map_err(|e| ParseError { message: e.to_string(), line: line_number })
}

/// Collect every error-level compiler message from the decoded stream.
///
/// Unparseable lines and non-matching records produce nothing and do not
/// stop the scan.
pub fn collect_errors(input: &str) -> Vec<CompilerMessage> {
    let mut errors = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let Ok(record) = parse_record(line, index + 1) else {
            continue;
        };
        if record.reason != "compiler-message" {
            continue;
        }
        let Some(message) = record.message else {
            continue;
        };
        if message.level == "error" {
            errors.push(message);
        }
    }
    errors
}

/// Write the human-readable summary for a list of compiler errors.
///
/// One `Error:`/`Code:` pair per message, then one `File:`/`Text:` pair per
/// span. A missing code prints as `None`; span text prints as the compact
/// JSON array taken from the record.
pub fn write_report<W: Write>(out: &mut W, errors: &[CompilerMessage]) -> io::Result<()> {
    for message in errors {
        writeln!(out, "Error: {}", message.message)?;
        match &message.code {
            Some(code) => writeln!(out, "Code: {}", code.code)?,
            None => writeln!(out, "Code: None")?,
        }
        for span in &message.spans {
            writeln!(
                out,
                "File: {}:{}:{}",
                span.file_name, span.line_start, span.column_start
            )?;
            writeln!(out, "Text: {}", Value::Array(span.text.clone()))?;
        }
    }
    Ok(())
}
