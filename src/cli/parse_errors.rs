//! Compiler-error summary command

use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::diagnostics::{collect_errors, decode_capture, write_report, DEFAULT_INPUT};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Summarize compiler errors from a `cargo check --message-format json` capture
#[derive(Parser)]
#[command(name = "parse-errors", version)]
struct Args {
    /// Capture file to scan
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

/// Run the diagnostics summarizer.
///
/// Any readable input exits 0, whatever its content: unparseable lines and
/// non-error records are dropped silently by the scan.
pub fn run() -> ExitCode {
    let args = Args::parse();

    let bytes = match fs::read(&args.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", args.input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let errors = collect_errors(&decode_capture(&bytes));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &errors) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}
