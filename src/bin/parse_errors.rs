//! parse-errors - summarize compiler errors from a cargo JSON capture

use std::process::ExitCode;

use canview_tools::cli;

fn main() -> ExitCode {
    cli::parse_errors::run()
}
