//! genicon - render the canview icon set and assemble the ICO bundle

use std::process::ExitCode;

use canview_tools::cli;

fn main() -> ExitCode {
    cli::genicon::run()
}
