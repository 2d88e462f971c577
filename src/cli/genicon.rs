//! Icon generation command

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::bundle::assemble_ico;
use crate::icon::{render_icon, PNG_SIZES};
use crate::output::save_png;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Render the canview icon set and assemble the Windows ICO bundle
#[derive(Parser)]
#[command(name = "genicon", version)]
struct Args {
    /// Directory for the PNG icon set
    #[arg(long, default_value = "png")]
    png_dir: PathBuf,

    /// Directory for the ICO bundle
    #[arg(long, default_value = "ico")]
    ico_dir: PathBuf,
}

/// Run the icon generator.
///
/// PNG generation and bundle assembly are independent stages: a bundle
/// failure is reported but leaves the exit code at 0, since the PNG set on
/// disk is already valid.
pub fn run() -> ExitCode {
    let args = Args::parse();

    for dir in [&args.png_dir, &args.ico_dir] {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Error: Cannot create output directory '{}': {}", dir.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    println!("Generating PNG icons...");
    for size in PNG_SIZES {
        let path = args.png_dir.join(format!("icon_{}.png", size));
        if let Err(e) = save_png(&render_icon(size), &path) {
            eprintln!("Error: Failed to write {}: {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Wrote {} ({}x{})", path.display(), size, size);
    }

    println!("Creating ICO bundle...");
    let ico_path = args.ico_dir.join("canview.ico");
    match assemble_ico(&args.png_dir, &ico_path) {
        Ok(frames) => println!("Wrote {} ({} frames)", ico_path.display(), frames),
        Err(e) => {
            eprintln!("Error: Failed to assemble {}: {}", ico_path.display(), e);
            eprintln!("PNG files are still available in {}/", args.png_dir.display());
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
