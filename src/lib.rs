//! Developer tooling for the canview desktop app
//!
//! This library backs two small command-line utilities:
//! - `genicon` renders the canview application icon at a fixed set of sizes
//!   and assembles the PNGs into a multi-resolution Windows ICO bundle
//! - `parse-errors` scans a `cargo check --message-format json` capture and
//!   prints a short summary of every compiler error

pub mod bundle;
pub mod cli;
pub mod diagnostics;
pub mod icon;
pub mod output;
pub mod palette;
