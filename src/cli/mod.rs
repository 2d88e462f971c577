//! Command-line entry points
//!
//! Each tool is its own binary with a thin `main` that dispatches here.

pub mod genicon;
pub mod parse_errors;

/// Exit codes shared by both tools
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;
