//! Terminal output for the binary.
//!
//! The version line is the only thing written to stdout; everything here
//! goes to stderr.

use console::style;

/// Build the line printed for a fatal error.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold().for_stderr(), message)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}
