//! Diagnostic output on stderr.
//!
//! stdout carries only rendered selections, so everything meant for a human
//! goes through here.

use colored::*;

/// Formats and prints a fatal error
///
/// # Format
/// ```text
/// Slop encountered an error:
/// <message>
/// ```
///
/// The header is printed in red when colors are enabled.
pub fn print_error(message: &str) {
    eprintln!("{}\n{}", "Slop encountered an error:".red(), message);
}
