//! UI primitives for the Eddy CLI.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Print an error line to stderr, colored when attached to a terminal.
pub fn print_error(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}
