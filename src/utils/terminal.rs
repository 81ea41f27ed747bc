//! Terminal output utilities
//!
//! Everything goes to stderr: stdout belongs to the toolchain children.

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message to stderr
pub fn print_info(message: &str) {
    eprintln!("{}: {}", style("info").blue().bold(), message);
}

/// Print a success message to stderr
pub fn print_success(message: &str) {
    eprintln!("{}: {}", style("success").green().bold(), message);
}
