//! gomake - A make-style task runner for the Go toolchain
//!
//! One invocation runs one or more developer actions (build, test, bench,
//! lint, fmt, get), each delegating to exactly one subprocess of a
//! configurable toolchain binary.
//!
//! ## Architecture
//!
//! ```text
//! CLI parse → load gomake.yaml → plan invocations → dispatch subprocesses
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use clap::Parser;

use cli::Cli;
use error::GomakeError;

fn main() {
    let cli = Cli::parse();
    let silent = cli.verbosity().is_silent();

    let code = match cli.execute() {
        Ok(()) => 0,
        Err(err) => {
            if !silent {
                match err.downcast_ref::<GomakeError>() {
                    Some(gomake_err) => gomake_err.display_with_hints(),
                    None => utils::terminal::print_error(&format!("{err:#}")),
                }
            }
            err.downcast_ref::<GomakeError>()
                .map_or(1, GomakeError::exit_code)
        }
    };

    std::process::exit(code);
}
