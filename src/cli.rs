//! CLI argument parsing using clap derive macros

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::commands::Dispatcher;
use crate::config::GomakeConfig;
use crate::exec::cancel::CancelHandle;

/// gomake - make-style task runner for the Go toolchain
///
/// Runs one or more developer actions against the configured toolchain
/// binary, in the order they appear on the command line.
#[derive(Parser, Debug)]
#[command(name = "gomake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Actions to run, in order
    #[arg(value_name = "ACTION", required = true)]
    pub actions: Vec<Action>,

    /// Suppress all output, the toolchain's included
    #[arg(short = 's', long, overrides_with_all = ["verbose", "debug"])]
    pub silent: bool,

    /// Announce each toolchain command before running it
    #[arg(short = 'v', long, overrides_with_all = ["silent", "debug"])]
    pub verbose: bool,

    /// Verbose output, plus toolchain tracing for build (-x)
    #[arg(short = 'd', long, overrides_with_all = ["silent", "verbose"])]
    pub debug: bool,

    /// Configuration file (default: ./gomake.yaml, then ./gomake.yml)
    #[arg(long, env = "GOMAKE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// A recognized action, each mapping to one toolchain invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    /// Compile the configured sources
    Build,
    /// Run the test suite
    Test,
    /// Run benchmarks
    Bench,
    /// Run the linter
    Lint,
    /// Format sources
    Fmt,
    /// Fetch dependencies
    Get,
}

impl Action {
    /// The action's command-line name
    pub fn name(self) -> &'static str {
        match self {
            Action::Build => "build",
            Action::Test => "test",
            Action::Bench => "bench",
            Action::Lint => "lint",
            Action::Fmt => "fmt",
            Action::Get => "get",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output mode derived from the verbosity flags.
///
/// When several verbosity flags are given, the last one on the command line
/// wins; clap's overrides clear the earlier flags. No flag means `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent,
    Standard,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn is_silent(self) -> bool {
        self == Verbosity::Silent
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Silent => "silent",
            Verbosity::Standard => "standard",
            Verbosity::Verbose => "verbose",
            Verbosity::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Cli {
    /// Resolve the verbosity flags into a single mode.
    ///
    /// At most one of the three flags survives parsing, so the mapping is
    /// unambiguous here.
    pub fn verbosity(&self) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else if self.verbose {
            Verbosity::Verbose
        } else if self.silent {
            Verbosity::Silent
        } else {
            Verbosity::Standard
        }
    }

    /// Actions to dispatch: command-line order, repeats dropped.
    pub fn planned_actions(&self) -> Vec<Action> {
        let mut planned = Vec::with_capacity(self.actions.len());
        for &action in &self.actions {
            if !planned.contains(&action) {
                planned.push(action);
            }
        }
        planned
    }

    /// Execute the run: load configuration, then dispatch every action.
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let verbosity = self.verbosity();

        // Explicit --config paths are strict; the conventional lookup
        // degrades to defaults.
        let config = match &self.config {
            Some(path) => GomakeConfig::load_from_path(path)?,
            None => GomakeConfig::load_or_default(verbosity.is_silent()),
        };

        let cancel = CancelHandle::new();
        cancel.install_ctrlc_handler();

        let dispatcher = Dispatcher::new(config, verbosity, cancel);
        dispatcher.run_all(&self.planned_actions())
    }
}
