//! Subprocess execution with cancellation support

use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use super::cancel::CancelHandle;
use crate::error::GomakeError;

/// How the child's output streams are wired.
///
/// Output gating is all-or-nothing: either the child shares the caller's
/// stdout/stderr or both go to a null sink. Stdin is always inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    Inherit,
    Suppress,
}

/// A fully-assembled toolchain command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
}

impl ToolInvocation {
    /// Invariant: `args` contains no empty strings; absent values must be
    /// omitted by the planner, not passed through as `""`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        debug_assert!(args.iter().all(|arg| !arg.is_empty()));
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 if killed by a signal)
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

/// Wait-loop poll interval; bounds how long a cancellation can go unnoticed
const WAIT_POLL: Duration = Duration::from_millis(50);

/// Run an invocation to completion.
///
/// Blocks until the child exits. The wait loop polls the cancel handle; on
/// cancellation the child is killed and reaped and the run unwinds with
/// [`GomakeError::Interrupted`].
pub fn run(
    invocation: &ToolInvocation,
    stdio: StdioMode,
    cancel: &CancelHandle,
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(invocation.program());
    cmd.args(invocation.args());
    cmd.stdin(Stdio::inherit());

    match stdio {
        StdioMode::Inherit => {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }
        StdioMode::Suppress => {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }
    }

    let mut child = cmd
        .spawn()
        .with_context(|| format!("Failed to execute {}", invocation.program()))?;

    loop {
        if cancel.is_cancelled() {
            let _ = child.kill();
            let _ = child.wait();
            return Err(GomakeError::Interrupted.into());
        }

        match child
            .try_wait()
            .with_context(|| format!("Failed to wait for {}", invocation.program()))?
        {
            Some(status) => {
                return Ok(CommandResult {
                    success: status.success(),
                    exit_code: status.code().unwrap_or(-1),
                    duration: start.elapsed(),
                });
            }
            None => std::thread::sleep(WAIT_POLL),
        }
    }
}

/// Check if a command exists in PATH (or as a direct path)
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
