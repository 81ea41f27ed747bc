//! Action implementations and the dispatcher
//!
//! Each action module assembles the toolchain invocation for one action.
//! The dispatcher runs planned invocations sequentially in command-line
//! order and aborts on the first failure.

pub mod bench;
pub mod build;
pub mod fmt;
pub mod get;
pub mod lint;

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::cli::{Action, Verbosity};
use crate::config::GomakeConfig;
use crate::error::{hints, GomakeError};
use crate::exec::cancel::CancelHandle;
use crate::exec::subprocess::{self, StdioMode, ToolInvocation};
use crate::utils::terminal;

/// The subcommand for an action: the configured override when one is set,
/// otherwise the default. Empty strings count as unset.
pub(crate) fn subcommand<'a>(configured: &'a Option<String>, default: &'a str) -> &'a str {
    configured
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(default)
}

/// Runs planned actions sequentially against the configured toolchain.
pub struct Dispatcher {
    config: GomakeConfig,
    verbosity: Verbosity,
    cancel: CancelHandle,
}

impl Dispatcher {
    pub fn new(config: GomakeConfig, verbosity: Verbosity, cancel: CancelHandle) -> Self {
        Self {
            config,
            verbosity,
            cancel,
        }
    }

    /// Run every action in order, fail-fast: the first action whose
    /// subprocess cannot be spawned or exits non-zero aborts the run.
    pub fn run_all(&self, actions: &[Action]) -> Result<()> {
        for &action in actions {
            self.run_one(action)?;
        }
        Ok(())
    }

    /// Assemble the invocation for one action without running it.
    pub fn plan(&self, action: Action) -> ToolInvocation {
        match action {
            Action::Build => build::plan(&self.config, self.verbosity),
            Action::Test => test::plan(&self.config),
            Action::Bench => bench::plan(&self.config),
            Action::Lint => lint::plan(&self.config),
            Action::Fmt => fmt::plan(&self.config),
            Action::Get => get::plan(&self.config),
        }
    }

    fn run_one(&self, action: Action) -> Result<()> {
        let invocation = self.plan(action);

        if !subprocess::command_exists(invocation.program()) {
            return Err(GomakeError::missing_tool(
                invocation.program(),
                format!("the {action} action"),
                hints::toolchain(invocation.program()),
            )
            .into());
        }

        if self.verbosity >= Verbosity::Verbose {
            terminal::print_info(&format!("running {invocation}"));
        }

        let result = subprocess::run(&invocation, self.stdio_mode(), &self.cancel)?;

        if !result.success {
            self.clean_artifacts();
            return Err(GomakeError::tool_exit(
                action.name(),
                invocation.to_string(),
                result.exit_code,
            )
            .into());
        }

        if self.verbosity >= Verbosity::Verbose {
            terminal::print_success(&format!(
                "{action} finished in {:.2}s",
                result.duration.as_secs_f64()
            ));
        }

        Ok(())
    }

    fn stdio_mode(&self) -> StdioMode {
        if self.verbosity.is_silent() {
            StdioMode::Suppress
        } else {
            StdioMode::Inherit
        }
    }

    /// Honor cleanOnFailure: remove configured artifacts after a failed
    /// action.
    fn clean_artifacts(&self) {
        if !self.config.clean_on_failure {
            return;
        }

        for artifact in self.config.artifacts() {
            let path = Path::new(artifact);
            if !path.exists() {
                continue;
            }

            match fs::remove_file(path) {
                Ok(()) => {
                    if !self.verbosity.is_silent() {
                        terminal::print_warning(&format!("removed {artifact} (cleanOnFailure)"));
                    }
                }
                Err(err) => {
                    if !self.verbosity.is_silent() {
                        terminal::print_warning(&format!("could not remove {artifact}: {err}"));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher_with(yaml: &str) -> Dispatcher {
        Dispatcher::new(
            GomakeConfig::parse(yaml).unwrap(),
            Verbosity::Standard,
            CancelHandle::new(),
        )
    }

    #[test]
    fn passthrough_actions_map_to_single_subcommands() {
        let dispatcher = dispatcher_with("CC: go\n");
        assert_eq!(dispatcher.plan(Action::Test).args(), ["test"]);
        assert_eq!(dispatcher.plan(Action::Lint).args(), ["lint"]);
        assert_eq!(dispatcher.plan(Action::Fmt).args(), ["fmt"]);
        assert_eq!(dispatcher.plan(Action::Get).args(), ["get"]);
    }

    #[test]
    fn plans_use_the_configured_toolchain() {
        let dispatcher = dispatcher_with("CC: /opt/go/bin/go\n");
        assert_eq!(dispatcher.plan(Action::Test).program(), "/opt/go/bin/go");
    }

    #[test]
    fn unconfigured_toolchain_defaults_to_go() {
        let dispatcher = dispatcher_with("{}");
        assert_eq!(dispatcher.plan(Action::Fmt).program(), "go");
    }

    #[test]
    fn overrides_rename_subcommands() {
        let dispatcher = dispatcher_with("override:\n  test: check\n  get: fetch\n");
        assert_eq!(dispatcher.plan(Action::Test).args(), ["check"]);
        assert_eq!(dispatcher.plan(Action::Get).args(), ["fetch"]);
        // Unset overrides keep the defaults
        assert_eq!(dispatcher.plan(Action::Lint).args(), ["lint"]);
    }

    #[test]
    fn empty_override_strings_keep_the_default() {
        assert_eq!(subcommand(&Some(String::new()), "test"), "test");
        assert_eq!(subcommand(&None, "test"), "test");
        assert_eq!(subcommand(&Some("check".into()), "test"), "check");
    }
}
