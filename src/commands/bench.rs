//! Bench action planning

use super::subcommand;
use crate::config::GomakeConfig;
use crate::exec::subprocess::ToolInvocation;

/// Benchmarks ride on the test subcommand with the match-everything bench
/// filter. An `override.bench` entry replaces the subcommand only; the
/// filter is always appended.
pub(crate) fn plan(config: &GomakeConfig) -> ToolInvocation {
    ToolInvocation::new(
        config.toolchain(),
        vec![
            subcommand(&config.overrides.bench, "test").to_string(),
            "-bench=.".to_string(),
        ],
    )
}
