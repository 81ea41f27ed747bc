//! Get action planning

use super::subcommand;
use crate::config::GomakeConfig;
use crate::exec::subprocess::ToolInvocation;

/// Assemble the toolchain invocation for `get` (dependency fetching).
pub(crate) fn plan(config: &GomakeConfig) -> ToolInvocation {
    ToolInvocation::new(
        config.toolchain(),
        vec![subcommand(&config.overrides.get, "get").to_string()],
    )
}
