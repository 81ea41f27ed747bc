//! Fmt action planning

use super::subcommand;
use crate::config::GomakeConfig;
use crate::exec::subprocess::ToolInvocation;

pub(crate) fn plan(config: &GomakeConfig) -> ToolInvocation {
    ToolInvocation::new(
        config.toolchain(),
        vec![subcommand(&config.overrides.fmt, "fmt").to_string()],
    )
}
