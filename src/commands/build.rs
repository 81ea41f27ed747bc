//! Build action planning

use super::subcommand;
use crate::cli::Verbosity;
use crate::config::GomakeConfig;
use crate::exec::subprocess::ToolInvocation;

/// Assemble the toolchain invocation for `build`.
///
/// Debug verbosity asks the toolchain to trace its work (`-x`). The output
/// target and source files come from the configuration; unset values are
/// omitted from the argument list entirely.
pub(crate) fn plan(config: &GomakeConfig, verbosity: Verbosity) -> ToolInvocation {
    let mut args = vec![subcommand(&config.overrides.build, "build").to_string()];

    if verbosity == Verbosity::Debug {
        args.push("-x".to_string());
    }

    if let Some(output) = config.output_target() {
        args.push("-o".to_string());
        args.push(output.to_string());
    }

    args.extend(config.source_files().into_iter().map(str::to_string));

    ToolInvocation::new(config.toolchain(), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> GomakeConfig {
        GomakeConfig::parse(yaml).unwrap()
    }

    #[test]
    fn unconfigured_build_is_bare() {
        let invocation = plan(&GomakeConfig::default(), Verbosity::Standard);
        assert_eq!(invocation.program(), "go");
        assert_eq!(invocation.args(), ["build"]);
    }

    #[test]
    fn debug_verbosity_adds_toolchain_tracing() {
        let invocation = plan(&GomakeConfig::default(), Verbosity::Debug);
        assert_eq!(invocation.args(), ["build", "-x"]);
    }

    #[test]
    fn configured_output_and_source_are_ordered() {
        let cfg = config("sourceFile: main.src\noutputFile: out\n");
        let invocation = plan(&cfg, Verbosity::Standard);
        assert_eq!(invocation.args(), ["build", "-o", "out", "main.src"]);
    }

    #[test]
    fn debug_tracing_comes_before_the_output_target() {
        let cfg = config("sourceFile: main.src\noutputFile: out\n");
        let invocation = plan(&cfg, Verbosity::Debug);
        assert_eq!(invocation.args(), ["build", "-x", "-o", "out", "main.src"]);
    }

    #[test]
    fn every_configured_source_is_appended() {
        let cfg = config("sourceFile: [main.go, helpers.go]\n");
        let invocation = plan(&cfg, Verbosity::Standard);
        assert_eq!(invocation.args(), ["build", "main.go", "helpers.go"]);
    }

    #[test]
    fn empty_configuration_values_never_become_arguments() {
        let cfg = config("sourceFile: \"\"\noutputFile: \"\"\n");
        let invocation = plan(&cfg, Verbosity::Standard);
        assert_eq!(invocation.args(), ["build"]);
        assert!(invocation.args().iter().all(|arg| !arg.is_empty()));
    }

    #[test]
    fn override_renames_the_subcommand() {
        let cfg = config("override:\n  build: compile\n");
        let invocation = plan(&cfg, Verbosity::Standard);
        assert_eq!(invocation.args(), ["compile"]);
    }
}
