//! Configuration loading

mod gomake_yaml;

pub use gomake_yaml::{GomakeConfig, OneOrMany, OverrideTargets, DEFAULT_TOOLCHAIN};
