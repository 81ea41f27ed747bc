//! gomake.yaml configuration parsing
//!
//! The configuration is loaded once before dispatch and read-only after
//! that. The conventional lookup is lenient: a missing file yields the
//! default configuration, and a broken file degrades to the default with a
//! warning. An explicit path handed to [`GomakeConfig::load_from_path`] is
//! strict instead.
//!
//! ## Example
//!
//! ```yaml
//! CC: go
//! sourceFile: ./cmd/app/main.go
//! outputFile: bin/app
//! cleanOnFailure: true
//!
//! override:
//!   lint: vet
//! ```

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::{hints, GomakeError};
use crate::utils::terminal;

/// Toolchain binary used when `CC` is not configured
pub const DEFAULT_TOOLCHAIN: &str = "go";

/// Conventional configuration file names, tried in order
const CONFIG_FILE_NAMES: &[&str] = &["gomake.yaml", "gomake.yml"];

/// A YAML value that may be a single string or a list of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Non-empty entries in declaration order. Empty strings count as
    /// absent; they must never become subprocess arguments.
    fn entries(&self) -> Vec<&str> {
        match self {
            OneOrMany::One(value) => {
                if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value.as_str()]
                }
            }
            OneOrMany::Many(values) => values
                .iter()
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .collect(),
        }
    }
}

/// Per-action subcommand replacements from the `override` mapping
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideTargets {
    pub build: Option<String>,

    /// Accepted for configuration compatibility; there is no install action
    pub install: Option<String>,

    pub lint: Option<String>,
    pub fmt: Option<String>,
    pub test: Option<String>,
    pub bench: Option<String>,
    pub get: Option<String>,
}

/// Root configuration from gomake.yaml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GomakeConfig {
    /// Source file(s) appended to the build invocation
    #[serde(default, rename = "sourceFile")]
    pub source_file: Option<OneOrMany>,

    /// Build artifact path(s); the first one is the `-o` target
    #[serde(default, rename = "outputFile")]
    pub output_file: Option<OneOrMany>,

    /// Remove configured artifacts when an action fails
    #[serde(default, rename = "cleanOnFailure")]
    pub clean_on_failure: bool,

    /// Toolchain binary path or name
    #[serde(default, rename = "CC")]
    pub cc: Option<String>,

    /// Replacement subcommands per action
    #[serde(default, rename = "override")]
    pub overrides: OverrideTargets,
}

impl GomakeConfig {
    /// Parse configuration from a YAML document
    pub fn parse(content: &str) -> Result<Self> {
        let config = serde_yaml::from_str(content).map_err(|err| {
            GomakeError::config_error_with_hint(
                "not valid gomake YAML",
                Some(err.into()),
                hints::config_file(),
            )
        })?;
        Ok(config)
    }

    /// Load configuration from an explicit path. Any failure is fatal.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            GomakeError::config_error_with_hint(
                format!("failed to read {}", path.display()),
                Some(err.into()),
                hints::config_file(),
            )
        })?;

        let config = serde_yaml::from_str(&content).map_err(|err| {
            GomakeError::config_error_with_hint(
                format!("{} is not valid YAML", path.display()),
                Some(err.into()),
                hints::config_file(),
            )
        })?;

        Ok(config)
    }

    /// Load from the conventional file names in `dir`, if one exists.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                return Self::load_from_path(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Conventional lookup in the current directory.
    ///
    /// Absence yields the default configuration. A file that exists but
    /// cannot be used degrades to the default with a warning on stderr,
    /// suppressed when `quiet`.
    pub fn load_or_default(quiet: bool) -> Self {
        let cwd = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(_) => return Self::default(),
        };

        match Self::load_from_dir(&cwd) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                if !quiet {
                    terminal::print_warning(&format!("{err:#}; using default configuration"));
                }
                Self::default()
            }
        }
    }

    /// The toolchain binary to drive. Empty `CC` counts as unset.
    pub fn toolchain(&self) -> &str {
        self.cc
            .as_deref()
            .filter(|cc| !cc.is_empty())
            .unwrap_or(DEFAULT_TOOLCHAIN)
    }

    /// Configured source files, in declaration order
    pub fn source_files(&self) -> Vec<&str> {
        self.source_file
            .as_ref()
            .map(OneOrMany::entries)
            .unwrap_or_default()
    }

    /// The `-o` target: the first configured artifact, if any
    pub fn output_target(&self) -> Option<&str> {
        self.artifacts().into_iter().next()
    }

    /// All configured artifact paths (cleanOnFailure removes these)
    pub fn artifacts(&self) -> Vec<&str> {
        self.output_file
            .as_ref()
            .map(OneOrMany::entries)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config = GomakeConfig::parse("CC: go\n").unwrap();
        assert_eq!(config.toolchain(), "go");
        assert!(config.source_files().is_empty());
        assert!(config.output_target().is_none());
        assert!(!config.clean_on_failure);
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
CC: /usr/local/bin/go
sourceFile: ./cmd/app/main.go
outputFile: bin/app
cleanOnFailure: true

override:
  build: install
  lint: vet
"#;

        let config = GomakeConfig::parse(yaml).unwrap();
        assert_eq!(config.toolchain(), "/usr/local/bin/go");
        assert_eq!(config.source_files(), ["./cmd/app/main.go"]);
        assert_eq!(config.output_target(), Some("bin/app"));
        assert!(config.clean_on_failure);
        assert_eq!(config.overrides.build.as_deref(), Some("install"));
        assert_eq!(config.overrides.lint.as_deref(), Some("vet"));
        assert!(config.overrides.test.is_none());
    }

    #[test]
    fn source_and_output_accept_lists() {
        let yaml = r#"
sourceFile:
  - main.go
  - helpers.go
outputFile:
  - bin/app
  - bin/app.debug
"#;

        let config = GomakeConfig::parse(yaml).unwrap();
        assert_eq!(config.source_files(), ["main.go", "helpers.go"]);
        // Only the first artifact can be the -o target
        assert_eq!(config.output_target(), Some("bin/app"));
        assert_eq!(config.artifacts(), ["bin/app", "bin/app.debug"]);
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let yaml = "CC: \"\"\nsourceFile: \"\"\noutputFile: [\"\", \"bin/app\"]\n";

        let config = GomakeConfig::parse(yaml).unwrap();
        assert_eq!(config.toolchain(), DEFAULT_TOOLCHAIN);
        assert!(config.source_files().is_empty());
        assert_eq!(config.output_target(), Some("bin/app"));
    }

    #[test]
    fn missing_keys_default() {
        let config = GomakeConfig::parse("cleanOnFailure: false\n").unwrap();
        assert_eq!(config.toolchain(), "go");
        assert!(config.artifacts().is_empty());
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = GomakeConfig::parse("override: [not, a, mapping\n").unwrap_err();
        assert!(err.downcast_ref::<GomakeError>().is_some());
    }

    #[test]
    fn load_from_dir_finds_the_yml_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gomake.yml"), "CC: mytool\n").unwrap();

        let config = GomakeConfig::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.toolchain(), "mytool");
    }

    #[test]
    fn load_from_dir_prefers_yaml_over_yml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gomake.yaml"), "CC: primary\n").unwrap();
        std::fs::write(dir.path().join("gomake.yml"), "CC: fallback\n").unwrap();

        let config = GomakeConfig::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.toolchain(), "primary");
    }

    #[test]
    fn load_from_dir_without_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GomakeConfig::load_from_dir(dir.path()).unwrap().is_none());
    }

    #[test]
    fn load_from_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GomakeConfig::load_from_path(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
