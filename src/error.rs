//! Error types and helpers for user-friendly error messages
//!
//! Every fatal condition gets a typed error carrying an actionable hint, so
//! the top level can render `ERROR:`/`HINT:` lines and pick the right exit
//! code. Unknown actions and flags never reach this module; the argument
//! parser rejects them with a usage error.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum GomakeError {
    /// Configuration file errors (fatal only for explicit --config paths)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Toolchain binary not found or not executable
    #[error("Missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An action's subprocess exited with a non-zero status
    #[error("{action} failed: `{command}` exited with status {code}")]
    ToolExit {
        action: String,
        command: String,
        code: i32,
    },

    /// The run was cancelled before the active subprocess finished
    #[error("Interrupted")]
    Interrupted,
}

impl GomakeError {
    /// Create a configuration error with source and hint
    pub fn config_error_with_hint(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a subprocess failure error
    pub fn tool_exit(
        action: impl Into<String>,
        command: impl Into<String>,
        code: i32,
    ) -> Self {
        Self::ToolExit {
            action: action.into(),
            command: command.into(),
            code,
        }
    }

    /// Process exit status for this error.
    ///
    /// A failed subprocess propagates its own exit code; interruption uses
    /// the conventional 130; everything else is a plain failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            GomakeError::ToolExit { code, .. } if *code > 0 => *code,
            GomakeError::ToolExit { .. } => 1,
            GomakeError::Interrupted => 130,
            GomakeError::Config { .. } | GomakeError::MissingTool { .. } => 1,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            GomakeError::Config { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            GomakeError::MissingTool { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            GomakeError::ToolExit { .. } | GomakeError::Interrupted => {}
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for a toolchain binary that is not on the PATH
    pub fn toolchain(tool: &str) -> String {
        format!(
            "'{tool}' was not found on your PATH.\n\
             • Install the Go toolchain from https://go.dev/dl/\n\
             • Or set CC in gomake.yaml to the binary you want to drive"
        )
    }

    /// Get hint for an unreadable or invalid configuration file
    pub fn config_file() -> &'static str {
        "The configuration file could not be used. Common issues:\n\
         • Invalid YAML syntax (check indentation and quoting)\n\
         • sourceFile/outputFile must be a string or a list of strings\n\
         • override entries must be strings naming subcommands"
    }
}
