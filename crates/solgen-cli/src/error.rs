//! Error handling for the solgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use solgen_adapters::ManifestError;
use solgen_core::error::{ErrorCategory as CoreCategory, SolgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// `solgen init` would overwrite a file.
    #[error("Manifest already exists at {path}")]
    ManifestExists { path: PathBuf },

    /// The scaffold manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Application settings could not be read or are invalid.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An error propagated from `solgen-core` or an adapter.
    #[error("Generation failed: {0}")]
    Core(#[from] SolgenError),

    /// An I/O operation in the CLI itself failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestExists { path } => vec![
                "Use --force to overwrite it".into(),
                format!(
                    "Or generate from it directly: solgen generate --manifest {}",
                    path.display()
                ),
            ],

            Self::Manifest(e) => e.suggestions(),

            Self::Config { .. } => vec![
                format!(
                    "Check your settings file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check SOLGEN_* environment variables".into(),
                "Use 'solgen config show' to see the effective settings".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestExists { .. } => ErrorCategory::UserError,
            Self::Manifest(e) => match e {
                // A path that names nothing is a usage mistake; any other
                // read failure is I/O.
                ManifestError::Read { source, .. }
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    ErrorCategory::UserError
                }
                ManifestError::Read { .. } | ManifestError::Serialize(_) => {
                    ErrorCategory::Internal
                }
                ManifestError::Parse { .. } | ManifestError::Invalid(_) => ErrorCategory::UserError,
            },
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Environment | CoreCategory::Command => ErrorCategory::Environment,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::NotFound | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Environment   |  1   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Environment | ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Environment => tracing::error!("Environment error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid arguments or manifest contents.
    UserError,
    /// A required tool is missing or an external command failed.
    Environment,
    /// Application settings problem.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait converting `io::Error` results into [`CliError::Io`] with
/// a descriptive message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::Io {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solgen_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    fn core(err: impl Into<SolgenError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn missing_tool_exits_one() {
        let err = core(ApplicationError::MissingDependency {
            tool: "helm".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Environment);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn command_failure_exits_one() {
        let err = core(ApplicationError::CommandFailed {
            command: "dotnet new sln".into(),
            status: Some(1),
            stderr: String::new(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn invalid_manifest_exits_two() {
        let err = CliError::Manifest(ManifestError::Invalid(DomainError::UnknownModule {
            module: "Cloud".into(),
        }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_manifest_exits_two_unreadable_exits_one() {
        let read = |kind: io::ErrorKind| {
            CliError::Manifest(ManifestError::Read {
                path: PathBuf::from("solgen.toml"),
                source: io::Error::from(kind),
            })
        };
        assert_eq!(read(io::ErrorKind::NotFound).exit_code(), 2);
        assert_eq!(read(io::ErrorKind::PermissionDenied).exit_code(), 1);
        assert_eq!(read(io::ErrorKind::InvalidData).exit_code(), 1);
    }

    #[test]
    fn domain_validation_exits_two() {
        let err = core(DomainError::DuplicateModule {
            module: "Core".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn settings_error_exits_four() {
        let err = CliError::Config {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_error_exits_one() {
        let err: CliError = io::Error::other("e").into();
        assert_eq!(err.exit_code(), 1);
    }

    // ── suggestions & format ──────────────────────────────────────────────

    #[test]
    fn manifest_exists_suggests_force() {
        let err = CliError::ManifestExists {
            path: PathBuf::from("solgen.toml"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::MissingDependency {
            tool: "dotnet".into(),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("dotnet"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::Io {
            message: "writing manifest".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading manifest");
        assert!(matches!(cli, Err(CliError::Io { ref message, .. }) if message == "reading manifest"));
    }
}
