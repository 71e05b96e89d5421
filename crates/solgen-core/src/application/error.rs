//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A required command is not resolvable on `PATH`.
    #[error("Required tool '{tool}' was not found on PATH")]
    MissingDependency { tool: String },

    /// An external command exited unsuccessfully or could not be started.
    #[error("Command failed{}: {command}", exit_suffix(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No template stored under this name.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// The rendered compose descriptor could not be inspected.
    #[error("Could not read services from the compose descriptor: {reason}")]
    DescriptorUnreadable { reason: String },

    /// A shared in-memory store's lock was poisoned.
    #[error("In-memory store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingDependency { tool } => vec![
                format!("Install '{tool}' and make sure it is on your PATH"),
                "Or remove it from `required_tools` in your manifest".into(),
            ],
            Self::CommandFailed { stderr, .. } => {
                let mut hints = Vec::new();
                if let Some(line) = stderr.lines().map(str::trim).find(|l| !l.is_empty()) {
                    hints.push(format!("Tool output: {line}"));
                }
                hints.push("Re-run with -vv to see every command solgen runs".into());
                hints.push("Output written before the failure is left in place".into());
                hints
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{name}' is available"),
                "Check the file names in your templates directory".into(),
            ],
            Self::DescriptorUnreadable { .. } => vec![
                "The docker-compose.yml template must be valid YAML".into(),
                "Check your docker-compose.yml.tmpl override".into(),
            ],
            Self::StoreLockError => vec!["This appears to be a bug in solgen".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDependency { .. } => ErrorCategory::Environment,
            Self::CommandFailed { .. } => ErrorCategory::Command,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DescriptorUnreadable { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

fn exit_suffix(status: &Option<i32>) -> String {
    status.map(|code| format!(" with exit code {code}")).unwrap_or_default()
}
