// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside reports and tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration validation
    // ========================================================================
    #[error("Invalid {kind} '{value}': {reason}")]
    InvalidName {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("Module '{module}' is declared more than once")]
    DuplicateModule { module: String },

    #[error("Host module '{module}' collides with a domain module of the same name")]
    HostCollision { module: String },

    #[error("Packages configured for unknown module '{module}'")]
    UnknownModule { module: String },

    // ========================================================================
    // Artifact layout
    // ========================================================================
    #[error("Duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the output root: {path}")]
    PathTraversal { path: String },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Template '{template}' references unknown variable {placeholder}")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { kind, .. } => match *kind {
                "project name" => vec![
                    "Start the project name with a letter".into(),
                    "Use letters, digits, '.', '_' and '-' only".into(),
                    "Examples: DataHub, Acme.Orders, my-service".into(),
                ],
                "module name" => vec![
                    "Module names become C# namespaces and directory names".into(),
                    "Start with a letter; use letters, digits and '_' only".into(),
                    "Examples: Core, Workflows, Cloud_Storage".into(),
                ],
                "service name" => vec![
                    "Service names are compose service keys".into(),
                    "Use lowercase letters, digits, '-' and '_' only".into(),
                ],
                _ => vec![format!("Check the {kind} in your manifest")],
            },
            Self::DuplicateModule { module } => vec![
                format!("Remove the repeated '{module}' entry from `modules`"),
            ],
            Self::HostCollision { module } => vec![
                format!("Rename `host_module` or the '{module}' domain module"),
                "The host project lives next to the domain modules under src/".into(),
            ],
            Self::UnknownModule { module } => vec![
                format!("Add '{module}' to `modules`, or remove its `[packages]` entry"),
                "Package keys must name a declared module (case-sensitive)".into(),
            ],
            Self::UnresolvedPlaceholder { template, placeholder } => vec![
                format!("Template '{template}' uses {placeholder}, which solgen does not provide"),
                "Check template overrides in your templates directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathTraversal { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
