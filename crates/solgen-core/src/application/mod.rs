//! Application layer for solgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (EnvironmentValidator,
//!   ScaffoldPlanner, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    EnvironmentValidator, ResolvedTool, ScaffoldPlanner, ScaffoldReport, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    DescriptorInspector, Filesystem, PackageInstaller, ProjectScaffolder, RepositoryInitializer,
    TemplateRenderer, TemplateStore, ToolLocator,
};

pub use error::ApplicationError;
