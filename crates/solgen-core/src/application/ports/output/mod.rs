//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `solgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{
    PackageStep, ProjectSpec, RelativePath, RenderContext, SolutionSpec, TemplateKey,
};
use crate::error::SolgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `solgen_adapters::filesystem::LocalFilesystem` (production)
/// - `solgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Writes overwrite existing files; solgen never deletes anything.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SolgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SolgenResult<()>;
}

/// Port for resolving external commands.
///
/// Implemented by `solgen_adapters::tools::PathToolLocator`.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    /// Full path of `tool` if it is executable from the search path.
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Port for the build tool that creates solutions and projects.
///
/// Every method blocks until the underlying command exits. A non-zero exit
/// is reported as `ApplicationError::CommandFailed`.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectScaffolder: Send + Sync {
    /// Create the solution manifest in `root`.
    fn create_solution(&self, root: &Path, solution: &SolutionSpec) -> SolgenResult<()>;

    /// Create one project from its build-tool template.
    fn create_project(&self, root: &Path, project: &ProjectSpec) -> SolgenResult<()>;

    /// Register a created project in the solution manifest.
    fn add_to_solution(
        &self,
        root: &Path,
        solution: &SolutionSpec,
        project: &ProjectSpec,
    ) -> SolgenResult<()>;

    /// Add a project-to-project reference from `project` to `target`.
    fn add_reference(
        &self,
        root: &Path,
        project: &ProjectSpec,
        target: &RelativePath,
    ) -> SolgenResult<()>;
}

/// Port for adding a package dependency to a project.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    fn add_package(&self, root: &Path, step: &PackageStep) -> SolgenResult<()>;
}

/// Port for initialising version control in the output root.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryInitializer: Send + Sync {
    fn init(&self, root: &Path) -> SolgenResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `solgen_adapters::templates::EmbeddedTemplates` (compiled-in defaults)
/// - `solgen_adapters::templates::LayeredTemplateStore` (directory overrides
///   on top of another store)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw template text for `key`.
    fn get(&self, key: TemplateKey) -> SolgenResult<String>;
}

/// Port for template rendering.
///
/// Implementations must fail with `DomainError::UnresolvedPlaceholder` rather
/// than emit a file that still contains a `{{PLACEHOLDER}}`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` (named `name` for error messages) with `context`.
    fn render(&self, name: &str, template: &str, context: &RenderContext) -> SolgenResult<String>;
}

/// Port for reading the service names out of a rendered compose descriptor.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorInspector: Send + Sync {
    /// Service keys in declaration order.
    fn service_names(&self, descriptor: &str) -> SolgenResult<Vec<String>>;
}
