//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `solgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `ToolLocator`: `PATH` lookup
//!   - `ProjectScaffolder`, `PackageInstaller`: the build tool
//!   - `RepositoryInitializer`: version control
//!   - `TemplateStore`, `TemplateRenderer`: template text and rendering
//!   - `DescriptorInspector`: compose descriptor parsing
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    DescriptorInspector, Filesystem, PackageInstaller, ProjectScaffolder, RepositoryInitializer,
    TemplateRenderer, TemplateStore, ToolLocator,
};

#[cfg(test)]
pub use output::{
    MockDescriptorInspector, MockFilesystem, MockPackageInstaller, MockProjectScaffolder,
    MockRepositoryInitializer, MockTemplateRenderer, MockTemplateStore, MockToolLocator,
};
