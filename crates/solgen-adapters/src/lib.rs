//! Infrastructure adapters for solgen.
//!
//! This crate implements the ports defined in `solgen_core::application::ports`.
//! Everything that touches the filesystem, spawns a process or parses an
//! external format lives here.

pub mod compose;
pub mod filesystem;
pub mod manifest;
pub mod process;
pub mod renderer;
pub mod templates;
pub mod tools;

pub use compose::ComposeInspector;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::{
    DEFAULT_MANIFEST_FILE, EMBEDDED_MANIFEST, Manifest, ManifestError, ManifestLoader,
};
pub use process::{DotnetCli, GitCli};
pub use renderer::SimpleRenderer;
pub use templates::{DirectoryTemplates, EmbeddedTemplates, LayeredTemplateStore};
pub use tools::PathToolLocator;
