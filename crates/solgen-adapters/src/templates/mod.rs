//! Template stores.
//!
//! # Resolution order
//!
//! 1. **Override directory**: `--templates-dir`, `$SOLGEN_TEMPLATES_DIR`, or
//!    the directory given in the app settings. Files named like an embedded template
//!    (`README.md.tmpl`, `stub.cs.tmpl`, ...) replace it.
//! 2. **Embedded**: the defaults compiled into the binary.

mod directory;
mod embedded;
mod layered;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
pub use layered::LayeredTemplateStore;
