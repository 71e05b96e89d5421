//! solgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the solgen
//! solution-skeleton generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           solgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (EnvironmentValidator, ScaffoldPlanner, │
//! │            ScaffoldService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, ToolLocator, Scaffolder,   │
//! │  TemplateStore, TemplateRenderer, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    solgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, DotnetCli, GitCli,    │
//! │  EmbeddedTemplates, ComposeInspector)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ScaffoldConfig, ScaffoldPlan, Artifact)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use solgen_core::domain::{ProjectRole, ScaffoldConfig, ScaffoldPlan};
//!
//! let config = ScaffoldConfig::builder("DataHub")
//!     .modules(["Core", "Workflows"])
//!     .package("Core", "FluentValidation")
//!     .build()
//!     .unwrap();
//!
//! let plan = ScaffoldPlan::structure(&config, "./DataHub").unwrap();
//! assert_eq!(plan.projects_with_role(ProjectRole::Tests).count(), 2);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EnvironmentValidator, ScaffoldPlanner, ScaffoldReport, ScaffoldService,
        ports::{
            DescriptorInspector, Filesystem, PackageInstaller, ProjectScaffolder,
            RepositoryInitializer, TemplateRenderer, TemplateStore, ToolLocator,
        },
    };
    pub use crate::domain::{
        ArtifactGroup, RenderContext, ScaffoldConfig, ScaffoldConfigBuilder, ScaffoldPlan,
        TemplateKey,
    };
    pub use crate::error::{SolgenError, SolgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
