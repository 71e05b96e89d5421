pub mod artifact;
pub mod common;
pub mod plan;
pub mod render_context;

pub use crate::domain::DomainError;
pub use artifact::{ArtifactGroup, ArtifactSet, GeneratedArtifact};
pub use plan::{DescriptorDrift, PackageStep, ProjectSpec, ScaffoldPlan, SolutionSpec};
pub use render_context::RenderContext;
