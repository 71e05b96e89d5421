// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for solgen.
//!
//! Pure data and rules: configuration, the scaffold plan, artifacts and the
//! render context. All process execution, filesystem access and template
//! loading happen behind ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, process or network calls
//! - **Deterministic**: Ordered collections only, no clocks, no randomness
//! - **Validated on construction**: Names and paths cannot be built invalid
//! - **Immutable configuration**: `ScaffoldConfig` has no setters
//!
// Public API - what the world sees
pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use catalog::{STUB_REGISTRY, StubSpec, TemplateKey};
pub use config::{DEFAULT_HOST_MODULE, PackagePlan, ScaffoldConfig, ScaffoldConfigBuilder};
pub use entities::{
    ArtifactGroup, ArtifactSet, DescriptorDrift, GeneratedArtifact, PackageStep, ProjectSpec,
    RenderContext, ScaffoldPlan, SolutionSpec,
    common::RelativePath,
    plan::{package_steps, project_layout},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{
    ModuleName, PackageId, ProjectName, ProjectRole, ProjectTemplate, ServiceName, ToolName,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> ScaffoldConfig {
        ScaffoldConfig::builder("DataHub")
            .modules(["Core", "Workflows", "Messaging"])
            .services(["rabbitmq", "postgres"])
            .package("Messaging", "MassTransit")
            .package("Core", "FluentValidation")
            .required_tools(["dotnet", "git"])
            .build()
            .unwrap()
    }

    // ========================================================================
    // Plan shape
    // ========================================================================

    #[test]
    fn n_modules_yield_n_library_and_n_test_projects() {
        let config = sample_config();
        let plan = ScaffoldPlan::structure(&config, "out").unwrap();

        assert_eq!(plan.projects_with_role(ProjectRole::Library).count(), 3);
        assert_eq!(plan.projects_with_role(ProjectRole::Tests).count(), 3);
        assert_eq!(plan.projects_with_role(ProjectRole::Host).count(), 1);
        assert_eq!(plan.solution.file_name, "DataHub.sln");
    }

    #[test]
    fn library_order_follows_module_order() {
        let plan = ScaffoldPlan::structure(&sample_config(), "out").unwrap();
        let names: Vec<_> = plan
            .projects_with_role(ProjectRole::Library)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["DataHub.Core", "DataHub.Workflows", "DataHub.Messaging"]
        );
    }

    #[test]
    fn plan_carries_tools_and_repository_flag() {
        let plan = ScaffoldPlan::structure(&sample_config(), "out").unwrap();
        let tools: Vec<_> = plan.required_tools.iter().map(ToolName::as_str).collect();
        assert_eq!(tools, ["dotnet", "git"]);
        assert!(plan.init_repository);
        assert!(plan.artifacts.is_empty());
        assert!(DomainValidator::validate_plan(&plan).is_ok());
    }

    // ========================================================================
    // Stubs
    // ========================================================================

    #[test]
    fn every_registered_stub_targets_a_default_module_name() {
        for stub in STUB_REGISTRY {
            assert!(ModuleName::new(stub.module).is_ok(), "{}", stub.module);
            assert!(RelativePath::try_new(stub.relative_path()).is_ok());
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn config_errors_are_validation_category() {
        let err = ScaffoldConfig::builder("1bad").build().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn path_errors_are_internal_category() {
        let err = RelativePath::try_new("/abs").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
