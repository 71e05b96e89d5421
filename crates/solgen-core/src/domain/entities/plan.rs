//! The scaffold plan: everything the orchestrator will do, computed up front.
//!
//! Building the structural part of a plan is pure; artifact content is added
//! by the application planner, which needs the template ports.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    config::ScaffoldConfig,
    entities::{artifact::ArtifactSet, common::RelativePath},
    error::DomainError,
    value_objects::{ModuleName, PackageId, ProjectRole, ProjectTemplate, ToolName},
};

/// The solution manifest to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionSpec {
    pub name: String,
    pub file_name: String,
}

impl SolutionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let file_name = format!("{name}.sln");
        Self { name, file_name }
    }
}

/// One project to create and register in the solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    /// Assembly/project name, e.g. `DataHub.Core.Tests`.
    pub name: String,
    pub module: ModuleName,
    pub role: ProjectRole,
    pub template: ProjectTemplate,
    /// Directory relative to the output root, e.g. `tests/Core.Tests`.
    pub dir: RelativePath,
    /// Project this one references (tests → library).
    pub reference: Option<RelativePath>,
    pub framework: Option<String>,
}

/// One `(project, package)` addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageStep {
    pub module: ModuleName,
    pub project_dir: RelativePath,
    pub package: PackageId,
}

/// Names that differ between the configured infrastructure list and the
/// services declared in the compose descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptorDrift {
    /// Configured, but no such service in the descriptor.
    pub missing_from_descriptor: Vec<String>,
    /// Declared in the descriptor, but not configured.
    pub not_configured: Vec<String>,
}

impl DescriptorDrift {
    /// Compare in configured order, then descriptor order.
    pub fn between(configured: &[String], declared: &[String]) -> Self {
        Self {
            missing_from_descriptor: configured
                .iter()
                .filter(|name| !declared.contains(name))
                .cloned()
                .collect(),
            not_configured: declared
                .iter()
                .filter(|name| !configured.contains(name))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing_from_descriptor.is_empty() && self.not_configured.is_empty()
    }
}

/// Complete, immutable description of one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub root: PathBuf,
    pub required_tools: Vec<ToolName>,
    pub solution: SolutionSpec,
    pub projects: Vec<ProjectSpec>,
    pub packages: Vec<PackageStep>,
    pub artifacts: ArtifactSet,
    pub drift: DescriptorDrift,
    pub init_repository: bool,
}

impl ScaffoldPlan {
    /// Projects and package steps for `config`, without artifacts.
    pub fn structure(
        config: &ScaffoldConfig,
        root: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            root: root.into(),
            required_tools: config.required_tools().to_vec(),
            solution: SolutionSpec::new(config.project_name().as_str()),
            projects: project_layout(config)?,
            packages: package_steps(config)?,
            artifacts: ArtifactSet::new(),
            drift: DescriptorDrift::default(),
            init_repository: config.init_repository(),
        })
    }

    pub fn projects_with_role(&self, role: ProjectRole) -> impl Iterator<Item = &ProjectSpec> {
        self.projects.iter().filter(move |p| p.role == role)
    }
}

/// Library and test project per module, in module order, then the host.
pub fn project_layout(config: &ScaffoldConfig) -> Result<Vec<ProjectSpec>, DomainError> {
    let project = config.project_name();
    let framework = config.target_framework().map(str::to_string);
    let mut projects = Vec::with_capacity(config.modules().len() * 2 + 1);

    for module in config.modules() {
        let library_dir = library_dir(module)?;
        let tests_dir = RelativePath::try_new("tests")?.join(format!("{module}.Tests"))?;

        projects.push(ProjectSpec {
            name: format!("{project}.{module}"),
            module: module.clone(),
            role: ProjectRole::Library,
            template: ProjectRole::Library.template(),
            dir: library_dir.clone(),
            reference: None,
            framework: framework.clone(),
        });
        projects.push(ProjectSpec {
            name: format!("{project}.{module}.Tests"),
            module: module.clone(),
            role: ProjectRole::Tests,
            template: ProjectRole::Tests.template(),
            dir: tests_dir,
            reference: Some(library_dir),
            framework: framework.clone(),
        });
    }

    let host = config.host_module();
    projects.push(ProjectSpec {
        name: format!("{project}.{host}"),
        module: host.clone(),
        role: ProjectRole::Host,
        template: ProjectRole::Host.template(),
        dir: library_dir(host)?,
        reference: None,
        framework,
    });

    Ok(projects)
}

/// Modules in configured order, packages in configured order within each.
pub fn package_steps(config: &ScaffoldConfig) -> Result<Vec<PackageStep>, DomainError> {
    let mut steps = Vec::new();
    for module in config.modules() {
        let project_dir = library_dir(module)?;
        for package in config.packages().packages_for(module) {
            steps.push(PackageStep {
                module: module.clone(),
                project_dir: project_dir.clone(),
                package: package.clone(),
            });
        }
    }
    Ok(steps)
}

fn library_dir(module: &ModuleName) -> Result<RelativePath, DomainError> {
    RelativePath::try_new("src")?.join(module.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(modules: &[&str]) -> ScaffoldConfig {
        ScaffoldConfig::builder("DataHub")
            .modules(modules.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn layout_pairs_library_and_tests_in_module_order() {
        let projects = project_layout(&config(&["Core", "Workflows"])).unwrap();
        let dirs: Vec<_> = projects.iter().map(|p| p.dir.to_string()).collect();
        assert_eq!(
            dirs,
            [
                "src/Core",
                "tests/Core.Tests",
                "src/Workflows",
                "tests/Workflows.Tests",
                "src/Api"
            ]
        );
        assert_eq!(projects[1].name, "DataHub.Core.Tests");
        assert_eq!(
            projects[1].reference.as_ref().map(ToString::to_string),
            Some("src/Core".to_string())
        );
        assert_eq!(projects[4].role, ProjectRole::Host);
    }

    #[test]
    fn layout_with_no_modules_has_only_the_host() {
        let projects = project_layout(&config(&[])).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].template, ProjectTemplate::WebApi);
    }

    #[test]
    fn package_steps_follow_module_then_package_order() {
        let config = ScaffoldConfig::builder("DataHub")
            .modules(["Core", "Cloud"])
            .package("Cloud", "AWSSDK.S3")
            .package("Core", "P1")
            .package("Core", "P2")
            .build()
            .unwrap();

        let steps: Vec<_> = package_steps(&config)
            .unwrap()
            .into_iter()
            .map(|s| format!("{} {}", s.project_dir, s.package))
            .collect();
        assert_eq!(steps, ["src/Core P1", "src/Core P2", "src/Cloud AWSSDK.S3"]);
    }

    #[test]
    fn drift_reports_both_directions() {
        let drift = DescriptorDrift::between(
            &["rabbitmq".into(), "minio".into()],
            &["rabbitmq".into(), "redis".into()],
        );
        assert_eq!(drift.missing_from_descriptor, ["minio"]);
        assert_eq!(drift.not_configured, ["redis"]);
        assert!(!drift.is_empty());
    }
}
