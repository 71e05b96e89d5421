//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate that every required tool is installed
//! 2. Plan projects, packages and artifacts
//! 3. Create the solution and projects through the build tool
//! 4. Add package dependencies
//! 5. Write the compose descriptor, stubs, pipeline and docs
//! 6. Optionally initialise a repository
//!
//! Steps run strictly in order. The first failure aborts the run; nothing
//! already written is rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, PackageInstaller, ProjectScaffolder, RepositoryInitializer},
        services::{EnvironmentValidator, ResolvedTool, ScaffoldPlanner},
    },
    domain::{ArtifactGroup, DescriptorDrift, ScaffoldConfig, ScaffoldPlan},
    error::SolgenResult,
};

/// Outcome of a successful run, for the completion summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub solution_file: String,
    pub tools: Vec<ResolvedTool>,
    pub projects: usize,
    pub packages: usize,
    /// Written files, relative to `root`, in write order.
    pub files: Vec<String>,
    pub repository_initialized: bool,
    pub drift: DescriptorDrift,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    validator: EnvironmentValidator,
    planner: ScaffoldPlanner,
    filesystem: Box<dyn Filesystem>,
    scaffolder: Box<dyn ProjectScaffolder>,
    installer: Box<dyn PackageInstaller>,
    repository: Box<dyn RepositoryInitializer>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use solgen_core::application::{EnvironmentValidator, ScaffoldPlanner, ScaffoldService};
    ///
    /// let service = ScaffoldService::new(
    ///     EnvironmentValidator::new(locator),
    ///     ScaffoldPlanner::new(store, renderer, inspector),
    ///     filesystem, // impl Filesystem
    ///     dotnet,     // impl ProjectScaffolder
    ///     dotnet_pkg, // impl PackageInstaller
    ///     git,        // impl RepositoryInitializer
    /// );
    /// ```
    pub fn new(
        validator: EnvironmentValidator,
        planner: ScaffoldPlanner,
        filesystem: Box<dyn Filesystem>,
        scaffolder: Box<dyn ProjectScaffolder>,
        installer: Box<dyn PackageInstaller>,
        repository: Box<dyn RepositoryInitializer>,
    ) -> Self {
        Self {
            validator,
            planner,
            filesystem,
            scaffolder,
            installer,
            repository,
        }
    }

    /// Generate the full solution skeleton for `config` under `root`.
    #[instrument(
        skip_all,
        fields(project = %config.project_name(), root = %root.as_ref().display())
    )]
    pub fn generate(
        &self,
        config: &ScaffoldConfig,
        root: impl AsRef<Path>,
    ) -> SolgenResult<ScaffoldReport> {
        let tools = self.validator.validate(config.required_tools())?;
        info!(tools = tools.len(), "Environment validated");

        let plan = self.planner.plan(config, root.as_ref())?;
        self.execute(&plan, tools)
    }

    /// Execute an already computed plan.
    fn execute(&self, plan: &ScaffoldPlan, tools: Vec<ResolvedTool>) -> SolgenResult<ScaffoldReport> {
        let root = plan.root.as_path();

        self.create_structure(plan)?;
        self.add_dependencies(plan)?;

        let mut files = Vec::with_capacity(plan.artifacts.len());
        for group in ArtifactGroup::ALL {
            if group == ArtifactGroup::Infrastructure && !plan.drift.is_empty() {
                warn!(
                    missing_from_descriptor = ?plan.drift.missing_from_descriptor,
                    not_configured = ?plan.drift.not_configured,
                    "Infrastructure list and compose descriptor disagree; descriptor written unchanged"
                );
            }
            files.extend(self.write_group(plan, group)?);
        }

        if plan.init_repository {
            self.repository.init(root)?;
            info!("Repository initialised");
        }

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            root: plan.root.clone(),
            solution_file: plan.solution.file_name.clone(),
            tools,
            projects: plan.projects.len(),
            packages: plan.packages.len(),
            files,
            repository_initialized: plan.init_repository,
            drift: plan.drift.clone(),
        })
    }

    /// Solution, then per module: create its projects, register them, add
    /// references. The host comes last.
    #[instrument(skip_all)]
    fn create_structure(&self, plan: &ScaffoldPlan) -> SolgenResult<()> {
        let root = plan.root.as_path();
        self.filesystem.create_dir_all(root)?;
        self.scaffolder.create_solution(root, &plan.solution)?;

        for group in plan.projects.chunk_by(|a, b| a.module == b.module) {
            for project in group {
                self.scaffolder.create_project(root, project)?;
            }
            for project in group {
                self.scaffolder
                    .add_to_solution(root, &plan.solution, project)?;
            }
            for project in group {
                if let Some(target) = &project.reference {
                    self.scaffolder.add_reference(root, project, target)?;
                }
            }
        }

        info!(projects = plan.projects.len(), "Structure created");
        Ok(())
    }

    #[instrument(skip_all)]
    fn add_dependencies(&self, plan: &ScaffoldPlan) -> SolgenResult<()> {
        let root = plan.root.as_path();
        for step in &plan.packages {
            self.installer.add_package(root, step)?;
        }
        info!(packages = plan.packages.len(), "Dependencies added");
        Ok(())
    }

    #[instrument(skip_all, fields(group = %group))]
    fn write_group(&self, plan: &ScaffoldPlan, group: ArtifactGroup) -> SolgenResult<Vec<String>> {
        let mut written = Vec::new();
        for artifact in plan.artifacts.in_group(group) {
            let path = plan.root.join(artifact.path.as_path());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &artifact.content)?;
            written.push(artifact.path.to_string());
        }
        info!(files = written.len(), "Files written");
        Ok(written)
    }
}
