use std::{ffi::OsString, path::Path};

use solgen_core::{
    application::ports::{PackageInstaller, ProjectScaffolder},
    domain::{PackageStep, ProjectSpec, RelativePath, SolutionSpec},
    error::SolgenResult,
};
use tracing::{info, instrument};

use super::{program_or, run};

/// The `dotnet` CLI as project scaffolder and package installer.
#[derive(Debug, Clone)]
pub struct DotnetCli {
    program: OsString,
}

impl DotnetCli {
    pub fn new() -> Self {
        Self::with_program(None)
    }

    /// Use a specific executable instead of `dotnet` from `PATH`.
    pub fn with_program(program: Option<OsString>) -> Self {
        Self {
            program: program_or(program, "dotnet"),
        }
    }

    fn dotnet(&self, root: &Path, args: Vec<String>) -> SolgenResult<()> {
        run(&self.program, &args, root)
    }
}

impl Default for DotnetCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectScaffolder for DotnetCli {
    #[instrument(skip_all, fields(solution = %solution.file_name))]
    fn create_solution(&self, root: &Path, solution: &SolutionSpec) -> SolgenResult<()> {
        self.dotnet(root, solution_args(solution))
    }

    #[instrument(skip_all, fields(project = %project.name))]
    fn create_project(&self, root: &Path, project: &ProjectSpec) -> SolgenResult<()> {
        self.dotnet(root, project_args(project))?;
        info!(template = %project.template, dir = %project.dir, "Project created");
        Ok(())
    }

    fn add_to_solution(
        &self,
        root: &Path,
        solution: &SolutionSpec,
        project: &ProjectSpec,
    ) -> SolgenResult<()> {
        self.dotnet(root, register_args(solution, project))
    }

    fn add_reference(
        &self,
        root: &Path,
        project: &ProjectSpec,
        target: &RelativePath,
    ) -> SolgenResult<()> {
        self.dotnet(root, reference_args(project, target))
    }
}

impl PackageInstaller for DotnetCli {
    #[instrument(skip_all, fields(package = %step.package, project = %step.project_dir))]
    fn add_package(&self, root: &Path, step: &PackageStep) -> SolgenResult<()> {
        self.dotnet(root, package_args(step))
    }
}

fn solution_args(solution: &SolutionSpec) -> Vec<String> {
    vec![
        "new".into(),
        "sln".into(),
        "-n".into(),
        solution.name.clone(),
        "--force".into(),
    ]
}

fn project_args(project: &ProjectSpec) -> Vec<String> {
    let mut args = vec![
        "new".into(),
        project.template.short_name().into(),
        "-n".into(),
        project.name.clone(),
        "-o".into(),
        project.dir.to_unix_string(),
        "--force".into(),
    ];
    if let Some(framework) = &project.framework {
        args.push("--framework".into());
        args.push(framework.clone());
    }
    args
}

fn register_args(solution: &SolutionSpec, project: &ProjectSpec) -> Vec<String> {
    vec![
        "sln".into(),
        solution.file_name.clone(),
        "add".into(),
        project.dir.to_unix_string(),
    ]
}

fn reference_args(project: &ProjectSpec, target: &RelativePath) -> Vec<String> {
    vec![
        "add".into(),
        project.dir.to_unix_string(),
        "reference".into(),
        target.to_unix_string(),
    ]
}

fn package_args(step: &PackageStep) -> Vec<String> {
    vec![
        "add".into(),
        step.project_dir.to_unix_string(),
        "package".into(),
        step.package.to_string(),
    ]
}
