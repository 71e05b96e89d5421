//! Full generation runs against the in-memory filesystem with the real
//! templates, renderer and compose inspector. Only the external tools are
//! replaced.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use solgen_adapters::{ComposeInspector, EmbeddedTemplates, MemoryFilesystem, SimpleRenderer};
use solgen_core::{
    domain::{PackageStep, ProjectSpec, RelativePath, SolutionSpec},
    error::SolgenResult,
    prelude::*,
};

/// Stand-in for `dotnet`, `git` and the `PATH` lookup.
#[derive(Clone, Default)]
struct FakeTools {
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeTools {
    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolLocator for FakeTools {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/usr/bin").join(tool))
    }
}

impl ProjectScaffolder for FakeTools {
    fn create_solution(&self, _root: &Path, solution: &SolutionSpec) -> SolgenResult<()> {
        self.push(format!("new sln {}", solution.file_name));
        Ok(())
    }

    fn create_project(&self, _root: &Path, project: &ProjectSpec) -> SolgenResult<()> {
        self.push(format!("new {} {}", project.template, project.dir));
        Ok(())
    }

    fn add_to_solution(
        &self,
        _root: &Path,
        _solution: &SolutionSpec,
        project: &ProjectSpec,
    ) -> SolgenResult<()> {
        self.push(format!("sln add {}", project.dir));
        Ok(())
    }

    fn add_reference(
        &self,
        _root: &Path,
        project: &ProjectSpec,
        target: &RelativePath,
    ) -> SolgenResult<()> {
        self.push(format!("reference {} {target}", project.dir));
        Ok(())
    }
}

impl PackageInstaller for FakeTools {
    fn add_package(&self, _root: &Path, step: &PackageStep) -> SolgenResult<()> {
        self.push(format!("add {} package {}", step.project_dir, step.package));
        Ok(())
    }
}

impl RepositoryInitializer for FakeTools {
    fn init(&self, _root: &Path) -> SolgenResult<()> {
        self.push("git init".into());
        Ok(())
    }
}

fn service(fs: &MemoryFilesystem, tools: &FakeTools) -> ScaffoldService {
    ScaffoldService::new(
        EnvironmentValidator::new(Box::new(tools.clone())),
        ScaffoldPlanner::new(
            Box::new(EmbeddedTemplates::new()),
            Box::new(SimpleRenderer::new()),
            Box::new(ComposeInspector::new()),
        ),
        Box::new(fs.clone()),
        Box::new(tools.clone()),
        Box::new(tools.clone()),
        Box::new(tools.clone()),
    )
}

fn config() -> ScaffoldConfig {
    ScaffoldConfig::builder("DataHub")
        .modules(["Core", "Workflows"])
        .services(["rabbitmq", "postgres"])
        .package("Core", "FluentValidation")
        .required_tools(["dotnet", "git"])
        .build()
        .unwrap()
}

fn generate(config: &ScaffoldConfig) -> (BTreeMap<PathBuf, String>, Vec<String>) {
    let fs = MemoryFilesystem::new();
    let tools = FakeTools::default();
    service(&fs, &tools).generate(config, "DataHub").unwrap();
    (fs.snapshot(), tools.calls())
}

#[test]
fn test_repeated_runs_produce_identical_trees() {
    let (first_files, first_calls) = generate(&config());
    let (second_files, second_calls) = generate(&config());

    assert!(!first_files.is_empty());
    assert_eq!(first_files, second_files);
    assert_eq!(first_calls, second_calls);
}

#[test]
fn test_tree_contains_every_artifact_group() {
    let (files, calls) = generate(&config());
    let root = Path::new("DataHub");

    for path in [
        "docker-compose.yml",
        "src/Core/Validation/SchemaValidator.cs",
        ".github/workflows/ci.yml",
        "README.md",
        "docs/architecture.md",
        ".gitignore",
    ] {
        assert!(files.contains_key(&root.join(path)), "missing {path}");
    }
    assert!(!files.keys().any(|p| p.to_string_lossy().contains("Cloud")));

    assert_eq!(calls.first().map(String::as_str), Some("new sln DataHub.sln"));
    assert!(calls.contains(&"add src/Core package FluentValidation".to_string()));
    assert_eq!(calls.last().map(String::as_str), Some("git init"));
}

#[test]
fn test_package_ids_are_written_verbatim() {
    let config = ScaffoldConfig::builder("DataHub")
        .module("Core")
        .package("Core", "Acme{{PROJECT_NAME}}")
        .package("Core", "Acme{{TOKEN}}")
        .init_repository(false)
        .build()
        .unwrap();

    let (files, calls) = generate(&config);

    let doc = &files[&PathBuf::from("DataHub/docs/architecture.md")];
    assert!(doc.contains("`Acme{{PROJECT_NAME}}` in `src/Core`"));
    assert!(doc.contains("`Acme{{TOKEN}}` in `src/Core`"));
    assert!(!doc.contains("AcmeDataHub"));
    assert!(calls.contains(&"add src/Core package Acme{{PROJECT_NAME}}".to_string()));
}
