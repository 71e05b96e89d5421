//! Command handlers and the adapter wiring they share.
//!
//! Handlers translate parsed arguments into calls on the core services and
//! render the results. No generation logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod plan;

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::debug;

use solgen_adapters::{
    ComposeInspector, DirectoryTemplates, DotnetCli, EmbeddedTemplates, GitCli,
    LayeredTemplateStore, LocalFilesystem, ManifestLoader, PathToolLocator, SimpleRenderer,
};
use solgen_core::{
    application::{
        EnvironmentValidator, ScaffoldPlanner, ScaffoldService,
        ports::{TemplateStore, ToolLocator},
    },
    domain::ScaffoldConfig,
};

use crate::{
    cli::SourceArgs,
    config::AppConfig,
    error::CliResult,
};

/// Load the scaffold configuration: `--manifest`, else the `manifest`
/// setting, else the embedded default.
pub(crate) fn load_scaffold_config(
    source: &SourceArgs,
    config: &AppConfig,
) -> CliResult<ScaffoldConfig> {
    let loader = ManifestLoader::new();
    let scaffold = match source.manifest.as_ref().or(config.manifest.as_ref()) {
        Some(path) => loader.load(path)?,
        None => {
            debug!("Using embedded manifest");
            loader.embedded()?
        }
    };
    Ok(scaffold)
}

/// `--output`, else `./<project_name>`.
pub(crate) fn resolve_root(source: &SourceArgs, scaffold: &ScaffoldConfig) -> PathBuf {
    source
        .output
        .clone()
        .unwrap_or_else(|| Path::new(".").join(scaffold.project_name().as_str()))
}

/// Embedded templates, overlaid by `templates_dir` when set.
fn template_store(config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    let embedded: Box<dyn TemplateStore> = Box::new(EmbeddedTemplates::new());
    let Some(dir) = config.templates_dir.as_ref() else {
        return Ok(embedded);
    };

    let overrides = DirectoryTemplates::load(dir)?;
    debug!(
        dir = %overrides.root().display(),
        count = overrides.len(),
        keys = ?overrides.keys().collect::<Vec<_>>(),
        "Template overrides loaded"
    );
    Ok(Box::new(LayeredTemplateStore::new(
        Box::new(overrides),
        embedded,
    )))
}

pub(crate) fn planner(config: &AppConfig) -> CliResult<ScaffoldPlanner> {
    Ok(ScaffoldPlanner::new(
        template_store(config)?,
        Box::new(SimpleRenderer::new()),
        Box::new(ComposeInspector::new()),
    ))
}

/// Wire the real adapters. Processes are started from the same paths the
/// environment check resolves, so the validated binary is the one that runs.
pub(crate) fn scaffold_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let locator = PathToolLocator::from_env();
    let dotnet = DotnetCli::with_program(resolved_program(&locator, "dotnet"));
    let git = GitCli::with_program(resolved_program(&locator, "git"));
    Ok(ScaffoldService::new(
        EnvironmentValidator::new(Box::new(locator)),
        planner(config)?,
        Box::new(LocalFilesystem::new()),
        Box::new(dotnet.clone()),
        Box::new(dotnet),
        Box::new(git),
    ))
}

fn resolved_program(locator: &dyn ToolLocator, tool: &str) -> Option<OsString> {
    let path = locator.locate(tool)?;
    debug!(tool, path = %path.display(), "Resolved program");
    Some(path.into_os_string())
}
