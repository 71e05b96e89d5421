//! `solgen generate`: validate tools, build the solution and write files.
//!
//! Also what runs when no subcommand is given.

use tracing::{info, instrument};

use solgen_core::{application::ScaffoldReport, domain::ScaffoldConfig};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let scaffold = super::load_scaffold_config(&args.source, config)?;
    let root = super::resolve_root(&args.source, &scaffold);
    let service = super::scaffold_service(config)?;

    output.header(&format!(
        "Generating '{}' in {}...",
        scaffold.project_name(),
        root.display()
    ))?;
    info!(project = %scaffold.project_name(), root = %root.display(), "Generation started");

    let report = service.generate(&scaffold, &root)?;

    info!(files = report.files.len(), "Generation completed");
    print_summary(&scaffold, &report, output)
}

/// Completion banner and next steps.
fn print_summary(
    scaffold: &ScaffoldConfig,
    report: &ScaffoldReport,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!(
        "Solution '{}' generated at {}",
        scaffold.project_name(),
        report.root.display()
    ))?;
    output.info(&format!(
        "{} projects, {} packages, {} files",
        report.projects,
        report.packages,
        report.files.len()
    ))?;

    for name in &report.drift.missing_from_descriptor {
        output.warning(&format!(
            "'{name}' is documented but has no service in docker-compose.yml"
        ))?;
    }
    for name in &report.drift.not_configured {
        output.warning(&format!(
            "docker-compose.yml starts '{name}', which is not in the infrastructure list"
        ))?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.root.display()))?;
    output.print("  docker compose up -d")?;
    output.print(&format!("  dotnet build {}", report.solution_file))?;
    output.print("  dotnet test")?;
    output.print(&format!(
        "  dotnet run --project src/{}",
        scaffold.host_module()
    ))?;
    if !report.repository_initialized {
        output.print("  git init")?;
    }

    Ok(())
}
