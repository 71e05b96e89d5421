//! `solgen plan`: print what `generate` would do.
//!
//! Planning renders every file in memory. No tools are checked, no commands
//! run and nothing is written.

use tracing::instrument;

use solgen_core::{
    domain::{ArtifactGroup, ScaffoldPlan},
    error::Context as _,
};

use crate::{
    cli::{PlanArgs, PlanFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(format = ?args.format))]
pub fn execute(args: PlanArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let scaffold = super::load_scaffold_config(&args.source, config)?;
    let root = super::resolve_root(&args.source, &scaffold);
    let plan = super::planner(config)?.plan(&scaffold, &root)?;

    match args.format {
        PlanFormat::Table => print_table(&plan, output),
        PlanFormat::List => {
            for line in plan_lines(&plan) {
                output.data(&line)?;
            }
            Ok(())
        }
        PlanFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).context("serialising plan")?;
            output.data(&json)?;
            Ok(())
        }
    }
}

/// One line per operation, in execution order.
fn plan_lines(plan: &ScaffoldPlan) -> Vec<String> {
    let mut lines = Vec::new();
    lines.extend(plan.required_tools.iter().map(|t| format!("require {t}")));
    lines.push(format!("solution {}", plan.solution.file_name));
    lines.extend(
        plan.projects
            .iter()
            .map(|p| format!("project {} {}", p.template, p.dir)),
    );
    lines.extend(
        plan.packages
            .iter()
            .map(|s| format!("package {} {}", s.project_dir, s.package)),
    );
    for group in ArtifactGroup::ALL {
        lines.extend(plan.artifacts.in_group(group).map(|a| format!("file {}", a.path)));
    }
    if plan.init_repository {
        lines.push("init repository".to_string());
    }
    lines
}

fn print_table(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    output.header(&format!(
        "Plan for {} at {}",
        plan.solution.file_name,
        plan.root.display()
    ))?;

    output.print("")?;
    output.print("Required tools:")?;
    let tools: Vec<String> = plan.required_tools.iter().map(ToString::to_string).collect();
    output.print(&format!("  {}", display_list(&tools)))?;

    output.print("")?;
    output.print("Projects:")?;
    let rows: Vec<Vec<String>> = plan
        .projects
        .iter()
        .map(|p| {
            vec![
                p.dir.to_string(),
                p.template.to_string(),
                p.name.clone(),
                p.reference
                    .as_ref()
                    .map(|r| format!("-> {r}"))
                    .unwrap_or_default(),
            ]
        })
        .collect();
    output.table(&rows)?;

    output.print("")?;
    output.print("Packages:")?;
    if plan.packages.is_empty() {
        output.print("  (none)")?;
    } else {
        let rows: Vec<Vec<String>> = plan
            .packages
            .iter()
            .map(|s| vec![s.project_dir.to_string(), s.package.to_string()])
            .collect();
        output.table(&rows)?;
    }

    output.print("")?;
    output.print("Files:")?;
    let rows: Vec<Vec<String>> = ArtifactGroup::ALL
        .into_iter()
        .flat_map(|g| plan.artifacts.in_group(g))
        .map(|a| {
            vec![
                a.path.to_string(),
                a.group.to_string(),
                format!("{} bytes", a.size()),
            ]
        })
        .collect();
    output.table(&rows)?;

    if !plan.drift.is_empty() {
        output.print("")?;
        for name in &plan.drift.missing_from_descriptor {
            output.warning(&format!("'{name}' has no service in docker-compose.yml"))?;
        }
        for name in &plan.drift.not_configured {
            output.warning(&format!(
                "docker-compose.yml service '{name}' is not in the infrastructure list"
            ))?;
        }
    }

    output.print("")?;
    output.info(&format!(
        "Repository initialisation: {}",
        if plan.init_repository { "yes" } else { "no" }
    ))?;
    Ok(())
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
