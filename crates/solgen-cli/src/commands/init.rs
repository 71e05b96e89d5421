//! `solgen init`: write the default manifest for editing.

use std::fs;

use tracing::{info, instrument};

use solgen_adapters::EMBEDDED_MANIFEST;

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    let path = args.path;
    if path.exists() && !args.force {
        return Err(CliError::ManifestExists { path });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, EMBEDDED_MANIFEST)
        .with_cli_context(|| format!("Failed to write manifest to '{}'", path.display()))?;
    info!("Manifest written");

    output.success(&format!("Manifest created at {}", path.display()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  Edit {} to describe your solution", path.display()))?;
    output.print(&format!("  solgen plan --manifest {}", path.display()))?;
    output.print(&format!("  solgen generate --manifest {}", path.display()))?;
    Ok(())
}
