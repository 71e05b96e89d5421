//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "solgen",
    bin_name = "solgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Deterministic .NET solution skeleton generator",
    long_about = "solgen checks that the required tools are installed, creates a \
                  solution with one library and one test project per module plus \
                  a web host, adds packages, and writes a compose file, stub \
                  sources, a CI pipeline and documentation.\n\n\
                  Running without a subcommand is the same as `solgen generate`.",
    after_help = "EXAMPLES:\n\
        \x20 solgen\n\
        \x20 solgen plan --format list\n\
        \x20 solgen init && solgen generate --manifest solgen.toml --output ./DataHub\n\
        \x20 solgen completions bash > ~/.local/share/bash-completion/completions/solgen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the solution skeleton.
    #[command(
        visible_alias = "g",
        about = "Generate the solution skeleton",
        after_help = "EXAMPLES:\n\
            \x20 solgen generate\n\
            \x20 solgen generate --manifest solgen.toml\n\
            \x20 solgen generate --output /tmp/DataHub"
    )]
    Generate(GenerateArgs),

    /// Print the plan without touching the filesystem.
    #[command(
        about = "Show what would be generated",
        after_help = "EXAMPLES:\n\
            \x20 solgen plan\n\
            \x20 solgen plan --format list\n\
            \x20 solgen plan --format json > plan.json"
    )]
    Plan(PlanArgs),

    /// Write the default manifest for editing.
    #[command(
        about = "Write an editable manifest",
        after_help = "EXAMPLES:\n\
            \x20 solgen init\n\
            \x20 solgen init --path manifests/datahub.toml\n\
            \x20 solgen init --force"
    )]
    Init(InitArgs),

    /// Inspect the application settings.
    #[command(
        about = "Settings inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 solgen config show\n\
            \x20 solgen config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 solgen completions bash > ~/.local/share/bash-completion/completions/solgen\n\
            \x20 solgen completions zsh  > ~/.zfunc/_solgen\n\
            \x20 solgen completions fish > ~/.config/fish/completions/solgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where the configuration comes from and where output goes.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Scaffold manifest; the embedded default when omitted.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Scaffold manifest (TOML)"
    )]
    pub manifest: Option<PathBuf>,

    /// Output root; `./<project_name>` when omitted.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: ./<project_name>)"
    )]
    pub output: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

// ── plan ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable sections.
    Table,
    /// One operation per line.
    List,
    /// The full plan, including file contents.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Destination of the manifest.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "FILE",
        default_value = solgen_adapters::DEFAULT_MANIFEST_FILE,
        help = "Where to write the manifest"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing manifest")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings as TOML.
    Show,
    /// Print the path of the default settings file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["solgen"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_generate_with_source() {
        let cli = Cli::parse_from([
            "solgen",
            "generate",
            "--manifest",
            "m.toml",
            "--output",
            "out",
        ]);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.source.manifest, Some(PathBuf::from("m.toml")));
        assert_eq!(args.source.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn plan_defaults_to_table() {
        let cli = Cli::parse_from(["solgen", "plan"]);
        let Some(Commands::Plan(args)) = cli.command else {
            panic!("expected Plan command");
        };
        assert_eq!(args.format, PlanFormat::Table);
    }

    #[test]
    fn init_defaults_to_solgen_toml() {
        let cli = Cli::parse_from(["solgen", "init"]);
        let Some(Commands::Init(args)) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.path, PathBuf::from("solgen.toml"));
        assert!(!args.force);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["solgen", "plan", "-vv", "--config", "s.toml"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.config, Some(PathBuf::from("s.toml")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["solgen", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }
}
