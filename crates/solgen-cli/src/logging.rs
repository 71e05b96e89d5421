//! Tracing subscriber setup for the `solgen` binary.
//!
//! The library crates emit spans and events; only `main` installs a
//! subscriber. Diagnostics go to stderr so `plan --format json` output on
//! stdout stays machine readable.
//!
//! | Flag(s)   | solgen crates | everything else |
//! |-----------|---------------|-----------------|
//! | (none)    | WARN          | WARN            |
//! | `-v`      | INFO          | WARN            |
//! | `-vv`     | DEBUG         | WARN            |
//! | `-vvv`    | TRACE         | WARN            |
//! | `--quiet` | ERROR         | ERROR           |
//!
//! `RUST_LOG` replaces the whole filter when set. From `-vv` up, event
//! targets are printed so each line can be traced to its adapter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CRATES: [&str; 3] = ["solgen", "solgen_core", "solgen_adapters"];

/// Resolved subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    show_targets: bool,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        Self {
            level: level_for(args),
            show_targets: !args.quiet && args.verbose >= 2,
            ansi: !args.no_color && stderr_is_tty,
        }
    }

    /// Filter directives used when `RUST_LOG` is absent.
    fn directives(&self) -> String {
        let base = self.level.min(LevelFilter::WARN);
        let mut parts = vec![base.to_string().to_lowercase()];
        parts.extend(
            CRATES
                .iter()
                .map(|krate| format!("{krate}={}", self.level.to_string().to_lowercase())),
        );
        parts.join(",")
    }
}

/// Install the global subscriber. Call once, before any events.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(settings.show_targets)
        .without_time()
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
