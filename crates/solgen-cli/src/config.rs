//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. It
//! configures the tool itself (where the manifest and template overrides
//! live, colour); what gets generated is described by the scaffold manifest.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::apply_flags`])
//! 2. `SOLGEN_*` environment variables (`SOLGEN_MANIFEST`,
//!    `SOLGEN_TEMPLATES_DIR`, `SOLGEN_OUTPUT__NO_COLOR`)
//! 3. Settings file (`--config`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Manifest used when `--manifest` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
    /// Directory whose `*.tmpl` files replace the embedded templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load settings from defaults, the settings file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Config::builder()
            .set_default("output.no_color", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("SOLGEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    /// Let global flags win over file and environment values.
    pub fn apply_flags(&mut self, args: &GlobalArgs) {
        if let Some(dir) = &args.templates_dir {
            self.templates_dir = Some(dir.clone());
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.solgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "solgen", "solgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".solgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.manifest.is_none());
        assert!(cfg.templates_dir.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_reads_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            "templates_dir = \"/srv/templates\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.templates_dir, Some(PathBuf::from("/srv/templates")));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&temp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn serializes_without_unset_paths() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(!text.contains("manifest"));
        assert!(text.contains("no_color = false"));
    }

    #[test]
    fn flags_override_loaded_values() {
        let mut cfg = AppConfig {
            templates_dir: Some(PathBuf::from("/from/settings")),
            ..AppConfig::default()
        };
        cfg.apply_flags(&GlobalArgs {
            templates_dir: Some(PathBuf::from("/from/flag")),
            no_color: true,
            ..GlobalArgs::default()
        });
        assert_eq!(cfg.templates_dir, Some(PathBuf::from("/from/flag")));
        assert!(cfg.output.no_color);

        cfg.apply_flags(&GlobalArgs::default());
        assert_eq!(cfg.templates_dir, Some(PathBuf::from("/from/flag")));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
