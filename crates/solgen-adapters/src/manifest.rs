//! Scaffold manifest loading.
//!
//! A manifest is the TOML form of a [`ScaffoldConfig`]. The default manifest
//! ships inside the binary; `solgen init` writes it out for editing.
//!
//! # Format
//!
//! ```toml
//! project_name = "DataHub"
//! host_module = "Api"                 # optional, default "Api"
//! target_framework = "net8.0"         # optional
//! init_repository = true              # optional, default true
//! required_tools = ["dotnet", "git"]  # optional, default none
//! modules = ["Core", "Workflows"]
//! infrastructure = ["rabbitmq"]
//!
//! [packages]
//! Core = ["FluentValidation"]
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use solgen_core::domain::{DomainError, ScaffoldConfig};
use thiserror::Error;
use tracing::{debug, instrument};

/// The manifest compiled into the binary.
pub const EMBEDDED_MANIFEST: &str = include_str!("../manifests/default.toml");

/// Default file name for `solgen init`.
pub const DEFAULT_MANIFEST_FILE: &str = "solgen.toml";

/// Errors loading or writing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest{}: {source}", origin_suffix(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid manifest: {0}")]
    Invalid(#[from] DomainError),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ManifestError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Read { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Run `solgen init` to write a starter manifest".into(),
            ],
            Self::Parse { .. } => vec![
                "Check the TOML syntax and field names".into(),
                "Run `solgen init --path example.toml` to see every field".into(),
            ],
            Self::Invalid(e) => e.suggestions(),
            Self::Serialize(_) => vec!["This appears to be a bug in solgen".into()],
        }
    }
}

fn origin_suffix(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

/// Serialized shape of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_framework: Option<String>,
    #[serde(default = "default_true")]
    pub init_repository: bool,
    #[serde(default)]
    pub required_tools: Vec<String>,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub infrastructure: Vec<String>,
    #[serde(default)]
    pub packages: BTreeMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Manifest {
    /// Validate into a [`ScaffoldConfig`].
    ///
    /// Package keys are applied in module order, so the resulting plan does
    /// not depend on TOML table ordering. Keys naming no declared module are
    /// rejected.
    pub fn into_config(self) -> Result<ScaffoldConfig, DomainError> {
        let mut builder = ScaffoldConfig::builder(self.project_name)
            .modules(self.modules.iter().cloned())
            .services(self.infrastructure)
            .required_tools(self.required_tools)
            .init_repository(self.init_repository);
        if let Some(host) = self.host_module {
            builder = builder.host_module(host);
        }
        if let Some(framework) = self.target_framework {
            builder = builder.target_framework(framework);
        }

        let mut packages = self.packages;
        for module in &self.modules {
            for package in packages.remove(module).unwrap_or_default() {
                builder = builder.package(module.clone(), package);
            }
        }
        // Whatever is left names an undeclared module.
        if let Some((module, _)) = packages.into_iter().next() {
            return Err(DomainError::UnknownModule { module });
        }

        builder.build()
    }

    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self {
            project_name: config.project_name().to_string(),
            host_module: Some(config.host_module().to_string()),
            target_framework: config.target_framework().map(str::to_string),
            init_repository: config.init_repository(),
            required_tools: config
                .required_tools()
                .iter()
                .map(ToString::to_string)
                .collect(),
            modules: config.modules().iter().map(ToString::to_string).collect(),
            infrastructure: config
                .infrastructure()
                .iter()
                .map(ToString::to_string)
                .collect(),
            packages: config
                .modules()
                .iter()
                .filter_map(|m| {
                    let ids = config.packages().packages_for(m);
                    (!ids.is_empty()).then(|| {
                        (m.to_string(), ids.iter().map(ToString::to_string).collect())
                    })
                })
                .collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String, ManifestError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Loads manifests from text, files or the embedded default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// The embedded default configuration.
    pub fn embedded(&self) -> Result<ScaffoldConfig, ManifestError> {
        self.parse(EMBEDDED_MANIFEST, None)
    }

    #[instrument(skip(self))]
    pub fn load(&self, path: &Path) -> Result<ScaffoldConfig, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = self.parse(&raw, Some(path))?;
        debug!(
            project = %config.project_name(),
            modules = config.modules().len(),
            "Manifest loaded"
        );
        Ok(config)
    }

    /// `path`, when given, is only used in error messages.
    pub fn parse(&self, raw: &str, path: Option<&Path>) -> Result<ScaffoldConfig, ManifestError> {
        let manifest: Manifest = toml::from_str(raw).map_err(|source| ManifestError::Parse {
            path: path.map(Path::to_path_buf),
            source,
        })?;
        Ok(manifest.into_config()?)
    }
}
