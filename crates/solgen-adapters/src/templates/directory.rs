use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use solgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKey,
    error::{SolgenError, SolgenResult},
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Templates read from a directory of `*.tmpl` files.
///
/// Only files whose name matches a known template are loaded; anything else
/// is skipped with a warning. Nested directories are searched too, and the
/// first file found (in sorted walk order) wins.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTemplates {
    root: PathBuf,
    templates: BTreeMap<TemplateKey, String>,
}

impl DirectoryTemplates {
    /// Load every recognised template under `root`.
    ///
    /// # Errors
    ///
    /// [`SolgenError::Configuration`] if `root` is not a directory;
    /// [`ApplicationError::FilesystemError`] if a template cannot be read.
    #[instrument(fields(dir = %root.as_ref().display()), skip_all)]
    pub fn load(root: impl AsRef<Path>) -> SolgenResult<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SolgenError::Configuration {
                message: format!("templates directory {} not found", root.display()),
            });
        }

        let mut templates = BTreeMap::new();
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let Some(key) = TemplateKey::from_file_name(&name) else {
                warn!(file = %entry.path().display(), "Skipping unrecognised template file");
                continue;
            };
            if templates.contains_key(&key) {
                warn!(file = %entry.path().display(), "Duplicate template override ignored");
                continue;
            }

            let content =
                fs::read_to_string(entry.path()).map_err(|e| ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: format!("Failed to read template: {e}"),
                })?;
            debug!(template = %key, file = %entry.path().display(), "Override loaded");
            templates.insert(key, content);
        }

        Ok(Self {
            root: root.to_path_buf(),
            templates,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys this directory overrides, in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = TemplateKey> + '_ {
        self.templates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for DirectoryTemplates {
    fn get(&self, key: TemplateKey) -> SolgenResult<String> {
        self.templates.get(&key).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: key.file_name().to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn loads_known_files_and_skips_others() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md.tmpl"), "# custom").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(temp.path().join("ci")).unwrap();
        fs::write(temp.path().join("ci/ci.yml.tmpl"), "name: custom").unwrap();

        let store = DirectoryTemplates::load(temp.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(TemplateKey::Readme).unwrap(), "# custom");
        assert_eq!(store.get(TemplateKey::CiPipeline).unwrap(), "name: custom");
        assert_eq!(
            store.keys().collect::<Vec<_>>(),
            [TemplateKey::CiPipeline, TemplateKey::Readme]
        );
    }

    #[test]
    fn missing_key_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryTemplates::load(temp.path()).unwrap();
        assert!(store.is_empty());
        assert!(store.get(TemplateKey::GitIgnore).is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = DirectoryTemplates::load(temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SolgenError::Configuration { .. }));
    }
}
