//! `PATH` lookup for required external tools.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use solgen_core::application::ports::ToolLocator;
use tracing::trace;

/// Resolves commands against a search path, the way a shell would.
#[derive(Debug, Clone)]
pub struct PathToolLocator {
    search_path: Option<OsString>,
}

impl PathToolLocator {
    /// Search the process `PATH`, read at lookup time.
    pub fn from_env() -> Self {
        Self { search_path: None }
    }

    /// Search an explicit `PATH`-style list instead of the environment.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn search_path(&self) -> Option<OsString> {
        self.search_path.clone().or_else(|| env::var_os("PATH"))
    }
}

impl Default for PathToolLocator {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ToolLocator for PathToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        let search_path = self.search_path()?;
        env::split_paths(&search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidates(&dir, tool))
            .inspect(|candidate| trace!(candidate = %candidate.display(), "probe"))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let exts = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(dir.join(tool))
        .chain(
            exts.split(';')
                .filter(|e| !e.is_empty())
                .map(|ext| dir.join(format!("{tool}{ext}"))),
        )
        .collect()
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn finds_executables_in_search_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        touch(second.path(), "dotnet", 0o755);
        let winner = touch(first.path(), "dotnet", 0o755);

        let path = env::join_paths([first.path(), second.path()]).unwrap();
        let locator = PathToolLocator::with_search_path(path);
        assert_eq!(locator.locate("dotnet"), Some(winner));
    }

    #[test]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "helm", 0o644);

        let locator = PathToolLocator::with_search_path(dir.path().as_os_str());
        assert_eq!(locator.locate("helm"), None);
    }

    #[test]
    fn missing_tool_is_none() {
        let dir = TempDir::new().unwrap();
        let locator = PathToolLocator::with_search_path(dir.path().as_os_str());
        assert_eq!(locator.locate("docker"), None);
    }
}
