use std::{ffi::OsString, path::Path};

use solgen_core::{application::ports::RepositoryInitializer, error::SolgenResult};
use tracing::instrument;

use super::{program_or, run};

/// `git init` in the output root.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program(None)
    }

    pub fn with_program(program: Option<OsString>) -> Self {
        Self {
            program: program_or(program, "git"),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryInitializer for GitCli {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn init(&self, root: &Path) -> SolgenResult<()> {
        run(&self.program, &["init".to_string(), "--quiet".to_string()], root)
    }
}
