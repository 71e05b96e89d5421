//! Environment validation: every required tool must be on `PATH` before the
//! generator touches anything.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::ToolLocator},
    domain::ToolName,
    error::SolgenResult,
};

/// A required tool and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTool {
    pub name: ToolName,
    pub path: PathBuf,
}

pub struct EnvironmentValidator {
    locator: Box<dyn ToolLocator>,
}

impl EnvironmentValidator {
    pub fn new(locator: Box<dyn ToolLocator>) -> Self {
        Self { locator }
    }

    /// Resolve every tool in order, stopping at the first missing one.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::MissingDependency`] naming the first tool that
    /// cannot be found. Tools after it are not checked.
    #[instrument(skip_all, fields(tools = tools.len()))]
    pub fn validate(&self, tools: &[ToolName]) -> SolgenResult<Vec<ResolvedTool>> {
        let mut resolved = Vec::with_capacity(tools.len());
        for tool in tools {
            let path = self.locator.locate(tool.as_str()).ok_or_else(|| {
                ApplicationError::MissingDependency {
                    tool: tool.to_string(),
                }
            })?;
            debug!(tool = %tool, path = %path.display(), "Tool resolved");
            resolved.push(ResolvedTool {
                name: tool.clone(),
                path,
            });
        }
        Ok(resolved)
    }
}
