use std::collections::HashSet;

use crate::domain::{
    entities::{RenderContext, ScaffoldPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Checks that span several entities live here rather than on any one of them.
pub struct DomainValidator;

impl DomainValidator {
    /// A plan must have unique project directories and unique artifact paths.
    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        let mut dirs = HashSet::new();
        for project in &plan.projects {
            let key = project.dir.to_unix_string();
            if !dirs.insert(key.clone()) {
                return Err(DomainError::DuplicatePath { path: key });
            }
        }
        plan.artifacts.validate()
    }

    /// Every `{{PLACEHOLDER}}` in `source` must have a value in `context`.
    ///
    /// Only the template text is checked; values substituted into it are
    /// opaque.
    pub fn validate_template(
        template: &str,
        source: &str,
        context: &RenderContext,
    ) -> Result<(), DomainError> {
        match context.unresolved_placeholder(source) {
            Some(placeholder) => Err(DomainError::UnresolvedPlaceholder {
                template: template.to_string(),
                placeholder: placeholder.to_string(),
            }),
            None => Ok(()),
        }
    }
}
