//! Simple variable substitution renderer.

use solgen_core::{
    application::ports::TemplateRenderer,
    domain::{DomainValidator as validator, RenderContext},
    error::SolgenResult,
};
use tracing::instrument;

/// Renderer using plain `{{VARIABLE}}` substitution.
///
/// Strict: a template naming an `{{UPPER_SNAKE}}` placeholder the context
/// does not define is rejected instead of written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, template, context))]
    fn render(&self, name: &str, template: &str, context: &RenderContext) -> SolgenResult<String> {
        validator::validate_template(name, template, context)?;
        Ok(context.render(template))
    }
}

#[cfg(test)]
mod tests {
    use solgen_core::{
        domain::{DomainError, ProjectName},
        error::SolgenError,
    };

    use super::*;

    fn context() -> RenderContext {
        RenderContext::new(&ProjectName::new("DataHub").unwrap()).with_variable("MODULE", "Core")
    }

    #[test]
    fn substitutes_known_variables() {
        let out = SimpleRenderer::new()
            .render("t", "{{PROJECT_NAME}}.{{MODULE}} ({{PROJECT_NAME_KEBAB}})", &context())
            .unwrap();
        assert_eq!(out, "DataHub.Core (data-hub)");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = SimpleRenderer::new()
            .render("README.md.tmpl", "# {{TITLE}}", &context())
            .unwrap_err();
        assert!(matches!(
            err,
            SolgenError::Domain(DomainError::UnresolvedPlaceholder { ref placeholder, .. })
                if placeholder == "{{TITLE}}"
        ));
    }

    #[test]
    fn placeholder_text_inside_values_is_kept() {
        let context = context().with_variable("PACKAGE_LIST", "Acme{{TOKEN}}");
        let out = SimpleRenderer::new()
            .render("architecture.md.tmpl", "{{PACKAGE_LIST}} in {{MODULE}}", &context)
            .unwrap();
        assert_eq!(out, "Acme{{TOKEN}} in Core");
    }

    #[test]
    fn workflow_expressions_pass_through() {
        let text = "tag: ${{ github.sha }}";
        assert_eq!(SimpleRenderer::new().render("ci", text, &context()).unwrap(), text);
    }
}
