//! Variable context for template rendering.

use std::collections::BTreeMap;

use crate::domain::value_objects::ProjectName;

/// Context for template rendering.
///
/// Immutable after creation; `with_variable` returns a new instance.
///
/// ## Built-in Variables
///
/// | Variable | Example (`Acme.DataHub`) |
/// |----------|--------------------------|
/// | `PROJECT_NAME` | `Acme.DataHub` |
/// | `PROJECT_NAME_SNAKE` | `acme_data_hub` |
/// | `PROJECT_NAME_KEBAB` | `acme-data-hub` |
/// | `PROJECT_NAME_PASCAL` | `AcmeDataHub` |
///
/// Placeholders are written `{{NAME}}` with no inner whitespace, which keeps
/// expressions such as `${{ github.sha }}` in CI files untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
    // BTreeMap keeps rendering order (and thus output) deterministic.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: &ProjectName) -> Self {
        let name = project_name.as_str().to_string();
        let mut vars = BTreeMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{VARIABLE}}` placeholder in one left-to-right
    /// pass. Substituted values are copied verbatim and never rescanned.
    ///
    /// Unknown placeholders are left in place; see
    /// [`RenderContext::unresolved_placeholder`] for detecting them.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some((start, end)) = next_placeholder(rest) {
            out.push_str(&rest[..start]);
            let token = &rest[start..end];
            match self.get(placeholder_name(token)) {
                Some(value) => out.push_str(value),
                None => out.push_str(token),
            }
            rest = &rest[end..];
        }
        out.push_str(rest);
        out
    }

    /// First `{{UPPER_SNAKE}}` placeholder in `template` with no variable.
    pub fn unresolved_placeholder<'t>(&self, template: &'t str) -> Option<&'t str> {
        let mut rest = template;
        while let Some((start, end)) = next_placeholder(rest) {
            let token = &rest[start..end];
            if self.get(placeholder_name(token)).is_none() {
                return Some(token);
            }
            rest = &rest[end..];
        }
        None
    }
}

/// Byte range of the first `{{UPPER_SNAKE}}` token in `text`.
fn next_placeholder(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find("{{") {
        let start = offset + found;
        let inner = start + 2;
        if let Some(len) = text[inner..].find("}}") {
            let name = &text[inner..inner + len];
            if !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            {
                return Some((start, inner + len + 2));
            }
        }
        offset = inner;
    }
    None
}

fn placeholder_name(token: &str) -> &str {
    &token[2..token.len() - 2]
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split on `_`, `-`, `.`, whitespace, camelCase transitions and acronym
/// boundaries (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, '_' | '-' | '.') || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(char::is_lowercase)
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(name: &str) -> RenderContext {
        RenderContext::new(&ProjectName::new(name).unwrap())
    }

    #[test]
    fn derives_case_variants() {
        let ctx = ctx("Acme.DataHub");
        assert_eq!(ctx.get("PROJECT_NAME"), Some("Acme.DataHub"));
        assert_eq!(ctx.get("PROJECT_NAME_SNAKE"), Some("acme_data_hub"));
        assert_eq!(ctx.get("PROJECT_NAME_KEBAB"), Some("acme-data-hub"));
        assert_eq!(ctx.get("PROJECT_NAME_PASCAL"), Some("AcmeDataHub"));
    }

    #[test]
    fn acronyms_split_cleanly() {
        assert_eq!(to_kebab_case("HTTPGateway"), "http-gateway");
        assert_eq!(to_snake_case("my-app"), "my_app");
    }

    #[test]
    fn render_leaves_ci_expressions_alone() {
        let ctx = ctx("DataHub").with_variable("MODULE", "Core");
        let out = ctx.render("{{PROJECT_NAME}}.{{MODULE}} @ ${{ github.sha }}");
        assert_eq!(out, "DataHub.Core @ ${{ github.sha }}");
    }

    #[test]
    fn unresolved_reports_unknown_names_only() {
        let ctx = ctx("DataHub");
        assert_eq!(ctx.unresolved_placeholder("ok ${{ secrets.TOKEN }}"), None);
        assert_eq!(ctx.unresolved_placeholder("{{PROJECT_NAME}}"), None);
        assert_eq!(
            ctx.unresolved_placeholder("{{PROJECT_NAME}} {{MISSING_VAR}} b"),
            Some("{{MISSING_VAR}}")
        );
        assert_eq!(
            ctx.unresolved_placeholder("{{ lower }} {{X1}}"),
            Some("{{X1}}")
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = ctx("DataHub").with_variable("PACKAGE_LIST", "Acme{{PROJECT_NAME}} {{TOKEN}}");
        assert_eq!(
            ctx.render("{{PACKAGE_LIST}} / {{PROJECT_NAME}}"),
            "Acme{{PROJECT_NAME}} {{TOKEN}} / DataHub"
        );
        assert_eq!(ctx.unresolved_placeholder("{{PACKAGE_LIST}}"), None);
    }

    #[test]
    fn unknown_tokens_are_kept_verbatim() {
        let ctx = ctx("DataHub");
        assert_eq!(ctx.render("{{A}}{{PROJECT_NAME}}{{"), "{{A}}DataHub{{");
    }
}
