//! Compose descriptor inspection.

use serde_yaml::Value;
use solgen_core::{
    application::{ApplicationError, ports::DescriptorInspector},
    error::{SolgenError, SolgenResult},
};

/// Reads service names from a compose document with `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposeInspector;

impl ComposeInspector {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorInspector for ComposeInspector {
    fn service_names(&self, descriptor: &str) -> SolgenResult<Vec<String>> {
        let document: Value =
            serde_yaml::from_str(descriptor).map_err(|e| ApplicationError::DescriptorUnreadable {
                reason: e.to_string(),
            })?;

        let services = match document.get("services") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Mapping(services)) => services,
            Some(_) => {
                return Err(ApplicationError::DescriptorUnreadable {
                    reason: "`services` is not a mapping".into(),
                }
                .into());
            }
        };

        services
            .keys()
            .map(|key| {
                key.as_str().map(str::to_string).ok_or_else(|| {
                    SolgenError::from(ApplicationError::DescriptorUnreadable {
                        reason: format!("service key {key:?} is not a string"),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use solgen_core::domain::{ProjectName, RenderContext, TemplateKey};

    use super::*;
    use crate::templates::EmbeddedTemplates;

    #[test]
    fn reads_services_in_declaration_order() {
        let names = ComposeInspector::new()
            .service_names("services:\n  web:\n    image: nginx\n  db:\n    image: postgres\n")
            .unwrap();
        assert_eq!(names, ["web", "db"]);
    }

    #[test]
    fn embedded_descriptor_declares_the_default_services() {
        let rendered = RenderContext::new(&ProjectName::new("DataHub").unwrap())
            .render(EmbeddedTemplates::source(TemplateKey::ComposeDescriptor));
        let names = ComposeInspector::new().service_names(&rendered).unwrap();
        assert_eq!(
            names,
            ["rabbitmq", "postgres", "redis", "jaeger", "prometheus", "grafana"]
        );
    }

    #[test]
    fn missing_services_section_is_empty() {
        assert!(ComposeInspector::new().service_names("version: '3'\n").unwrap().is_empty());
    }

    #[test]
    fn invalid_yaml_is_unreadable() {
        assert!(ComposeInspector::new().service_names("services: [a, b").is_err());
        assert!(ComposeInspector::new().service_names("services: [a, b]").is_err());
    }
}
