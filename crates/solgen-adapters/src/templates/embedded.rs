use solgen_core::{application::ports::TemplateStore, domain::TemplateKey, error::SolgenResult};

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Raw embedded text for `key`.
    pub const fn source(key: TemplateKey) -> &'static str {
        match key {
            TemplateKey::ComposeDescriptor => {
                include_str!("../../templates/docker-compose.yml.tmpl")
            }
            TemplateKey::StubSource => include_str!("../../templates/stub.cs.tmpl"),
            TemplateKey::CiPipeline => include_str!("../../templates/ci.yml.tmpl"),
            TemplateKey::Readme => include_str!("../../templates/README.md.tmpl"),
            TemplateKey::ArchitectureDoc => include_str!("../../templates/architecture.md.tmpl"),
            TemplateKey::GitIgnore => include_str!("../../templates/gitignore.tmpl"),
        }
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn get(&self, key: TemplateKey) -> SolgenResult<String> {
        Ok(Self::source(key).to_string())
    }
}
