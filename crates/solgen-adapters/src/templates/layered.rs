use solgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKey,
    error::{SolgenError, SolgenResult},
};
use tracing::trace;

/// Looks a template up in `primary` first, falling back to `fallback` when
/// the primary store does not have it.
pub struct LayeredTemplateStore {
    primary: Box<dyn TemplateStore>,
    fallback: Box<dyn TemplateStore>,
}

impl LayeredTemplateStore {
    pub fn new(primary: Box<dyn TemplateStore>, fallback: Box<dyn TemplateStore>) -> Self {
        Self { primary, fallback }
    }
}

impl TemplateStore for LayeredTemplateStore {
    fn get(&self, key: TemplateKey) -> SolgenResult<String> {
        match self.primary.get(key) {
            Err(SolgenError::Application(ApplicationError::TemplateNotFound { .. })) => {
                trace!(template = %key, "Using fallback template");
                self.fallback.get(key)
            }
            other => other,
        }
    }
}
