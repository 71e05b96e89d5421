//! Scaffold planner: turns a configuration into a complete [`ScaffoldPlan`].
//!
//! Planning reads templates but writes nothing and runs no commands, so it is
//! safe to call for previews.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{DescriptorInspector, TemplateRenderer, TemplateStore},
    domain::{
        DescriptorDrift, DomainValidator as validator, GeneratedArtifact, ProjectRole,
        RelativePath, RenderContext, STUB_REGISTRY, ScaffoldConfig, ScaffoldPlan, StubSpec,
        TemplateKey,
    },
    error::SolgenResult,
};

/// SDK channel used by the pipeline when no target framework is configured.
const DEFAULT_SDK_CHANNEL: &str = "8.0.x";

pub struct ScaffoldPlanner {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    inspector: Box<dyn DescriptorInspector>,
}

impl ScaffoldPlanner {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        inspector: Box<dyn DescriptorInspector>,
    ) -> Self {
        Self {
            store,
            renderer,
            inspector,
        }
    }

    /// Build the full plan for `config` rooted at `root`.
    ///
    /// Artifacts are added in group order: compose descriptor, stubs,
    /// pipeline, documentation.
    #[instrument(
        skip_all,
        fields(project = %config.project_name(), root = %root.as_ref().display())
    )]
    pub fn plan(&self, config: &ScaffoldConfig, root: impl AsRef<Path>) -> SolgenResult<ScaffoldPlan> {
        let mut plan = ScaffoldPlan::structure(config, root.as_ref())?;
        let context = self.base_context(config, &plan);

        // Infrastructure descriptor: fixed content, inspected for drift only.
        let descriptor = self.render_fixed(TemplateKey::ComposeDescriptor, &context)?;
        let declared = self.inspector.service_names(&descriptor.content)?;
        let configured: Vec<String> = config
            .infrastructure()
            .iter()
            .map(ToString::to_string)
            .collect();
        plan.drift = DescriptorDrift::between(&configured, &declared);
        debug!(declared = declared.len(), configured = configured.len(), "Descriptor inspected");
        plan.artifacts.push(descriptor)?;

        let stub_template = self.store.get(TemplateKey::StubSource)?;
        for stub in STUB_REGISTRY {
            if !config.has_module(stub.module) {
                warn!(
                    stub = stub.type_name,
                    module = stub.module,
                    "Skipping stub for unconfigured module"
                );
                continue;
            }
            plan.artifacts.push(self.render_stub(stub, &stub_template, &context)?)?;
        }

        plan.artifacts
            .push(self.render_fixed(TemplateKey::CiPipeline, &context)?)?;
        for key in [
            TemplateKey::Readme,
            TemplateKey::ArchitectureDoc,
            TemplateKey::GitIgnore,
        ] {
            plan.artifacts.push(self.render_fixed(key, &context)?)?;
        }

        validator::validate_plan(&plan)?;
        info!(
            projects = plan.projects.len(),
            packages = plan.packages.len(),
            artifacts = plan.artifacts.len(),
            "Plan ready"
        );
        Ok(plan)
    }

    fn render_fixed(
        &self,
        key: TemplateKey,
        context: &RenderContext,
    ) -> SolgenResult<GeneratedArtifact> {
        let template = self.store.get(key)?;
        let content = self.renderer.render(key.file_name(), &template, context)?;
        // Every key except the stub template has a fixed output path.
        let path = RelativePath::try_new(key.output_path().unwrap_or(key.file_name()))?;
        Ok(GeneratedArtifact::new(path, key.group(), content))
    }

    fn render_stub(
        &self,
        stub: &StubSpec,
        template: &str,
        context: &RenderContext,
    ) -> SolgenResult<GeneratedArtifact> {
        let context = context
            .clone()
            .with_variable("MODULE", stub.module)
            .with_variable("FOLDER", stub.folder)
            .with_variable("TYPE_NAME", stub.type_name)
            .with_variable("SUMMARY", stub.summary)
            .with_variable("SIGNATURE", stub.signature)
            .with_variable("RETURN_STATEMENT", stub.return_statement);
        let name = TemplateKey::StubSource.file_name();
        let content = self.renderer.render(name, template, &context)?;
        Ok(GeneratedArtifact::new(
            RelativePath::try_new(stub.relative_path())?,
            TemplateKey::StubSource.group(),
            content,
        ))
    }

    fn base_context(&self, config: &ScaffoldConfig, plan: &ScaffoldPlan) -> RenderContext {
        let host = plan
            .projects_with_role(ProjectRole::Host)
            .next()
            .map(|p| p.dir.to_string())
            .unwrap_or_default();

        RenderContext::new(config.project_name())
            .with_variable("ROOT_NAMESPACE", root_namespace(config.project_name().as_str()))
            .with_variable("HOST_MODULE", config.host_module().as_str())
            .with_variable("HOST_DIR", host)
            .with_variable("SOLUTION_FILE", plan.solution.file_name.as_str())
            .with_variable("SDK_CHANNEL", sdk_channel(config.target_framework()))
            .with_variable("MODULE_LIST", module_list(config))
            .with_variable("PROJECT_TABLE", project_table(plan))
            .with_variable("PACKAGE_LIST", package_list(plan))
            .with_variable("SERVICE_LIST", service_list(config))
    }
}

/// Project names may contain `-`, which is not valid in a namespace.
fn root_namespace(project: &str) -> String {
    project.replace('-', "_")
}

/// `net8.0` → `8.0.x`; anything unrecognised falls back to the default channel.
fn sdk_channel(framework: Option<&str>) -> String {
    framework
        .and_then(|f| f.strip_prefix("net"))
        .filter(|v| v.split('.').all(|part| part.parse::<u32>().is_ok()))
        .map(|v| format!("{v}.x"))
        .unwrap_or_else(|| DEFAULT_SDK_CHANNEL.to_string())
}

fn bullet_list(items: impl IntoIterator<Item = String>) -> String {
    let lines: Vec<String> = items.into_iter().map(|item| format!("- {item}")).collect();
    if lines.is_empty() {
        "- _none_".to_string()
    } else {
        lines.join("\n")
    }
}

fn module_list(config: &ScaffoldConfig) -> String {
    bullet_list(config.modules().iter().map(|m| {
        format!("`{m}`: library in `src/{m}`, tests in `tests/{m}.Tests`")
    }))
}

fn service_list(config: &ScaffoldConfig) -> String {
    bullet_list(config.infrastructure().iter().map(|s| format!("`{s}`")))
}

fn package_list(plan: &ScaffoldPlan) -> String {
    bullet_list(
        plan.packages
            .iter()
            .map(|step| format!("`{}` in `{}`", step.package, step.project_dir)),
    )
}

fn project_table(plan: &ScaffoldPlan) -> String {
    let mut rows = vec![
        "| Project | Role | Template | Directory |".to_string(),
        "|---------|------|----------|-----------|".to_string(),
    ];
    rows.extend(plan.projects.iter().map(|p| {
        format!(
            "| `{}` | {} | `{}` | `{}` |",
            p.name, p.role, p.template, p.dir
        )
    }));
    rows.join("\n")
}
