//! Fixed catalog of generated files: the templates solgen knows about and the
//! registry of feature stubs rendered from the stub template.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::artifact::ArtifactGroup;

/// A template known to the generator. Every key has an embedded default;
/// a template store may override any of them by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    ComposeDescriptor,
    StubSource,
    CiPipeline,
    Readme,
    ArchitectureDoc,
    GitIgnore,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        Self::ComposeDescriptor,
        Self::StubSource,
        Self::CiPipeline,
        Self::Readme,
        Self::ArchitectureDoc,
        Self::GitIgnore,
    ];

    /// File name of the template in a template store.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::ComposeDescriptor => "docker-compose.yml.tmpl",
            Self::StubSource => "stub.cs.tmpl",
            Self::CiPipeline => "ci.yml.tmpl",
            Self::Readme => "README.md.tmpl",
            Self::ArchitectureDoc => "architecture.md.tmpl",
            Self::GitIgnore => "gitignore.tmpl",
        }
    }

    /// Where the rendered file lands, relative to the output root.
    ///
    /// `None` for the stub template, which is rendered once per stub into a
    /// path derived from the stub itself.
    pub const fn output_path(&self) -> Option<&'static str> {
        match self {
            Self::ComposeDescriptor => Some("docker-compose.yml"),
            Self::StubSource => None,
            Self::CiPipeline => Some(".github/workflows/ci.yml"),
            Self::Readme => Some("README.md"),
            Self::ArchitectureDoc => Some("docs/architecture.md"),
            Self::GitIgnore => Some(".gitignore"),
        }
    }

    pub const fn group(&self) -> ArtifactGroup {
        match self {
            Self::ComposeDescriptor => ArtifactGroup::Infrastructure,
            Self::StubSource => ArtifactGroup::Stub,
            Self::CiPipeline => ArtifactGroup::Pipeline,
            Self::Readme | Self::ArchitectureDoc | Self::GitIgnore => ArtifactGroup::Documentation,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.file_name() == name)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A named placeholder source file: one type with one operation that does
/// no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StubSpec {
    /// Module the stub belongs to; the stub is skipped if it is not configured.
    pub module: &'static str,
    /// Folder under the module's library project, also a namespace segment.
    pub folder: &'static str,
    pub type_name: &'static str,
    pub summary: &'static str,
    pub signature: &'static str,
    pub return_statement: &'static str,
}

impl StubSpec {
    /// `src/<Module>/<Folder>/<Type>.cs`
    pub fn relative_path(&self) -> String {
        format!("src/{}/{}/{}.cs", self.module, self.folder, self.type_name)
    }
}

/// Feature stubs, in emission order.
pub const STUB_REGISTRY: &[StubSpec] = &[
    StubSpec {
        module: "Core",
        folder: "Validation",
        type_name: "SchemaValidator",
        summary: "Validates incoming payloads against a registered schema.",
        signature: "public bool Validate(string schemaId, string payload)",
        return_statement: "return true;",
    },
    StubSpec {
        module: "Storage",
        folder: "Versioning",
        type_name: "DataVersioner",
        summary: "Records immutable versions of stored datasets.",
        signature: "public string CreateVersion(string datasetId)",
        return_statement: "return string.Empty;",
    },
    StubSpec {
        module: "Workflows",
        folder: "Runtime",
        type_name: "WorkflowRunner",
        summary: "Starts and tracks long-running workflow instances.",
        signature: "public Task RunAsync(string workflowId)",
        return_statement: "return Task.CompletedTask;",
    },
    StubSpec {
        module: "Messaging",
        folder: "Events",
        type_name: "EventPublisher",
        summary: "Publishes domain events to the message broker.",
        signature: "public Task PublishAsync(string topic, string message)",
        return_statement: "return Task.CompletedTask;",
    },
    StubSpec {
        module: "Analytics",
        folder: "Detection",
        type_name: "AnomalyDetector",
        summary: "Flags observations that deviate from the learned baseline.",
        signature: "public bool IsAnomalous(double value)",
        return_statement: "return false;",
    },
    StubSpec {
        module: "Cloud",
        folder: "Uploads",
        type_name: "CloudUploader",
        summary: "Uploads local files to cloud object storage.",
        signature: "public Task<string> UploadAsync(string localPath)",
        return_statement: "return Task.FromResult(string.Empty);",
    },
];
