use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Which generation step an artifact belongs to. Declaration order is the
/// order in which the steps run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactGroup {
    Infrastructure,
    Stub,
    Pipeline,
    Documentation,
}

impl ArtifactGroup {
    pub const ALL: [ArtifactGroup; 4] = [
        Self::Infrastructure,
        Self::Stub,
        Self::Pipeline,
        Self::Documentation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Stub => "stub",
            Self::Pipeline => "pipeline",
            Self::Documentation => "documentation",
        }
    }
}

impl std::fmt::Display for ArtifactGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file to be written once, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub path: RelativePath,
    pub group: ArtifactGroup,
    #[serde(skip)]
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(path: RelativePath, group: ArtifactGroup, content: impl Into<String>) -> Self {
        Self {
            path,
            group,
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered collection of artifacts with unique paths.
///
/// Insertion order is preserved; it is the write order within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtifactSet {
    entries: Vec<GeneratedArtifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: GeneratedArtifact) -> Result<(), DomainError> {
        let key = artifact.path.to_unix_string();
        if self.entries.iter().any(|a| a.path.to_unix_string() == key) {
            return Err(DomainError::DuplicatePath { path: key });
        }
        self.entries.push(artifact);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for artifact in &self.entries {
            let key = artifact.path.to_unix_string();
            if !seen.insert(key.clone()) {
                return Err(DomainError::DuplicatePath { path: key });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.entries.iter()
    }

    pub fn in_group(&self, group: ArtifactGroup) -> impl Iterator<Item = &GeneratedArtifact> {
        self.entries.iter().filter(move |a| a.group == group)
    }

    pub fn get(&self, path: &str) -> Option<&GeneratedArtifact> {
        self.entries.iter().find(|a| a.path.to_unix_string() == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(path: &str, group: ArtifactGroup) -> GeneratedArtifact {
        GeneratedArtifact::new(RelativePath::try_new(path).unwrap(), group, "x")
    }

    #[test]
    fn push_rejects_duplicate_paths() {
        let mut set = ArtifactSet::new();
        set.push(artifact("README.md", ArtifactGroup::Documentation))
            .unwrap();
        let err = set
            .push(artifact("./README.md", ArtifactGroup::Documentation))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicatePath {
                path: "README.md".into()
            }
        );
    }

    #[test]
    fn in_group_filters_and_keeps_order() {
        let mut set = ArtifactSet::new();
        set.push(artifact("b.cs", ArtifactGroup::Stub)).unwrap();
        set.push(artifact("README.md", ArtifactGroup::Documentation))
            .unwrap();
        set.push(artifact("a.cs", ArtifactGroup::Stub)).unwrap();

        let stubs: Vec<_> = set
            .in_group(ArtifactGroup::Stub)
            .map(|a| a.path.to_unix_string())
            .collect();
        assert_eq!(stubs, ["b.cs", "a.cs"]);
        assert_eq!(set.len(), 3);
    }
}
