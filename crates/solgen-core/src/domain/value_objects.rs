//! Domain value objects: names, identifiers and project kinds.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Every
//! name is validated once at construction, so the rest of the crate can rely
//! on it being safe to use as a directory name, namespace or command
//! argument.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Implements the accessor/Display/AsRef boilerplate shared by the name types.
macro_rules! name_accessors {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

fn invalid(kind: &'static str, value: &str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidName {
        kind,
        value: value.to_string(),
        reason: reason.into(),
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// Name of the generated solution, also the root namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        const KIND: &str = "project name";
        let value = value.as_ref().trim();

        let Some(first) = value.chars().next() else {
            return Err(invalid(KIND, value, "name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(invalid(KIND, value, "must start with a letter"));
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(invalid(KIND, value, format!("character '{bad}' is not allowed")));
        }
        if value.ends_with('.') || value.contains("..") {
            return Err(invalid(KIND, value, "dots must separate non-empty segments"));
        }

        Ok(Self(value.to_string()))
    }
}

name_accessors!(ProjectName);

// ── ModuleName ───────────────────────────────────────────────────────────────

/// A domain module (or the host module). Used verbatim as a directory name
/// and namespace segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        const KIND: &str = "module name";
        let value = value.as_ref().trim();

        let Some(first) = value.chars().next() else {
            return Err(invalid(KIND, value, "name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(invalid(KIND, value, "must start with a letter"));
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(KIND, value, format!("character '{bad}' is not allowed")));
        }

        Ok(Self(value.to_string()))
    }
}

name_accessors!(ModuleName);

// ── ServiceName ──────────────────────────────────────────────────────────────

/// An infrastructure service expected to run in the local container
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        const KIND: &str = "service name";
        let value = value.as_ref().trim();

        let Some(first) = value.chars().next() else {
            return Err(invalid(KIND, value, "name cannot be empty"));
        };
        if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
            return Err(invalid(KIND, value, "must start with a lowercase letter or digit"));
        }
        if let Some(bad) = value.chars().find(|c| {
            !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
        }) {
            return Err(invalid(KIND, value, format!("character '{bad}' is not allowed")));
        }

        Ok(Self(value.to_string()))
    }
}

name_accessors!(ServiceName);

// ── PackageId ────────────────────────────────────────────────────────────────

/// Opaque package identifier handed to the build tool unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = value.as_ref();
        if raw.is_empty() {
            return Err(invalid("package id", raw, "identifier cannot be empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("package id", raw, "identifier cannot contain whitespace"));
        }
        Ok(Self(raw.to_string()))
    }
}

name_accessors!(PackageId);

// ── ToolName ─────────────────────────────────────────────────────────────────

/// An external command that must be resolvable on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = value.as_ref().trim();
        if raw.is_empty() {
            return Err(invalid("tool name", raw, "name cannot be empty"));
        }
        if raw
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(invalid(
                "tool name",
                raw,
                "must be a bare command name, not a path",
            ));
        }
        Ok(Self(raw.to_string()))
    }
}

name_accessors!(ToolName);

// ── ProjectRole / ProjectTemplate ────────────────────────────────────────────

/// What a generated project is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Library,
    Tests,
    Host,
}

impl ProjectRole {
    /// The build-tool template used to create a project with this role.
    pub const fn template(self) -> ProjectTemplate {
        match self {
            Self::Library => ProjectTemplate::ClassLib,
            Self::Tests => ProjectTemplate::XUnit,
            Self::Host => ProjectTemplate::WebApi,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Tests => "tests",
            Self::Host => "host",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build-tool project template short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTemplate {
    ClassLib,
    XUnit,
    WebApi,
}

impl ProjectTemplate {
    /// Short name as understood by `dotnet new`.
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::ClassLib => "classlib",
            Self::XUnit => "xunit",
            Self::WebApi => "webapi",
        }
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
