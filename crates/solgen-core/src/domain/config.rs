//! Scaffold configuration: the immutable input of a generator run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{ModuleName, PackageId, ProjectName, ServiceName, ToolName},
};

/// Host module name used when none is configured.
pub const DEFAULT_HOST_MODULE: &str = "Api";

/// Mapping from a declared module to its ordered package list.
///
/// Only constructible through [`ScaffoldConfigBuilder`], which rejects keys
/// naming undeclared modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackagePlan(BTreeMap<ModuleName, Vec<PackageId>>);

impl PackagePlan {
    /// Packages for `module` in configured order; empty if none.
    pub fn packages_for(&self, module: &ModuleName) -> &[PackageId] {
        self.0.get(module).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of `(module, package)` pairs.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable configuration passed explicitly into the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldConfig {
    project_name: ProjectName,
    host_module: ModuleName,
    modules: Vec<ModuleName>,
    infrastructure: Vec<ServiceName>,
    packages: PackagePlan,
    required_tools: Vec<ToolName>,
    target_framework: Option<String>,
    init_repository: bool,
}

impl ScaffoldConfig {
    pub fn builder(project_name: impl Into<String>) -> ScaffoldConfigBuilder {
        ScaffoldConfigBuilder::new(project_name)
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn host_module(&self) -> &ModuleName {
        &self.host_module
    }

    pub fn modules(&self) -> &[ModuleName] {
        &self.modules
    }

    pub fn infrastructure(&self) -> &[ServiceName] {
        &self.infrastructure
    }

    pub fn packages(&self) -> &PackagePlan {
        &self.packages
    }

    pub fn required_tools(&self) -> &[ToolName] {
        &self.required_tools
    }

    pub fn target_framework(&self) -> Option<&str> {
        self.target_framework.as_deref()
    }

    pub fn init_repository(&self) -> bool {
        self.init_repository
    }

    pub fn has_module(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.as_str() == name)
    }
}

/// Builder collecting raw strings; all validation happens in [`build`].
///
/// [`build`]: ScaffoldConfigBuilder::build
#[derive(Debug, Clone)]
pub struct ScaffoldConfigBuilder {
    project_name: String,
    host_module: Option<String>,
    modules: Vec<String>,
    infrastructure: Vec<String>,
    // Vec, not map: repeated keys append in call order.
    packages: Vec<(String, String)>,
    required_tools: Vec<String>,
    target_framework: Option<String>,
    init_repository: bool,
}

impl ScaffoldConfigBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            host_module: None,
            modules: Vec::new(),
            infrastructure: Vec::new(),
            packages: Vec::new(),
            required_tools: Vec::new(),
            target_framework: None,
            init_repository: true,
        }
    }

    pub fn host_module(mut self, name: impl Into<String>) -> Self {
        self.host_module = Some(name.into());
        self
    }

    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.modules.push(name.into());
        self
    }

    pub fn modules<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn service(mut self, name: impl Into<String>) -> Self {
        self.infrastructure.push(name.into());
        self
    }

    pub fn services<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.infrastructure.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn package(mut self, module: impl Into<String>, package: impl Into<String>) -> Self {
        self.packages.push((module.into(), package.into()));
        self
    }

    pub fn required_tool(mut self, tool: impl Into<String>) -> Self {
        self.required_tools.push(tool.into());
        self
    }

    pub fn required_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_tools.extend(tools.into_iter().map(Into::into));
        self
    }

    pub fn target_framework(mut self, framework: impl Into<String>) -> Self {
        self.target_framework = Some(framework.into());
        self
    }

    pub fn init_repository(mut self, enabled: bool) -> Self {
        self.init_repository = enabled;
        self
    }

    /// Validate every field and produce the immutable configuration.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidName`] for any malformed name
    /// - [`DomainError::DuplicateModule`] when a module repeats
    /// - [`DomainError::HostCollision`] when the host shares a module's name
    /// - [`DomainError::UnknownModule`] when packages name an undeclared module
    pub fn build(self) -> Result<ScaffoldConfig, DomainError> {
        let project_name = ProjectName::new(&self.project_name)?;
        let host_module =
            ModuleName::new(self.host_module.as_deref().unwrap_or(DEFAULT_HOST_MODULE))?;

        let mut modules: Vec<ModuleName> = Vec::with_capacity(self.modules.len());
        for raw in &self.modules {
            let module = ModuleName::new(raw)?;
            if modules.contains(&module) {
                return Err(DomainError::DuplicateModule {
                    module: module.to_string(),
                });
            }
            modules.push(module);
        }
        if modules.contains(&host_module) {
            return Err(DomainError::HostCollision {
                module: host_module.to_string(),
            });
        }

        let infrastructure = self
            .infrastructure
            .iter()
            .map(ServiceName::new)
            .collect::<Result<Vec<_>, _>>()?;

        let mut packages: BTreeMap<ModuleName, Vec<PackageId>> = BTreeMap::new();
        for (raw_module, raw_package) in &self.packages {
            let module = ModuleName::new(raw_module)?;
            if !modules.contains(&module) {
                return Err(DomainError::UnknownModule {
                    module: module.to_string(),
                });
            }
            packages
                .entry(module)
                .or_default()
                .push(PackageId::new(raw_package)?);
        }

        let required_tools = self
            .required_tools
            .iter()
            .map(ToolName::new)
            .collect::<Result<Vec<_>, _>>()?;

        let target_framework = self
            .target_framework
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());

        Ok(ScaffoldConfig {
            project_name,
            host_module,
            modules,
            infrastructure,
            packages: PackagePlan(packages),
            required_tools,
            target_framework,
            init_repository: self.init_repository,
        })
    }
}
