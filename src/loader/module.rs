//! Module representation and the module-loading boundary.
//!
//! A [`ScenarioModule`] is the loaded form of one scenario source: an ordered
//! name-to-binding mapping plus the module's own name and file path for unit
//! provenance. Construction preserves insertion order, which the loader later
//! iterates as the module's natural order.
//!
//! [`ModuleLoader`] is the external collaborator that turns a path into a
//! module; loading may suspend. [`StaticModuleLoader`] is the in-process
//! rendition: modules are registered up front and handed out by path. Each
//! load returns an independent copy, so repeated loads never alias state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::KathaError;
use crate::scenario::ScenarioDescriptor;

/// One exported value of a module.
///
/// Only scenario descriptors are selected by the loader; everything else a
/// module exports is opaque to the core.
#[derive(Debug, Clone)]
pub enum Binding {
    Scenario(ScenarioDescriptor),
    Opaque,
}

/// The exported bindings of one loaded scenario module, in insertion order.
#[derive(Debug, Clone)]
pub struct ScenarioModule {
    name: String,
    path: PathBuf,
    bindings: Vec<(String, Binding)>,
}

impl ScenarioModule {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            bindings: Vec::new(),
        }
    }

    /// Module name, used as unit provenance.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File path of the module source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Binds a descriptor under the given exported name. Binding names must
    /// be unique within a module.
    pub fn bind(
        mut self,
        name: impl Into<String>,
        descriptor: ScenarioDescriptor,
    ) -> Result<Self, KathaError> {
        let name = name.into();
        self.check_unique(&name)?;
        self.bindings.push((name, Binding::Scenario(descriptor)));
        Ok(self)
    }

    /// Records a non-scenario export, keeping the module's natural order
    /// faithful to the source.
    pub fn bind_opaque(mut self, name: impl Into<String>) -> Result<Self, KathaError> {
        let name = name.into();
        self.check_unique(&name)?;
        self.bindings.push((name, Binding::Opaque));
        Ok(self)
    }

    /// Exported bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(name, b)| (name.as_str(), b))
    }

    fn check_unique(&self, name: &str) -> Result<(), KathaError> {
        if self.bindings.iter().any(|(existing, _)| existing == name) {
            return Err(KathaError::config(format!(
                "module '{}' already binds '{name}'",
                self.name
            )));
        }
        Ok(())
    }
}

/// External collaborator that resolves a path to a loaded module. Loading may
/// suspend; failures propagate unchanged to the caller.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn load(&self, path: &Path) -> Result<ScenarioModule, KathaError>;
}

/// In-memory path-to-module registry.
#[derive(Debug, Default)]
pub struct StaticModuleLoader {
    modules: HashMap<PathBuf, ScenarioModule>,
}

impl StaticModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module under its own path, replacing any previous
    /// registration for that path.
    pub fn register(mut self, module: ScenarioModule) -> Self {
        self.modules.insert(module.path().to_path_buf(), module);
        self
    }

    /// Registered module paths, sorted for deterministic iteration.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.modules.keys().cloned().collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl ModuleLoader for StaticModuleLoader {
    async fn load(&self, path: &Path) -> Result<ScenarioModule, KathaError> {
        self.modules
            .get(path)
            .cloned()
            .ok_or_else(|| KathaError::ModuleNotFound {
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::scenario::{ScenarioDescriptor, ScenarioFn};

    fn descriptor(name: &str) -> ScenarioDescriptor {
        ScenarioDescriptor::of(name, ScenarioFn::sync(|| Ok(()))).unwrap()
    }

    #[test]
    fn bindings_keep_insertion_order() {
        let module = ScenarioModule::new("users", "scenarios/users.rs")
            .bind("create_user", descriptor("create_user"))
            .unwrap()
            .bind_opaque("HELPER_CONSTANT")
            .unwrap()
            .bind("update_user", descriptor("update_user"))
            .unwrap();

        let names: Vec<&str> = module.bindings().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["create_user", "HELPER_CONSTANT", "update_user"]);
    }

    #[test]
    fn duplicate_binding_is_rejected() {
        let err = ScenarioModule::new("users", "scenarios/users.rs")
            .bind("create_user", descriptor("create_user"))
            .unwrap()
            .bind("create_user", descriptor("create_user"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn unknown_path_yields_module_not_found() {
        let loader = StaticModuleLoader::new();
        let err = futures::executor::block_on(loader.load(Path::new("scenarios/missing.rs")))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn paths_are_sorted() {
        let loader = StaticModuleLoader::new()
            .register(ScenarioModule::new("b", "scenarios/b.rs"))
            .register(ScenarioModule::new("a", "scenarios/a.rs"));
        assert_eq!(
            loader.paths(),
            vec![PathBuf::from("scenarios/a.rs"), PathBuf::from("scenarios/b.rs")]
        );
    }
}
