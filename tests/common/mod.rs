//! Shared fixtures for the integration suites: module registration, loading,
//! and running, with the async edges driven by a local executor.
#![allow(dead_code)]

use std::path::PathBuf;

use futures::executor::block_on;
use katha::runner::{run_units, RunReport};
use katha::{KathaError, ScenarioLoader, ScenarioModule, ScenarioUnit, StaticModuleLoader};

pub const MODULE_NAME: &str = "users";
pub const MODULE_PATH: &str = "scenarios/users.rs";

/// An empty module under the default test path.
pub fn module() -> ScenarioModule {
    ScenarioModule::new(MODULE_NAME, MODULE_PATH)
}

/// A loader with exactly this module registered, plus the path to load.
pub fn loader_for(module: ScenarioModule) -> (ScenarioLoader<StaticModuleLoader>, PathBuf) {
    let path = module.path().to_path_buf();
    let loader = ScenarioLoader::new(StaticModuleLoader::new().register(module));
    (loader, path)
}

/// Registers the module, loads it, and returns the expanded units.
pub fn load_units(module: ScenarioModule) -> Vec<ScenarioUnit> {
    try_load_units(module).expect("module should load")
}

pub fn try_load_units(module: ScenarioModule) -> Result<Vec<ScenarioUnit>, KathaError> {
    let (loader, path) = loader_for(module);
    block_on(loader.load(&path))
}

/// Runs units to completion on a local executor.
pub fn run(units: &[ScenarioUnit]) -> RunReport {
    block_on(run_units(units))
}
