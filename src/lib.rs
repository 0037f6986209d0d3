pub use crate::errors::{ErrorKind, KathaError};
pub use crate::loader::{
    Binding, ModuleLoader, ScenarioLoader, ScenarioModule, StaticModuleLoader,
};
pub use crate::runner::{run_units, CaseResult, RunOutcome, RunReport};
pub use crate::scenario::steps::{given, given_as, then, then_as, when, when_as};
pub use crate::scenario::{
    scenario, skip, skip_because, Args, Arity, Execution, Modifier, ParamSet, ScenarioBuilder,
    ScenarioDescriptor, ScenarioFn, ScenarioUnit, StepResult,
};
pub use serde_json::json;

pub mod cli;
pub mod errors;
pub mod loader;
pub mod macros;
pub mod runner;
pub mod scenario;
