//! The immutable record behind one authored scenario.
//!
//! A descriptor captures a function plus its modifiers and parameter sets at
//! module-construction time. It is write-once: the builder produces it, the
//! loader reads it as a pure specification, and nothing mutates it afterward.

use super::builder::ScenarioBuilder;
use super::params::ParamSet;
use super::{Modifier, ScenarioFn};
use crate::errors::KathaError;

/// Immutable specification of a scenario-to-be, prior to expansion.
#[derive(Debug, Clone)]
pub struct ScenarioDescriptor {
    name: String,
    fn_: ScenarioFn,
    decorators: Vec<Modifier>,
    params: Vec<ParamSet>,
}

impl ScenarioDescriptor {
    /// Direct application: a descriptor with no modifiers and no parameter
    /// sets. Equivalent to `scenario().apply(name, fn_)`.
    pub fn of(name: impl Into<String>, fn_: ScenarioFn) -> Result<Self, KathaError> {
        ScenarioBuilder::new().apply(name, fn_)
    }

    pub(crate) fn assemble(
        name: String,
        fn_: ScenarioFn,
        decorators: Vec<Modifier>,
        params: Vec<ParamSet>,
    ) -> Self {
        Self {
            name,
            fn_,
            decorators,
            params,
        }
    }

    /// The identifier-shaped name derived once at construction. Never
    /// re-derived.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scenario_fn(&self) -> &ScenarioFn {
        &self.fn_
    }

    /// Group-level modifiers, in declared order.
    pub fn decorators(&self) -> &[Modifier] {
        &self.decorators
    }

    /// Parameter sets, in declaration order. Empty means a single
    /// unparameterized unit.
    pub fn params(&self) -> &[ParamSet] {
        &self.params
    }

    pub fn is_parameterized(&self) -> bool {
        !self.params.is_empty()
    }
}
