//! The decorator facade: a fluent builder from plain functions to immutable
//! descriptors.
//!
//! Four equivalent authoring shapes produce the same descriptor for the same
//! intent:
//!
//! 1. `ScenarioDescriptor::of("create_user", fn_)` — direct application.
//! 2. `scenario().apply("create_user", fn_)` — optional-call form.
//! 3. `scenario().params([...]).apply("create_user", fn_)` — parameterized.
//! 4. `scenario().with(skip()).params([...]).apply("create_user", fn_)` —
//!    modifiers, with or without parameter sets.
//!
//! `with` and `params` never mutate: each returns a new builder carrying the
//! extra configuration, so a builder can be shared and re-specialized. The
//! `scenario!` macro derives the name from the function identifier and lowers
//! to these calls.

use super::descriptor::ScenarioDescriptor;
use super::params::ParamSet;
use super::{Modifier, ScenarioFn};
use crate::errors::KathaError;

/// Entry point for the optional-call authoring shapes.
pub fn scenario() -> ScenarioBuilder {
    ScenarioBuilder::new()
}

/// Transient configuration (pending modifiers, pending parameter sets) held
/// until applied to a function.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    modifiers: Vec<Modifier>,
    params: Vec<ParamSet>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new builder carrying the given modifier in addition to any
    /// already configured. The original builder is unchanged.
    pub fn with(&self, modifier: Modifier) -> Self {
        let mut next = self.clone();
        next.modifiers.push(modifier);
        next
    }

    /// Like [`ScenarioBuilder::with`], for a sequence of modifiers at once.
    pub fn with_all(&self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut next = self.clone();
        next.modifiers.extend(modifiers);
        next
    }

    /// Returns a new builder with the given parameter-set sequence, replacing
    /// any previously configured one. The original builder is unchanged.
    pub fn params(&self, sets: impl IntoIterator<Item = ParamSet>) -> Self {
        let mut next = self.clone();
        next.params = sets.into_iter().collect();
        next
    }

    /// Applies the pending configuration to a function, producing the final
    /// descriptor. The name is validated here, before any descriptor exists,
    /// and is never re-derived afterward.
    pub fn apply(
        &self,
        name: impl Into<String>,
        fn_: ScenarioFn,
    ) -> Result<ScenarioDescriptor, KathaError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(ScenarioDescriptor::assemble(
            name,
            fn_,
            self.modifiers.clone(),
            self.params.clone(),
        ))
    }
}

fn validate_name(name: &str) -> Result<(), KathaError> {
    if name.is_empty() {
        return Err(KathaError::config("scenario name must not be empty"));
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap_or('_');
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(KathaError::config(format!(
            "scenario name '{name}' must start with a letter or underscore"
        )));
    }
    if let Some(bad) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(KathaError::config(format!(
            "scenario name '{name}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}
