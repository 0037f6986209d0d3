//! Scenario discovery and expansion.
//!
//! Given a loaded module, the loader finds every publicly-named descriptor
//! binding and expands it into executable scenario units:
//!
//! 1. Bindings are visited in the module's natural order; underscore-prefixed
//!    names and non-descriptor bindings are passed over.
//! 2. An unparameterized descriptor yields exactly one unit. A parameterized
//!    descriptor yields one unit per parameter set, in declaration order,
//!    indexed from 1.
//! 3. Units are collected in descriptor-encounter order.
//!
//! Expansion is deterministic: the same module content always yields the same
//! ordered list of units with the same names and subjects. Module-load
//! failures propagate unchanged; a descriptor that fails to expand aborts
//! only that descriptor's contribution, with a warning.

use std::path::Path;

use crate::errors::KathaError;
use crate::scenario::{Args, Arity, Modifier, ScenarioDescriptor, ScenarioUnit};

pub mod module;

pub use module::{Binding, ModuleLoader, ScenarioModule, StaticModuleLoader};

const UNIT_NAME_PREFIX: &str = "Scenario_";
// Host naming contract for members of a parameterized group.
const GROUP_MEMBER_SUFFIX: &str = "_VedroScenario";

/// Expands descriptors found in loaded modules into scenario units.
pub struct ScenarioLoader<L> {
    module_loader: L,
}

impl<L: ModuleLoader> ScenarioLoader<L> {
    pub fn new(module_loader: L) -> Self {
        Self { module_loader }
    }

    /// Loads the module at `path` and expands every public descriptor in it.
    pub async fn load(&self, path: &Path) -> Result<Vec<ScenarioUnit>, KathaError> {
        let module = self.module_loader.load(path).await?;
        Ok(self.collect_scenarios(&module))
    }

    fn collect_scenarios(&self, module: &ScenarioModule) -> Vec<ScenarioUnit> {
        let mut loaded = Vec::new();
        for (name, binding) in module.bindings() {
            if name.starts_with('_') {
                continue;
            }
            let Binding::Scenario(descriptor) = binding else {
                continue;
            };
            match self.expand(descriptor, module) {
                Ok(units) => loaded.extend(units),
                Err(error) => {
                    tracing::warn!(scenario = name, %error, "descriptor expansion failed");
                }
            }
        }
        loaded
    }

    /// Turns one descriptor into its units. The descriptor is a pure
    /// specification; nothing here mutates it.
    fn expand(
        &self,
        descriptor: &ScenarioDescriptor,
        module: &ScenarioModule,
    ) -> Result<Vec<ScenarioUnit>, KathaError> {
        let mut units = if descriptor.is_parameterized() {
            self.expand_parameterized(descriptor, module)?
        } else {
            vec![self.build_unit(descriptor, module)]
        };

        // Group-level modifiers apply to every unit, in declared order.
        for decorator in descriptor.decorators() {
            units = apply_to_group(decorator, units)?;
        }
        Ok(units)
    }

    fn build_unit(&self, descriptor: &ScenarioDescriptor, module: &ScenarioModule) -> ScenarioUnit {
        ScenarioUnit::new(
            unit_name(descriptor),
            subject(descriptor),
            module.name(),
            module.path(),
            descriptor.scenario_fn().clone(),
            Args::empty(),
        )
    }

    fn expand_parameterized(
        &self,
        descriptor: &ScenarioDescriptor,
        module: &ScenarioModule,
    ) -> Result<Vec<ScenarioUnit>, KathaError> {
        if descriptor.scenario_fn().arity() == Arity::Nullary {
            return Err(KathaError::expansion(
                descriptor.name(),
                "parameter sets cannot bind to a function that takes no arguments",
            ));
        }

        let mut units = Vec::with_capacity(descriptor.params().len());
        for (idx, set) in descriptor.params().iter().enumerate() {
            let mut unit = ScenarioUnit::new(
                group_member_name(descriptor, idx + 1),
                subject(descriptor),
                module.name(),
                module.path(),
                descriptor.scenario_fn().clone(),
                set.args().clone(),
            );
            // Per-set modifiers touch only this unit.
            for modifier in set.modifiers() {
                unit = modifier.apply(unit)?;
            }
            units.push(unit);
        }
        Ok(units)
    }
}

fn apply_to_group(
    modifier: &Modifier,
    units: Vec<ScenarioUnit>,
) -> Result<Vec<ScenarioUnit>, KathaError> {
    units.into_iter().map(|unit| modifier.apply(unit)).collect()
}

fn unit_name(descriptor: &ScenarioDescriptor) -> String {
    format!("{UNIT_NAME_PREFIX}{}", descriptor.name())
}

fn group_member_name(descriptor: &ScenarioDescriptor, index: usize) -> String {
    format!(
        "{UNIT_NAME_PREFIX}{}_{index}{GROUP_MEMBER_SUFFIX}",
        descriptor.name()
    )
}

/// Subject text shared by every unit of a group: the scenario name with
/// underscores as spaces, never carrying the index suffix.
fn subject(descriptor: &ScenarioDescriptor) -> String {
    descriptor.name().replace('_', " ")
}
