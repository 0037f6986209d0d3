//! Parameter sets: one bundle of call arguments per expanded unit.
//!
//! A parameter set carries the positional/keyword arguments bound to exactly
//! one unit of a parameterized group, plus its own modifiers (a per-instance
//! skip, for example). Like the builder, `with` never mutates: it returns a
//! new set carrying the extra modifier.

use serde_json::Value;

use super::{Args, Modifier};

/// A named bundle of positional/keyword arguments, optionally carrying its
/// own modifiers.
#[derive(Debug, Clone)]
pub struct ParamSet {
    args: Args,
    modifiers: Vec<Modifier>,
}

impl ParamSet {
    pub fn new(positional: Vec<Value>) -> Self {
        Self {
            args: Args::positional(positional),
            modifiers: Vec::new(),
        }
    }

    /// Adds a keyword argument.
    pub fn named(mut self, key: impl Into<String>, value: Value) -> Self {
        self.args = self.args.with_named(key, value);
        self
    }

    /// Returns a new set with the modifier appended; the original set is
    /// unchanged.
    pub fn with(&self, modifier: Modifier) -> Self {
        let mut modifiers = self.modifiers.clone();
        modifiers.push(modifier);
        Self {
            args: self.args.clone(),
            modifiers,
        }
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Per-instance modifiers, in declared order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

// Sets compare by bound arguments and modifier names; modifier behavior is
// opaque.
impl PartialEq for ParamSet {
    fn eq(&self, other: &Self) -> bool {
        self.args == other.args && self.modifiers == other.modifiers
    }
}
