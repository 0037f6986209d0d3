//! Core scenario model: executable units, the scenario function wrapper, and
//! the modifier contract.
//!
//! A [`ScenarioUnit`] is one concrete test case: a name, a human-readable
//! subject, provenance, an optional skip state, and a runnable body with its
//! bound arguments. Units are synthesized by the loader from immutable
//! [`ScenarioDescriptor`](descriptor::ScenarioDescriptor)s; each unit owns its
//! own arguments, so repeated loads never alias shared mutable state.
//!
//! A [`Modifier`] is the single polymorphic annotation capability: a function
//! from unit to unit, used uniformly for skip-marking and any host-supplied
//! transformation. A modifier may reject the unit it is given; the rejection
//! surfaces at load time, not execution time.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::errors::KathaError;

pub mod builder;
pub mod descriptor;
pub mod params;
pub mod steps;

pub use builder::{scenario, ScenarioBuilder};
pub use descriptor::ScenarioDescriptor;
pub use params::ParamSet;

/// Result of one scenario body or step.
pub type StepResult = Result<(), KathaError>;

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Positional and keyword arguments bound to one scenario unit.
///
/// Declaration order of positional values is preserved; keyword arguments are
/// kept sorted by name so two argument bundles compare deterministically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    positional: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl Args {
    /// The empty bundle, used for unparameterized units.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn positional(values: Vec<Value>) -> Self {
        Self {
            positional: values,
            named: BTreeMap::new(),
        }
    }

    /// Adds a keyword argument, replacing any previous value under the key.
    pub fn with_named(mut self, key: impl Into<String>, value: Value) -> Self {
        self.named.insert(key.into(), value);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn named(&self, key: &str) -> Option<&Value> {
        self.named.get(key)
    }

    /// Number of positional arguments.
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

// ============================================================================
// SCENARIO FUNCTION
// ============================================================================

/// Declared argument shape of a scenario function.
///
/// The loader uses this to reject parameter sets that cannot bind: a
/// parameterized descriptor over a [`Arity::Nullary`] function fails at load
/// time rather than at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The function takes no arguments.
    Nullary,
    /// The function accepts an [`Args`] bundle.
    Variadic,
}

type SyncBody = Arc<dyn Fn(&Args) -> StepResult + Send + Sync>;
type AsyncBody = Arc<dyn Fn(Args) -> BoxFuture<'static, StepResult> + Send + Sync>;

#[derive(Clone)]
enum Body {
    Sync(SyncBody),
    Async(AsyncBody),
}

/// The user-authored callable behind a scenario, synchronous or asynchronous.
///
/// Internally reference-counted: descriptors and every unit expanded from
/// them share one body, and cloning a descriptor for a second load is cheap.
#[derive(Clone)]
pub struct ScenarioFn {
    body: Body,
    arity: Arity,
}

impl ScenarioFn {
    /// Wraps a synchronous function that takes no arguments.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn() -> StepResult + Send + Sync + 'static,
    {
        Self {
            body: Body::Sync(Arc::new(move |_args| f())),
            arity: Arity::Nullary,
        }
    }

    /// Wraps a synchronous function that receives bound arguments.
    pub fn sync_with<F>(f: F) -> Self
    where
        F: Fn(&Args) -> StepResult + Send + Sync + 'static,
    {
        Self {
            body: Body::Sync(Arc::new(f)),
            arity: Arity::Variadic,
        }
    }

    /// Wraps an asynchronous function that takes no arguments.
    pub fn async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        Self {
            body: Body::Async(Arc::new(move |_args| Box::pin(f()))),
            arity: Arity::Nullary,
        }
    }

    /// Wraps an asynchronous function that receives bound arguments.
    pub fn async_with<F, Fut>(f: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        Self {
            body: Body::Async(Arc::new(move |args| Box::pin(f(args)))),
            arity: Arity::Variadic,
        }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn is_async(&self) -> bool {
        matches!(self.body, Body::Async(_))
    }

    /// Invokes the body with the given arguments, preserving the sync/async
    /// distinction: synchronous bodies complete inline, asynchronous bodies
    /// hand back a future for the caller to await.
    pub(crate) fn invoke(&self, args: &Args) -> Execution {
        match &self.body {
            Body::Sync(f) => Execution::Done(f(args)),
            Body::Async(f) => Execution::Pending(f(args.clone())),
        }
    }
}

impl fmt::Debug for ScenarioFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flavor = match self.body {
            Body::Sync(_) => "sync",
            Body::Async(_) => "async",
        };
        f.debug_struct("ScenarioFn")
            .field("flavor", &flavor)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Outcome of invoking a unit body.
///
/// Synchronous bodies are already complete; asynchronous bodies must be
/// awaited by the caller, so the host scheduler observes the correct
/// concurrency behavior per unit.
pub enum Execution {
    Done(StepResult),
    Pending(BoxFuture<'static, StepResult>),
}

// ============================================================================
// MODIFIERS
// ============================================================================

type ModifierFn = Arc<dyn Fn(ScenarioUnit) -> Result<ScenarioUnit, KathaError> + Send + Sync>;

/// A composable annotation applied to a synthesized unit.
///
/// Modifiers are applied uniformly whether they come from the descriptor
/// (whole group) or from an individual parameter set (that unit only). The
/// name is carried for diagnostics and for comparing authoring shapes.
#[derive(Clone)]
pub struct Modifier {
    name: String,
    apply: ModifierFn,
}

impl Modifier {
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(ScenarioUnit) -> Result<ScenarioUnit, KathaError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            apply: Arc::new(f),
        }
    }

    /// Wraps a transform that cannot fail.
    pub fn infallible<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(ScenarioUnit) -> ScenarioUnit + Send + Sync + 'static,
    {
        Self::new(name, move |unit| Ok(f(unit)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, unit: ScenarioUnit) -> Result<ScenarioUnit, KathaError> {
        (self.apply)(unit)
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier").field("name", &self.name).finish()
    }
}

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Marks the unit skipped, with no reason recorded.
pub fn skip() -> Modifier {
    Modifier::infallible("skip", |unit| unit.into_skipped(None))
}

/// Marks the unit skipped with a reason shown in reports.
pub fn skip_because(reason: impl Into<String>) -> Modifier {
    let reason = reason.into();
    Modifier::infallible("skip", move |unit| {
        unit.into_skipped(Some(reason.clone()))
    })
}

// ============================================================================
// SCENARIO UNIT
// ============================================================================

/// One concrete, executable test case produced by expansion.
#[derive(Debug, Clone)]
pub struct ScenarioUnit {
    name: String,
    /// Human-readable subject text; mutable per the host contract.
    pub subject: String,
    module: String,
    path: PathBuf,
    skipped: bool,
    skip_reason: Option<String>,
    args: Args,
    body: ScenarioFn,
}

impl ScenarioUnit {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        module: impl Into<String>,
        path: impl Into<PathBuf>,
        body: ScenarioFn,
        args: Args,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            module: module.into(),
            path: path.into(),
            skipped: false,
            skip_reason: None,
            args,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the module this unit was expanded from.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// File path of the defining module, for provenance.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.skip_reason.as_deref()
    }

    /// Returns the unit in skipped state. A later skip without a reason does
    /// not erase a previously recorded one.
    pub fn into_skipped(mut self, reason: Option<String>) -> Self {
        self.skipped = true;
        if reason.is_some() {
            self.skip_reason = reason;
        }
        self
    }

    pub fn is_async(&self) -> bool {
        self.body.is_async()
    }

    /// Invokes the body with this unit's bound arguments.
    pub fn execute(&self) -> Execution {
        self.body.invoke(&self.args)
    }
}

// Units compare by observable identity: the body is shared behavior, not
// state, and is excluded.
impl PartialEq for ScenarioUnit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.subject == other.subject
            && self.module == other.module
            && self.path == other.path
            && self.skipped == other.skipped
            && self.skip_reason == other.skip_reason
            && self.args == other.args
    }
}
