//! Authoring sugar: `scenario!`, `params!`, and `ensure!`.
//!
//! `scenario!` derives the descriptor name from the function identifier and
//! lowers every authoring shape onto the builder, so macro and builder forms
//! produce identical descriptors:
//!
//! ```rust,ignore
//! fn create_user() -> StepResult { ensure!(true); Ok(()) }
//! async fn update_user(args: Args) -> StepResult { ensure!(args.len() == 1); Ok(()) }
//!
//! let plain = scenario!(create_user)?;
//! let parameterized = scenario!(async update_user, [params!("Bob"), params!("Alice")])?;
//! let skipped = scenario!([skip()] create_user)?;
//! ```

/// Builds a [`ScenarioDescriptor`](crate::scenario::ScenarioDescriptor) from
/// a function identifier, with optional `[modifiers]` and `[parameter sets]`.
#[macro_export]
macro_rules! scenario {
    ([$($m:expr),+ $(,)?] async $f:ident, [$($p:expr),* $(,)?]) => {
        $crate::scenario::scenario()
            .with_all(vec![$($m),+])
            .params(vec![$($p),*])
            .apply(stringify!($f), $crate::scenario::ScenarioFn::async_with($f))
    };
    ([$($m:expr),+ $(,)?] async $f:ident) => {
        $crate::scenario::scenario()
            .with_all(vec![$($m),+])
            .apply(stringify!($f), $crate::scenario::ScenarioFn::async_fn($f))
    };
    ([$($m:expr),+ $(,)?] $f:ident, [$($p:expr),* $(,)?]) => {
        $crate::scenario::scenario()
            .with_all(vec![$($m),+])
            .params(vec![$($p),*])
            .apply(stringify!($f), $crate::scenario::ScenarioFn::sync_with($f))
    };
    ([$($m:expr),+ $(,)?] $f:ident) => {
        $crate::scenario::scenario()
            .with_all(vec![$($m),+])
            .apply(stringify!($f), $crate::scenario::ScenarioFn::sync($f))
    };
    (async $f:ident, [$($p:expr),* $(,)?]) => {
        $crate::scenario::scenario()
            .params(vec![$($p),*])
            .apply(stringify!($f), $crate::scenario::ScenarioFn::async_with($f))
    };
    (async $f:ident) => {
        $crate::scenario::scenario()
            .apply(stringify!($f), $crate::scenario::ScenarioFn::async_fn($f))
    };
    ($f:ident, [$($p:expr),* $(,)?]) => {
        $crate::scenario::scenario()
            .params(vec![$($p),*])
            .apply(stringify!($f), $crate::scenario::ScenarioFn::sync_with($f))
    };
    ($f:ident) => {
        $crate::scenario::scenario()
            .apply(stringify!($f), $crate::scenario::ScenarioFn::sync($f))
    };
}

/// Builds a [`ParamSet`](crate::scenario::ParamSet) from positional values.
/// Values go through `json!`, so anything serializable is accepted.
#[macro_export]
macro_rules! params {
    ($($value:expr),* $(,)?) => {
        $crate::scenario::ParamSet::new(vec![$($crate::json!($value)),*])
    };
}

/// Checks a condition inside a scenario body, returning an assertion error
/// on failure. With extra arguments, they format the failure message.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err($crate::errors::KathaError::assertion(
                ::std::format!("condition failed: {}", stringify!($cond)),
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return ::core::result::Result::Err($crate::errors::KathaError::assertion(
                ::std::format!($($arg)+),
            ));
        }
    };
}
