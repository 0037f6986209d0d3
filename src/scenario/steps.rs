//! Step markers for readability grouping in scenario bodies.
//!
//! `given`, `when`, and `then` are no-op scoped markers: each runs its block
//! and returns the block's value, retaining no state. A block returning a
//! future composes with `.await`, which covers asynchronous bodies. The
//! `*_as` variants additionally emit the label at TRACE level for diagnostic
//! output.

/// Arrange step.
pub fn given<T>(block: impl FnOnce() -> T) -> T {
    block()
}

/// Act step.
pub fn when<T>(block: impl FnOnce() -> T) -> T {
    block()
}

/// Assert step.
pub fn then<T>(block: impl FnOnce() -> T) -> T {
    block()
}

/// Labeled arrange step.
pub fn given_as<T>(label: &str, block: impl FnOnce() -> T) -> T {
    tracing::trace!(step = "given", label);
    block()
}

/// Labeled act step.
pub fn when_as<T>(label: &str, block: impl FnOnce() -> T) -> T {
    tracing::trace!(step = "when", label);
    block()
}

/// Labeled assert step.
pub fn then_as<T>(label: &str, block: impl FnOnce() -> T) -> T {
    tracing::trace!(step = "then", label);
    block()
}
