//! Unified, `miette`-based diagnostic system for katha.
//!
//! Every error produced by the authoring, loading, or execution layers is a
//! [`KathaError`]. Variants map one-to-one onto the failure taxonomy:
//! configuration errors fail at authoring time, load errors at load time,
//! expansion errors when a descriptor cannot be turned into units, and
//! assertion errors inside scenario bodies. The core never interprets
//! assertion errors; they are recorded by the runner as-is.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Type-safe error classification that corresponds to [`KathaError`] variants.
/// This replaces fragile string-based error matching in test code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller misuse of the builder or module registration.
    Config,
    /// Module lookup failures, propagated from the module loader.
    Load,
    /// A descriptor could not be expanded into scenario units.
    Expansion,
    /// A scenario body reported a failed check.
    Assertion,
    /// Internal errors (report serialization and the like).
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Config => "Config",
            ErrorKind::Load => "Load",
            ErrorKind::Expansion => "Expansion",
            ErrorKind::Assertion => "Assertion",
            ErrorKind::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single error type for the whole crate.
#[derive(Debug, Error, Diagnostic)]
pub enum KathaError {
    /// The builder or a module registration was given an invalid
    /// configuration. Raised at authoring time, before any descriptor exists.
    #[error("invalid scenario configuration: {reason}")]
    #[diagnostic(
        code(katha::config),
        help("scenario names must be non-empty identifiers and module bindings must be unique")
    )]
    InvalidScenarioConfiguration { reason: String },

    /// No module is registered under the requested path.
    #[error("module not found: {}", .path.display())]
    #[diagnostic(
        code(katha::load),
        help("register the module with the loader before loading it")
    )]
    ModuleNotFound { path: PathBuf },

    /// A descriptor could not be expanded: a modifier rejected one of its
    /// units, or a parameter set cannot bind to the scenario function.
    #[error("failed to expand scenario '{scenario}': {reason}")]
    #[diagnostic(code(katha::expand))]
    Expansion { scenario: String, reason: String },

    /// A check inside a scenario body failed.
    #[error("assertion failed: {message}")]
    #[diagnostic(code(katha::assert))]
    Assertion { message: String },

    /// Something went wrong inside katha itself.
    #[error("internal error: {reason}")]
    #[diagnostic(code(katha::internal))]
    Internal { reason: String },
}

impl KathaError {
    /// Shorthand for a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        KathaError::InvalidScenarioConfiguration {
            reason: reason.into(),
        }
    }

    /// Shorthand for an expansion error attached to a scenario name.
    pub fn expansion(scenario: impl Into<String>, reason: impl Into<String>) -> Self {
        KathaError::Expansion {
            scenario: scenario.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an assertion failure.
    pub fn assertion(message: impl Into<String>) -> Self {
        KathaError::Assertion {
            message: message.into(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KathaError::InvalidScenarioConfiguration { .. } => ErrorKind::Config,
            KathaError::ModuleNotFound { .. } => ErrorKind::Load,
            KathaError::Expansion { .. } => ErrorKind::Expansion,
            KathaError::Assertion { .. } => ErrorKind::Assertion,
            KathaError::Internal { .. } => ErrorKind::Internal,
        }
    }
}
