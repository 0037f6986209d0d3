//! Defines the command-line arguments for a katha harness binary.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. A host binary embeds
//! this by handing its registered loader to [`crate::cli::harness_main`].

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "katha",
    version,
    about = "A functional-style authoring and loading layer for test scenarios."
)]
pub struct KathaArgs {
    /// Paths of the scenario modules to load, in order.
    pub modules: Vec<PathBuf>,

    /// Only run units whose subject contains this substring.
    #[arg(long)]
    pub filter: Option<String>,

    /// When to colorize report output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print only the summary line.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Color behavior of the text reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        write!(f, "{text}")
    }
}
