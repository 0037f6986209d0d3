//! Harness entry point: argument parsing, module loading, execution, and
//! reporting, wired together for a host binary.
//!
//! A host registers its scenario modules with a loader and delegates `main`:
//!
//! ```rust,no_run
//! use katha::cli;
//! use katha::loader::{ScenarioLoader, StaticModuleLoader};
//!
//! fn main() -> std::process::ExitCode {
//!     let loader = ScenarioLoader::new(StaticModuleLoader::new());
//!     cli::harness_main(loader)
//! }
//! ```

use std::process::ExitCode;

use clap::Parser;
use termcolor::ColorChoice;

use crate::errors::KathaError;
use crate::loader::{ModuleLoader, ScenarioLoader};
use crate::runner::{run_units, RunReport};

pub mod args;
pub mod output;

pub use args::{ColorMode, KathaArgs};
pub use output::{BufferReporter, JsonReporter, ReportSink, StdoutReporter};

/// Resolved run configuration.
#[derive(Debug)]
pub struct RunConfig {
    pub filter: Option<String>,
    pub color: ColorChoice,
    pub quiet: bool,
    pub json: bool,
}

impl RunConfig {
    pub fn from_args(args: &KathaArgs) -> Self {
        Self {
            filter: args.filter.clone(),
            color: resolve_color(args.color),
            quiet: args.quiet,
            json: args.json,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            color: resolve_color(ColorMode::Auto),
            quiet: false,
            json: false,
        }
    }
}

fn resolve_color(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if atty::is(atty::Stream::Stdout) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Loads every requested module, runs the (optionally filtered) units, and
/// streams results into the sink. Load failures propagate unchanged.
pub async fn run<L: ModuleLoader>(
    loader: &ScenarioLoader<L>,
    args: &KathaArgs,
    sink: &mut dyn ReportSink,
) -> Result<RunReport, KathaError> {
    if args.modules.is_empty() {
        return Err(KathaError::config("no module paths given"));
    }

    let mut units = Vec::new();
    for path in &args.modules {
        units.extend(loader.load(path).await?);
    }

    if let Some(filter) = &args.filter {
        let needle = filter.to_lowercase();
        units.retain(|unit| unit.subject.to_lowercase().contains(&needle));
    }

    let report = run_units(&units).await;
    for result in &report.results {
        sink.case(result);
    }
    sink.summary(&report);
    Ok(report)
}

/// Full harness main: parses real argv, runs, reports, and maps failures to
/// the process exit code.
pub fn harness_main<L: ModuleLoader>(loader: ScenarioLoader<L>) -> ExitCode {
    init_logging();
    let args = KathaArgs::parse();
    let config = RunConfig::from_args(&args);

    let mut stdout_sink;
    let mut json_sink;
    let sink: &mut dyn ReportSink = if config.json {
        json_sink = JsonReporter;
        &mut json_sink
    } else {
        stdout_sink = StdoutReporter::new(config.color, config.quiet);
        &mut stdout_sink
    };

    match futures::executor::block_on(run(&loader, &args, sink)) {
        Ok(report) if report.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::FAILURE
        }
    }
}

/// Installs the global tracing subscriber; harmless if one is already set.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}
