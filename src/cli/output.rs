//! Handles all user-facing output for the harness.
//!
//! This module is responsible for per-unit result lines, colorized labels,
//! the summary line, and JSON rendering. Centralizing output logic here keeps
//! the report format consistent regardless of which sink receives it.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::KathaError;
use crate::runner::{CaseResult, RunOutcome, RunReport};

/// Receives report events; implementations decide presentation.
pub trait ReportSink {
    fn case(&mut self, result: &CaseResult);
    fn summary(&mut self, report: &RunReport);
}

/// Writes colorized PASS/FAIL/SKIP lines and a summary to stdout.
pub struct StdoutReporter {
    color: ColorChoice,
    quiet: bool,
}

impl StdoutReporter {
    pub fn new(color: ColorChoice, quiet: bool) -> Self {
        Self { color, quiet }
    }

    fn print_label(&self, label: &str, color: Color) {
        let mut stdout = StandardStream::stdout(self.color);
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(&mut stdout, "{label}");
        let _ = stdout.reset();
    }
}

impl ReportSink for StdoutReporter {
    fn case(&mut self, result: &CaseResult) {
        if self.quiet {
            return;
        }
        match &result.outcome {
            RunOutcome::Passed => {
                self.print_label("PASS", Color::Green);
                println!(": {} ({})", result.subject, result.name);
            }
            RunOutcome::Failed { error } => {
                self.print_label("FAIL", Color::Red);
                println!(": {} ({})", result.subject, result.name);
                println!("  Error: {error}");
            }
            RunOutcome::Skipped { reason } => {
                self.print_label("SKIP", Color::Yellow);
                match reason {
                    Some(reason) => println!(": {} ({}) [{reason}]", result.subject, result.name),
                    None => println!(": {} ({})", result.subject, result.name),
                }
            }
        }
    }

    fn summary(&mut self, report: &RunReport) {
        println!("\n{}", summary_line(report));
        if report.has_failures() {
            eprintln!("\nFailed scenarios:");
            for result in &report.results {
                if matches!(result.outcome, RunOutcome::Failed { .. }) {
                    eprintln!("  - {}", result.name);
                }
            }
        }
    }
}

/// Collects plain-text lines for programmatic capture in tests.
#[derive(Debug, Default)]
pub struct BufferReporter {
    pub lines: Vec<String>,
}

impl ReportSink for BufferReporter {
    fn case(&mut self, result: &CaseResult) {
        let label = match &result.outcome {
            RunOutcome::Passed => "PASS",
            RunOutcome::Failed { .. } => "FAIL",
            RunOutcome::Skipped { .. } => "SKIP",
        };
        self.lines
            .push(format!("{label}: {} ({})", result.subject, result.name));
    }

    fn summary(&mut self, report: &RunReport) {
        self.lines.push(summary_line(report));
    }
}

/// Prints the whole report as JSON once the run completes.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl ReportSink for JsonReporter {
    fn case(&mut self, _result: &CaseResult) {}

    fn summary(&mut self, report: &RunReport) {
        match render_json(report) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("{error}"),
        }
    }
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &RunReport) -> Result<String, KathaError> {
    serde_json::to_string_pretty(report).map_err(|e| KathaError::Internal {
        reason: format!("failed to serialize report: {e}"),
    })
}

fn summary_line(report: &RunReport) -> String {
    format!(
        "Scenario summary: total {}, passed {}, failed {}, skipped {}",
        report.total(),
        report.passed(),
        report.failed(),
        report.skipped()
    )
}
