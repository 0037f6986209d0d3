//! Executes scenario units and partitions the outcomes.
//!
//! The runner never interprets execution errors: a body's error is recorded
//! verbatim against the unit that produced it. Skipped units are not
//! executed. Synchronous bodies run inline; asynchronous bodies are awaited,
//! so per-unit concurrency behavior is exactly what the author wrote.

use serde::Serialize;

use crate::scenario::{Execution, ScenarioUnit};

/// Result of executing (or skipping) a single unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunOutcome {
    Passed,
    Failed {
        error: String,
    },
    Skipped {
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

/// One unit's identity plus its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub subject: String,
    pub outcome: RunOutcome,
}

/// Ordered results of one run, with partition counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub results: Vec<CaseResult>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.count(|outcome| matches!(outcome, RunOutcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, RunOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, RunOutcome::Skipped { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&RunOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Runs every unit in order and collects a report.
pub async fn run_units(units: &[ScenarioUnit]) -> RunReport {
    let mut report = RunReport::default();
    for unit in units {
        let outcome = run_unit(unit).await;
        report.results.push(CaseResult {
            name: unit.name().to_string(),
            subject: unit.subject.clone(),
            outcome,
        });
    }
    report
}

async fn run_unit(unit: &ScenarioUnit) -> RunOutcome {
    if unit.is_skipped() {
        return RunOutcome::Skipped {
            reason: unit.skip_reason().map(str::to_string),
        };
    }
    let result = match unit.execute() {
        Execution::Done(result) => result,
        Execution::Pending(fut) => fut.await,
    };
    match result {
        Ok(()) => RunOutcome::Passed,
        Err(error) => RunOutcome::Failed {
            error: error.to_string(),
        },
    }
}
