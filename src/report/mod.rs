//! Suite reports.
//!
//! A [`CheckSuiteReport`] is folded once from the results of a run and is
//! what both the console summary and the JSON file are rendered from.

pub mod writer;

pub use writer::{report_file_name, write_report};

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::runner::result::serialize_secs;
use crate::runner::{CheckResult, CheckStatus};

/// Aggregate counts for a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of recorded results, skipped ones included.
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// `passed / total_tests * 100`, or 0 for an empty run.
    pub success_rate: f64,
    /// Wall-clock time for the whole run.
    #[serde(serialize_with = "serialize_secs")]
    pub total_duration: Duration,
    /// When the report was built.
    pub timestamp: DateTime<Local>,
}

/// The serializable outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSuiteReport {
    /// Suite name (`admin`, `sync`, `verify`).
    pub suite: String,
    /// Backend the suite ran against.
    pub base_url: String,
    /// Check that halted the run, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halted_by: Option<String>,
    pub summary: Summary,
    pub tests: Vec<CheckResult>,
}

impl CheckSuiteReport {
    /// Fold results into a report.
    pub fn build(
        suite: &str,
        base_url: &str,
        results: Vec<CheckResult>,
        total_duration: Duration,
        timestamp: DateTime<Local>,
    ) -> Self {
        let count = |status: CheckStatus| results.iter().filter(|r| r.status == status).count();
        let passed = count(CheckStatus::Pass);
        let failed = count(CheckStatus::Fail);
        let skipped = count(CheckStatus::Skipped);
        let total_tests = results.len();
        let success_rate = if total_tests == 0 {
            0.0
        } else {
            passed as f64 / total_tests as f64 * 100.0
        };

        Self {
            suite: suite.to_string(),
            base_url: base_url.to_string(),
            halted_by: None,
            summary: Summary {
                total_tests,
                passed,
                failed,
                skipped,
                success_rate,
                total_duration,
                timestamp,
            },
            tests: results,
        }
    }

    /// Mark the report as cut short by a gating check.
    pub fn with_halted_by(mut self, name: Option<String>) -> Self {
        self.halted_by = name;
        self
    }

    /// No failures.
    pub fn is_success(&self) -> bool {
        self.summary.failed == 0
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Names of failed checks, in run order.
    pub fn failed_names(&self) -> Vec<String> {
        self.tests
            .iter()
            .filter(|r| r.is_fail())
            .map(|r| r.name.clone())
            .collect()
    }

    /// Result for a named check.
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.tests.iter().find(|r| r.name == name)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
