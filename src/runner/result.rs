//! Per-check results.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::check::CheckOutcome;

/// Outcome class of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Result of one check in one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Check name.
    pub name: String,
    /// Outcome.
    pub status: CheckStatus,
    /// Wall-clock time spent in the check.
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
    /// Human-readable detail.
    pub details: String,
    /// Error message, for failures.
    pub error: Option<String>,
}

impl CheckResult {
    /// Record an executed check.
    pub fn from_outcome(name: &str, outcome: CheckOutcome, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: if outcome.passed {
                CheckStatus::Pass
            } else {
                CheckStatus::Fail
            },
            duration,
            details: outcome.details,
            error: outcome.error,
        }
    }

    /// Record a check that was not executed.
    pub fn skipped(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Skipped,
            duration: Duration::ZERO,
            details: reason.into(),
            error: None,
        }
    }

    /// Whether the check passed.
    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Pass
    }

    /// Whether the check failed.
    pub fn is_fail(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

pub(crate) fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
