//! Sequential check execution.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::{Result, ShopcheckError};
use crate::report::CheckSuiteReport;

use super::check::Check;
use super::context::RunContext;
use super::result::{CheckResult, CheckStatus};

/// Progress events emitted while a run is in flight.
#[derive(Debug)]
pub enum RunProgress<'r> {
    /// A check is about to start.
    CheckStarting {
        name: &'r str,
        index: usize,
        total: usize,
    },
    /// A check was recorded, executed or skipped.
    CheckFinished {
        result: &'r CheckResult,
        hint: Option<&'r str>,
    },
    /// A gating check failed; nothing after it runs.
    Halted { name: &'r str },
}

/// Runs registered checks strictly in registration order.
pub struct CheckRunner<'a> {
    suite: String,
    checks: Vec<Check<'a>>,
    names: HashSet<String>,
    /// Context every run starts from.
    seed: RunContext,
    context: RunContext,
    results: Vec<CheckResult>,
    halted_by: Option<String>,
    elapsed: Duration,
    started_at: Option<DateTime<Local>>,
}

impl<'a> CheckRunner<'a> {
    /// Create a runner for a suite.
    ///
    /// Each run starts from a copy of `context`; nothing a run stores carries
    /// over into the next one.
    pub fn new(suite: impl Into<String>, context: RunContext) -> Self {
        Self {
            suite: suite.into(),
            checks: Vec::new(),
            names: HashSet::new(),
            seed: context.clone(),
            context,
            results: Vec::new(),
            halted_by: None,
            elapsed: Duration::ZERO,
            started_at: None,
        }
    }

    /// Append a check to the plan.
    pub fn register(&mut self, check: Check<'a>) -> Result<()> {
        if !self.names.insert(check.name().to_string()) {
            return Err(ShopcheckError::DuplicateCheck {
                name: check.name().to_string(),
            });
        }
        self.checks.push(check);
        Ok(())
    }

    /// Append several checks, stopping at the first duplicate.
    pub fn register_all(&mut self, checks: impl IntoIterator<Item = Check<'a>>) -> Result<()> {
        for check in checks {
            self.register(check)?;
        }
        Ok(())
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Execute the plan.
    pub fn run(&mut self) -> &[CheckResult] {
        self.run_with_progress(|_| {})
    }

    /// Execute the plan, reporting progress to `on_progress`.
    pub fn run_with_progress<F>(&mut self, mut on_progress: F) -> &[CheckResult]
    where
        F: FnMut(RunProgress<'_>),
    {
        self.context = self.seed.clone();
        self.results.clear();
        self.halted_by = None;
        self.started_at = Some(Local::now());
        let run_start = Instant::now();
        let total = self.checks.len();

        for (index, check) in self.checks.iter_mut().enumerate() {
            on_progress(RunProgress::CheckStarting {
                name: check.name(),
                index,
                total,
            });

            let (result, outcome_halts) = match check.missing_requirement(&self.context) {
                Some(requirement) => {
                    warn!(
                        suite = %self.suite,
                        check = check.name(),
                        requirement = %requirement,
                        "Skipping check"
                    );
                    let reason = format!("Skipped: requires {}", requirement);
                    (CheckResult::skipped(check.name(), reason), false)
                }
                None => {
                    let start = Instant::now();
                    let outcome = check.execute(&mut self.context);
                    let halts = outcome.halts && !outcome.passed;
                    (
                        CheckResult::from_outcome(check.name(), outcome, start.elapsed()),
                        halts,
                    )
                }
            };

            info!(
                suite = %self.suite,
                check = %result.name,
                status = %result.status,
                duration_ms = result.duration.as_millis() as u64,
                "Check finished"
            );

            let halts =
                outcome_halts || (check.is_gating() && result.status == CheckStatus::Fail);
            self.results.push(result);
            if let Some(result) = self.results.last() {
                on_progress(RunProgress::CheckFinished {
                    result,
                    hint: check.hint_text(),
                });
            }

            if halts {
                warn!(suite = %self.suite, check = check.name(), "Check failed, halting run");
                on_progress(RunProgress::Halted { name: check.name() });
                self.halted_by = Some(check.name().to_string());
                break;
            }
        }

        self.elapsed = run_start.elapsed();
        &self.results
    }

    /// Build the report from the recorded results.
    pub fn report(&self) -> CheckSuiteReport {
        CheckSuiteReport::build(
            &self.suite,
            self.context.base_url(),
            self.results.clone(),
            self.elapsed,
            self.started_at.unwrap_or_else(Local::now),
        )
        .with_halted_by(self.halted_by.clone())
    }

    /// Results recorded by the last run.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// The check that halted the last run, if any.
    pub fn halted_by(&self) -> Option<&str> {
        self.halted_by.as_deref()
    }

    /// Run-scoped state.
    pub fn context(&self) -> &RunContext {
        &self.context
    }
}
