//! Text for check progress and run summaries.

use std::time::Duration;

use crate::report::{CheckSuiteReport, Summary};
use crate::runner::{CheckResult, CheckStatus};

use super::icons::StatusKind;

/// Longest error text shown in a summary row.
const MAX_SUMMARY_NOTE: usize = 60;

/// One row of the end-of-run summary box.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow<'r> {
    pub kind: StatusKind,
    pub name: &'r str,
    /// Duration for executed checks, the error for failures, blank for skips.
    pub note: String,
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}

/// Counter prefix for a running check, e.g. `[3/12] Admin Login`.
pub fn format_check_label(name: &str, index: usize, total: usize) -> String {
    format!("[{}/{}] {}", index + 1, total, name)
}

/// One-line description of a recorded check, without an icon.
///
/// Multi-line details are cut to their first line.
pub fn format_check_line(result: &CheckResult) -> String {
    let first_line = |s: &str| s.lines().next().unwrap_or_default().to_string();
    match result.status {
        CheckStatus::Pass => {
            let details = first_line(&result.details);
            if details.is_empty() {
                format!("{} ({})", result.name, format_duration(result.duration))
            } else {
                format!(
                    "{} ({}) - {}",
                    result.name,
                    format_duration(result.duration),
                    details
                )
            }
        }
        CheckStatus::Fail => {
            let error = result
                .error
                .as_deref()
                .map(first_line)
                .unwrap_or_else(|| "failed".to_string());
            format!("{} - {}", result.name, error)
        }
        CheckStatus::Skipped => format!("{} - {}", result.name, first_line(&result.details)),
    }
}

/// Totals line for a summary.
pub fn format_totals(summary: &Summary) -> String {
    format!(
        "{} tests · {} passed · {} failed · {} skipped · {:.1}% · {}",
        summary.total_tests,
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.success_rate,
        format_duration(summary.total_duration),
    )
}

/// Title of the summary box, e.g. `Summary · admin · http://localhost:8080`.
pub fn format_summary_title(report: &CheckSuiteReport) -> String {
    format!("Summary · {} · {}", report.suite, report.base_url)
}

/// Summary rows in run order.
pub fn summary_rows(report: &CheckSuiteReport) -> Vec<SummaryRow<'_>> {
    report
        .tests
        .iter()
        .map(|result| {
            let note = match result.status {
                CheckStatus::Pass => format_duration(result.duration),
                CheckStatus::Fail => {
                    let error = result
                        .error
                        .as_deref()
                        .and_then(|e| e.lines().next())
                        .unwrap_or("failed");
                    truncate(error, MAX_SUMMARY_NOTE)
                }
                CheckStatus::Skipped => String::new(),
            };
            SummaryRow {
                kind: StatusKind::from(result.status),
                name: &result.name,
                note,
            }
        })
        .collect()
}

/// Closing line when a gating check stopped the run.
pub fn format_halt_line(report: &CheckSuiteReport) -> Option<String> {
    report
        .halted_by
        .as_deref()
        .map(|name| format!("Stopped at '{}'; later checks did not run", name))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CheckOutcome;

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn check_label_is_one_based() {
        assert_eq!(format_check_label("Admin Login", 2, 12), "[3/12] Admin Login");
    }

    #[test]
    fn pass_line_shows_duration_and_first_detail_line() {
        let result = CheckResult::from_outcome(
            "Database Sync Status",
            CheckOutcome::pass("{\n  \"enabled\": true\n}"),
            Duration::from_millis(40),
        );
        assert_eq!(format_check_line(&result), "Database Sync Status (40ms) - {");
    }

    #[test]
    fn fail_line_shows_error() {
        let result = CheckResult::from_outcome(
            "Admin Login",
            CheckOutcome::fail("HTTP 401: Bad credentials"),
            Duration::from_millis(5),
        );
        assert_eq!(
            format_check_line(&result),
            "Admin Login - HTTP 401: Bad credentials"
        );
    }

    #[test]
    fn skipped_line_shows_reason() {
        let result = CheckResult::skipped("Admin Get Users", "Skipped: requires credential");
        assert_eq!(
            format_check_line(&result),
            "Admin Get Users - Skipped: requires credential"
        );
    }

    #[test]
    fn totals_line() {
        let summary = Summary {
            total_tests: 4,
            passed: 2,
            failed: 1,
            skipped: 1,
            success_rate: 50.0,
            total_duration: Duration::from_millis(1200),
            timestamp: chrono::Local::now(),
        };
        assert_eq!(
            format_totals(&summary),
            "4 tests · 2 passed · 1 failed · 1 skipped · 50.0% · 1.2s"
        );
    }

    fn sample_report() -> CheckSuiteReport {
        let results = vec![
            CheckResult::from_outcome(
                "Server Availability",
                CheckOutcome::pass("Status: UP"),
                Duration::from_millis(12),
            ),
            CheckResult::from_outcome(
                "Admin Login",
                CheckOutcome::fail(format!("Login failed: HTTP 401: {}", "x".repeat(100))),
                Duration::from_millis(3),
            ),
            CheckResult::skipped("Admin Get Users", "Skipped: requires credential"),
        ];
        CheckSuiteReport::build(
            "admin",
            "http://localhost:8080",
            results,
            Duration::from_millis(15),
            chrono::Local::now(),
        )
        .with_halted_by(Some("Admin Login".to_string()))
    }

    #[test]
    fn summary_rows_notes() {
        let report = sample_report();
        let rows = summary_rows(&report);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, StatusKind::Success);
        assert_eq!(rows[0].note, "12ms");
        assert_eq!(rows[1].kind, StatusKind::Failed);
        assert!(rows[1].note.starts_with("Login failed: HTTP 401"));
        assert!(rows[1].note.ends_with('…'));
        assert_eq!(rows[2].note, "");
    }

    #[test]
    fn summary_title_and_halt() {
        let report = sample_report();
        assert_eq!(
            format_summary_title(&report),
            "Summary · admin · http://localhost:8080"
        );
        assert_eq!(
            format_halt_line(&report).as_deref(),
            Some("Stopped at 'Admin Login'; later checks did not run")
        );
    }
}
