//! Hint text shown after a run.

use crate::report::Summary;

/// Closing line for a run with no failures.
pub fn all_passed(summary: &Summary) -> String {
    if summary.skipped == 0 {
        format!("All {} checks passed.", summary.passed)
    } else {
        format!(
            "{} checks passed, {} skipped.",
            summary.passed, summary.skipped
        )
    }
}

/// Hint when the run stopped at a gating check.
pub fn after_halt(check: &str) -> String {
    format!(
        "'{}' must pass before the remaining checks can run.",
        check
    )
}

/// Hint after a run with failures.
pub fn after_failed_run(failed: &[String]) -> String {
    if failed.is_empty() {
        return "Re-run with --debug to see each request.".to_string();
    }
    format!(
        "Failed: {}. Re-run with --debug to see each request.",
        failed.join(", ")
    )
}

/// Hint when the backend could not be reached at all.
pub fn unreachable_backend(base_url: &str) -> String {
    format!(
        "Is the backend running at {}? Point --url or API_BASE_URL at it.",
        base_url
    )
}

/// Hint when login was rejected.
pub fn login_rejected() -> &'static str {
    "Check --username/--password (ADMIN_USERNAME/ADMIN_PASSWORD) and --login-field."
}
