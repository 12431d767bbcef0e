//! Non-interactive UI for CI and piped output.

use crate::report::CheckSuiteReport;

use super::progress::{format_halt_line, format_summary_title, format_totals, summary_rows};
use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
///
/// No spinners or styling: each check prints one bracketed status line when
/// it finishes, so the output reads well in CI logs.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner {
            enabled: self.mode.shows_spinners(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("    Hint: {}", hint);
        }
    }

    fn show_key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_status() {
            println!("  {}: {}", key, value);
        }
    }

    fn show_summary(&mut self, report: &CheckSuiteReport) {
        if !self.mode.shows_summary() {
            return;
        }

        println!();
        println!("{}", format_summary_title(report));
        for row in summary_rows(report) {
            println!("  {} {:<32} {}", row.kind.bracketed(), row.name, row.note);
        }
        println!("{}", format_totals(&report.summary));
        if let Some(halt) = format_halt_line(report) {
            println!("{}", halt);
        }
    }
}

/// Spinner stand-in that prints the final status line.
struct NoopSpinner {
    enabled: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.enabled {
            println!("  {}", StatusKind::Success.format_plain(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.enabled {
            println!("  {}", StatusKind::Failed.format_plain(msg));
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.enabled {
            println!("  {}", StatusKind::Skipped.format_plain(msg));
        }
    }
}
