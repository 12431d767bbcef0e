//! Interactive terminal UI.

use std::io::Write;

use console::Term;

use crate::report::CheckSuiteReport;

use super::progress::{format_halt_line, format_summary_title, format_totals, summary_rows};
use super::{
    NonInteractiveUI, OutputMode, ProgressSpinner, ShopcheckTheme, SpinnerHandle, StatusKind,
    UserInterface,
};

/// Interactive terminal UI: spinners on stdout, warnings and errors on stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: ShopcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme: ShopcheckTheme::detect(),
            mode,
        }
    }

    fn status_line(&self, kind: StatusKind, msg: &str) -> String {
        kind.format(&self.theme, msg)
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.status_line(StatusKind::Success, msg);
            writeln!(self.term, "{}", line).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.status_line(StatusKind::Warning, msg);
            writeln!(self.err, "{}", line).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let line = self.status_line(StatusKind::Failed, msg);
        writeln!(self.err, "{}", line).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "    {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.format_key_value(key, value)).ok();
        }
    }

    fn show_summary(&mut self, report: &CheckSuiteReport) {
        if !self.mode.shows_summary() {
            return;
        }

        let b = &self.theme.border;
        let rule = "────────────────────────────────────────";

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            self.theme.header.apply_to(format_summary_title(report))
        )
        .ok();

        for row in summary_rows(report) {
            let note = match row.kind {
                StatusKind::Failed => self.theme.fail.apply_to(row.note),
                _ => self.theme.duration.apply_to(row.note),
            };
            writeln!(
                self.term,
                "  {} {} {:<32} {}",
                b.apply_to("│"),
                row.kind.styled(&self.theme),
                row.name,
                note,
            )
            .ok();
        }

        writeln!(self.term, "  {}{}", b.apply_to("├"), b.apply_to(rule)).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("│"),
            format_totals(&report.summary)
        )
        .ok();
        if let Some(halt) = format_halt_line(report) {
            writeln!(
                self.term,
                "  {} {}",
                b.apply_to("│"),
                self.theme.warning.apply_to(halt)
            )
            .ok();
        }
        writeln!(self.term, "  {}{}", b.apply_to("└"), b.apply_to(rule)).ok();
    }
}

/// Show the cursor again on both streams.
///
/// Spinners hide it while they tick; call this before exiting from outside
/// the UI, such as on Ctrl-C.
pub fn restore_cursor() {
    Term::stdout().show_cursor().ok();
    Term::stderr().show_cursor().ok();
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
