//! Shared rendering for suite commands.
//!
//! Every suite command runs the same way: header, one spinner per check,
//! summary, hints, then the report file and/or JSON on stdout.

use std::path::Path;

use crate::error::Result;
use crate::report::{write_report, CheckSuiteReport};
use crate::runner::{CheckRunner, CheckStatus, RunProgress};
use crate::suites::Suite;
use crate::ui::{format_check_label, format_check_line, hints, SpinnerHandle, UserInterface};

use super::dispatcher::CommandResult;

/// Drives one spinner per check from runner progress events.
pub struct ConsoleProgress<'u> {
    ui: &'u mut dyn UserInterface,
    spinner: Option<Box<dyn SpinnerHandle>>,
}

impl<'u> ConsoleProgress<'u> {
    pub fn new(ui: &'u mut dyn UserInterface) -> Self {
        Self { ui, spinner: None }
    }

    /// Handle a single progress event.
    pub fn handle(&mut self, event: RunProgress<'_>) {
        match event {
            RunProgress::CheckStarting { name, index, total } => {
                let label = format_check_label(name, index, total);
                self.spinner = Some(self.ui.start_spinner(&label));
            }
            RunProgress::CheckFinished { result, hint } => {
                let line = format_check_line(result);
                let mut spinner = self
                    .spinner
                    .take()
                    .unwrap_or_else(|| self.ui.start_spinner(&result.name));
                match result.status {
                    CheckStatus::Pass => {
                        spinner.finish_success(&line);
                        if self.ui.output_mode().shows_details() {
                            for extra in result.details.lines().skip(1) {
                                self.ui.message(&format!("      {}", extra));
                            }
                        }
                    }
                    CheckStatus::Fail => {
                        spinner.finish_error(&line);
                        if let Some(hint) = hint {
                            self.ui.show_hint(hint);
                        }
                    }
                    CheckStatus::Skipped => spinner.finish_skipped(&line),
                }
            }
            RunProgress::Halted { name } => {
                self.ui.warning(&hints::after_halt(name));
            }
        }
    }
}

/// Run a suite with console progress and return its report.
pub fn run_suite(
    ui: &mut dyn UserInterface,
    suite: Suite,
    runner: &mut CheckRunner<'_>,
) -> CheckSuiteReport {
    ui.show_header(suite.title());
    ui.show_key_value("Target", runner.context().base_url());

    {
        let mut progress = ConsoleProgress::new(ui);
        runner.run_with_progress(|event| progress.handle(event));
    }

    let report = runner.report();
    ui.show_summary(&report);
    if report.is_success() {
        ui.success(&hints::all_passed(&report.summary));
    } else {
        ui.show_hint(&hints::after_failed_run(&report.failed_names()));
    }
    report
}

/// Write the report file and print JSON, as requested.
pub fn emit_report(
    ui: &mut dyn UserInterface,
    report: &CheckSuiteReport,
    dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    if let Some(dir) = dir {
        let path = write_report(report, dir)?;
        ui.message(&format!("Report saved to {}", path.display()));
    }
    if json {
        let rendered = report
            .to_json_pretty()
            .map_err(|e| anyhow::anyhow!("serializing report: {}", e))?;
        println!("{}", rendered);
    }
    Ok(())
}

/// Exit status for a finished suite.
pub fn command_result(report: &CheckSuiteReport) -> CommandResult {
    if report.is_success() {
        CommandResult::success()
    } else {
        CommandResult::failure(report.exit_code())
    }
}
