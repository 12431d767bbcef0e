//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI and piped output
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use shopcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Setup Verification");
//! ui.success("All 5 checks passed");
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI, SpinnerStatus, UiEvent};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::{format_check_label, format_check_line, format_duration, format_totals};
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, restore_cursor, TerminalUI};
pub use theme::{should_use_colors, ShopcheckTheme};

use crate::report::CheckSuiteReport;

/// Everything a suite command prints goes through this trait, so commands
/// can be tested against [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success line, e.g. when every check passed.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Start a spinner for a running check.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a remediation hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a `key: value` line.
    fn show_key_value(&mut self, key: &str, value: &str);

    /// Show the end-of-run summary.
    fn show_summary(&mut self, report: &CheckSuiteReport);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the check as passed.
    fn finish_success(&mut self, msg: &str);

    /// Mark the check as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark the check as skipped.
    fn finish_skipped(&mut self, msg: &str);
}
