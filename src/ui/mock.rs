//! Recording UI for tests.
//!
//! `MockUI` keeps every call as a [`UiEvent`] in one ordered log, shared with
//! the spinners it hands out, so tests can assert both on what was shown and
//! on the order it was shown in.
//!
//! # Example
//!
//! ```
//! use shopcheck::ui::{MockUI, SpinnerHandle, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Setup Verification");
//! ui.start_spinner("[1/5] API Connectivity").finish_success("API Connectivity");
//!
//! assert!(matches!(ui.events()[0], UiEvent::Header(_)));
//! assert_eq!(ui.spinners(), ["[1/5] API Connectivity"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::report::CheckSuiteReport;

use super::{OutputMode, SpinnerHandle, UserInterface};

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// One recorded UI call.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Hint(String),
    KeyValue(String, String),
    SpinnerStarted(String),
    SpinnerFinished(String, SpinnerStatus),
    Summary(Box<CheckSuiteReport>),
}

/// How a mock spinner was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

/// UI that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    log: EventLog,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every recorded call, in order.
    pub fn events(&self) -> Vec<UiEvent> {
        self.log.borrow().clone()
    }

    fn collect<T>(&self, pick: impl Fn(&UiEvent) -> Option<T>) -> Vec<T> {
        self.log.borrow().iter().filter_map(pick).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Message(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Warning(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Header(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn hints(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Hint(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// Labels of started spinners.
    pub fn spinners(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::SpinnerStarted(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// Final line and status of every finished spinner.
    pub fn finished_spinners(&self) -> Vec<(String, SpinnerStatus)> {
        self.collect(|e| match e {
            UiEvent::SpinnerFinished(m, status) => Some((m.clone(), *status)),
            _ => None,
        })
    }

    pub fn summaries(&self) -> Vec<CheckSuiteReport> {
        self.collect(|e| match e {
            UiEvent::Summary(report) => Some(report.as_ref().clone()),
            _ => None,
        })
    }

    /// Last value shown for `key`.
    pub fn key_value(&self, key: &str) -> Option<String> {
        self.collect(|e| match e {
            UiEvent::KeyValue(k, v) if k == key => Some(v.clone()),
            _ => None,
        })
        .pop()
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.hints().iter().any(|h| h.contains(needle))
    }

    fn record(&self, event: UiEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            log: Rc::clone(&self.log),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.record(UiEvent::Hint(hint.to_string()));
    }

    fn show_key_value(&mut self, key: &str, value: &str) {
        self.record(UiEvent::KeyValue(key.to_string(), value.to_string()));
    }

    fn show_summary(&mut self, report: &CheckSuiteReport) {
        self.record(UiEvent::Summary(Box::new(report.clone())));
    }
}

/// Spinner that writes its finish into the owning [`MockUI`]'s log.
#[derive(Debug)]
pub struct MockSpinner {
    log: EventLog,
}

impl MockSpinner {
    fn finish(&mut self, msg: &str, status: SpinnerStatus) {
        self.log
            .borrow_mut()
            .push(UiEvent::SpinnerFinished(msg.to_string(), status));
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Skipped);
    }
}
