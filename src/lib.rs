//! shopcheck - sequential HTTP checks against a deployed shop backend.
//!
//! A suite is an ordered list of named checks. Each check runs once, in
//! order, against a live backend; later checks read the credential and ids
//! that earlier ones stored. A failed gating check stops the run, and a
//! missing prerequisite turns a check into SKIPPED instead of a false FAIL.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading and layered resolution
//! - [`error`] - Error types and result aliases
//! - [`http`] - Blocking API client and login handling
//! - [`report`] - Suite reports and JSON report files
//! - [`runner`] - Check definitions and sequential execution
//! - [`shell`] - Shell command execution
//! - [`suites`] - The admin, sync and verify suites
//! - [`ui`] - Spinners, styled output and summaries
//!
//! # Example
//!
//! ```
//! use shopcheck::runner::{Check, CheckOutcome, CheckRunner, CheckStatus, Requirement, RunContext};
//!
//! let mut runner = CheckRunner::new("demo", RunContext::new("http://localhost:8080"));
//! runner.register(Check::new("Ping", |_| Ok(CheckOutcome::pass("pong")))).unwrap();
//! runner
//!     .register(Check::new("Orders", |_| Ok(CheckOutcome::pass("")))
//!         .requires(Requirement::Credential))
//!     .unwrap();
//!
//! let results = runner.run();
//! assert_eq!(results[0].status, CheckStatus::Pass);
//! assert_eq!(results[1].status, CheckStatus::Skipped);
//! ```
//!
//! For runs against a live server, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod report;
pub mod runner;
pub mod shell;
pub mod suites;
pub mod ui;

pub use error::{Result, ShopcheckError};
