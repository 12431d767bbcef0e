//! Sequential check runner.
//!
//! - [`check`] - check definitions and requirements
//! - [`context`] - run-scoped state shared between checks
//! - [`result`] - per-check results
//! - [`executor`] - the runner itself

pub mod check;
pub mod context;
pub mod executor;
pub mod result;

pub use check::{Check, CheckOutcome, CheckUnit, Requirement};
pub use context::RunContext;
pub use executor::{CheckRunner, RunProgress};
pub use result::{CheckResult, CheckStatus};
