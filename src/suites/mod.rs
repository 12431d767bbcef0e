//! Check suites.
//!
//! Each suite is a function returning its checks in run order; the caller
//! registers them on a [`CheckRunner`](crate::runner::CheckRunner).
//!
//! - [`admin`] - admin workflow test
//! - [`sync`] - primary/secondary database sync client
//! - [`verify`] - setup verification

pub mod admin;
mod common;
pub mod responses;
pub mod sync;
pub mod verify;

use std::fmt;

pub use admin::{AdminOptions, IntegrationTest};
pub use sync::SyncOptions;

/// The suites shipped with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    Admin,
    Sync,
    Verify,
}

impl Suite {
    /// Short name, used in report file names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Sync => "sync",
            Self::Verify => "verify",
        }
    }

    /// Header shown before the run.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Admin => "Admin Workflow Test",
            Self::Sync => "Database Sync",
            Self::Verify => "Setup Verification",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
