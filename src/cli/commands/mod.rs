//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves settings
//! once and routes CLI subcommands to their implementations:
//! - Single binary with subcommands (`shopcheck admin`, `shopcheck verify`)
//! - Shared progress, summary and report rendering in [`display`]

pub mod admin;
pub mod dispatcher;
pub mod display;
pub mod sync;
pub mod verify;

pub use dispatcher::{resolve_settings, Command, CommandDispatcher, CommandResult};
