//! The `shopcheck` command line: one subcommand per check suite.
//!
//! [`args`] holds the clap definitions. [`commands`] turns a parsed [`Cli`]
//! into resolved settings and runs the selected suite.

pub mod args;
pub mod commands;

pub use args::{AdminArgs, Cli, Commands, SyncArgs, VerifyArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
