//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings_file, Settings};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for progress, summary and hints
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Resolve settings from the optional file and the CLI/environment overrides.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let file = cli.config.as_deref().map(load_settings_file).transpose()?;
    let settings = Settings::resolve(file, &cli.overrides())?;
    debug!(
        base_url = %settings.base_url,
        timeout_secs = settings.timeout.as_secs(),
        login_field = settings.login.field.key(),
        "Resolved settings"
    );
    Ok(settings)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
    json: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher for resolved settings.
    pub fn new(settings: Settings, json: bool) -> Self {
        Self { settings, json }
    }

    /// Resolve settings from the parsed CLI and create a dispatcher.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::new(resolve_settings(cli)?, cli.json))
    }

    /// The settings every command runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Admin(args) => {
                let cmd = super::admin::AdminCommand::new(&self.settings, args.clone(), self.json);
                cmd.execute(ui)
            }
            Commands::Sync(args) => {
                let cmd = super::sync::SyncCommand::new(&self.settings, args.clone(), self.json);
                cmd.execute(ui)
            }
            Commands::Verify(args) => {
                let cmd = super::verify::VerifyCommand::new(&self.settings, args.clone(), self.json);
                cmd.execute(ui)
            }
        }
    }
}
