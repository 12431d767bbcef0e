//! Sync command implementation.
//!
//! The `shopcheck sync` command drives a primary/secondary database sync and
//! prints follow-up commands for monitoring it.

use std::time::Duration;

use crate::cli::args::SyncArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::http::ApiClient;
use crate::runner::{CheckRunner, RunContext};
use crate::suites::{sync, Suite, SyncOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The sync command implementation.
pub struct SyncCommand {
    settings: Settings,
    args: SyncArgs,
    json: bool,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(settings: &Settings, args: SyncArgs, json: bool) -> Self {
        Self {
            settings: settings.clone(),
            args,
            json,
        }
    }

    fn options(&self) -> SyncOptions {
        SyncOptions {
            settle: Duration::from_secs(self.args.settle_secs),
            flag_users: self.args.flag_users.clone(),
        }
    }
}

impl Command for SyncCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.settings)?;
        let options = self.options();

        let mut runner = CheckRunner::new(
            Suite::Sync.name(),
            RunContext::new(&self.settings.base_url),
        );
        runner.register_all(sync::checks(&client, &self.settings, &options))?;

        let report = display::run_suite(ui, Suite::Sync, &mut runner);

        if runner.context().credential().is_some() {
            ui.message("");
            ui.message("Next steps:");
            for step in sync::next_steps(&self.settings, runner.context()) {
                ui.message(&format!("  {}", step));
            }
        }

        display::emit_report(ui, &report, self.args.report_dir.as_deref(), self.json)?;
        Ok(display::command_result(&report))
    }
}
