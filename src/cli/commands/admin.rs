//! Admin command implementation.
//!
//! The `shopcheck admin` command runs the admin workflow suite and writes a
//! JSON report.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::AdminArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::http::ApiClient;
use crate::runner::{CheckRunner, RunContext};
use crate::suites::{admin, AdminOptions, IntegrationTest, Suite};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The admin command implementation.
pub struct AdminCommand {
    settings: Settings,
    args: AdminArgs,
    json: bool,
}

impl AdminCommand {
    /// Create a new admin command.
    pub fn new(settings: &Settings, args: AdminArgs, json: bool) -> Self {
        Self {
            settings: settings.clone(),
            args,
            json,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AdminArgs {
        &self.args
    }

    fn options(&self) -> AdminOptions {
        AdminOptions {
            integration: self
                .args
                .integration_command
                .as_ref()
                .map(|command| IntegrationTest {
                    command: command.clone(),
                    dir: self.args.integration_dir.clone(),
                    timeout: Duration::from_secs(self.args.integration_timeout),
                }),
        }
    }

    fn report_dir(&self) -> Option<PathBuf> {
        if self.args.no_report {
            None
        } else {
            Some(
                self.args
                    .report_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(".")),
            )
        }
    }
}

impl Command for AdminCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.settings)?;
        let options = self.options();

        let mut runner = CheckRunner::new(
            Suite::Admin.name(),
            RunContext::new(&self.settings.base_url),
        );
        runner.register_all(admin::checks(&client, &self.settings, &options))?;

        let report = display::run_suite(ui, Suite::Admin, &mut runner);
        display::emit_report(ui, &report, self.report_dir().as_deref(), self.json)?;

        Ok(display::command_result(&report))
    }
}
