//! Verify command implementation.
//!
//! The `shopcheck verify` command checks a deployment's setup and lists the
//! environment variables it depends on.

use crate::cli::args::VerifyArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::http::ApiClient;
use crate::runner::{CheckRunner, RunContext};
use crate::suites::{verify, Suite};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The verify command implementation.
pub struct VerifyCommand {
    settings: Settings,
    args: VerifyArgs,
    json: bool,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(settings: &Settings, args: VerifyArgs, json: bool) -> Self {
        Self {
            settings: settings.clone(),
            args,
            json,
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.settings)?;

        let mut runner = CheckRunner::new(
            Suite::Verify.name(),
            RunContext::new(&self.settings.base_url),
        );
        runner.register_all(verify::checks(&client, &self.settings))?;

        let report = display::run_suite(ui, Suite::Verify, &mut runner);

        ui.message("");
        ui.message("Environment:");
        let lookup = |name: &str| std::env::var(name).ok();
        for (name, value) in verify::environment_report(lookup, &self.settings) {
            ui.show_key_value(&name, &value);
        }

        display::emit_report(ui, &report, self.args.report_dir.as_deref(), self.json)?;
        Ok(display::command_result(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsOverrides;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn lists_environment_after_failed_run() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::resolve(
            None,
            &SettingsOverrides {
                base_url: Some("http://127.0.0.1:9".to_string()),
                timeout_secs: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
        let args = VerifyArgs {
            report_dir: Some(temp.path().to_path_buf()),
        };
        let mut ui = MockUI::new();

        let result = VerifyCommand::new(&settings, args, false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.key_value("API_BASE_URL").as_deref(), Some("http://127.0.0.1:9"));
        assert!(ui.key_value("NEON_DATABASE_URL").is_some());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }
}
