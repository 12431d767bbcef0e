//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{LoginField, SettingsOverrides};

/// Shopcheck - API checks for the e-commerce backend.
#[derive(Debug, Parser)]
#[command(name = "shopcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the backend under test
    #[arg(short, long, global = true, env = "API_BASE_URL")]
    pub url: Option<String>,

    /// Per-call timeout in seconds
    #[arg(long, global = true, env = "SHOPCHECK_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Admin login identifier
    #[arg(long, global = true, env = "ADMIN_USERNAME")]
    pub username: Option<String>,

    /// Admin password
    #[arg(long, global = true, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Which login field carries the identifier
    #[arg(long, global = true, value_enum)]
    pub login_field: Option<LoginField>,

    /// Print the JSON report to stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Setting overrides from flags and environment.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_url: self.url.clone(),
            timeout_secs: self.timeout,
            login_field: self.login_field,
            identifier: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the admin workflow test
    Admin(AdminArgs),

    /// Drive and check primary/secondary database sync
    Sync(SyncArgs),

    /// Verify a deployment's setup
    Verify(VerifyArgs),
}

/// Arguments for the `admin` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AdminArgs {
    /// Directory for the JSON report
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Do not write a report file
    #[arg(long)]
    pub no_report: bool,

    /// Integration-test command to run after the API checks
    #[arg(long, value_name = "CMD")]
    pub integration_command: Option<String>,

    /// Working directory for the integration-test command
    #[arg(long, value_name = "DIR", requires = "integration_command")]
    pub integration_dir: Option<PathBuf>,

    /// Integration-test timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    pub integration_timeout: u64,
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SyncArgs {
    /// Seconds to wait before the final consistency check
    #[arg(long, value_name = "SECS", default_value_t = 2)]
    pub settle_secs: u64,

    /// User ids evaluated against the use-neon flag (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "admin,user1,user2")]
    pub flag_users: Vec<String>,

    /// Write a JSON report into this directory
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    /// Write a JSON report into this directory
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shopcheck",
            "admin",
            "--url",
            "http://localhost:3002",
            "--login-field",
            "email",
            "--no-report",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://localhost:3002"));
        assert_eq!(overrides.login_field, Some(LoginField::Email));
        match cli.command {
            Commands::Admin(args) => {
                assert!(args.no_report);
                assert_eq!(args.integration_timeout, 300);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn sync_defaults() {
        let cli = Cli::try_parse_from(["shopcheck", "sync"]).unwrap();
        match cli.command {
            Commands::Sync(args) => {
                assert_eq!(args.settle_secs, 2);
                assert_eq!(args.flag_users, vec!["admin", "user1", "user2"]);
                assert!(args.report_dir.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn flag_users_split_on_commas() {
        let cli = Cli::try_parse_from(["shopcheck", "sync", "--flag-users", "a,b"]).unwrap();
        match cli.command {
            Commands::Sync(args) => assert_eq!(args.flag_users, vec!["a", "b"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn integration_dir_requires_command() {
        let result = Cli::try_parse_from(["shopcheck", "admin", "--integration-dir", "backend"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["shopcheck"]).is_err());
    }
}
