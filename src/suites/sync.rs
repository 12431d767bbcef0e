//! Database synchronization suite.
//!
//! Logs in, inspects the feature-flag provider, then drives a cart-item sync
//! and a bidirectional sync between the primary and secondary databases,
//! checking consistency before and after.

use std::thread;
use std::time::Duration;

use crate::config::Settings;
use crate::http::payload::display_scalar;
use crate::http::ApiClient;
use crate::runner::{Check, CheckOutcome, Requirement, RunContext};

use super::common::{self, parse_success, secondary_unavailable, with_list_query};
use super::responses::{
    failure_message, BidirectionalSyncResponse, CartSyncResponse, ConsistencyReport,
    DevCycleStatusResponse, FlagTestResponse,
};

pub const API_CONNECTIVITY: &str = "API Connectivity";
pub const ADMIN_LOGIN: &str = "Admin Login";
pub const DEVCYCLE_STATUS: &str = "DevCycle Status";
pub const INITIAL_CONSISTENCY: &str = "Initial Consistency";
pub const CART_ITEMS_SYNC: &str = "Cart Items Sync";
pub const BIDIRECTIONAL_SYNC: &str = "Bidirectional Sync";
pub const FINAL_CONSISTENCY: &str = "Final Consistency";
pub const USE_NEON_FLAG: &str = "Use-Neon Flag";

/// Default wait between the bidirectional sync and the final consistency check.
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(2);

/// Default users evaluated against the `use-neon` flag.
pub const DEFAULT_FLAG_USERS: &[&str] = &["admin", "user1", "user2"];

const SECONDARY_HINT: &str =
    "Set NEON_DATABASE_URL and SECONDARY_DATABASE_ENABLED=true on the backend, then restart it.";

/// Options for the sync suite.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Wait before the final consistency check.
    pub settle: Duration,
    /// User ids for the flag evaluation.
    pub flag_users: Vec<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            settle: DEFAULT_SETTLE,
            flag_users: DEFAULT_FLAG_USERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Build the sync suite's checks in run order.
pub fn checks<'a>(
    client: &'a ApiClient,
    settings: &'a Settings,
    options: &'a SyncOptions,
) -> Vec<Check<'a>> {
    let endpoints = &settings.endpoints;
    vec![
        common::reachability(API_CONNECTIVITY, client, &endpoints.login),
        common::admin_login(ADMIN_LOGIN, client, settings).gating(),
        devcycle_status(client, &endpoints.devcycle_status),
        consistency(INITIAL_CONSISTENCY, client, &endpoints.consistency, None),
        cart_items_sync(client, &endpoints.sync_cart_items),
        bidirectional_sync(client, &endpoints.sync_bidirectional).gating(),
        consistency(
            FINAL_CONSISTENCY,
            client,
            &endpoints.consistency,
            Some(options.settle),
        ),
        use_neon_flag(client, &endpoints.use_neon_flag, &options.flag_users),
    ]
}

fn devcycle_status<'a>(client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(DEVCYCLE_STATUS, move |ctx: &mut RunContext| {
        let response = client.get(path, ctx.credential())?;
        let body: DevCycleStatusResponse = match parse_success("DevCycle status failed", response)? {
            Ok(body) => body,
            Err(outcome) => return Ok(outcome),
        };
        if !body.success {
            return Ok(CheckOutcome::fail(failure_message(
                body.message.as_deref(),
                "DevCycle status request was not successful",
            )));
        }

        let status = &body.status;
        let mode = if status.is_dev_cycle_connected {
            "DevCycle connected"
        } else {
            "Using fallback flags"
        };
        let admin_value = status
            .use_neon_flag_tests
            .get("admin")
            .map(display_scalar)
            .unwrap_or_else(|| "n/a".to_string());
        Ok(CheckOutcome::pass(format!(
            "{} (source: {}), use-neon for admin: {}",
            mode, status.source, admin_value
        )))
    })
    .requires(Requirement::Credential)
    .hint("Set DEVCYCLE_SERVER_SDK_KEY on the backend to use DevCycle instead of fallback flags.")
}

fn consistency<'a>(
    name: &'static str,
    client: &'a ApiClient,
    path: &'a str,
    settle: Option<Duration>,
) -> Check<'a> {
    Check::new(name, move |ctx: &mut RunContext| {
        if let Some(settle) = settle {
            thread::sleep(settle);
        }
        let response = client.get(path, ctx.credential())?;
        // Nothing left to sync against; other failures let the run go on.
        if secondary_unavailable(&response) {
            return Ok(CheckOutcome::fail_and_halt(format!(
                "Secondary database not available (HTTP {})",
                response.status
            )));
        }
        let report: ConsistencyReport =
            match parse_success("Consistency check failed", response)? {
                Ok(report) => report,
                Err(outcome) => return Ok(outcome),
            };
        if !report.success {
            return Ok(CheckOutcome::fail(failure_message(
                report.message.as_deref(),
                "Consistency check was not successful",
            )));
        }

        let verdict = if report.is_consistent {
            "consistent"
        } else {
            "inconsistent"
        };
        let details = format!("{} ({})", report.counts(), verdict);

        // The initial snapshot only has to be readable.
        if settle.is_some() && !report.is_consistent {
            return Ok(CheckOutcome::fail_with_details(
                details,
                failure_message(report.message.as_deref(), "Databases are not consistent"),
            ));
        }
        Ok(CheckOutcome::pass(details))
    })
    .requires(Requirement::Credential)
    .hint(SECONDARY_HINT)
}

fn cart_items_sync<'a>(client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(CART_ITEMS_SYNC, move |ctx: &mut RunContext| {
        let response = client.post_empty(path, ctx.credential())?;
        let body: CartSyncResponse = match parse_success("Cart items sync failed", response)? {
            Ok(body) => body,
            Err(outcome) => return Ok(outcome),
        };
        if !body.success {
            return Ok(CheckOutcome::fail(failure_message(
                body.message.as_deref(),
                "Cart items sync was not successful",
            )));
        }
        Ok(CheckOutcome::pass(format!(
            "Synced {} cart items",
            body.synced_count
        )))
    })
    .requires(Requirement::Credential)
}

fn bidirectional_sync<'a>(client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(BIDIRECTIONAL_SYNC, move |ctx: &mut RunContext| {
        let response = client.post_empty(path, ctx.credential())?;
        let body: BidirectionalSyncResponse =
            match parse_success("Bidirectional sync failed", response)? {
                Ok(body) => body,
                Err(outcome) => return Ok(outcome),
            };
        if !body.success {
            return Ok(CheckOutcome::fail(failure_message(
                body.message.as_deref(),
                "Bidirectional sync was not successful",
            )));
        }
        Ok(CheckOutcome::pass(format!(
            "Primary -> Secondary: {}, Secondary -> Primary: {}, at {}",
            body.primary_to_secondary_count,
            body.secondary_to_primary_count,
            body.timestamp.as_deref().unwrap_or("unknown time")
        )))
    })
    .requires(Requirement::Credential)
    .gating()
}

fn use_neon_flag<'a>(client: &'a ApiClient, path: &'a str, users: &'a [String]) -> Check<'a> {
    Check::new(USE_NEON_FLAG, move |ctx: &mut RunContext| {
        let path = with_list_query(path, "userIds", users);
        let response = client.get(&path, ctx.credential())?;
        let body: FlagTestResponse = match parse_success("Flag test failed", response)? {
            Ok(body) => body,
            Err(outcome) => return Ok(outcome),
        };
        if !body.success {
            return Ok(CheckOutcome::fail(failure_message(
                body.message.as_deref(),
                "Flag test was not successful",
            )));
        }

        let values: Vec<String> = body
            .results
            .iter()
            .map(|(user, value)| format!("{}={}", user, display_scalar(value)))
            .collect();
        Ok(CheckOutcome::pass(format!(
            "Source: {}; {}",
            body.source,
            values.join(", ")
        )))
    })
    .requires(Requirement::Credential)
}

/// Follow-up commands printed after a sync run.
///
/// Only the redacted token prefix is included.
pub fn next_steps(settings: &Settings, ctx: &RunContext) -> Vec<String> {
    let auth = ctx
        .credential()
        .map(|c| format!(" -H 'Authorization: Bearer {}'", c.redacted()))
        .unwrap_or_default();
    vec![
        format!(
            "Monitor consistency: curl{} {}",
            auth,
            settings.url(&settings.endpoints.consistency)
        ),
        format!(
            "Re-run a full sync: curl -X POST{} {}",
            auth,
            settings.url(&settings.endpoints.sync_bidirectional)
        ),
        "Toggle the use-neon flag in DevCycle to route reads to the secondary database."
            .to_string(),
    ]
}
