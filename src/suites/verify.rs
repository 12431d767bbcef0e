//! Setup verification suite.
//!
//! A short pass over the pieces a fresh deployment needs: reachable API,
//! working admin login, DevCycle connected, secondary database configured,
//! and flag evaluation. Every check carries a hint for fixing it.

use crate::config::Settings;
use crate::http::payload::display_scalar;
use crate::http::ApiClient;
use crate::runner::{Check, CheckOutcome, Requirement, RunContext};

use super::common::{self, parse_success, secondary_unavailable, with_list_query};
use super::responses::{
    failure_message, ConsistencyReport, DevCycleStatusResponse, FlagTestResponse,
};

pub const API_CONNECTIVITY: &str = "API Connectivity";
pub const ADMIN_AUTHENTICATION: &str = "Admin Authentication";
pub const DEVCYCLE_INTEGRATION: &str = "DevCycle Integration";
pub const DATABASE_SETUP: &str = "Database Setup";
pub const FEATURE_FLAG_TEST: &str = "Feature Flag Test";

/// User evaluated by the feature-flag check.
const FLAG_USER: &str = "admin";

/// Environment variables listed after a verify run.
pub const ENVIRONMENT_VARIABLES: &[&str] = &[
    "API_BASE_URL",
    "ADMIN_USERNAME",
    "ADMIN_PASSWORD",
    "NEON_DATABASE_URL",
    "SECONDARY_DATABASE_ENABLED",
    "DEVCYCLE_SERVER_SDK_KEY",
];

/// Build the verify suite's checks in run order.
pub fn checks<'a>(client: &'a ApiClient, settings: &'a Settings) -> Vec<Check<'a>> {
    let endpoints = &settings.endpoints;
    vec![
        common::reachability(API_CONNECTIVITY, client, &endpoints.login),
        common::admin_login(ADMIN_AUTHENTICATION, client, settings).gating(),
        devcycle_integration(client, &endpoints.devcycle_status),
        database_setup(client, &endpoints.consistency),
        feature_flag_test(client, &endpoints.use_neon_flag),
    ]
}

fn devcycle_integration<'a>(client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(DEVCYCLE_INTEGRATION, move |ctx: &mut RunContext| {
        let response = client.get(path, ctx.credential())?;
        let body: DevCycleStatusResponse =
            match parse_success("DevCycle status failed", response)? {
                Ok(body) => body,
                Err(outcome) => return Ok(outcome),
            };
        let source = &body.status.source;
        if body.success && body.status.is_dev_cycle_connected {
            Ok(CheckOutcome::pass(format!("DevCycle status: {}", source)))
        } else {
            Ok(CheckOutcome::fail_with_details(
                format!("DevCycle status: {}", source),
                failure_message(body.message.as_deref(), "DevCycle is not connected"),
            ))
        }
    })
    .requires(Requirement::Credential)
    .hint("Set DEVCYCLE_SERVER_SDK_KEY on the backend and restart it.")
}

fn database_setup<'a>(client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(DATABASE_SETUP, move |ctx: &mut RunContext| {
        let response = client.get(path, ctx.credential())?;
        if secondary_unavailable(&response) {
            return Ok(CheckOutcome::fail(
                "Secondary database not available (check NEON_DATABASE_URL)",
            ));
        }
        let report: ConsistencyReport =
            match parse_success("Database check failed", response)? {
                Ok(report) => report,
                Err(outcome) => return Ok(outcome),
            };
        if !report.success {
            return Ok(CheckOutcome::fail(failure_message(
                report.message.as_deref(),
                "Consistency check was not successful",
            )));
        }
        Ok(CheckOutcome::pass(format!(
            "{} - {}",
            report.counts(),
            report.message.as_deref().unwrap_or("no message")
        )))
    })
    .requires(Requirement::Credential)
    .hint("Set NEON_DATABASE_URL and SECONDARY_DATABASE_ENABLED=true on the backend.")
}

fn feature_flag_test<'a>(client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(FEATURE_FLAG_TEST, move |ctx: &mut RunContext| {
        let path = with_list_query(path, "userIds", &[FLAG_USER.to_string()]);
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
        let value = body
            .results
            .get(FLAG_USER)
            .map(display_scalar)
            .unwrap_or_else(|| "n/a".to_string());
        Ok(CheckOutcome::pass(format!(
            "Flag source: {}, Admin value: {}",
            body.source, value
        )))
    })
    .requires(Requirement::Credential)
    .hint("Check the use-neon flag exists in DevCycle, or that fallback flags are enabled.")
}

/// Environment variables relevant to the setup, as `(name, display)` pairs.
///
/// Secrets are shown only as `Set`/`Not set`. `lookup` is normally
/// `std::env::var(..).ok()`; the URL and username come from `settings` so the
/// listing reflects what the run actually used.
pub fn environment_report<F>(lookup: F, settings: &Settings) -> Vec<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    ENVIRONMENT_VARIABLES
        .iter()
        .map(|&name| {
            let display = match name {
                "API_BASE_URL" => settings.base_url.clone(),
                "ADMIN_USERNAME" => settings.login.identifier.clone(),
                "SECONDARY_DATABASE_ENABLED" => {
                    lookup(name).unwrap_or_else(|| "true".to_string())
                }
                _ => match lookup(name) {
                    Some(v) if !v.is_empty() => "Set".to_string(),
                    _ => "Not set".to_string(),
                },
            };
            (name.to_string(), display)
        })
        .collect()
}
