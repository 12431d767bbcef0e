//! Check builders shared by more than one suite.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Settings;
use crate::http::payload::item_count;
use crate::http::{login, ApiClient, ApiResponse, CallError};
use crate::runner::{Check, CheckOutcome, Requirement, RunContext};
use crate::ui::hints;

/// Reachability check: any HTTP response at all means the API is up.
pub(crate) fn reachability<'a>(name: &str, client: &'a ApiClient, path: &'a str) -> Check<'a> {
    Check::new(name, move |_: &mut RunContext| {
        let response = client.get(path, None)?;
        Ok(CheckOutcome::pass(format!(
            "API reachable at {} (HTTP {})",
            client.base_url(),
            response.status
        )))
    })
    .gating()
    .hint(hints::unreachable_backend(client.base_url()))
}

/// Log in and store the credential and principal id in the run context.
pub(crate) fn admin_login<'a>(
    name: &str,
    client: &'a ApiClient,
    settings: &'a Settings,
) -> Check<'a> {
    Check::new(name, move |ctx: &mut RunContext| match login(client, settings) {
        Ok(grant) => {
            ctx.apply_grant(&grant);
            Ok(CheckOutcome::pass(format!(
                "Role: {}, User ID: {}, Token: {}",
                grant.role.as_deref().unwrap_or("Unknown"),
                grant.principal_id.as_deref().unwrap_or("Unknown"),
                grant.credential.redacted()
            )))
        }
        Err(err) => Ok(CheckOutcome::fail(format!("Login failed: {}", err))),
    })
    .hint(hints::login_rejected())
}

/// Authenticated GET of a list endpoint, reporting the item count.
pub(crate) fn list<'a>(
    name: &str,
    noun: &'static str,
    client: &'a ApiClient,
    path: &'a str,
) -> Check<'a> {
    Check::new(name, move |ctx: &mut RunContext| {
        let response = client.get(path, ctx.credential())?.expect_success()?;
        let body: Value = response.json()?;
        let count = item_count(&body)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        Ok(CheckOutcome::pass(format!("Retrieved {} {}", count, noun)))
    })
    .requires(Requirement::Credential)
}

/// Parse a 2xx body, or describe the failure.
///
/// Returns `Ok(Err(outcome))` for a non-2xx response so callers can report
/// the backend's own `message`.
pub(crate) fn parse_success<T: DeserializeOwned>(
    what: &str,
    response: ApiResponse,
) -> Result<Result<T, CheckOutcome>, CallError> {
    if !response.is_success() {
        return Ok(Err(http_failure(what, &response)));
    }
    Ok(Ok(response.json()?))
}

/// Failure outcome for a non-2xx response.
pub(crate) fn http_failure(what: &str, response: &ApiResponse) -> CheckOutcome {
    let reason = match response.error_message() {
        Some(message) => format!("HTTP {}: {}", response.status, message),
        None => response.summary(),
    };
    CheckOutcome::fail(format!("{}: {}", what, reason))
}

/// Append `?key=a,b,c` to a path.
pub(crate) fn with_list_query(path: &str, key: &str, values: &[String]) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", path, separator, key, values.join(","))
}

/// Whether a consistency response means the secondary database is off.
///
/// A 2xx body with `success: true` never does, whatever its message says.
pub(crate) fn secondary_unavailable(response: &ApiResponse) -> bool {
    if response.status == 503 {
        return true;
    }
    let succeeded = response.is_success()
        && response
            .json::<Value>()
            .ok()
            .and_then(|body| body.get("success").and_then(Value::as_bool))
            .unwrap_or(false);
    !succeeded && response.body.to_lowercase().contains("not available")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn list_query_is_appended() {
        let users = vec!["admin".to_string(), "user1".to_string()];
        assert_eq!(
            with_list_query("/api/flags/test", "userIds", &users),
            "/api/flags/test?userIds=admin,user1"
        );
        assert_eq!(
            with_list_query("/api/flags/test?x=1", "userIds", &users),
            "/api/flags/test?x=1&userIds=admin,user1"
        );
    }

    #[test]
    fn http_failure_prefers_backend_message() {
        let outcome = http_failure(
            "Cart items sync failed",
            &response(500, r#"{"message":"Neon unreachable"}"#),
        );
        assert_eq!(
            outcome.error.as_deref(),
            Some("Cart items sync failed: HTTP 500: Neon unreachable")
        );

        let outcome = http_failure("Sync failed", &response(502, "Bad Gateway"));
        assert_eq!(outcome.error.as_deref(), Some("Sync failed: HTTP 502: Bad Gateway"));
    }

    #[test]
    fn parse_success_splits_outcomes() {
        let ok: Value = parse_success("x", response(200, r#"{"a":1}"#))
            .unwrap()
            .unwrap();
        assert_eq!(ok["a"], 1);

        let failed = parse_success::<Value>("x", response(404, "missing"))
            .unwrap()
            .unwrap_err();
        assert!(!failed.passed);

        let malformed = parse_success::<Value>("x", response(200, "<html>"));
        assert!(matches!(malformed, Err(CallError::Malformed { .. })));
    }

    #[test]
    fn secondary_unavailable_detection() {
        assert!(secondary_unavailable(&response(503, "")));
        assert!(secondary_unavailable(&response(
            500,
            r#"{"message":"Secondary database not available"}"#
        )));
        assert!(!secondary_unavailable(&response(200, r#"{"success":true}"#)));
        assert!(!secondary_unavailable(&response(
            200,
            r#"{"success":true,"message":"Replica lag report not available yet"}"#
        )));
        assert!(secondary_unavailable(&response(
            200,
            r#"{"success":false,"message":"Secondary database not available"}"#
        )));
    }
}
