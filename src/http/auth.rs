//! Credentials and login.
//!
//! The backend variants disagree on both the login payload (`email` or
//! `username`) and the token field (`token`, `accessToken`, `access_token`).
//! Both are settings; the response is resolved once into a [`LoginGrant`].

use std::fmt;

use serde_json::{json, Value};
use tracing::debug;

use crate::config::{LoginSettings, Settings};

use super::client::{ApiClient, CallError};
use super::payload::id_string;

/// Number of token characters kept by [`Credential::redacted`].
const REDACTED_PREFIX_LEN: usize = 8;

/// A bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Short prefix safe to print in logs and console output.
    pub fn redacted(&self) -> String {
        let prefix: String = self.token.chars().take(REDACTED_PREFIX_LEN).collect();
        format!("{}…", prefix)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.redacted()).finish()
    }
}

/// A successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginGrant {
    /// The issued credential.
    pub credential: Credential,
    /// `user.id` from the response, if present.
    pub principal_id: Option<String>,
    /// `user.role` from the response, if present.
    pub role: Option<String>,
}

/// Build the login request body.
pub fn login_payload(login: &LoginSettings) -> Value {
    let mut body = serde_json::Map::new();
    body.insert(login.field.key().to_string(), json!(login.identifier));
    body.insert("password".to_string(), json!(login.password));
    Value::Object(body)
}

/// Resolve a login response body into a grant.
///
/// Aliases are tried in order; the first one holding a non-empty string wins.
pub fn parse_login_response(body: &Value, aliases: &[String]) -> Result<LoginGrant, CallError> {
    let token = aliases
        .iter()
        .find_map(|alias| {
            body.get(alias)
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
        })
        .ok_or_else(|| {
            CallError::malformed(format!(
                "no token in login response (looked for: {})",
                aliases.join(", ")
            ))
        })?;

    let user = body.get("user");
    let principal_id = user.and_then(|u| u.get("id")).and_then(id_string);
    let role = user
        .and_then(|u| u.get("role"))
        .and_then(Value::as_str)
        .map(String::from);

    Ok(LoginGrant {
        credential: Credential::new(token),
        principal_id,
        role,
    })
}

/// Log in with the configured credentials.
///
/// Any non-2xx status is an error: the login check fails and every check
/// that needs the credential is skipped.
pub fn login(client: &ApiClient, settings: &Settings) -> Result<LoginGrant, CallError> {
    let payload = login_payload(&settings.login);
    debug!(
        field = settings.login.field.key(),
        identifier = %settings.login.identifier,
        "Logging in"
    );

    let response = client
        .post_json(&settings.endpoints.login, &payload, None)?
        .expect_success()?;
    let body: Value = response.json()?;
    parse_login_response(&body, &settings.login.token_aliases)
}
