//! Blocking API client.
//!
//! Every call returns `Result<ApiResponse, CallError>`. A non-2xx status is
//! still `Ok`: the caller decides whether 401 is a failure (ordinary checks)
//! or the expected outcome (security checks). Use
//! [`ApiResponse::expect_success`] to turn unexpected statuses into errors.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Result, ShopcheckError};

use super::auth::Credential;

/// Longest body excerpt carried in error messages.
const MAX_BODY_EXCERPT: usize = 200;

/// Failure of a single HTTP call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// No response within the per-call timeout.
    #[error("Request to {url} timed out after {}s", timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    /// The service could not be reached.
    #[error("Connection failed: {url}: {message}")]
    Connect { url: String, message: String },

    /// Any other transport-level failure.
    #[error("Request failed: {url}: {message}")]
    Transport { url: String, message: String },

    /// The response arrived with a status the caller did not accept.
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {message}")]
    Malformed { message: String },
}

impl CallError {
    /// Whether the service was never reached.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connect { .. })
    }

    /// Build a shape error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    fn from_reqwest(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else if err.is_connect() {
            Self::Connect {
                url: url.to_string(),
                message: root_cause(&err),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                message: root_cause(&err),
            }
        }
    }
}

fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

/// Result of a single HTTP call.
pub type CallResult = std::result::Result<ApiResponse, CallError>;

/// A received HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Status code.
    pub status: u16,
    /// Content-Type header, if any.
    pub content_type: Option<String>,
    /// Raw body.
    pub body: String,
}

impl ApiResponse {
    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 401 or 403.
    pub fn is_rejection(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Whether the body claims to be JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    }

    /// Keep the response if its status is one of `accepted`.
    pub fn expect_status(self, accepted: &[u16]) -> std::result::Result<Self, CallError> {
        if accepted.contains(&self.status) {
            Ok(self)
        } else {
            Err(CallError::UnexpectedStatus {
                status: self.status,
                body: self.excerpt(),
            })
        }
    }

    /// Keep the response if it is 2xx.
    pub fn expect_success(self) -> std::result::Result<Self, CallError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CallError::UnexpectedStatus {
                status: self.status,
                body: self.excerpt(),
            })
        }
    }

    /// Parse the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, CallError> {
        serde_json::from_str(&self.body).map_err(|e| {
            CallError::malformed(format!("invalid JSON in HTTP {} response: {}", self.status, e))
        })
    }

    /// The `message` field of a JSON error body, if there is one.
    pub fn error_message(&self) -> Option<String> {
        if !self.is_json() {
            return None;
        }
        let value: serde_json::Value = self.json().ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from)
    }

    /// Status plus truncated body, e.g. `HTTP 503: Service Unavailable`.
    pub fn summary(&self) -> String {
        format!("HTTP {}: {}", self.status, self.excerpt())
    }

    /// Body truncated for error messages.
    pub fn excerpt(&self) -> String {
        let trimmed = self.body.trim();
        if trimmed.chars().count() <= MAX_BODY_EXCERPT {
            trimmed.to_string()
        } else {
            let cut: String = trimmed.chars().take(MAX_BODY_EXCERPT).collect();
            format!("{}…", cut)
        }
    }
}

/// HTTP client bound to one base URL.
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client from resolved settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_timeout(&settings.base_url, settings.timeout)
    }

    /// Create a client for a base URL with a per-call timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("shopcheck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ShopcheckError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET a path.
    pub fn get(&self, path: &str, credential: Option<&Credential>) -> CallResult {
        let url = self.url(path);
        self.send("GET", &url, self.client.get(&url), credential)
    }

    /// POST a JSON body.
    pub fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        credential: Option<&Credential>,
    ) -> CallResult {
        let url = self.url(path);
        self.send("POST", &url, self.client.post(&url).json(body), credential)
    }

    /// POST without a body.
    pub fn post_empty(&self, path: &str, credential: Option<&Credential>) -> CallResult {
        let url = self.url(path);
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        self.send("POST", &url, request, credential)
    }

    /// DELETE a path.
    pub fn delete(&self, path: &str, credential: Option<&Credential>) -> CallResult {
        let url = self.url(path);
        self.send("DELETE", &url, self.client.delete(&url), credential)
    }

    fn send(
        &self,
        method: &str,
        url: &str,
        mut request: RequestBuilder,
        credential: Option<&Credential>,
    ) -> CallResult {
        if let Some(credential) = credential {
            request = request.header(reqwest::header::AUTHORIZATION, credential.header_value());
        }

        debug!(
            method,
            url,
            authenticated = credential.is_some(),
            "Sending request"
        );

        let response = request
            .send()
            .map_err(|e| CallError::from_reqwest(url, self.timeout, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response
            .text()
            .map_err(|e| CallError::from_reqwest(url, self.timeout, e))?;

        debug!(method, url, status, bytes = body.len(), "Received response");

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_and_rejection_classes() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(401, "").is_success());
        assert!(response(401, "").is_rejection());
        assert!(response(403, "").is_rejection());
        assert!(!response(404, "").is_rejection());
        assert!(!response(500, "").is_rejection());
    }

    #[test]
    fn expect_success_carries_status_and_body() {
        let err = response(500, "{\"message\":\"boom\"}")
            .expect_success()
            .unwrap_err();
        assert_eq!(
            err,
            CallError::UnexpectedStatus {
                status: 500,
                body: "{\"message\":\"boom\"}".to_string()
            }
        );
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn expect_status_accepts_listed_codes() {
        assert!(response(201, "").expect_status(&[200, 201]).is_ok());
        assert!(response(202, "").expect_status(&[200, 201]).is_err());
    }

    #[test]
    fn json_parse_failure_is_malformed() {
        let err = response(200, "<html>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, CallError::Malformed { .. }));
        assert!(err.to_string().contains("HTTP 200"));
    }

    #[test]
    fn error_message_reads_json_message_field() {
        let resp = response(503, r#"{"success":false,"message":"Secondary database not available"}"#);
        assert_eq!(
            resp.error_message().as_deref(),
            Some("Secondary database not available")
        );

        let plain = ApiResponse {
            status: 500,
            content_type: Some("text/plain".to_string()),
            body: "oops".to_string(),
        };
        assert_eq!(plain.error_message(), None);
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let long = "x".repeat(500);
        let excerpt = response(500, &long).excerpt();
        assert!(excerpt.ends_with('…'));
        assert_eq!(excerpt.chars().count(), MAX_BODY_EXCERPT + 1);
    }

    #[test]
    fn summary_prefixes_status() {
        assert_eq!(response(404, " Not Found\n").summary(), "HTTP 404: Not Found");
    }

    #[test]
    fn url_joins_paths() {
        let client = ApiClient::with_timeout("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/api/products"), "http://localhost:8080/api/products");
        assert_eq!(client.url("api/products"), "http://localhost:8080/api/products");
        assert_eq!(client.url("http://other/x"), "http://other/x");
    }

    #[test]
    fn get_attaches_bearer_credential() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/products")
                .header("Authorization", "Bearer abc123");
            then.status(200)
                .header("content-type", "application/json")
                .body("[]");
        });

        let client = ApiClient::with_timeout(&server.base_url(), Duration::from_secs(5)).unwrap();
        let credential = Credential::new("abc123");
        let resp = client.get("/api/products", Some(&credential)).unwrap();

        mock.assert();
        assert_eq!(resp.status, 200);
        assert!(resp.is_json());
        assert_eq!(resp.body, "[]");
    }

    #[test]
    fn get_without_credential_sends_no_authorization_header() {
        let server = MockServer::start();
        let with_header = server.mock(|when, then| {
            when.method(GET).path("/api/admin/users").header_exists("Authorization");
            then.status(200);
        });
        let without_header = server.mock(|when, then| {
            when.method(GET).path("/api/admin/users");
            then.status(401);
        });

        let client = ApiClient::with_timeout(&server.base_url(), Duration::from_secs(5)).unwrap();
        let resp = client.get("/api/admin/users", None).unwrap();

        assert!(resp.is_rejection());
        with_header.assert_calls(0);
        without_header.assert();
    }

    #[test]
    fn post_json_sends_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(serde_json::json!({"username": "admin", "password": "pw"}));
            then.status(200).body("{}");
        });

        let client = ApiClient::with_timeout(&server.base_url(), Duration::from_secs(5)).unwrap();
        let body = serde_json::json!({"username": "admin", "password": "pw"});
        let resp = client.post_json("/api/auth/login", &body, None).unwrap();

        mock.assert();
        assert!(resp.is_success());
    }

    #[test]
    fn unreachable_host_is_connectivity_error() {
        // Port 9 (discard) on localhost is closed on typical machines.
        let client = ApiClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.get("/actuator/health", None).unwrap_err();
        assert!(err.is_connectivity(), "unexpected error: {:?}", err);
    }
}
