//! HTTP access to the backend under test.
//!
//! - [`client`] - blocking client with per-call timeout and explicit results
//! - [`auth`] - credentials, login payloads, token alias resolution
//! - [`payload`] - accessors for loosely-shaped JSON bodies

pub mod auth;
pub mod client;
pub mod payload;

pub use auth::{login, login_payload, parse_login_response, Credential, LoginGrant};
pub use client::{ApiClient, ApiResponse, CallError, CallResult};
