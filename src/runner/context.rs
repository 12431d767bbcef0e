//! Run-scoped state shared between checks.

use std::collections::HashMap;

use crate::http::{Credential, LoginGrant};

/// State produced by one check and consumed by later ones.
///
/// Owned by the [`CheckRunner`](super::CheckRunner) for one run and dropped
/// with it.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    base_url: String,
    credential: Option<Credential>,
    principal_id: Option<String>,
    values: HashMap<String, String>,
}

impl RunContext {
    /// Create an empty context for a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Base URL of the backend under test.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bearer credential, if a login succeeded.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// The authenticated principal's id, if known.
    pub fn principal_id(&self) -> Option<&str> {
        self.principal_id.as_deref()
    }

    /// Store a login result.
    pub fn apply_grant(&mut self, grant: &LoginGrant) {
        self.credential = Some(grant.credential.clone());
        self.principal_id = grant.principal_id.clone();
    }

    /// Store a named value for later checks.
    pub fn store(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a named value.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
