//! Resolved run settings.
//!
//! [`Settings`] is built once per process from built-in defaults, an optional
//! settings file, and [`SettingsOverrides`] (CLI flags, which clap already
//! merged with environment variables). Check code only ever reads a
//! `&Settings`; nothing below this point looks at the environment.

use std::time::Duration;

use crate::config::schema::{Endpoints, FileSettings, LoginField};
use crate::error::{Result, ShopcheckError};

/// Default base URL of the backend under test.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Response fields that may carry the login token, in lookup order.
pub const DEFAULT_TOKEN_ALIASES: &[&str] = &["token", "accessToken", "access_token"];

/// Credential seed and login response handling.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSettings {
    /// Which payload field carries the identifier.
    pub field: LoginField,
    /// Username or email.
    pub identifier: String,
    /// Password.
    pub password: String,
    /// Token field aliases, tried in order.
    pub token_aliases: Vec<String>,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            field: LoginField::Username,
            identifier: "admin".to_string(),
            password: "password".to_string(),
            token_aliases: DEFAULT_TOKEN_ALIASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub login_field: Option<LoginField>,
    pub identifier: Option<String>,
    pub password: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-call timeout.
    pub timeout: Duration,
    /// Login settings.
    pub login: LoginSettings,
    /// Endpoint paths.
    pub endpoints: Endpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            login: LoginSettings::default(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Settings {
    /// Resolve settings: defaults, then the file, then overrides.
    pub fn resolve(file: Option<FileSettings>, overrides: &SettingsOverrides) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(file) = file {
            settings.apply_file(file);
        }
        settings.apply_overrides(overrides);
        settings.validate()?;

        settings.base_url = settings.base_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(field) = file.login.field {
            self.login.field = field;
        }
        if let Some(identifier) = file.login.identifier {
            self.login.identifier = identifier;
        }
        if let Some(password) = file.login.password {
            self.login.password = password;
        }
        if let Some(aliases) = file.login.token_aliases {
            self.login.token_aliases = aliases;
        }
        self.endpoints = file.endpoints;
    }

    fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(url) = &overrides.base_url {
            self.base_url = url.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(field) = overrides.login_field {
            self.login.field = field;
        }
        if let Some(identifier) = &overrides.identifier {
            self.login.identifier = identifier.clone();
        }
        if let Some(password) = &overrides.password {
            self.login.password = password.clone();
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ShopcheckError::InvalidSetting {
                key: "base_url".to_string(),
                message: format!(
                    "'{}' must start with http:// or https://",
                    self.base_url
                ),
            });
        }
        if self.timeout.is_zero() {
            return Err(ShopcheckError::InvalidSetting {
                key: "timeout".to_string(),
                message: "must be at least 1 second".to_string(),
            });
        }
        if self.login.token_aliases.is_empty() {
            return Err(ShopcheckError::InvalidSetting {
                key: "login.token_aliases".to_string(),
                message: "at least one alias is required".to_string(),
            });
        }
        Ok(())
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
