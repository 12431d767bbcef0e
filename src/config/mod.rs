//! Settings loading and resolution.
//!
//! - Schema definitions for the optional YAML file in [`schema`]
//! - File loading in [`loader`]
//! - Layered resolution into a [`Settings`] value in [`settings`]
//!
//! # Example
//!
//! ```
//! use shopcheck::config::{Settings, SettingsOverrides};
//!
//! let overrides = SettingsOverrides {
//!     base_url: Some("http://localhost:3002/".to_string()),
//!     ..Default::default()
//! };
//! let settings = Settings::resolve(None, &overrides).unwrap();
//! assert_eq!(settings.url("/api/auth/login"), "http://localhost:3002/api/auth/login");
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{load_settings_file, parse_settings};
pub use schema::{Endpoints, FileLoginSettings, FileSettings, LoginField};
pub use settings::{
    LoginSettings, Settings, SettingsOverrides, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOKEN_ALIASES,
};
