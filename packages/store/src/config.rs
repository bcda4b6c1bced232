//! # Client configuration (`taskify.toml`)
//!
//! Defines the TOML file the web client embeds at build time to locate the
//! remote Taskify API and to name the session credential.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://taskify-backend-1-ymjh.onrender.com"
//!
//! [session]
//! cookie_name = "jwt_token"   # name of the stored bearer credential
//! expiry_days = 30            # lifetime of the credential after login
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`TaskifyConfig`] | Top-level config. Builder helpers (`with_base_url`), TOML (de)serialisation, canonical filename. |
//! | [`ApiConfig`] | Where the REST API lives. |
//! | [`SessionConfig`] | Credential name and lifetime. |
//!
//! All structs implement `Default` so that a missing or empty file is
//! equivalent to the production configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://taskify-backend-1-ymjh.onrender.com";

/// Top-level configuration stored in `taskify.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskifyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session credential settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_expiry_days")]
    pub expiry_days: u32,
}

fn default_cookie_name() -> String {
    "jwt_token".to_string()
}

fn default_expiry_days() -> u32 {
    30
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            expiry_days: default_expiry_days(),
        }
    }
}

impl SessionConfig {
    /// Lifetime of a freshly issued credential.
    pub fn expiry(&self) -> Duration {
        Duration::days(i64::from(self.expiry_days))
    }
}

impl TaskifyConfig {
    /// Builder method to point the client at a different API host.
    ///
    /// Trailing slashes are dropped so paths can always be joined with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskify.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_base_url(base_url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = TaskifyConfig::from_toml("").unwrap();
        assert_eq!(config, TaskifyConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.session.cookie_name, "jwt_token");
        assert_eq!(config.session.expiry_days, 30);
    }

    #[test]
    fn test_partial_toml_overrides_named_keys_only() {
        let config = TaskifyConfig::from_toml(
            r#"
            [session]
            expiry_days = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.session.expiry_days, 7);
        assert_eq!(config.session.cookie_name, "jwt_token");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = TaskifyConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");

        let config = TaskifyConfig::default().with_base_url("http://127.0.0.1:9000//");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = TaskifyConfig::default().with_base_url("http://example.test");
        let text = config.to_toml().unwrap();
        assert_eq!(TaskifyConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_expiry_in_days() {
        assert_eq!(SessionConfig::default().expiry(), Duration::days(30));
    }
}
