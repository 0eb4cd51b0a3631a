//! Connection configuration
//!
//! [`Configuration`] captures everything needed to establish a connection:
//! the base URL, the credential fields, and the dry-run flag. Constructed
//! once by the caller before connecting; read-only afterward.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable connection settings.
///
/// At most one of {username/password, token} is the active credential mode;
/// username/password takes precedence when both are present (see
/// [`crate::auth::Credentials::resolve`]).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Base URL of the API, `scheme://host[:port]` with no trailing path
    base_url: String,
    /// Basic-auth username; empty disables Basic auth
    #[serde(default)]
    username: String,
    /// Basic-auth password
    #[serde(default)]
    password: String,
    /// Bearer token; empty disables Bearer auth
    #[serde(default)]
    token: String,
    /// When true, every request short-circuits to an empty success
    /// without touching the network
    #[serde(default)]
    dry_run: bool,
}

impl Configuration {
    /// Create a config builder for the given base URL
    pub fn builder(base_url: impl Into<String>) -> ConfigurationBuilder {
        ConfigurationBuilder {
            config: Configuration {
                base_url: base_url.into(),
                ..Configuration::default()
            },
        }
    }

    /// The base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The Basic-auth username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The Basic-auth password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The Bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether dry-run mode is enabled
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

// Manual Debug so credential material never reaches logs
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "*****"
    }
}

/// Builder for [`Configuration`]
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Set the Basic-auth username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    /// Set the Basic-auth password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the Bearer token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = token.into();
        self
    }

    /// Enable or disable dry-run mode
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Configuration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Configuration::builder("https://api.github.com")
            .username("octocat")
            .password("hunter2")
            .token("t0ken")
            .dry_run(true)
            .build();

        assert_eq!(config.base_url(), "https://api.github.com");
        assert_eq!(config.username(), "octocat");
        assert_eq!(config.password(), "hunter2");
        assert_eq!(config.token(), "t0ken");
        assert!(config.dry_run());
    }

    #[test]
    fn test_defaults() {
        let config = Configuration::builder("http://localhost:8080").build();
        assert_eq!(config.username(), "");
        assert_eq!(config.password(), "");
        assert_eq!(config.token(), "");
        assert!(!config.dry_run());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Configuration::builder("https://api.github.com")
            .username("octocat")
            .password("hunter2")
            .token("t0ken")
            .build();

        let rendered = format!("{config:?}");
        assert!(rendered.contains("octocat"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("t0ken"));
        assert!(rendered.contains("*****"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Configuration =
            serde_json::from_str(r#"{"base_url": "https://api.github.com"}"#).unwrap();
        assert_eq!(config.base_url(), "https://api.github.com");
        assert!(!config.dry_run());
    }
}
