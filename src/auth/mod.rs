//! Credential-mode resolution
//!
//! Maps the credential fields of a [`Configuration`] onto the
//! `Authorization` header. Basic auth (username/password) takes precedence
//! over Bearer (token); this precedence is a hard contract, not a
//! heuristic — a caller that sets both gets Basic auth.

use crate::config::Configuration;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The active credential mode resolved from a [`Configuration`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The token as configured, before prefix normalization
        token: String,
    },

    /// No credentials configured
    Anonymous,
}

impl Credentials {
    /// Resolve the active credential mode.
    ///
    /// A non-empty username selects Basic auth regardless of the token
    /// field; a non-empty token alone selects Bearer; otherwise anonymous.
    pub fn resolve(config: &Configuration) -> Self {
        if !config.username().is_empty() {
            Self::Basic {
                username: config.username().to_string(),
                password: config.password().to_string(),
            }
        } else if !config.token().is_empty() {
            Self::Bearer {
                token: config.token().to_string(),
            }
        } else {
            Self::Anonymous
        }
    }

    /// The `Authorization` header value for this mode, if any.
    ///
    /// Basic encodes `username:password` in base64; Bearer carries a
    /// `bearer ` prefix exactly once, however the token was configured.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Basic { username, password } => {
                let pair = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {pair}"))
            }
            Self::Bearer { token } => Some(normalize_bearer(token)),
            Self::Anonymous => None,
        }
    }
}

/// Resolve the `Authorization` header value straight from a configuration
pub fn authorization_header(config: &Configuration) -> Option<String> {
    Credentials::resolve(config).header_value()
}

/// Prefix a token with `bearer `, stripping an existing prefix first so
/// it is never applied twice
fn normalize_bearer(token: &str) -> String {
    let bare = token
        .get(..7)
        .filter(|prefix| prefix.eq_ignore_ascii_case("bearer "))
        .map_or(token, |_| &token[7..]);
    format!("bearer {bare}")
}

#[cfg(test)]
mod tests;
