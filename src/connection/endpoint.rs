//! Base URL resolution
//!
//! Maps a configured base URL onto a concrete transport endpoint:
//! scheme, host, port, and whether the transport is encrypted.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Base URL grammar: exactly a scheme and an authority, no path
static BASE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9+.-]*)://([^/]+)$").expect("valid regex"));

/// Supported transport schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP, default port 80
    Http,
    /// HTTP over TLS, default port 443
    Https,
}

impl Scheme {
    /// The port used when the base URL carries none
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    /// Whether the transport is TLS-encrypted
    pub fn is_tls(self) -> bool {
        matches!(self, Self::Https)
    }
}

/// A resolved transport endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Resolve a base URL of the form `scheme://host[:port]`.
    ///
    /// Anything that does not match that shape is `InvalidBaseUrl`; a
    /// scheme other than http/https is `UnsupportedProtocol`.
    pub fn resolve(base_url: &str) -> Result<Self> {
        let captures = BASE_URL
            .captures(base_url)
            .ok_or_else(|| Error::invalid_base_url(base_url))?;

        let scheme = match &captures[1] {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => return Err(Error::unsupported_protocol(other)),
        };

        let authority = &captures[2];
        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| Error::invalid_base_url(base_url))?;
                (host, port)
            }
            None => (authority, scheme.default_port()),
        };
        if host.is_empty() {
            return Err(Error::invalid_base_url(base_url));
        }

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
        })
    }

    /// The transport scheme
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The host component
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The resolved port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, as dialed by the transport
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
