//! Error types for hubwire
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for hubwire
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Connection Establishment Errors
    // ============================================================================
    /// The base URL does not match `scheme://host[:port]`
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    /// The base URL scheme is neither http nor https
    #[error("unsupported protocol: {scheme}")]
    UnsupportedProtocol { scheme: String },

    /// The transport could not be opened; fatal, never retried
    #[error("failed to open connection: {message}")]
    ConnectionFailed { message: String },

    // ============================================================================
    // Media Type Errors
    // ============================================================================
    /// The input matches neither media type grammar
    #[error("malformed media type: {input}")]
    MalformedMediaType { input: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    /// The server answered 404
    #[error("resource not found: {url}")]
    ResourceNotFound { url: String },

    /// Any other non-2xx status, with the response body for diagnostics
    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The transport failed mid-request; a failed send is a hard error
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON-typed response body did not parse
    #[error("failed to parse JSON body: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Payload Errors
    // ============================================================================
    /// An object payload lacks the requested field
    #[error("missing field: {field}")]
    MissingField { field: String },

    /// A payload value carries a different variant than requested
    #[error("unexpected {found} value, expected {expected}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Create an invalid base URL error
    pub fn invalid_base_url(url: impl Into<String>) -> Self {
        Self::InvalidBaseUrl { url: url.into() }
    }

    /// Create an unsupported protocol error
    pub fn unsupported_protocol(scheme: impl Into<String>) -> Self {
        Self::UnsupportedProtocol {
            scheme: scheme.into(),
        }
    }

    /// Create a connection failure error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }

    /// Create a malformed media type error
    pub fn malformed_media_type(input: impl Into<String>) -> Self {
        Self::MalformedMediaType {
            input: input.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::ResourceNotFound { url: url.into() }
    }

    /// Create a request failure error
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an unexpected type error
    pub fn unexpected_type(expected: &'static str, found: &'static str) -> Self {
        Self::UnexpectedType { expected, found }
    }

    /// The HTTP status carried by this error, if any.
    ///
    /// `ResourceNotFound` reports 404; `RequestFailed` reports its own
    /// status; everything else carries no status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ResourceNotFound { .. } => Some(404),
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error was raised while establishing the connection
    pub fn is_connect_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidBaseUrl { .. }
                | Error::UnsupportedProtocol { .. }
                | Error::ConnectionFailed { .. }
        )
    }
}

/// Result type alias for hubwire
pub type Result<T> = std::result::Result<T, Error>;
