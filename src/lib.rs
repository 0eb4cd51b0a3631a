//! # hubwire
//!
//! Connection core for GitHub-style paginated, versioned REST APIs.
//!
//! The crate covers the transport layer only: establishing a persistent
//! connection, attaching authentication, negotiating a structured media
//! type per request, executing GET/POST/PATCH semantics, following
//! redirects, and aggregating multi-page array responses into a single
//! logical value. Resource wrappers (repositories, issues, ...) live in
//! calling crates and consume the returned JSON values, optionally
//! through [`payload::Resource`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hubwire::{Configuration, Connection, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Configuration::builder("https://api.github.com")
//!         .token("ghp_...")
//!         .build();
//!     let connection = Connection::connect(config).await?;
//!
//!     // Pages are merged transparently into one array
//!     let repos = connection.get("/user/repos").await?;
//!     for repo in repos.as_array().unwrap() {
//!         println!("{}", repo["full_name"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Connection                         │
//! │  connect(config)    get / post / patch  →  JSON value    │
//! └──────────────────────────────────────────────────────────┘
//!            │                 │                  │
//! ┌──────────┴────┐ ┌──────────┴──────┐ ┌─────────┴─────────┐
//! │     Auth      │ │    Request      │ │    Pagination     │
//! ├───────────────┤ ├─────────────────┤ ├───────────────────┤
//! │ Basic         │ │ Accept header   │ │ Link rel="next"   │
//! │ Bearer        │ │ Status triage   │ │ Array merging     │
//! │ precedence    │ │ Dry-run         │ │ Redirect budget   │
//! └───────────────┘ └─────────────────┘ └───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy for the crate
pub mod error;

/// Connection configuration
pub mod config;

/// Credential-mode resolution
pub mod auth;

/// Media type negotiation
pub mod media;

/// Persistent API connection
pub mod connection;

/// Link header parsing and loop budgets
pub mod pagination;

/// Wire payload access
pub mod payload;

/// Request execution
mod request;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{Configuration, ConfigurationBuilder};
pub use connection::Connection;
pub use error::{Error, Result};
pub use media::MediaType;
pub use payload::Resource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
