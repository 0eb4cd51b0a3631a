//! Pagination support
//!
//! GET responses with array bodies are split by the server across multiple
//! pages chained via the `Link` response header (RFC 5988). This module
//! parses that header and defines the budgets that bound the aggregation
//! loop in [`crate::connection::Connection`].

mod link;

pub use link::{next_page, rel_target};

/// Redirect hops followed per logical request before giving up.
///
/// The upstream protocol puts no bound on consecutive redirects; this cap
/// turns a redirect cycle into a `RequestFailed` instead of a hang.
pub const MAX_REDIRECTS: u32 = 10;

/// Pages merged per logical GET before giving up.
///
/// Policy bound, unreachable for well-formed APIs; exceeding it is a
/// `RequestFailed`.
pub const MAX_PAGES: u32 = 1024;

#[cfg(test)]
mod tests;
