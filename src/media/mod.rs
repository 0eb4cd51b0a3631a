//! Media type negotiation
//!
//! Parses and renders the structured `Accept` header grammar used by
//! versioned REST APIs. Two canonical forms exist:
//!
//! - plain: `application/{format}`
//! - vendor: `application/vnd.github{.version}{.param}{+format}`
//!
//! Every optional vendor component is omitted from the rendered string when
//! empty, so `render(parse(s)) == s` holds for any canonical string.

mod types;

pub use types::MediaType;
