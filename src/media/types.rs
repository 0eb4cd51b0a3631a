//! The `MediaType` value type

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Media type prefix shared by both grammars
const APPLICATION: &str = "application/";

/// Vendor namespace segment
const VENDOR: &str = "vnd.github";

/// A structured media type sent via the `Accept` header.
///
/// Immutable value type, no I/O. Constructed by [`MediaType::parse`] or one
/// of the named constructors, rendered on demand with [`MediaType::render`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    /// Vendor grammar marker: true for `application/vnd.github...`,
    /// false for `application/{format}`
    github: bool,
    /// API version component (e.g. "v3"), empty when absent
    version: String,
    /// Variant parameter component (e.g. "raw"), empty when absent
    param: String,
    /// Body format component (e.g. "json", "sha"), empty when absent
    format: String,
}

impl MediaType {
    /// Create a vendor media type (`application/vnd.github...`)
    pub fn vendor(
        version: impl Into<String>,
        param: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            github: true,
            version: version.into(),
            param: param.into(),
            format: format.into(),
        }
    }

    /// Create a plain media type (`application/{format}`)
    pub fn plain(format: impl Into<String>) -> Self {
        Self {
            github: false,
            version: String::new(),
            param: String::new(),
            format: format.into(),
        }
    }

    /// Parse a media type string.
    ///
    /// Fails with [`Error::MalformedMediaType`] if the input matches
    /// neither grammar. The grammars are distinguished by the `vnd.`
    /// prefix segment after `application/`.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || Error::malformed_media_type(input);

        let rest = input.strip_prefix(APPLICATION).ok_or_else(malformed)?;

        let Some(vendor_rest) = rest.strip_prefix(VENDOR) else {
            if rest.starts_with("vnd.") {
                // Unknown vendor namespace, not representable
                return Err(malformed());
            }
            // Plain grammar: a bare format token, nothing else
            if rest.is_empty() || rest.contains('/') || rest.contains('+') {
                return Err(malformed());
            }
            return Ok(Self::plain(rest));
        };

        // The namespace must end exactly where an optional component starts
        if !(vendor_rest.is_empty()
            || vendor_rest.starts_with('.')
            || vendor_rest.starts_with('+'))
        {
            return Err(malformed());
        }

        let (dotted, format) = match vendor_rest.split_once('+') {
            Some((_, "")) => return Err(malformed()),
            Some((dotted, format)) => (dotted, format.to_string()),
            None => (vendor_rest, String::new()),
        };

        let (version, param) = match dotted.strip_prefix('.') {
            None if dotted.is_empty() => (String::new(), String::new()),
            None => return Err(malformed()),
            Some(segments) => match segments.split('.').collect::<Vec<_>>()[..] {
                [version] if !version.is_empty() => (version.to_string(), String::new()),
                [version, param] if !version.is_empty() && !param.is_empty() => {
                    (version.to_string(), param.to_string())
                }
                _ => return Err(malformed()),
            },
        };

        Ok(Self {
            github: true,
            version,
            param,
            format,
        })
    }

    /// Render the canonical string form. Total function.
    ///
    /// Empty components are omitted together with their separators.
    pub fn render(&self) -> String {
        if !self.github {
            return format!("{APPLICATION}{}", self.format);
        }

        let mut out = String::with_capacity(APPLICATION.len() + VENDOR.len() + 16);
        out.push_str(APPLICATION);
        out.push_str(VENDOR);
        if !self.version.is_empty() {
            out.push('.');
            out.push_str(&self.version);
        }
        if !self.param.is_empty() {
            out.push('.');
            out.push_str(&self.param);
        }
        if !self.format.is_empty() {
            out.push('+');
            out.push_str(&self.format);
        }
        out
    }

    /// True for the vendor grammar
    pub fn is_vendor(&self) -> bool {
        self.github
    }

    /// The version component, empty when absent
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The param component, empty when absent
    pub fn param(&self) -> &str {
        &self.param
    }

    /// The format component, empty when absent
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Whether response bodies under this media type parse as JSON
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Default for MediaType {
    /// The vendored JSON form, `application/vnd.github.v3+json`
    fn default() -> Self {
        Self::vendor("v3", "", "json")
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
