//! Request execution
//!
//! Builds one HTTP request, sends it over the connection's transport, and
//! classifies the response status. Redirects are not followed here: a 302
//! is reported as [`Outcome::Redirect`] and the calling layer decides
//! whether to re-issue (aggregation loop for GET, retry-once for
//! POST/PATCH).

use crate::auth;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::media::MediaType;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, LOCATION};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

/// A classified single-hop response
#[derive(Debug)]
pub(crate) enum Outcome {
    /// 2xx: parsed body plus response headers
    Success(Reply),
    /// 302: re-issue at this Location with the same method/body/media type
    Redirect(String),
}

/// The useful parts of a successful response
#[derive(Debug)]
pub(crate) struct Reply {
    /// Decoded body: JSON value, or an opaque string for non-JSON media
    pub payload: Value,
    /// Response headers, consulted for pagination links
    pub headers: HeaderMap,
}

impl Reply {
    /// The empty-object reply synthesized in dry-run mode
    fn empty() -> Self {
        Self {
            payload: Value::Object(Map::new()),
            headers: HeaderMap::new(),
        }
    }
}

/// One request executor borrowing the connection's transport and settings
#[derive(Debug, Clone, Copy)]
pub(crate) struct Exchange<'a> {
    transport: &'a Client,
    config: &'a Configuration,
}

impl<'a> Exchange<'a> {
    pub(crate) fn new(transport: &'a Client, config: &'a Configuration) -> Self {
        Self { transport, config }
    }

    /// Build, send, and classify one HTTP request.
    ///
    /// In dry-run mode the network is skipped entirely and every verb
    /// yields an empty-object success.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        media: &MediaType,
    ) -> Result<Outcome> {
        if self.config.dry_run() {
            debug!(%method, url, "dry run, synthesizing empty response");
            return Ok(Outcome::Success(Reply::empty()));
        }

        let mut request = self
            .transport
            .request(method.clone(), url)
            .header(ACCEPT, media.render());
        if let Some(value) = auth::authorization_header(self.config) {
            request = request.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => {
                debug!(%method, url, status = status.as_u16(), "request succeeded");
                let headers = response.headers().clone();
                let text = response.text().await?;
                let payload = decode_body(&text, media)?;
                Ok(Outcome::Success(Reply { payload, headers }))
            }
            302 => {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        Error::request_failed(302, "redirect without a Location header")
                    })?;
                warn!(%method, url, location, "following redirect");
                Ok(Outcome::Redirect(location))
            }
            404 => Err(Error::not_found(url)),
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!(%method, url, status, "request failed");
                Err(Error::request_failed(status, body))
            }
        }
    }
}

/// Decode a response body according to the requested media type.
///
/// Non-JSON formats are returned verbatim as an opaque string value; no
/// JSON parsing is attempted. Empty JSON bodies decode as null.
fn decode_body(text: &str, media: &MediaType) -> Result<Value> {
    if !media.is_json() {
        return Ok(Value::String(text.to_string()));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

/// Resolve a Location header against the URL that produced it.
///
/// Servers may answer with relative redirect targets; an unresolvable
/// target fails the request.
pub(crate) fn resolve_location(current: &str, location: &str) -> Result<String> {
    let base = Url::parse(current)
        .map_err(|_| Error::request_failed(302, format!("unresolvable redirect base: {current}")))?;
    let target = base.join(location).map_err(|_| {
        Error::request_failed(302, format!("unresolvable redirect target: {location}"))
    })?;
    Ok(target.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_json() {
        let media = MediaType::default();
        let value = decode_body(r#"{"id": 1}"#, &media).unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_decode_body_empty_json() {
        let media = MediaType::default();
        assert_eq!(decode_body("", &media).unwrap(), Value::Null);
        assert_eq!(decode_body("  \n", &media).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_body_non_json_is_opaque() {
        let media = MediaType::parse("application/vnd.github.v3.sha").unwrap();
        let value = decode_body("deadbeef", &media).unwrap();
        assert_eq!(value, Value::String("deadbeef".to_string()));
    }

    #[test]
    fn test_decode_body_invalid_json() {
        let media = MediaType::default();
        let err = decode_body("{not json", &media).unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }

    #[test]
    fn test_resolve_location_absolute() {
        let resolved =
            resolve_location("http://a.example/repos", "http://b.example/other").unwrap();
        assert_eq!(resolved, "http://b.example/other");
    }

    #[test]
    fn test_resolve_location_relative() {
        let resolved = resolve_location("http://a.example/repos?page=1", "/moved").unwrap();
        assert_eq!(resolved, "http://a.example/moved");
    }

    #[test]
    fn test_resolve_location_unresolvable() {
        let err = resolve_location("not a url", "/x").unwrap_err();
        assert!(matches!(err, Error::RequestFailed { status: 302, .. }));
    }
}
