//! Persistent API connection
//!
//! [`Connection`] owns one transport handle for arbitrarily many logical
//! requests. GET requests aggregate paginated array responses into one
//! value; POST/PATCH re-issue at most once on redirect. At most one
//! request is in flight per connection at a time; callers needing
//! parallelism use separate connections.

mod endpoint;

pub use endpoint::{Endpoint, Scheme};

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::media::MediaType;
use crate::pagination::{self, MAX_PAGES, MAX_REDIRECTS};
use crate::request::{resolve_location, Exchange, Outcome};
use reqwest::{Client, Method};
use serde_json::Value;
use tokio::net::TcpStream;
use tracing::debug;

/// A persistent connection to one API endpoint.
///
/// Created by [`Connection::connect`], which resolves the base URL and
/// opens the transport, failing fast on malformed input. The transport
/// handle is owned exclusively and dropped with the connection; a failed
/// send is a hard error, never retried here.
#[derive(Debug)]
pub struct Connection {
    endpoint: Endpoint,
    config: Configuration,
    transport: Client,
}

impl Connection {
    /// Resolve the base URL and open the transport.
    ///
    /// Redirects are handled by this crate's own status classification,
    /// so the transport follows none itself. In dry-run mode the
    /// reachability probe is skipped and no network traffic occurs.
    pub async fn connect(config: Configuration) -> Result<Self> {
        let endpoint = Endpoint::resolve(config.base_url())?;

        let transport = Client::builder()
            .user_agent(concat!("hubwire/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::connection_failed(e.to_string()))?;

        if !config.dry_run() {
            TcpStream::connect((endpoint.host(), endpoint.port()))
                .await
                .map_err(|e| {
                    Error::connection_failed(format!("{}: {e}", endpoint.address()))
                })?;
        }

        debug!(
            address = %endpoint.address(),
            tls = endpoint.scheme().is_tls(),
            "connection established"
        );

        Ok(Self {
            endpoint,
            config,
            transport,
        })
    }

    /// The resolved endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The configuration this connection was built from
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// GET with the default media type
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.get_with(path, &MediaType::default()).await
    }

    /// GET with an explicit media type.
    ///
    /// Follows redirects and aggregates paginated array responses: the
    /// elements of every page are appended in page order, and the merged
    /// array is returned once no `rel="next"` link remains. A non-array
    /// body ends aggregation immediately and is returned as-is.
    pub async fn get_with(&self, path: &str, media: &MediaType) -> Result<Value> {
        let exchange = Exchange::new(&self.transport, &self.config);
        let mut url = self.absolute_url(path);
        let mut redirects = 0u32;
        let mut pages = 0u32;
        let mut merged: Vec<Value> = Vec::new();

        loop {
            match exchange.execute(Method::GET, &url, None, media).await? {
                Outcome::Redirect(location) => {
                    redirects += 1;
                    if redirects > MAX_REDIRECTS {
                        return Err(Error::request_failed(
                            302,
                            format!("redirect budget exhausted at {url}"),
                        ));
                    }
                    url = resolve_location(&url, &location)?;
                }
                Outcome::Success(reply) => {
                    let next = pagination::next_page(&reply.headers);
                    match reply.payload {
                        Value::Array(items) => {
                            merged.extend(items);
                            let Some(next) = next else {
                                return Ok(Value::Array(merged));
                            };
                            pages += 1;
                            if pages >= MAX_PAGES {
                                return Err(Error::request_failed(
                                    302,
                                    format!("page budget exhausted at {url}"),
                                ));
                            }
                            url = next;
                        }
                        // Pagination is array-only: a single value wins
                        // over any partial accumulation
                        single => return Ok(single),
                    }
                }
            }
        }
    }

    /// POST with the default media type
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request_with_body(Method::POST, path, body, &MediaType::default())
            .await
    }

    /// POST with an explicit media type
    pub async fn post_with(&self, path: &str, body: &Value, media: &MediaType) -> Result<Value> {
        self.request_with_body(Method::POST, path, body, media).await
    }

    /// PATCH with the default media type
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.request_with_body(Method::PATCH, path, body, &MediaType::default())
            .await
    }

    /// PATCH with an explicit media type
    pub async fn patch_with(&self, path: &str, body: &Value, media: &MediaType) -> Result<Value> {
        self.request_with_body(Method::PATCH, path, body, media).await
    }

    /// Body-carrying request: no aggregation, one redirect re-issue at
    /// most. A second consecutive redirect fails the request.
    async fn request_with_body(
        &self,
        method: Method,
        path: &str,
        body: &Value,
        media: &MediaType,
    ) -> Result<Value> {
        let exchange = Exchange::new(&self.transport, &self.config);
        let url = self.absolute_url(path);

        match exchange.execute(method.clone(), &url, Some(body), media).await? {
            Outcome::Success(reply) => Ok(reply.payload),
            Outcome::Redirect(location) => {
                let retry_url = resolve_location(&url, &location)?;
                match exchange.execute(method, &retry_url, Some(body), media).await? {
                    Outcome::Success(reply) => Ok(reply.payload),
                    Outcome::Redirect(again) => Err(Error::request_failed(
                        302,
                        format!("redirected twice, gave up at {again}"),
                    )),
                }
            }
        }
    }

    /// `base_url + path`; the path carries its own query string if any
    fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }
}
