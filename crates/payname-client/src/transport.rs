//! HTTP transport layer.
//!
//! The dispatcher needs exactly one capability from the network: send a
//! method, URL, auth token and optional JSON body, get the raw response body
//! back. Two implementations are provided. [`PooledTransport`] keeps one
//! connection pool alive across calls; [`OneShotTransport`] builds a fresh
//! client per request. [`Config::pooled_transport`](crate::Config::pooled_transport)
//! selects which one a client uses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

/// Default request timeout applied by the built-in transports.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal request capability required by the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Execute one HTTP request and return the raw response body.
    ///
    /// `token` is sent verbatim in the `Authorization` header, without any
    /// scheme prefix. `body` is an already JSON-encoded payload. The body is
    /// returned whatever the HTTP status; the response envelope decides the
    /// outcome, not the status line.
    ///
    /// # Errors
    ///
    /// Returns the underlying HTTP error when the request cannot be sent or
    /// the response body cannot be read.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<String>,
    ) -> std::result::Result<String, reqwest::Error>;
}

async fn send(
    client: &Client,
    method: Method,
    url: &str,
    token: &str,
    body: Option<String>,
) -> std::result::Result<String, reqwest::Error> {
    let mut request = client.request(method, url).header("Authorization", token);
    if let Some(body) = body {
        request = request.header("Content-Type", "application/json").body(body);
    }
    let response = request.send().await?;
    response.text().await
}

/// Transport holding a shared connection pool, reused across calls.
#[derive(Debug, Clone)]
pub struct PooledTransport {
    client: Client,
}

impl PooledTransport {
    /// Create a pooled transport with the default 30 s timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a pooled transport with a custom timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }
}

impl Default for PooledTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for PooledTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<String>,
    ) -> std::result::Result<String, reqwest::Error> {
        send(&self.client, method, url, token, body).await
    }
}

/// Transport building a fresh client for every request.
///
/// No connection is reused between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShotTransport;

#[async_trait]
impl Transport for OneShotTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<String>,
    ) -> std::result::Result<String, reqwest::Error> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        send(&client, method, url, token, body).await
    }
}
