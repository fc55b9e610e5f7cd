//! The network seam: one GET per physical attempt.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Why an attempt produced no response.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connect, timeout or body-read failure inside `reqwest`.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failure reported by a non-`reqwest` transport.
    #[error("{0}")]
    Unavailable(String),
}

/// Status and raw body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Perform exactly one GET and report what came back.
///
/// Implementations must not retry; the call core owns retry decisions.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> crate::Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(RawResponse { status, body })
    }
}
