//! HTTP transport seam
//!
//! A [`Transport`] posts one JSON body and hands back the status and body
//! text. Any HTTP status is a successful exchange here; only failing to get
//! a response at all is a [`TransportError`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::core::errors::TransportError;
use crate::core::models::RawResponse;

/// Performs a single POST with a JSON payload
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `payload` to `url`
    async fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<RawResponse, TransportError>;
}

/// Reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());

        Ok(RawResponse { status, body })
    }
}
