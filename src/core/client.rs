//! Translate API client

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::interpreter::interpret;
use crate::core::models::TranslationRequest;
use crate::core::transport::{HttpTransport, Transport};

/// Client for the translate endpoint
///
/// Every call is a single request; the client keeps no state between
/// calls and can be shared freely across tasks.
#[derive(Clone)]
pub struct TranslateClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for TranslateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslateClient")
            .field("api_url", &self.config.api_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl TranslateClient {
    /// Create a client backed by [`HttpTransport`]
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let transport = HttpTransport::new(Duration::from_millis(config.timeout_ms))?;
        Ok(Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        })
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            transport,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Translate `texts` from `source_lang` to `target_lang`
    ///
    /// Translations come back in the order the server returned them, which
    /// is expected to line up with `texts`.
    pub async fn translate<I, S>(
        &self,
        texts: I,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            TranslationRequest::new(texts, source_lang, target_lang, self.config.api_key.clone())?;
        self.translate_request(&request).await
    }

    /// Send a prepared request
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<Vec<String>> {
        let payload = serde_json::to_value(request.payload())?;

        debug!(
            "Translating {} texts {} -> {}",
            request.texts().len(),
            request.source_lang(),
            request.target_lang()
        );

        let raw = self
            .transport
            .post_json(&self.config.api_url, &payload)
            .await
            .map_err(|e| {
                warn!("Transport failed: {}", e);
                TranslationError::from(e)
            })?;

        interpret(&raw).map_err(|e| {
            warn!("Translate request failed: {}", e);
            TranslationError::from(e)
        })
    }
}
