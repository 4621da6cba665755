//! CLI command definitions and handlers

use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::client::TranslateClient;
use crate::core::config::ClientConfig;
use crate::core::errors::TranslationError;
use crate::core::models::ErrorCode;

/// Commands for the translate CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate texts and print one translation per line
    Translate {
        /// Source language code
        #[arg(short, long)]
        from: String,

        /// Target language code
        #[arg(short, long)]
        to: String,

        /// Texts to translate
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// List the error codes the API is known to report
    Codes,
}

/// Connection options shared by every command
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// API key (defaults to YARAKU_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API URL (defaults to YARAKU_API_URL or the production endpoint)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// JSON configuration file, used instead of environment variables
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConnectionArgs {
    /// Build the client configuration, with flags taking precedence
    pub fn resolve(&self) -> Result<ClientConfig, TranslationError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    fn resolve_with<F>(&self, lookup: F) -> Result<ClientConfig, TranslationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_lookup(lookup, self.api_key.as_deref())?,
        };

        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Handle translate command
pub async fn handle_translate(
    connection: &ConnectionArgs,
    from: String,
    to: String,
    texts: Vec<String>,
) -> anyhow::Result<()> {
    let config = connection.resolve()?;
    info!("Translating {} texts via {}", texts.len(), config.api_url);

    let client = TranslateClient::new(config)?;
    let translations = match client.translate(texts, &from, &to).await {
        Ok(translations) => translations,
        Err(TranslationError::Classified(e)) => anyhow::bail!("{}: {}", e.kind_name(), e),
        Err(e) => return Err(e.into()),
    };

    for translation in translations {
        println!("{}", translation);
    }

    Ok(())
}

/// Handle codes command
pub fn handle_codes() {
    for code in ErrorCode::ALL {
        println!("{:<40} {}", code.as_str(), code.kind_name());
    }
}
