//! Yaraku Translate - client library for the Yaraku Translate API v2
//!
//! Sends a batch of texts with a source/target language pair to the
//! translate endpoint and returns the translations in order. Failed calls
//! are classified into a closed set of error kinds so callers can match on
//! them exhaustively.
//!
//! ```no_run
//! use yaraku_translate::{ClassifiedError, ClientConfig, TranslateClient, TranslationError};
//!
//! # async fn run() -> Result<(), TranslationError> {
//! let config = ClientConfig::new("my-key", "https://api.example.com/translate");
//! let client = TranslateClient::new(config)?;
//!
//! match client.translate(["Cat", "Dog"], "en", "ja").await {
//!     Ok(translations) => println!("{:?}", translations),
//!     Err(TranslationError::Classified(e)) if e.is_rate_limited() => eprintln!("slow down: {e}"),
//!     Err(TranslationError::Classified(ClassifiedError::AuthKeyInvalid(d))) => {
//!         eprintln!("bad key: {}", d.message)
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::TranslateClient,
    config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS},
    errors::{ClassifiedError, ErrorDetails, Result, TranslationError, TransportError},
    interpreter::interpret,
    models::{ErrorCode, RawResponse, TranslatePayload, TranslationRequest},
    transport::{HttpTransport, Transport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
