//! Error types for translation calls
//!
//! [`ClassifiedError`] is the closed taxonomy produced by the response
//! interpreter. [`TranslationError`] is what the public client returns: a
//! classified server error, a transport failure, or a local problem caught
//! before anything was sent.

use std::fmt;

use thiserror::Error;

use crate::core::models::ErrorCode;

/// Attributes shared by every server-reported error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    /// HTTP status code of the response
    pub status: u16,
    /// Error code string exactly as reported by the server
    pub code: String,
    /// Human readable message supplied by the server
    pub message: String,
}

impl ErrorDetails {
    /// Create error details from a status, code and message
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {}): {}", self.code, self.status, self.message)
    }
}

/// Diagnostic note attached to every malformed response
pub const MALFORMED_RESPONSE_NOTE: &str = "server response formatted incorrectly";

/// Classified outcome of a failed API response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedError {
    /// `apiAccessDenied`
    #[error("API access denied: {0}")]
    ApiAccessDenied(ErrorDetails),

    /// `authKeyInvalid`
    #[error("Auth key invalid: {0}")]
    AuthKeyInvalid(ErrorDetails),

    /// `authKeyNotString`
    #[error("Auth key is not a string: {0}")]
    AuthKeyNotString(ErrorDetails),

    /// `authKeyOwnerDeactivated`
    #[error("Auth key owner deactivated: {0}")]
    AuthKeyOwnerDeactivated(ErrorDetails),

    /// `dailyCharacterLimitExceeded`
    #[error("Daily character limit reached: {0}")]
    DailyCharacterLimitReached(ErrorDetails),

    /// `machineTranslationEngineNotConfigured`
    #[error("Machine translation engine not configured: {0}")]
    MachineTranslationEngineNotConfigured(ErrorDetails),

    /// `minuteCharacterLimitExceeded`
    #[error("Minute character limit reached: {0}")]
    MinuteCharacterLimitReached(ErrorDetails),

    /// `minuteRequestLimitExceeded`
    #[error("Minute request limit reached: {0}")]
    MinuteRequestLimitReached(ErrorDetails),

    /// `requestCharacterLimitExceeded`
    #[error("Request character limit reached: {0}")]
    RequestCharacterLimitReached(ErrorDetails),

    /// Unrecognized code on a 4xx response
    #[error("Client error: {0}")]
    ClientResponse(ErrorDetails),

    /// Unrecognized code on any other non-200 response
    #[error("Server error: {0}")]
    ServerResponse(ErrorDetails),

    /// The body did not match the expected shape
    #[error("Malformed response (status {status}): {}: {reason}", MALFORMED_RESPONSE_NOTE)]
    MalformedResponse {
        /// HTTP status code of the response
        status: u16,
        /// Decoder diagnostic
        reason: String,
    },
}

impl ClassifiedError {
    /// Build the variant matching a known error code
    pub fn from_known(code: ErrorCode, details: ErrorDetails) -> Self {
        match code {
            ErrorCode::ApiAccessDenied => Self::ApiAccessDenied(details),
            ErrorCode::AuthKeyInvalid => Self::AuthKeyInvalid(details),
            ErrorCode::AuthKeyNotString => Self::AuthKeyNotString(details),
            ErrorCode::AuthKeyOwnerDeactivated => Self::AuthKeyOwnerDeactivated(details),
            ErrorCode::DailyCharacterLimitExceeded => Self::DailyCharacterLimitReached(details),
            ErrorCode::MachineTranslationEngineNotConfigured => {
                Self::MachineTranslationEngineNotConfigured(details)
            }
            ErrorCode::MinuteCharacterLimitExceeded => Self::MinuteCharacterLimitReached(details),
            ErrorCode::MinuteRequestLimitExceeded => Self::MinuteRequestLimitReached(details),
            ErrorCode::RequestCharacterLimitExceeded => Self::RequestCharacterLimitReached(details),
        }
    }

    /// Kind name, for logs and CLI output
    pub fn kind_name(&self) -> &'static str {
        match self.known_code() {
            Some(code) => code.kind_name(),
            None => match self {
                Self::ClientResponse(_) => "ClientResponse",
                Self::ServerResponse(_) => "ServerResponse",
                _ => "MalformedResponse",
            },
        }
    }

    fn known_code(&self) -> Option<ErrorCode> {
        match self {
            Self::ApiAccessDenied(_) => Some(ErrorCode::ApiAccessDenied),
            Self::AuthKeyInvalid(_) => Some(ErrorCode::AuthKeyInvalid),
            Self::AuthKeyNotString(_) => Some(ErrorCode::AuthKeyNotString),
            Self::AuthKeyOwnerDeactivated(_) => Some(ErrorCode::AuthKeyOwnerDeactivated),
            Self::DailyCharacterLimitReached(_) => Some(ErrorCode::DailyCharacterLimitExceeded),
            Self::MachineTranslationEngineNotConfigured(_) => {
                Some(ErrorCode::MachineTranslationEngineNotConfigured)
            }
            Self::MinuteCharacterLimitReached(_) => Some(ErrorCode::MinuteCharacterLimitExceeded),
            Self::MinuteRequestLimitReached(_) => Some(ErrorCode::MinuteRequestLimitExceeded),
            Self::RequestCharacterLimitReached(_) => {
                Some(ErrorCode::RequestCharacterLimitExceeded)
            }
            Self::ClientResponse(_) | Self::ServerResponse(_) | Self::MalformedResponse { .. } => {
                None
            }
        }
    }

    /// Server-reported details, absent for malformed responses
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::ApiAccessDenied(d)
            | Self::AuthKeyInvalid(d)
            | Self::AuthKeyNotString(d)
            | Self::AuthKeyOwnerDeactivated(d)
            | Self::DailyCharacterLimitReached(d)
            | Self::MachineTranslationEngineNotConfigured(d)
            | Self::MinuteCharacterLimitReached(d)
            | Self::MinuteRequestLimitReached(d)
            | Self::RequestCharacterLimitReached(d)
            | Self::ClientResponse(d)
            | Self::ServerResponse(d) => Some(d),
            Self::MalformedResponse { .. } => None,
        }
    }

    /// HTTP status code of the originating response
    pub fn status(&self) -> u16 {
        match self {
            Self::ApiAccessDenied(d)
            | Self::AuthKeyInvalid(d)
            | Self::AuthKeyNotString(d)
            | Self::AuthKeyOwnerDeactivated(d)
            | Self::DailyCharacterLimitReached(d)
            | Self::MachineTranslationEngineNotConfigured(d)
            | Self::MinuteCharacterLimitReached(d)
            | Self::MinuteRequestLimitReached(d)
            | Self::RequestCharacterLimitReached(d)
            | Self::ClientResponse(d)
            | Self::ServerResponse(d) => d.status,
            Self::MalformedResponse { status, .. } => *status,
        }
    }

    /// Raw error code string reported by the server
    pub fn code(&self) -> Option<&str> {
        self.details().map(|d| d.code.as_str())
    }

    /// Message reported by the server
    pub fn message(&self) -> Option<&str> {
        self.details().map(|d| d.message.as_str())
    }

    /// Known error code behind this kind, if any
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.known_code()
    }

    /// True for the nine known kinds and the generic client kind
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::ServerResponse(_) | Self::MalformedResponse { .. }
        )
    }

    /// True for the generic server kind
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerResponse(_))
    }

    /// Usage limit kinds, which callers may back off on
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::DailyCharacterLimitReached(_)
                | Self::MinuteCharacterLimitReached(_)
                | Self::MinuteRequestLimitReached(_)
                | Self::RequestCharacterLimitReached(_)
        )
    }

    /// Credential kinds, which will not succeed on retry
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::ApiAccessDenied(_)
                | Self::AuthKeyInvalid(_)
                | Self::AuthKeyNotString(_)
                | Self::AuthKeyOwnerDeactivated(_)
        )
    }
}

/// Failure of the underlying HTTP exchange
#[derive(Error, Debug)]
pub enum TransportError {
    /// Reqwest error (connection refused, timeout, TLS, body read)
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a non-reqwest transport
    #[error("Network error: {message}")]
    Network {
        /// Description of the failure
        message: String,
    },
}

impl TransportError {
    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout(),
            Self::Network { .. } => false,
        }
    }
}

/// Error returned by [`crate::TranslateClient`]
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The server answered with an error
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    /// The request never produced a response
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// The request was rejected before being sent
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What is wrong with the request
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// The classified server error, if this is one
    pub fn as_classified(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Classified(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
