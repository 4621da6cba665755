//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{Result, TranslationError};

/// Error codes the API is known to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `apiAccessDenied`
    ApiAccessDenied,
    /// `authKeyInvalid`
    AuthKeyInvalid,
    /// `authKeyNotString`
    AuthKeyNotString,
    /// `authKeyOwnerDeactivated`
    AuthKeyOwnerDeactivated,
    /// `dailyCharacterLimitExceeded`
    DailyCharacterLimitExceeded,
    /// `machineTranslationEngineNotConfigured`
    MachineTranslationEngineNotConfigured,
    /// `minuteCharacterLimitExceeded`
    MinuteCharacterLimitExceeded,
    /// `minuteRequestLimitExceeded`
    MinuteRequestLimitExceeded,
    /// `requestCharacterLimitExceeded`
    RequestCharacterLimitExceeded,
}

impl ErrorCode {
    /// Every known code, in catalog order
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::ApiAccessDenied,
        ErrorCode::AuthKeyInvalid,
        ErrorCode::AuthKeyNotString,
        ErrorCode::AuthKeyOwnerDeactivated,
        ErrorCode::DailyCharacterLimitExceeded,
        ErrorCode::MachineTranslationEngineNotConfigured,
        ErrorCode::MinuteCharacterLimitExceeded,
        ErrorCode::MinuteRequestLimitExceeded,
        ErrorCode::RequestCharacterLimitExceeded,
    ];

    /// Wire representation of the code
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ApiAccessDenied => "apiAccessDenied",
            ErrorCode::AuthKeyInvalid => "authKeyInvalid",
            ErrorCode::AuthKeyNotString => "authKeyNotString",
            ErrorCode::AuthKeyOwnerDeactivated => "authKeyOwnerDeactivated",
            ErrorCode::DailyCharacterLimitExceeded => "dailyCharacterLimitExceeded",
            ErrorCode::MachineTranslationEngineNotConfigured => {
                "machineTranslationEngineNotConfigured"
            }
            ErrorCode::MinuteCharacterLimitExceeded => "minuteCharacterLimitExceeded",
            ErrorCode::MinuteRequestLimitExceeded => "minuteRequestLimitExceeded",
            ErrorCode::RequestCharacterLimitExceeded => "requestCharacterLimitExceeded",
        }
    }

    /// Name of the error kind this code is reported as
    pub fn kind_name(self) -> &'static str {
        match self {
            ErrorCode::ApiAccessDenied => "ApiAccessDenied",
            ErrorCode::AuthKeyInvalid => "AuthKeyInvalid",
            ErrorCode::AuthKeyNotString => "AuthKeyNotString",
            ErrorCode::AuthKeyOwnerDeactivated => "AuthKeyOwnerDeactivated",
            ErrorCode::DailyCharacterLimitExceeded => "DailyCharacterLimitReached",
            ErrorCode::MachineTranslationEngineNotConfigured => {
                "MachineTranslationEngineNotConfigured"
            }
            ErrorCode::MinuteCharacterLimitExceeded => "MinuteCharacterLimitReached",
            ErrorCode::MinuteRequestLimitExceeded => "MinuteRequestLimitReached",
            ErrorCode::RequestCharacterLimitExceeded => "RequestCharacterLimitReached",
        }
    }

    /// Look up a code reported by the server. Matching is exact.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a known error code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code: {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    texts: Vec<String>,
    source_lang: String,
    target_lang: String,
    auth_key: String,
}

impl TranslationRequest {
    /// Create a request. Fails if `texts` is empty.
    pub fn new<I, S>(
        texts: I,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        auth_key: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.is_empty() {
            return Err(TranslationError::InvalidRequest {
                message: "at least one text is required".to_string(),
            });
        }

        Ok(Self {
            texts,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            auth_key: auth_key.into(),
        })
    }

    /// Source texts, in order
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Source language code
    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    /// Target language code
    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Wire payload for this request
    pub fn payload(&self) -> TranslatePayload<'_> {
        TranslatePayload {
            auth_key: &self.auth_key,
            texts: &self.texts,
            text_language: &self.source_lang,
            translation_language: &self.target_lang,
        }
    }
}

/// JSON body posted to the translate endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePayload<'a> {
    /// API credential
    pub auth_key: &'a str,
    /// Source texts
    pub texts: &'a [String],
    /// Source language code
    pub text_language: &'a str,
    /// Target language code
    pub translation_language: &'a str,
}

/// Status and body of an HTTP response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, expected to be JSON
    pub body: String,
}

impl RawResponse {
    /// Create a raw response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Whether the leading digit of the status is 4
    pub fn is_client_error(&self) -> bool {
        let mut leading = self.status;
        while leading >= 10 {
            leading /= 10;
        }
        leading == 4
    }
}

/// `{ "translations": [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessBody {
    pub translations: Vec<String>,
}

/// `{ "error": { "code": ..., "message": ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
}
