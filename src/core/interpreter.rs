//! Response interpretation and error classification
//!
//! Turns a [`RawResponse`] into the translated texts or exactly one
//! [`ClassifiedError`]. The status code alone decides between success and
//! failure; on failure a known error code wins over the 4xx/5xx fallback.

use crate::core::errors::{ClassifiedError, ErrorDetails};
use crate::core::models::{ErrorCode, ErrorEnvelope, RawResponse, SuccessBody};

/// Interpret a raw API response
pub fn interpret(raw: &RawResponse) -> Result<Vec<String>, ClassifiedError> {
    if raw.is_success() {
        return serde_json::from_str::<SuccessBody>(&raw.body)
            .map(|body| body.translations)
            .map_err(|e| malformed(raw.status, &e));
    }

    let envelope: ErrorEnvelope =
        serde_json::from_str(&raw.body).map_err(|e| malformed(raw.status, &e))?;

    let details = ErrorDetails::new(raw.status, envelope.error.code, envelope.error.message);

    Err(classify(raw, details))
}

fn classify(raw: &RawResponse, details: ErrorDetails) -> ClassifiedError {
    match ErrorCode::from_code(&details.code) {
        Some(code) => ClassifiedError::from_known(code, details),
        None if raw.is_client_error() => ClassifiedError::ClientResponse(details),
        None => ClassifiedError::ServerResponse(details),
    }
}

fn malformed(status: u16, err: &serde_json::Error) -> ClassifiedError {
    ClassifiedError::MalformedResponse {
        status,
        reason: err.to_string(),
    }
}
