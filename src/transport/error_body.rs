//! Classification of non-2xx responses.
//!
//! Burst SMS normally answers failures with
//! `{"error": {"code": "...", "description": "..."}}`, but gateways in front of
//! it also return HTML pages or empty bodies. Classification never fails: any
//! body that is not a well-formed envelope with a known code degrades to
//! [`ResponseCode::Unknown`].

use serde::Deserialize;
use tracing::warn;

use crate::domain::{ApiError, ResponseCode};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    code: String,
    description: String,
}

pub fn classify(http_status: u16, body: Option<&[u8]>) -> ApiError {
    if let Some(api_error) = body.and_then(|body| from_envelope(http_status, body)) {
        return api_error;
    }

    // Non-UTF-8 pages (Latin-1 proxies) keep their text with replacement chars.
    let text = body
        .map(String::from_utf8_lossy)
        .filter(|text| !text.trim().is_empty());

    let description = match text {
        Some(text) => {
            warn!(http_status, "error response without a recognised envelope");
            text.into_owned()
        }
        None => {
            warn!(http_status, "error response body is empty or missing");
            UNEXPECTED_ERROR.to_owned()
        }
    };

    ApiError {
        code: ResponseCode::Unknown,
        description,
        http_status,
    }
}

fn from_envelope(http_status: u16, body: &[u8]) -> Option<ApiError> {
    let envelope = serde_json::from_slice::<ErrorEnvelope>(body).ok()?;
    let code = ResponseCode::from_wire(&envelope.error.code)?;
    Some(ApiError {
        code,
        description: envelope.error.description,
        http_status,
    })
}
