//! API key extraction from the `Authorization` header.
//!
//! # Responsibilities
//! - Read the first `Authorization` value from a header map
//! - Accept exactly `ApiKey <key>` (one space, two non-empty tokens)
//! - Classify failures as missing or malformed
//!
//! # Design Decisions
//! - Scheme match is exact and case-sensitive
//! - No trimming: stray spaces make the header malformed
//! - Pure function; callers own logging and status codes

use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

/// Scheme token expected in front of the key.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Errors returned when a request does not carry a usable API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// Header present but not of the form `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key, borrowing from the header map.
pub fn extract_api_key_str(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::NoAuthHeader)?;
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut tokens = value.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(API_KEY_SCHEME), Some(key), None) if !key.is_empty() => Ok(key),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Extract the API key from the `Authorization` header.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_api_key_str(headers).map(str::to_owned)
}
