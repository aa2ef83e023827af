//! Axum extractor over the `Authorization` header.

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::api_key::{extract_api_key, AuthError, API_KEY_SCHEME};

/// API key taken from an `Authorization: ApiKey <key>` header.
///
/// Rejects with [`AuthError`] (401). Use `Option<ApiKey>` to make the
/// header optional; a malformed header still rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_api_key(&parts.headers).map(ApiKey)
    }
}

impl<S> OptionalFromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match extract_api_key(&parts.headers) {
            Ok(key) => Ok(Some(ApiKey(key))),
            Err(AuthError::NoAuthHeader) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, API_KEY_SCHEME)],
            error_body(&self.to_string()),
        )
            .into_response()
    }
}

/// JSON body shared by all auth rejections.
pub(crate) fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(json!({ "error": message }))
}
