//! API key guard middleware.
//! Rejects requests whose key is missing, malformed, or not configured.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::{Choice, ConstantTimeEq};

use crate::auth::api_key::extract_api_key;
use crate::auth::extractor::error_body;
use crate::config::AuthConfig;

/// State required for the API key guard.
#[derive(Clone, Debug)]
pub struct ApiKeyAuthState {
    keys: Arc<Vec<String>>,
    enabled: bool,
}

impl ApiKeyAuthState {
    pub fn new<I, K>(enabled: bool, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: Arc::new(keys.into_iter().map(Into::into).collect()),
            enabled,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.enabled, config.api_keys.iter().cloned())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if `key` is one of the configured keys.
    ///
    /// Every configured key is compared in constant time; the scan does
    /// not stop at the first match.
    pub fn accepts(&self, key: &str) -> bool {
        self.keys
            .iter()
            .fold(Choice::from(0), |found, candidate| {
                found | candidate.as_bytes().ct_eq(key.as_bytes())
            })
            .into()
    }
}

/// Key that passed the guard, attached to request extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedKey(pub String);

impl<S> FromRequestParts<S> for AuthenticatedKey
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedKey>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "API key guard not installed"))
    }
}

pub async fn api_key_auth_middleware(
    State(state): State<ApiKeyAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if !state.enabled {
        return next.run(req).await;
    }

    let key = match extract_api_key(req.headers()) {
        Ok(key) => key,
        Err(e) => {
            tracing::debug!(path = %req.uri().path(), reason = %e, "Rejected request");
            return e.into_response();
        }
    };

    if !state.accepts(&key) {
        tracing::warn!(path = %req.uri().path(), "Unknown API key");
        return (StatusCode::FORBIDDEN, error_body("invalid api key")).into_response();
    }

    req.extensions_mut().insert(AuthenticatedKey(key));
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_config() {
        let config = AuthConfig {
            enabled: true,
            api_keys: vec!["a".to_string(), "b".to_string()],
        };
        let state = ApiKeyAuthState::from_config(&config);

        assert!(state.is_enabled());
        assert!(state.accepts("a"));
        assert!(state.accepts("b"));
        assert!(!state.accepts("c"));
        assert!(!state.accepts("A"));
    }

    #[test]
    fn test_accepts_rejects_prefixes_and_extensions() {
        let state = ApiKeyAuthState::new(true, ["my-secret-key", "other"]);

        assert!(state.accepts("other"));
        assert!(!state.accepts("my-secret"));
        assert!(!state.accepts("my-secret-key-2"));
        assert!(!state.accepts(""));
    }

    #[test]
    fn test_empty_key_set_accepts_nothing() {
        let state = ApiKeyAuthState::new(true, Vec::<String>::new());
        assert!(!state.accepts("anything"));
    }

    #[tokio::test]
    async fn test_authenticated_key_requires_guard() {
        let (mut parts, _) = Request::builder()
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let err = <AuthenticatedKey as FromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_authenticated_key_from_extensions() {
        let (mut parts, _) = Request::builder()
            .extension(AuthenticatedKey("k".to_string()))
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let key = <AuthenticatedKey as FromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(key, AuthenticatedKey("k".to_string()));
    }
}
