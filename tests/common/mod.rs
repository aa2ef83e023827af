//! Shared utilities for integration testing.

use std::net::SocketAddr;

use apikey_gate::auth::{api_key_auth_middleware, ApiKey, ApiKeyAuthState, AuthenticatedKey};
use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;

async fn whoami(AuthenticatedKey(key): AuthenticatedKey) -> String {
    format!("hello {}", key)
}

async fn echo_key(ApiKey(key): ApiKey) -> String {
    key
}

async fn maybe_key(key: Option<ApiKey>) -> String {
    match key {
        Some(ApiKey(key)) => key,
        None => "anonymous".to_string(),
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Build a router with one guarded route and a few extractor-only routes.
pub fn app(state: ApiKeyAuthState) -> Router {
    let guarded = Router::new()
        .route("/v1/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(state, api_key_auth_middleware));

    Router::new()
        .route("/healthz", get(health))
        .route("/echo", get(echo_key))
        .route("/optional", get(maybe_key))
        .merge(guarded)
}

/// Serve `app(state)` on an ephemeral port and return its address.
pub async fn spawn_app(state: ApiKeyAuthState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(state))
            .await
            .expect("test server failed");
    });

    addr
}
