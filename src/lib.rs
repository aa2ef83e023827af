//! API key authentication for axum services.
//!
//! Parses `Authorization: ApiKey <key>` headers and guards routes
//! against a configured key set.

pub mod auth;
pub mod config;
pub mod observability;

pub use auth::{extract_api_key, ApiKey, ApiKeyAuthState, AuthError};
pub use config::GateConfig;
