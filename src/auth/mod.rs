//! API key authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request headers
//!     → api_key.rs (parse `Authorization: ApiKey <key>`)
//!     → extractor.rs (axum extractor, 401 on failure)
//!     → middleware.rs (check key set, 403 on unknown key)
//!     → AuthenticatedKey in request extensions
//! ```
//!
//! # Design Decisions
//! - Parsing is pure and never logs
//! - Status codes are chosen by the HTTP adapters, not the parser

pub mod api_key;
pub mod extractor;
pub mod middleware;

pub use api_key::{extract_api_key, extract_api_key_str, AuthError, API_KEY_SCHEME};
pub use extractor::ApiKey;
pub use middleware::{api_key_auth_middleware, ApiKeyAuthState, AuthenticatedKey};
