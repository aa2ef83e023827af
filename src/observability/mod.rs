//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! auth middleware, config loader
//!     → logging.rs (structured log events)
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Key material never appears in log fields

pub mod logging;

pub use logging::{init_logging, try_init_logging};
