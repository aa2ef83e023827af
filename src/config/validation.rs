//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject key sets that can never authenticate a request
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::GateConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("auth is enabled but no api_keys are configured")]
    NoApiKeys,

    #[error("api_keys[{index}] is empty")]
    EmptyApiKey { index: usize },

    #[error("api_keys[{index}] contains whitespace")]
    WhitespaceInApiKey { index: usize },

    #[error("api_keys[{index}] contains characters outside visible ASCII")]
    InvalidCharInApiKey { index: usize },

    #[error("api_keys[{index}] duplicates an earlier key")]
    DuplicateApiKey { index: usize },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.auth.enabled && config.auth.api_keys.is_empty() {
        errors.push(ValidationError::NoApiKeys);
    }

    let mut seen = HashSet::new();
    for (index, key) in config.auth.api_keys.iter().enumerate() {
        if key.is_empty() {
            errors.push(ValidationError::EmptyApiKey { index });
        } else if key.chars().any(char::is_whitespace) {
            errors.push(ValidationError::WhitespaceInApiKey { index });
        } else if !key.bytes().all(|b| b.is_ascii_graphic()) {
            errors.push(ValidationError::InvalidCharInApiKey { index });
        }
        if !seen.insert(key.as_str()) {
            errors.push(ValidationError::DuplicateApiKey { index });
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
