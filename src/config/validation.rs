//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject routes that could never be written as a configuration line
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a route file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: empty pattern")]
    EmptyPattern { index: usize },

    #[error("route #{index}: empty endpoint")]
    EmptyEndpoint { index: usize },

    #[error("route #{index}: {field} `{value}` contains whitespace")]
    Whitespace {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
        }
        if route.endpoint.is_empty() {
            errors.push(ValidationError::EmptyEndpoint { index });
        }
        for (field, value) in [("pattern", &route.pattern), ("endpoint", &route.endpoint)] {
            if value.chars().any(char::is_whitespace) {
                errors.push(ValidationError::Whitespace {
                    index,
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
