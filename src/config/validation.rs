//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the control endpoint URL is an http(s) base URL
//! - Validate value ranges (timeouts > 0, non-empty paths)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DbgConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use url::Url;

use crate::config::schema::DbgConfig;

/// Levels accepted by `observability.log_level`, quietest first.
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "endpoint.base_url").
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully resolved configuration.
pub fn validate_config(config: &DbgConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::new(
                    "endpoint.base_url",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::new(
                    "endpoint.base_url",
                    "must not carry a query or fragment",
                ));
            }
        }
        Err(e) => {
            errors.push(ValidationError::new(
                "endpoint.base_url",
                format!("invalid URL '{}': {}", config.endpoint.base_url, e),
            ));
        }
    }

    if config.endpoint.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "endpoint.timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.endpoint.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "endpoint.connect_timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.nginx.conf_path.as_os_str().is_empty() {
        errors.push(ValidationError::new("nginx.conf_path", "must not be empty"));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!(
                "unknown level '{}', expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
