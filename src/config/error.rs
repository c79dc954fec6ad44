//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid number in {0}")]
    InvalidNumber(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid shutdown grace period")]
    InvalidShutdownGrace,

    #[error("Unknown log format: {0}")]
    InvalidLogFormat(String),

    #[error("Unknown PayPal API mode: {0} (expected sandbox or live)")]
    InvalidApiMode(String),

    #[error("{0} must be an absolute http(s) URL")]
    InvalidUrl(&'static str),
}
