//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
///
/// `UpstreamRejected` and `UpstreamUnavailable` are both upstream failures;
/// the split records whether the provider blamed the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Wiring errors
    MissingDependency,

    // Provider errors
    UpstreamRejected,
    UpstreamUnavailable,
}

impl ErrorCode {
    /// Whether this code belongs to the upstream class.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ErrorCode::UpstreamRejected | ErrorCode::UpstreamUnavailable
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingDependency => "MISSING_DEPENDENCY",
            ErrorCode::UpstreamRejected => "UPSTREAM_REJECTED",
            ErrorCode::UpstreamUnavailable => "UPSTREAM_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// A collaborator the operation needs was never configured.
    pub fn missing_dependency(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingDependency, message)
    }

    /// The provider refused the request because of the caller's input.
    pub fn upstream_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamRejected, message)
    }

    /// The provider failed, was unreachable, or answered with nothing usable.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::missing_dependency("paypal client not found");
        assert_eq!(
            format!("{}", err),
            "[MISSING_DEPENDENCY] paypal client not found"
        );
    }

    #[test]
    fn validation_records_field() {
        let err = DomainError::validation("code", "code is required");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"code".to_string()));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::upstream("capture failed")
            .with_detail("provider_status", "503")
            .with_detail("debug_id", "abc123");

        assert_eq!(err.details.get("provider_status"), Some(&"503".to_string()));
        assert_eq!(err.details.get("debug_id"), Some(&"abc123".to_string()));
    }

    #[test]
    fn upstream_codes_share_a_class() {
        assert!(ErrorCode::UpstreamRejected.is_upstream());
        assert!(ErrorCode::UpstreamUnavailable.is_upstream());
        assert!(!ErrorCode::ValidationFailed.is_upstream());
        assert!(!ErrorCode::MissingDependency.is_upstream());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
        assert_eq!(format!("{}", ErrorCode::UpstreamUnavailable), "UPSTREAM_ERROR");
    }
}
