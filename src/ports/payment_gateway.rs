//! Payment gateway port for the order lifecycle.
//!
//! Defines the contract for the payment provider integration (PayPal).
//! Only the calls the HTTP layer makes are exposed: create, capture, read
//! an order, read a capture, refund a capture.
//!
//! # Design
//!
//! - **Pass-through**: Requests and responses are the provider's own payloads
//! - **No retries**: A failed call is reported to the caller as-is
//! - **Stateless**: Implementations hold credentials and a token cache only

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::paypal::{
    CaptureDetails, CaptureOrderRequest, CaptureOrderResponse, CreateOrderRequest, Order,
    RefundCaptureRequest, RefundResponse,
};

/// Port for the payment provider's order API.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order with `CAPTURE` intent.
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, PaymentError>;

    /// Capture payment for an approved order.
    async fn capture_order(
        &self,
        order_id: &str,
        request: CaptureOrderRequest,
    ) -> Result<CaptureOrderResponse, PaymentError>;

    /// Get an order by provider ID.
    async fn get_order(&self, order_id: &str) -> Result<Order, PaymentError>;

    /// Get a captured payment by provider ID.
    async fn get_capture(&self, capture_id: &str) -> Result<CaptureDetails, PaymentError>;

    /// Refund a captured payment, fully or partially.
    async fn refund_capture(
        &self,
        capture_id: &str,
        request: RefundCaptureRequest,
    ) -> Result<RefundResponse, PaymentError>;
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status the provider answered with (if any).
    pub provider_status: Option<u16>,

    /// Provider correlation id for support requests.
    pub debug_id: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_status: None,
            debug_id: None,
            retryable: code.is_retryable(),
        }
    }

    /// Create from a non-success provider status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let code = match status {
            400 | 422 => PaymentErrorCode::InvalidRequest,
            401 | 403 => PaymentErrorCode::AuthenticationError,
            404 => PaymentErrorCode::NotFound,
            429 => PaymentErrorCode::RateLimitExceeded,
            _ => PaymentErrorCode::ProviderError,
        };
        let mut err = Self::new(code, message);
        err.provider_status = Some(status);
        err
    }

    /// Attach the provider debug id.
    pub fn with_debug_id(mut self, debug_id: impl Into<String>) -> Self {
        self.debug_id = Some(debug_id.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// The provider answered success with nothing usable.
    pub fn empty_response(operation: &str) -> Self {
        Self::new(
            PaymentErrorCode::EmptyResponse,
            format!("{} returned an empty result", operation),
        )
    }

    /// The provider answered with a body we could not decode.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }

    /// Whether the provider blamed the caller's input.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self.code,
            PaymentErrorCode::InvalidRequest | PaymentErrorCode::NotFound
        )
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        let mut domain = if err.is_client_fault() {
            DomainError::upstream_rejected(err.message)
        } else {
            DomainError::upstream(err.message)
        };
        if let Some(status) = err.provider_status {
            domain = domain.with_detail("provider_status", status.to_string());
        }
        if let Some(debug_id) = err.debug_id {
            domain = domain.with_detail("debug_id", debug_id);
        }
        domain
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Provider rejected the request body or parameters.
    InvalidRequest,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Success status without a usable resource.
    EmptyResponse,

    /// Provider API error.
    ProviderError,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::NotFound => "not_found",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::EmptyResponse => "empty_response",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    // Trait object safety test
    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn payment_error_retryable() {
        assert!(PaymentErrorCode::NetworkError.is_retryable());
        assert!(PaymentErrorCode::RateLimitExceeded.is_retryable());

        assert!(!PaymentErrorCode::InvalidRequest.is_retryable());
        assert!(!PaymentErrorCode::NotFound.is_retryable());
    }

    #[test]
    fn status_maps_to_code() {
        assert_eq!(
            PaymentError::from_status(422, "x").code,
            PaymentErrorCode::InvalidRequest
        );
        assert_eq!(
            PaymentError::from_status(401, "x").code,
            PaymentErrorCode::AuthenticationError
        );
        assert_eq!(PaymentError::from_status(404, "x").code, PaymentErrorCode::NotFound);
        assert_eq!(
            PaymentError::from_status(503, "x").code,
            PaymentErrorCode::ProviderError
        );
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::empty_response("create_order");
        assert!(err.to_string().contains("empty_response"));
        assert!(err.to_string().contains("create_order returned an empty result"));
    }

    #[test]
    fn client_faults_become_rejections() {
        let err = PaymentError::from_status(422, "UNPROCESSABLE_ENTITY: ORDER_NOT_APPROVED")
            .with_debug_id("f2f4e1a3c4b2d");
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::UpstreamRejected);
        assert_eq!(domain.details.get("provider_status"), Some(&"422".to_string()));
        assert_eq!(domain.details.get("debug_id"), Some(&"f2f4e1a3c4b2d".to_string()));
    }

    #[test]
    fn provider_failures_stay_server_side() {
        let domain: DomainError = PaymentError::authentication("invalid_client").into();
        assert_eq!(domain.code, ErrorCode::UpstreamUnavailable);

        let domain: DomainError = PaymentError::network("connection reset").into();
        assert_eq!(domain.code, ErrorCode::UpstreamUnavailable);
    }
}
