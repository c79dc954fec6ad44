//! Callback transport port.
//!
//! A single attempt at handing a JSON payload to the downstream consumer.
//! Retry, backoff and timeouts belong to the forwarder, not to the transport.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Delivers one JSON payload to a callback URL.
#[async_trait]
pub trait CallbackTransport: Send + Sync {
    /// POST `payload` to `url`. Any non-2xx answer is a failure.
    async fn deliver(&self, url: &str, payload: Bytes) -> Result<(), DeliveryError>;
}

/// Why a single delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("callback request failed: {0}")]
    Network(String),

    #[error("callback answered with status {0}")]
    Status(u16),
}
