//! reqwest-backed callback transport.

use async_trait::async_trait;
use bytes::Bytes;

use crate::ports::{CallbackTransport, DeliveryError};

/// POSTs payloads as `application/json`.
///
/// The per-attempt deadline is enforced by the forwarder; the client's own
/// timeout is only an outer bound.
#[derive(Clone)]
pub struct HttpCallbackTransport {
    http_client: reqwest::Client,
}

impl HttpCallbackTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CallbackTransport for HttpCallbackTransport {
    async fn deliver(&self, url: &str, payload: Bytes) -> Result<(), DeliveryError> {
        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}
