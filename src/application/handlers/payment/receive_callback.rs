//! ReceivePaymentCallbackHandler - accepts PayPal webhooks and relays them.

use std::sync::Arc;

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::application::forwarder::CallbackForwarder;
use crate::domain::forwarding::RetryPolicy;
use crate::domain::foundation::DomainError;
use crate::domain::paypal::WebhookNotice;

/// Command carrying a webhook body as received.
#[derive(Debug, Clone)]
pub struct ReceivePaymentCallbackCommand {
    pub payload: Map<String, Value>,
}

/// Result of accepting a webhook.
#[derive(Debug, Clone)]
pub struct ReceivePaymentCallbackResult {
    pub notice: WebhookNotice,
    /// Whether a background delivery was started.
    pub forwarded: bool,
}

/// Handler for inbound payment webhooks.
///
/// The payload is relayed verbatim to the configured callback URL with the
/// bounded retry policy. The handler never waits for the delivery.
pub struct ReceivePaymentCallbackHandler {
    forwarder: Arc<CallbackForwarder>,
    callback_url: Option<String>,
}

impl ReceivePaymentCallbackHandler {
    pub fn new(forwarder: Arc<CallbackForwarder>, callback_url: Option<String>) -> Self {
        Self {
            forwarder,
            callback_url,
        }
    }

    pub fn handle(
        &self,
        cmd: ReceivePaymentCallbackCommand,
    ) -> Result<ReceivePaymentCallbackResult, DomainError> {
        let notice = WebhookNotice::from_payload(&cmd.payload);
        tracing::info!(
            webhook_id = ?notice.id,
            event_type = ?notice.event_type,
            resource_type = ?notice.resource_type,
            "PayPal callback received"
        );

        let Some(url) = &self.callback_url else {
            tracing::debug!("PAYPAL_CALLBACK_URL not set, callback not forwarded");
            return Ok(ReceivePaymentCallbackResult {
                notice,
                forwarded: false,
            });
        };

        let body = serde_json::to_vec(&cmd.payload)
            .map_err(|e| DomainError::validation("body", format!("unserializable payload: {}", e)))?;

        self.forwarder
            .spawn(url.clone(), Bytes::from(body), RetryPolicy::bounded());

        Ok(ReceivePaymentCallbackResult {
            notice,
            forwarded: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::forwarding::ScriptedTransport;
    use serde_json::json;

    fn payload() -> Map<String, Value> {
        json!({
            "id": "WH-58D329510W468432D-8HN650336L201105X",
            "event_type": "PAYMENT.CAPTURE.COMPLETED",
            "resource": { "id": "42311647XV020574X", "status": "COMPLETED" }
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[tokio::test]
    async fn forwards_payload_verbatim_when_url_configured() {
        let transport = ScriptedTransport::succeeding();
        let forwarder = Arc::new(CallbackForwarder::new(Arc::new(transport.clone())));
        let handler = ReceivePaymentCallbackHandler::new(
            forwarder.clone(),
            Some("http://downstream.test/paypal".to_string()),
        );

        let result = handler
            .handle(ReceivePaymentCallbackCommand { payload: payload() })
            .unwrap();

        assert!(result.forwarded);
        assert_eq!(
            result.notice.event_type.as_deref(),
            Some("PAYMENT.CAPTURE.COMPLETED")
        );

        assert!(forwarder.shutdown(std::time::Duration::from_secs(1)).await);
        let attempts = transport.attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].url, "http://downstream.test/paypal");
        let relayed: Value = serde_json::from_slice(&attempts[0].payload).unwrap();
        assert_eq!(relayed, Value::Object(payload()));
    }

    #[tokio::test]
    async fn accepts_without_forwarding_when_url_missing() {
        let transport = ScriptedTransport::succeeding();
        let forwarder = Arc::new(CallbackForwarder::new(Arc::new(transport.clone())));
        let handler = ReceivePaymentCallbackHandler::new(forwarder.clone(), None);

        let result = handler
            .handle(ReceivePaymentCallbackCommand { payload: Map::new() })
            .unwrap();

        assert!(!result.forwarded);
        assert_eq!(forwarder.in_flight(), 0);
        assert_eq!(transport.attempt_count(), 0);
    }
}
