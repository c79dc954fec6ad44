//! PayPal webhook notifications.
//!
//! Callbacks are relayed verbatim, so the payload is never parsed into a
//! fixed schema. `WebhookNotice` only picks out the identifying fields for
//! logging.

use serde_json::{Map, Value};

/// Identifying fields of a webhook notification, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookNotice {
    pub id: Option<String>,
    pub event_type: Option<String>,
    pub resource_type: Option<String>,
}

impl WebhookNotice {
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let field = |name: &str| payload.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            id: field("id"),
            event_type: field("event_type"),
            resource_type: field("resource_type"),
        }
    }
}
