//! Capture payloads: capturing an approved order and reading a capture back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::order::{Money, PaymentSource};
use super::resource;

/// Body of `POST /v2/checkout/orders/{id}/capture`.
///
/// Usually empty; a payment source is only needed for vaulted or card flows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CaptureOrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order as returned after a capture.
///
/// Like `Order`, only `id` is lifted out of the provider body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CaptureOrderResponse {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaptureOrderResponse {
    pub fn status(&self) -> Option<&str> {
        resource::str_field(&self.extra, "status")
    }

    /// Ids of the captures created for this order, in purchase unit order.
    pub fn capture_ids(&self) -> Vec<&str> {
        self.extra
            .get("purchase_units")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|unit| unit.pointer("/payments/captures"))
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(|capture| capture.get("id").and_then(Value::as_str))
            .collect()
    }
}

/// A single captured payment, as PayPal returned it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CaptureDetails {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaptureDetails {
    pub fn status(&self) -> Option<&str> {
        resource::str_field(&self.extra, "status")
    }

    pub fn amount(&self) -> Option<Money> {
        resource::money_field(&self.extra, "amount")
    }
}
