//! Refund payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::order::Money;
use super::resource;

/// Body of `POST /v2/payments/captures/{id}/refund`.
///
/// Leaving `amount` unset refunds the full captured amount.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RefundCaptureRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_to_payer: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RefundCaptureRequest {
    pub fn is_full_refund(&self) -> bool {
        self.amount.is_none()
    }
}

/// Refund as reported by the provider. Only `id` is lifted out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RefundResponse {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RefundResponse {
    pub fn status(&self) -> Option<&str> {
        resource::str_field(&self.extra, "status")
    }

    pub fn amount(&self) -> Option<Money> {
        resource::money_field(&self.extra, "amount")
    }
}
