//! PayPal REST wire types that never leave the adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::paypal::{ApplicationContext, PaymentSource, PurchaseUnitRequest};

/// Response of `POST /v1/oauth2/token`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// Body of `POST /v2/checkout/orders`.
#[derive(Debug, Serialize)]
pub struct CreateOrderBody<'a> {
    pub intent: &'static str,
    pub purchase_units: &'a [PurchaseUnitRequest],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<&'a PaymentSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_context: Option<&'a ApplicationContext>,
}

/// Standard PayPal error envelope.
///
/// The token endpoint answers with the OAuth shape (`error`,
/// `error_description`) instead, so every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub debug_id: Option<String>,

    #[serde(default)]
    pub details: Vec<Value>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

impl ErrorBody {
    /// One-line summary: `NAME: message` with the first issue appended.
    pub fn summary(&self, fallback: &str) -> String {
        let name = self.name.as_deref().or(self.error.as_deref());
        let message = self
            .message
            .as_deref()
            .or(self.error_description.as_deref());

        let mut summary = match (name, message) {
            (Some(name), Some(message)) => format!("{}: {}", name, message),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => fallback.to_string(),
        };

        if let Some(issue) = self
            .details
            .first()
            .and_then(|detail| detail.get("issue"))
            .and_then(Value::as_str)
        {
            summary.push_str(&format!(" ({})", issue));
        }
        summary
    }
}
