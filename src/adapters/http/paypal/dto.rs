//! Request and response bodies specific to the payment routes.
//!
//! Order, capture and refund bodies are the provider's own types from
//! `domain::paypal`; only the webhook acknowledgement is defined here.

use serde::{Deserialize, Serialize};

/// Acknowledgement for an accepted webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackAccepted {
    pub status: String,
}

impl CallbackAccepted {
    pub fn received() -> Self {
        Self {
            status: "callback received".to_string(),
        }
    }
}
