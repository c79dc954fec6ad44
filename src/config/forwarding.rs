//! Downstream forwarding targets

use super::error::ValidationError;
use super::validate_http_url;

/// Where inbound provider callbacks are relayed.
///
/// Each target is optional; an unset target means the payload is accepted
/// and dropped.
#[derive(Debug, Clone, Default)]
pub struct ForwardingConfig {
    /// Receives PayPal webhook payloads verbatim
    pub paypal_callback_url: Option<String>,

    /// Receives the Facebook login result
    pub facebook_callback_url: Option<String>,
}

impl ForwardingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.paypal_callback_url {
            validate_http_url(url, "PAYPAL_CALLBACK_URL")?;
        }
        if let Some(url) = &self.facebook_callback_url {
            validate_http_url(url, "FACEBOOK_CALLBACK_URL")?;
        }
        Ok(())
    }
}
