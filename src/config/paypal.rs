//! Payment configuration (PayPal)

use secrecy::SecretString;

use super::error::ValidationError;
use super::validate_http_url;

/// PayPal REST API base for sandbox credentials.
pub const SANDBOX_API_BASE: &str = "https://api-m.sandbox.paypal.com";

/// PayPal REST API base for live credentials.
pub const LIVE_API_BASE: &str = "https://api-m.paypal.com";

/// Which PayPal environment the credentials belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    #[default]
    Sandbox,
    Live,
}

impl ApiMode {
    pub(super) fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "sandbox" => Ok(ApiMode::Sandbox),
            "live" => Ok(ApiMode::Live),
            other => Err(ValidationError::InvalidApiMode(other.to_string())),
        }
    }
}

/// Payment configuration (PayPal)
///
/// The integration is enabled only when both the client id and secret are set.
#[derive(Debug, Clone, Default)]
pub struct PayPalConfig {
    /// REST app client id
    pub client_id: Option<String>,

    /// REST app secret
    pub client_secret: Option<SecretString>,

    /// Sandbox or live
    pub api_mode: ApiMode,

    /// Overrides the mode-derived base URL
    pub api_base: Option<String>,
}

impl PayPalConfig {
    /// Client id and secret, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret)),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials().is_some()
    }

    /// Check if using live mode
    pub fn is_live_mode(&self) -> bool {
        self.api_mode == ApiMode::Live
    }

    /// Base URL for REST calls.
    pub fn base_url(&self) -> &str {
        if let Some(base) = &self.api_base {
            return base.trim_end_matches('/');
        }
        match self.api_mode {
            ApiMode::Sandbox => SANDBOX_API_BASE,
            ApiMode::Live => LIVE_API_BASE,
        }
    }

    /// Validate payment configuration
    ///
    /// A half-configured credential pair is rejected rather than silently
    /// disabling the integration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (&self.client_id, &self.client_secret) {
            (Some(_), None) => return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_SECRET")),
            (None, Some(_)) => return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_ID")),
            _ => {}
        }
        if let Some(base) = &self.api_base {
            validate_http_url(base, "PAYPAL_API_BASE")?;
        }
        Ok(())
    }
}
