//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Variables are read unprefixed
//! (`PORT`, `PAYPAL_CLIENT_ID`, `FACEBOOK_CALLBACK_URL`, ...) so existing
//! deployment `.env` files keep working.
//!
//! # Example
//!
//! ```no_run
//! use outside_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod facebook;
mod forwarding;
mod paypal;
mod server;

pub use error::{ConfigError, ValidationError};
pub use facebook::FacebookConfig;
pub use forwarding::ForwardingConfig;
pub use paypal::{ApiMode, PayPalConfig, LIVE_API_BASE, SANDBOX_API_BASE};
pub use server::{LogFormat, ServerConfig};

use std::collections::HashMap;

use secrecy::SecretString;
use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, timeouts)
    pub server: ServerConfig,

    /// Payment configuration (PayPal)
    pub paypal: PayPalConfig,

    /// Social login configuration (Facebook)
    pub facebook: FacebookConfig,

    /// Downstream forwarding targets
    pub forwarding: ForwardingConfig,
}

/// Flat view of the environment variables this service reads.
///
/// Keys arrive lowercased from the `config` environment source.
#[derive(Debug, Default, Deserialize)]
struct EnvSettings {
    host: Option<String>,
    port: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
    request_timeout_secs: Option<String>,
    shutdown_grace_secs: Option<String>,
    cors_origins: Option<String>,

    paypal_client_id: Option<String>,
    paypal_client_secret: Option<String>,
    paypal_secret: Option<String>,
    paypal_api_mode: Option<String>,
    paypal_api_base: Option<String>,

    facebook_client_id: Option<String>,
    facebook_client_secret: Option<String>,
    facebook_redirect_url: Option<String>,
    facebook_scopes: Option<String>,

    paypal_callback_url: Option<String>,
    facebook_callback_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the process environment
    /// 3. Parses numbers, modes and formats into typed configuration structs
    ///
    /// Empty variables are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default())
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::default().source(Some(vars)))
    }

    fn from_source(source: config::Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(Self::from_settings(settings)?)
    }

    fn from_settings(settings: EnvSettings) -> Result<Self, ValidationError> {
        let server = ServerConfig {
            host: non_empty(settings.host).unwrap_or_else(server::default_host),
            port: parse_number(settings.port, "PORT")?.unwrap_or_else(server::default_port),
            log_level: non_empty(settings.log_level).unwrap_or_else(server::default_log_level),
            log_format: LogFormat::parse(settings.log_format.as_deref().unwrap_or_default())?,
            request_timeout_secs: parse_number(settings.request_timeout_secs, "REQUEST_TIMEOUT_SECS")?
                .unwrap_or_else(server::default_request_timeout),
            shutdown_grace_secs: parse_number(settings.shutdown_grace_secs, "SHUTDOWN_GRACE_SECS")?
                .unwrap_or_else(server::default_shutdown_grace),
            cors_origins: non_empty(settings.cors_origins),
        };

        let paypal = PayPalConfig {
            client_id: non_empty(settings.paypal_client_id),
            client_secret: non_empty(settings.paypal_client_secret)
                .or_else(|| non_empty(settings.paypal_secret))
                .map(SecretString::new),
            api_mode: ApiMode::parse(settings.paypal_api_mode.as_deref().unwrap_or_default())?,
            api_base: non_empty(settings.paypal_api_base),
        };

        let facebook = FacebookConfig {
            client_id: non_empty(settings.facebook_client_id),
            client_secret: non_empty(settings.facebook_client_secret).map(SecretString::new),
            redirect_url: non_empty(settings.facebook_redirect_url),
            scopes: FacebookConfig::parse_scopes(settings.facebook_scopes.as_deref()),
        };

        let forwarding = ForwardingConfig {
            paypal_callback_url: non_empty(settings.paypal_callback_url),
            facebook_callback_url: non_empty(settings.facebook_callback_url),
        };

        Ok(Self {
            server,
            paypal,
            facebook,
            forwarding,
        })
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Bind address and timeout ranges
    /// - Credential pairs are either complete or absent
    /// - URL formats
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.paypal.validate()?;
        self.facebook.validate()?;
        self.forwarding.validate()?;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
) -> Result<Option<T>, ValidationError> {
    non_empty(value)
        .map(|v| v.parse::<T>().map_err(|_| ValidationError::InvalidNumber(name)))
        .transpose()
}

pub(crate) fn validate_http_url(raw: &str, name: &'static str) -> Result<(), ValidationError> {
    match url::Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::InvalidUrl(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_empty_environment_uses_defaults() {
        let config = AppConfig::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.paypal.is_enabled());
        assert!(!config.facebook.is_enabled());
        assert!(config.forwarding.paypal_callback_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_environment() {
        let config = AppConfig::from_env_map(env(&[
            ("PORT", "3000"),
            ("PAYPAL_CLIENT_ID", "pp-client"),
            ("PAYPAL_CLIENT_SECRET", "pp-secret"),
            ("PAYPAL_API_MODE", "live"),
            ("FACEBOOK_CLIENT_ID", "1234567890"),
            ("FACEBOOK_CLIENT_SECRET", "fb-secret"),
            ("FACEBOOK_REDIRECT_URL", "https://app.example.com/fb/callback"),
            ("PAYPAL_CALLBACK_URL", "https://hooks.example.com/paypal"),
            ("FACEBOOK_CALLBACK_URL", "https://hooks.example.com/facebook"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.paypal.is_live_mode());
        let (id, secret) = config.paypal.credentials().unwrap();
        assert_eq!(id, "pp-client");
        assert_eq!(secret.expose_secret(), "pp-secret");
        // Numeric app ids must stay strings.
        assert_eq!(config.facebook.client_id.as_deref(), Some("1234567890"));
        assert_eq!(
            config.forwarding.facebook_callback_url.as_deref(),
            Some("https://hooks.example.com/facebook")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_secret_name_is_accepted() {
        let config = AppConfig::from_env_map(env(&[
            ("PAYPAL_CLIENT_ID", "pp-client"),
            ("PAYPAL_SECRET", "legacy-secret"),
        ]))
        .unwrap();
        let (_, secret) = config.paypal.credentials().unwrap();
        assert_eq!(secret.expose_secret(), "legacy-secret");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = AppConfig::from_env_map(env(&[
            ("PORT", ""),
            ("PAYPAL_CLIENT_ID", "  "),
            ("PAYPAL_CALLBACK_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.paypal.client_id.is_none());
        assert!(config.forwarding.paypal_callback_url.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = AppConfig::from_env_map(env(&[("PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidNumber("PORT")))
        ));
    }

    #[test]
    fn test_unknown_api_mode_is_rejected() {
        let result = AppConfig::from_env_map(env(&[("PAYPAL_API_MODE", "staging")]));
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidApiMode(_)))
        ));
    }

    #[test]
    fn test_validate_reports_bad_forward_url() {
        let config =
            AppConfig::from_env_map(env(&[("FACEBOOK_CALLBACK_URL", "not a url")])).unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("FACEBOOK_CALLBACK_URL"))
        );
    }

    #[test]
    fn test_http_url_check() {
        assert!(validate_http_url("https://example.com/x", "X").is_ok());
        assert!(validate_http_url("http://127.0.0.1:8080", "X").is_ok());
        assert!(validate_http_url("file:///etc/passwd", "X").is_err());
        assert!(validate_http_url("example.com", "X").is_err());
    }
}
