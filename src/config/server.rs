//! Server configuration

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Rust log filter directive, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Inbound request timeout and outbound provider timeout, in seconds
    pub request_timeout_secs: u64,

    /// How long in-flight webhook forwards may run after shutdown starts
    pub shutdown_grace_secs: u64,

    /// CORS allowed origins (comma-separated)
    pub cors_origins: Option<String>,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub(super) fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ValidationError::InvalidLogFormat(other.to_string())),
        }
    }
}

impl ServerConfig {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::from((ip, self.port)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Get CORS origins as a vector
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.shutdown_grace_secs > 300 {
            return Err(ValidationError::InvalidShutdownGrace);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            request_timeout_secs: default_request_timeout(),
            shutdown_grace_secs: default_shutdown_grace(),
            cors_origins: None,
        }
    }
}

pub(super) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(super) fn default_port() -> u16 {
    8080
}

pub(super) fn default_log_level() -> String {
    "info,outside_api=debug".to_string()
}

pub(super) fn default_request_timeout() -> u64 {
    30
}

pub(super) fn default_shutdown_grace() -> u64 {
    25
}
