//! Social login configuration (Facebook OAuth)

use secrecy::SecretString;

use super::error::ValidationError;
use super::validate_http_url;

/// Facebook OAuth app configuration
#[derive(Debug, Clone)]
pub struct FacebookConfig {
    /// App id
    pub client_id: Option<String>,

    /// App secret
    pub client_secret: Option<SecretString>,

    /// Redirect URL registered with the app
    pub redirect_url: Option<String>,

    /// Requested permissions
    pub scopes: Vec<String>,
}

impl FacebookConfig {
    /// App id and secret, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret)),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials().is_some()
    }

    pub(super) fn parse_scopes(raw: Option<&str>) -> Vec<String> {
        let scopes: Vec<String> = raw
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if scopes.is_empty() {
            default_scopes()
        } else {
            scopes
        }
    }

    /// Validate social login configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (&self.client_id, &self.client_secret) {
            (Some(_), None) => {
                return Err(ValidationError::MissingRequired("FACEBOOK_CLIENT_SECRET"))
            }
            (None, Some(_)) => return Err(ValidationError::MissingRequired("FACEBOOK_CLIENT_ID")),
            _ => {}
        }
        if let Some(redirect) = &self.redirect_url {
            validate_http_url(redirect, "FACEBOOK_REDIRECT_URL")?;
        }
        Ok(())
    }
}

impl Default for FacebookConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_url: None,
            scopes: default_scopes(),
        }
    }
}

fn default_scopes() -> Vec<String> {
    vec!["public_profile".to_string(), "email".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scopes() {
        let config = FacebookConfig::default();
        assert_eq!(config.scopes, vec!["public_profile", "email"]);
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!(FacebookConfig::parse_scopes(Some("email")), vec!["email"]);
        assert_eq!(
            FacebookConfig::parse_scopes(Some(" email , user_link ")),
            vec!["email", "user_link"]
        );
        assert_eq!(
            FacebookConfig::parse_scopes(Some(" , ")),
            vec!["public_profile", "email"]
        );
        assert_eq!(FacebookConfig::parse_scopes(None).len(), 2);
    }

    #[test]
    fn test_validation_half_configured() {
        let config = FacebookConfig {
            client_id: Some("123456".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("FACEBOOK_CLIENT_SECRET"))
        );
    }

    #[test]
    fn test_validation_bad_redirect() {
        let config = FacebookConfig {
            redirect_url: Some("/relative/callback".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("FACEBOOK_REDIRECT_URL"))
        );
    }

    #[test]
    fn test_validation_valid_config() {
        let config = FacebookConfig {
            client_id: Some("123456".to_string()),
            client_secret: Some(SecretString::new("app-secret".to_string())),
            redirect_url: Some("https://app.example.com/fb/callback".to_string()),
            ..Default::default()
        };
        assert!(config.is_enabled());
        assert!(config.validate().is_ok());
    }
}
