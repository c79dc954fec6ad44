//! Login results exchanged with the provider and returned to the front-end.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::state::OAuthState;

/// Bearer token issued by the provider for the logged-in user.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Profile fields read from the provider. Missing fields become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialProfile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

/// Where to send the user to start a login, and the state embedded in it.
#[derive(Debug, Clone)]
pub struct LoginRedirect {
    pub url: String,
    pub state: OAuthState,
}

/// Result of a completed login.
///
/// This is both the callback response body and the payload relayed to the
/// downstream consumer, so the token is carried in clear text here.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginCallback {
    pub access_token: String,
    pub name: String,
    pub email: String,
}

impl LoginCallback {
    pub fn new(token: &AccessToken, profile: SocialProfile) -> Self {
        Self {
            access_token: token.expose().to_string(),
            name: profile.name,
            email: profile.email,
        }
    }
}

impl fmt::Debug for LoginCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCallback")
            .field("access_token", &"[REDACTED]")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("EAAB-secret");
        assert_eq!(format!("{:?}", token), "AccessToken([REDACTED])");
        assert_eq!(token.expose(), "EAAB-secret");
    }

    #[test]
    fn profile_tolerates_missing_email() {
        let profile: SocialProfile =
            serde_json::from_value(json!({ "name": "Ada Lovelace", "id": "10" })).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.email, "");
    }

    #[test]
    fn login_callback_carries_values_untransformed() {
        let token = AccessToken::new("EAAB-token");
        let callback = LoginCallback::new(
            &token,
            SocialProfile {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&callback).unwrap(),
            json!({
                "access_token": "EAAB-token",
                "name": "Ada Lovelace",
                "email": "ada@example.com"
            })
        );
        assert!(!format!("{:?}", callback).contains("EAAB-token"));
    }
}
