//! Facebook OAuth adapter.
//!
//! Implements `SocialLogin` for the Facebook authorization-code flow:
//! dialog URL, code exchange against the Graph token endpoint, and a
//! `/me?fields=name,email` profile read.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use url::form_urlencoded;

use crate::config::FacebookConfig;
use crate::domain::social::{AccessToken, OAuthState, SocialProfile};
use crate::ports::{OAuthError, SocialLogin};

use super::api_types::{GraphErrorEnvelope, TokenResponse};

pub const DEFAULT_AUTH_URL: &str = "https://www.facebook.com/v10.0/dialog/oauth";
pub const DEFAULT_TOKEN_URL: &str = "https://graph.facebook.com/v10.0/oauth/access_token";
pub const DEFAULT_PROFILE_URL: &str = "https://graph.facebook.com/me";

/// Profile fields requested from the Graph API.
const PROFILE_FIELDS: &str = "name,email";

/// Provider endpoints, overridable for tests.
#[derive(Debug, Clone)]
pub struct FacebookEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub profile_url: String,
}

impl Default for FacebookEndpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            profile_url: DEFAULT_PROFILE_URL.to_string(),
        }
    }
}

impl FacebookEndpoints {
    /// All three endpoints under one base URL.
    pub fn under(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            auth_url: format!("{}/v10.0/dialog/oauth", base),
            token_url: format!("{}/v10.0/oauth/access_token", base),
            profile_url: format!("{}/me", base),
        }
    }
}

/// Facebook OAuth client.
pub struct FacebookOAuthAdapter {
    http_client: reqwest::Client,
    client_id: String,
    client_secret: SecretString,
    redirect_url: Option<String>,
    scopes: Vec<String>,
    endpoints: FacebookEndpoints,
}

impl FacebookOAuthAdapter {
    pub fn new(
        http_client: reqwest::Client,
        client_id: impl Into<String>,
        client_secret: SecretString,
        redirect_url: Option<String>,
        scopes: Vec<String>,
    ) -> Self {
        Self {
            http_client,
            client_id: client_id.into(),
            client_secret,
            redirect_url,
            scopes,
            endpoints: FacebookEndpoints::default(),
        }
    }

    /// Build from configuration. `None` when credentials are absent.
    pub fn from_config(config: &FacebookConfig, http_client: reqwest::Client) -> Option<Self> {
        let (client_id, client_secret) = config.credentials()?;
        Some(Self::new(
            http_client,
            client_id,
            client_secret.clone(),
            config.redirect_url.clone(),
            config.scopes.clone(),
        ))
    }

    /// Point the adapter at different endpoints.
    pub fn with_endpoints(mut self, endpoints: FacebookEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

#[async_trait]
impl SocialLogin for FacebookOAuthAdapter {
    fn authorization_url(&self, state: &OAuthState) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("client_id", &self.client_id);
        if let Some(redirect) = &self.redirect_url {
            query.append_pair("redirect_uri", redirect);
        }
        query.append_pair("response_type", "code");
        if !self.scopes.is_empty() {
            query.append_pair("scope", &self.scopes.join(" "));
        }
        query.append_pair("state", state.as_str());

        let separator = if self.endpoints.auth_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{}{}{}", self.endpoints.auth_url, separator, query.finish())
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError> {
        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret().as_str()),
        ];
        if let Some(redirect) = &self.redirect_url {
            form.push(("redirect_uri", redirect.as_str()));
        }

        let response = self
            .http_client
            .post(&self.endpoints.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| OAuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = GraphErrorEnvelope::describe(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), error = %message, "Facebook token exchange failed");
            return Err(OAuthError::TokenExchange {
                status: Some(status.as_u16()),
                message,
            });
        }

        let token: TokenResponse = response.json().await.map_err(|e| OAuthError::TokenExchange {
            status: None,
            message: format!("invalid token response: {}", e),
        })?;

        if token.access_token.is_empty() {
            return Err(OAuthError::TokenExchange {
                status: None,
                message: "server response missing access_token".to_string(),
            });
        }

        tracing::debug!(
            token_type = ?token.token_type,
            expires_in = ?token.expires_in,
            "Facebook code exchanged"
        );
        Ok(AccessToken::new(token.access_token))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<SocialProfile, OAuthError> {
        let response = self
            .http_client
            .get(&self.endpoints.profile_url)
            .query(&[("fields", PROFILE_FIELDS)])
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|e| OAuthError::Profile(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = GraphErrorEnvelope::describe(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), error = %message, "Facebook profile fetch failed");
            return Err(OAuthError::Profile(message));
        }

        response
            .json::<SocialProfile>()
            .await
            .map_err(|e| OAuthError::Profile(format!("failed to decode user info: {}", e)))
    }
}
