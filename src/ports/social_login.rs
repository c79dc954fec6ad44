//! Social login port for the OAuth authorization-code flow.
//!
//! The service acts as an OAuth client only: it builds the provider's
//! authorization URL, trades the returned code for an access token, and
//! reads the user's name and email.
//!
//! # Example
//!
//! ```ignore
//! async fn login(social: Arc<dyn SocialLogin>, code: &str) -> Result<LoginCallback, OAuthError> {
//!     let token = social.exchange_code(code).await?;
//!     let profile = social.fetch_profile(&token).await?;
//!     Ok(LoginCallback::new(&token, profile))
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::social::{AccessToken, OAuthState, SocialProfile};

/// OAuth client operations against a social identity provider.
///
/// # Contract
///
/// Implementations must:
/// - Embed the given state verbatim in the authorization URL
/// - Return `OAuthError::TokenExchange` when the provider refuses the code
/// - Return `OAuthError::Network` for transport failures
#[async_trait]
pub trait SocialLogin: Send + Sync {
    /// Authorization URL the user is redirected to.
    fn authorization_url(&self, state: &OAuthState) -> String;

    /// Trade an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError>;

    /// Read the user's name and email with the access token.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<SocialProfile, OAuthError>;
}

/// Errors from the OAuth provider.
#[derive(Debug, Clone, Error)]
pub enum OAuthError {
    #[error("failed to exchange token: {message}")]
    TokenExchange {
        status: Option<u16>,
        message: String,
    },

    #[error("failed to get user info: {0}")]
    Profile(String),

    #[error("failed to reach oauth provider: {0}")]
    Network(String),
}

impl OAuthError {
    /// Whether the provider rejected the caller's code.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            OAuthError::TokenExchange { status: Some(status), .. }
                if (400..500).contains(status) && *status != 429
        )
    }
}

impl From<OAuthError> for DomainError {
    fn from(err: OAuthError) -> Self {
        if err.is_client_fault() {
            DomainError::upstream_rejected(err.to_string())
        } else {
            DomainError::upstream(err.to_string())
        }
    }
}
