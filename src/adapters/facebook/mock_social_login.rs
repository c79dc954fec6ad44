//! Mock social login for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::social::{AccessToken, OAuthState, SocialProfile};
use crate::ports::{OAuthError, SocialLogin};

/// Scripted `SocialLogin` implementation.
///
/// Every code exchanges to the configured token unless an error is set.
#[derive(Clone)]
pub struct MockSocialLogin {
    inner: Arc<Mutex<MockState>>,
}

struct MockState {
    token: String,
    profile: SocialProfile,
    exchange_error: Option<OAuthError>,
    profile_error: Option<OAuthError>,
    exchanged_codes: Vec<String>,
    profile_tokens: Vec<String>,
}

impl MockSocialLogin {
    pub fn new(token: impl Into<String>, profile: SocialProfile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockState {
                token: token.into(),
                profile,
                exchange_error: None,
                profile_error: None,
                exchanged_codes: Vec::new(),
                profile_tokens: Vec::new(),
            })),
        }
    }

    pub fn fail_exchange(&self, error: OAuthError) {
        self.inner.lock().unwrap().exchange_error = Some(error);
    }

    pub fn fail_profile(&self, error: OAuthError) {
        self.inner.lock().unwrap().profile_error = Some(error);
    }

    /// Codes passed to `exchange_code`, in call order.
    pub fn exchanged_codes(&self) -> Vec<String> {
        self.inner.lock().unwrap().exchanged_codes.clone()
    }

    /// Tokens passed to `fetch_profile`, in call order.
    pub fn profile_tokens(&self) -> Vec<String> {
        self.inner.lock().unwrap().profile_tokens.clone()
    }
}

#[async_trait]
impl SocialLogin for MockSocialLogin {
    fn authorization_url(&self, state: &OAuthState) -> String {
        format!(
            "https://www.facebook.com/v10.0/dialog/oauth?client_id=mock&response_type=code&state={}",
            state.as_str()
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError> {
        let mut state = self.inner.lock().unwrap();
        state.exchanged_codes.push(code.to_string());
        if let Some(error) = state.exchange_error.clone() {
            return Err(error);
        }
        Ok(AccessToken::new(state.token.clone()))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<SocialProfile, OAuthError> {
        let mut state = self.inner.lock().unwrap();
        state.profile_tokens.push(token.expose().to_string());
        if let Some(error) = state.profile_error.clone() {
            return Err(error);
        }
        Ok(state.profile.clone())
    }
}
