//! BeginLoginHandler - builds the provider authorization URL.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::social::{LoginRedirect, OAuthState};
use crate::ports::SocialLogin;

/// Handler for starting a social login.
///
/// A fresh state token is drawn for every call. It is returned to the
/// caller and not stored.
pub struct BeginLoginHandler {
    social_login: Arc<dyn SocialLogin>,
}

impl BeginLoginHandler {
    pub fn new(social_login: Arc<dyn SocialLogin>) -> Self {
        Self { social_login }
    }

    pub fn handle(&self) -> Result<LoginRedirect, DomainError> {
        let state = OAuthState::generate().map_err(|e| {
            tracing::error!(error = %e, "OS random number generator failed");
            DomainError::upstream("failed to generate state")
        })?;

        let url = self.social_login.authorization_url(&state);
        Ok(LoginRedirect { url, state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::facebook::MockSocialLogin;
    use crate::domain::social::SocialProfile;

    fn handler() -> BeginLoginHandler {
        BeginLoginHandler::new(Arc::new(MockSocialLogin::new(
            "token",
            SocialProfile::default(),
        )))
    }

    #[test]
    fn url_embeds_returned_state() {
        let redirect = handler().handle().unwrap();
        assert_eq!(redirect.state.as_str().len(), 24);
        assert!(redirect
            .url
            .ends_with(&format!("state={}", redirect.state.as_str())));
    }

    #[test]
    fn state_is_fresh_per_call() {
        let handler = handler();
        let first = handler.handle().unwrap();
        let second = handler.handle().unwrap();
        assert_ne!(first.state, second.state);
    }
}
