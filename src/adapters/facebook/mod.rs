//! Facebook social login adapter.
//!
//! Implements the `SocialLogin` port with the Facebook OAuth dialog and the
//! Graph API.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `FACEBOOK_CLIENT_ID`: App id
//! - `FACEBOOK_CLIENT_SECRET`: App secret
//!
//! Optional: `FACEBOOK_REDIRECT_URL`, `FACEBOOK_SCOPES`.

mod api_types;
mod facebook_adapter;
mod mock_social_login;

pub use facebook_adapter::{
    FacebookEndpoints, FacebookOAuthAdapter, DEFAULT_AUTH_URL, DEFAULT_PROFILE_URL,
    DEFAULT_TOKEN_URL,
};
pub use mock_social_login::MockSocialLogin;
