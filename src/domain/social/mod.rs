//! Social login types.

mod login;
mod state;

pub use login::{AccessToken, LoginCallback, LoginRedirect, SocialProfile};
pub use state::{OAuthState, STATE_BYTES};
