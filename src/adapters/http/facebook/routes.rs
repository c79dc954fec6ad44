//! Axum router configuration for Facebook login endpoints.

use axum::{routing::get, Router};

use super::handlers::{callback, login, SocialAppState};

/// Create the Facebook login router, mounted at `/fb`.
///
/// # Routes
/// - `GET /login` - Authorization URL and state
/// - `GET /callback` - Provider redirect target
/// - `POST /callback` - Same, with `{code, state}` in a JSON body
pub fn facebook_router() -> Router<SocialAppState> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback).post(callback))
}
