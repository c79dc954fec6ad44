//! HTTP adapter for Facebook login endpoints.
//!
//! - `GET /fb/login` - Start a login
//! - `GET|POST /fb/callback` - Finish a login

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CallbackParams, LoginResponse};
pub use handlers::SocialAppState;
pub use routes::facebook_router;
