//! HTTP adapters - REST API implementations.
//!
//! Each integration has its own HTTP adapter; `router` mounts them together
//! with the health check and shared middleware.

pub mod error;
pub mod extract;
pub mod facebook;
pub mod paypal;
pub mod router;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use facebook::{facebook_router, SocialAppState};
pub use paypal::{paypal_router, PaymentAppState};
pub use router::{app_router, HealthResponse, RouterOptions};
