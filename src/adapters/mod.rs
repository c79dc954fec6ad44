//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `paypal` - PayPal REST `PaymentGateway`
//! - `facebook` - Facebook OAuth `SocialLogin`
//! - `forwarding` - `CallbackTransport` over HTTP
//! - `http` - axum routers exposing the service

pub mod facebook;
pub mod forwarding;
pub mod http;
pub mod paypal;

pub use facebook::{FacebookEndpoints, FacebookOAuthAdapter, MockSocialLogin};
pub use forwarding::{HttpCallbackTransport, ScriptedTransport};
pub use paypal::{MockPaymentGateway, PayPalAdapter};
