//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the PayPal REST API:
//! - OAuth2 client-credentials token with caching
//! - Orders v2 create, capture and read
//! - Payments v2 capture read and refund
//!
//! # Configuration
//!
//! Required environment variables:
//! - `PAYPAL_CLIENT_ID`: REST app client id
//! - `PAYPAL_CLIENT_SECRET` (or `PAYPAL_SECRET`): REST app secret
//!
//! `PAYPAL_API_MODE=live` switches from the sandbox to the live API.

mod api_types;
mod mock_payment_gateway;
mod paypal_adapter;

pub use mock_payment_gateway::{MethodCall, MockPaymentGateway};
pub use paypal_adapter::PayPalAdapter;
