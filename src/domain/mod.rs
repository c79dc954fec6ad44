//! Domain layer containing the types exchanged with providers and callers.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary
//! - `paypal` - Order, capture and refund payloads mirrored from the PayPal REST API
//! - `social` - OAuth state tokens and the login result returned to the front-end
//! - `forwarding` - Retry policy and outcomes for webhook relays

pub mod forwarding;
pub mod foundation;
pub mod paypal;
pub mod social;
