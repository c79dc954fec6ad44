//! Application layer - Handlers and background delivery.
//!
//! This layer orchestrates ports. HTTP adapters call into it; it never
//! touches HTTP types itself.

pub mod forwarder;
pub mod handlers;

pub use forwarder::CallbackForwarder;
pub use handlers::{
    BeginLoginHandler, CompleteLoginCommand, CompleteLoginHandler, ReceivePaymentCallbackCommand,
    ReceivePaymentCallbackHandler, ReceivePaymentCallbackResult,
};
