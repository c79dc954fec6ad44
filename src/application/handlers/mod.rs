//! Application handlers.
//!
//! Command handlers that orchestrate ports and the forwarder.

pub mod payment;
pub mod social;

pub use payment::{
    ReceivePaymentCallbackCommand, ReceivePaymentCallbackHandler, ReceivePaymentCallbackResult,
};
pub use social::{BeginLoginHandler, CompleteLoginCommand, CompleteLoginHandler};
