//! Payment handlers.
//!
//! Order, capture and refund calls are proxied straight to the
//! `PaymentGateway`; only webhook intake needs orchestration.

mod receive_callback;

pub use receive_callback::{
    ReceivePaymentCallbackCommand, ReceivePaymentCallbackHandler, ReceivePaymentCallbackResult,
};
