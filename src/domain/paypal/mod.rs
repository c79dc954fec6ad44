//! PayPal payload types.
//!
//! Mirrors of the REST API's JSON, declared locally so the HTTP layer can
//! accept and return them without reshaping.

mod capture;
mod order;
mod refund;
mod resource;
mod webhook;

pub use capture::{CaptureDetails, CaptureOrderRequest, CaptureOrderResponse};
pub use order::{
    ApplicationContext, CreateOrderRequest, Item, Link, Money, Order, PaymentSource,
    PurchaseUnitAmount, PurchaseUnitRequest,
};
pub use refund::{RefundCaptureRequest, RefundResponse};
pub use resource::is_resource_id;
pub use webhook::WebhookNotice;
