//! HTTP adapter for PayPal endpoints.
//!
//! - `POST /pp/orders` - Create order
//! - `POST /pp/orders/:id/capture` - Capture order
//! - `GET /pp/orders/:id` - Get order
//! - `GET /pp/captures/:id` - Get capture
//! - `POST /pp/captures/:id/refund` - Refund capture
//! - `POST /pp/callback` - Receive and relay a webhook

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::CallbackAccepted;
pub use handlers::PaymentAppState;
pub use routes::paypal_router;
