//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! ## Provider Ports
//!
//! - `PaymentGateway` - PayPal order, capture and refund calls
//! - `SocialLogin` - Facebook OAuth code exchange and profile lookup
//!
//! ## Delivery Ports
//!
//! - `CallbackTransport` - One POST of a JSON payload to a downstream URL

mod callback_transport;
mod payment_gateway;
mod social_login;

pub use callback_transport::{CallbackTransport, DeliveryError};
pub use payment_gateway::{PaymentError, PaymentErrorCode, PaymentGateway};
pub use social_login::{OAuthError, SocialLogin};
