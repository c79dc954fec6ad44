//! Webhook forwarding policy.

mod retry_policy;

pub use retry_policy::{DeliveryOutcome, RetryPolicy};
