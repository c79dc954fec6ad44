//! Callback transports used by the forwarder.

mod http_transport;
mod scripted_transport;

pub use http_transport::HttpCallbackTransport;
pub use scripted_transport::{Attempt, ScriptedTransport, Step};
