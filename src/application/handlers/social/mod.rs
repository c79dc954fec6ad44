//! Social login handlers.
//!
//! ## Commands
//! - Starting a login (authorization URL plus state)
//! - Completing a login (code exchange, profile read, result relay)

mod begin_login;
mod complete_login;

pub use begin_login::BeginLoginHandler;
pub use complete_login::{CompleteLoginCommand, CompleteLoginHandler};
