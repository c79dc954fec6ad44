//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by every integration: validation
//! failures, missing collaborators, and upstream provider failures.

mod errors;

pub use errors::{DomainError, ErrorCode};
