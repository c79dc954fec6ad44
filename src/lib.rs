//! Outside API - PayPal and Facebook gateway for a web front-end
//!
//! This crate proxies PayPal order flows and the Facebook OAuth login to the
//! providers, and relays provider callbacks to a downstream service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
