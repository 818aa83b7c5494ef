//! HTTP layer for the coursehub platform.
//!
//! Exposed as a library so integration tests can build the full router
//! with the same middleware stack the binary uses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod response;
pub mod routes;
pub mod state;
