//! Domain logic for the coursehub platform.
//!
//! This crate holds everything that does not touch the database or HTTP:
//! shared ID/timestamp types, the domain error enum, rating validation,
//! and progress arithmetic. The `coursehub-db` and `coursehub-api` crates
//! build on top of it.

pub mod error;
pub mod progress;
pub mod review;
pub mod types;
