//! Core types and trait definitions for the Tallyman debtor store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod debtor;
pub mod note;
pub mod payment;
pub mod store;
