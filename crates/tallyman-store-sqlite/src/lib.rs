//! SQLite persistence for Tallyman.
//!
//! Implements [`tallyman_core::store::DebtorStore`] on top of
//! [`tokio_rusqlite`], so every query runs on a dedicated database thread
//! instead of blocking the async runtime.

mod rows;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
