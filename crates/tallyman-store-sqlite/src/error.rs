//! Error types for the SQLite store.

use thiserror::Error;

/// An error from the SQLite store.
///
/// The store enforces no domain rules of its own, so the only failure mode
/// is the database layer itself.
#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
