//! JSON REST API for Tallyman.
//!
//! Exposes an axum [`Router`] backed by any [`tallyman_core::store::DebtorStore`].
//! Tracing layers, bind addresses, and other transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = tallyman_api::api_router(store.clone());
//! ```

pub mod debtors;
pub mod error;
pub mod notes;
pub mod payments;

mod body;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use tallyman_core::store::DebtorStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type. Paths are flat and verb-like rather than nested
/// resources; they are a published contract and must not be renamed.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DebtorStore + 'static,
{
  Router::new()
    // Debtors
    .route("/addDebtor", post(debtors::create::<S>))
    .route("/debtors", get(debtors::list::<S>))
    .route("/debtor/{id}", get(debtors::get_one::<S>))
    // Payments
    .route("/debtor/{id}/payments", post(payments::create::<S>))
    .route("/debtor/{id}/allpayments", get(payments::list_for_debtor::<S>))
    // Notes
    .route("/debtor/{id}/note", post(notes::create_note::<S>))
    .route("/debtor/{id}/phone", post(notes::create_phone_note::<S>))
    .with_state(store)
}
