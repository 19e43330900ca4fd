//! The `DebtorStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `tallyman-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  debtor::{Debtor, NewDebtor},
  note::{NewNote, NewPhoneNote, Note, PhoneNote},
  payment::{NewPayment, Payment},
};

/// Abstraction over a Tallyman record store backend.
///
/// The store is strictly append/read: rows are created once and never
/// updated or deleted. Child rows (payments, notes) carry a `parent_id`
/// that is *not* checked against the debtor table; orphan rows are legal.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DebtorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Debtors ───────────────────────────────────────────────────────────

  /// Insert a new debtor and return the persisted row with its assigned
  /// identity. The row is re-read from storage before returning, so any
  /// store-side defaults are reflected.
  fn add_debtor(
    &self,
    input: NewDebtor,
  ) -> impl Future<Output = Result<Debtor, Self::Error>> + Send + '_;

  /// Retrieve a debtor by id. Returns `None` if not found.
  fn get_debtor(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Debtor>, Self::Error>> + Send + '_;

  /// List every debtor, in no guaranteed order.
  fn list_debtors(
    &self,
  ) -> impl Future<Output = Result<Vec<Debtor>, Self::Error>> + Send + '_;

  // ── Payments ──────────────────────────────────────────────────────────

  /// Insert a payment owned by `input.parent_id` and return the persisted
  /// row. The parent id is stored as given, existing debtor or not.
  fn add_payment(
    &self,
    input: NewPayment,
  ) -> impl Future<Output = Result<Payment, Self::Error>> + Send + '_;

  /// Retrieve a payment by its own id. Returns `None` if not found.
  fn get_payment(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Payment>, Self::Error>> + Send + '_;

  /// List the payments whose `parent_id` equals `parent_id`, in no
  /// guaranteed order. Unknown parents yield an empty list.
  fn list_payments(
    &self,
    parent_id: i64,
  ) -> impl Future<Output = Result<Vec<Payment>, Self::Error>> + Send + '_;

  // ── Notes ─────────────────────────────────────────────────────────────

  /// Insert a general note owned by `input.parent_id` and return the
  /// persisted row. The parent id is stored as given.
  fn add_note(
    &self,
    input: NewNote,
  ) -> impl Future<Output = Result<Note, Self::Error>> + Send + '_;

  /// Retrieve a general note by its own id. Returns `None` if not found.
  fn get_note(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Note>, Self::Error>> + Send + '_;

  /// Insert a phone-call note owned by `input.parent_id` and return the
  /// persisted row. The parent id is stored as given.
  fn add_phone_note(
    &self,
    input: NewPhoneNote,
  ) -> impl Future<Output = Result<PhoneNote, Self::Error>> + Send + '_;

  /// Retrieve a phone-call note by its own id. Returns `None` if not found.
  fn get_phone_note(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<PhoneNote>, Self::Error>> + Send + '_;
}
