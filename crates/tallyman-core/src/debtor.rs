//! Debtor: the root record everything else hangs off.
//!
//! A debtor row is a flat set of nullable personal fields under a
//! store-assigned integer identity. Payments and notes reference it by id;
//! the debtor row itself never embeds them.

use serde::{Deserialize, Serialize};

/// A persisted debtor row.
///
/// Every payload field is nullable in storage, so each is an `Option`. The
/// serialised names are the wire contract (camelCase) and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debtor {
  /// Store-assigned sequential identity.
  pub id: i64,
  pub first_name:                   Option<String>,
  pub last_name:                    Option<String>,
  pub address1:                     Option<String>,
  pub address2:                     Option<String>,
  pub phone_number:                 Option<i64>,
  pub employer:                     Option<String>,
  pub employer_phone_number:        Option<i64>,
  pub ssn:                          Option<i64>,
  pub spouse:                       Option<String>,
  pub spouse_phone_number:          Option<i64>,
  pub spouse_employer:              Option<String>,
  pub spouse_employer_phone_number: Option<i64>,
  /// Whole currency units; no fractional amounts are tracked.
  pub amount_owed:                  Option<i64>,
  /// Interest rate as an integer percentage.
  pub interest:                     Option<i64>,
}

/// Input to [`crate::store::DebtorStore::add_debtor`].
/// The identity is assigned by the store, never by callers.
#[derive(Debug, Clone, Default)]
pub struct NewDebtor {
  pub first_name:                   Option<String>,
  pub last_name:                    Option<String>,
  pub address1:                     Option<String>,
  pub address2:                     Option<String>,
  pub phone_number:                 Option<i64>,
  pub employer:                     Option<String>,
  pub employer_phone_number:        Option<i64>,
  pub ssn:                          Option<i64>,
  pub spouse:                       Option<String>,
  pub spouse_phone_number:          Option<i64>,
  pub spouse_employer:              Option<String>,
  pub spouse_employer_phone_number: Option<i64>,
  pub amount_owed:                  Option<i64>,
  pub interest:                     Option<i64>,
}
