//! Payment: a single expected or recorded installment against a debtor.

use serde::{Deserialize, Serialize};

/// A persisted payment row.
///
/// `parent_id` keeps its snake_case wire name while the payload fields are
/// camelCase; both spellings are fixed by the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
  /// Store-assigned sequential identity.
  pub id:             i64,
  /// The owning debtor's id. Not checked against the debtor table.
  #[serde(rename = "parent_id")]
  pub parent_id:      i64,
  pub payment_amount: Option<i64>,
  /// Free-form short string. Deliberately not parsed as a date.
  pub date_due:       Option<String>,
}

/// Input to [`crate::store::DebtorStore::add_payment`].
#[derive(Debug, Clone)]
pub struct NewPayment {
  pub parent_id:      i64,
  pub payment_amount: Option<i64>,
  pub date_due:       Option<String>,
}
