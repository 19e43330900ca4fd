//! Note types: free-text annotations attached to a debtor.
//!
//! Two kinds exist, stored in separate tables: general notes and phone-call
//! notes. Both are write-once; neither is ever updated or deleted.

use serde::{Deserialize, Serialize};

/// A persisted general note row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  /// Store-assigned sequential identity.
  pub id:        i64,
  /// The owning debtor's id. Not checked against the debtor table.
  pub parent_id: i64,
  pub note:      Option<String>,
}

/// Input to [`crate::store::DebtorStore::add_note`].
#[derive(Debug, Clone)]
pub struct NewNote {
  pub parent_id: i64,
  pub note:      Option<String>,
}

/// A persisted phone-call note row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNote {
  /// Store-assigned sequential identity.
  pub id:         i64,
  /// The owning debtor's id. Not checked against the debtor table.
  pub parent_id:  i64,
  #[serde(rename = "phoneNote")]
  pub phone_note: Option<String>,
}

/// Input to [`crate::store::DebtorStore::add_phone_note`].
#[derive(Debug, Clone)]
pub struct NewPhoneNote {
  pub parent_id:  i64,
  pub phone_note: Option<String>,
}
