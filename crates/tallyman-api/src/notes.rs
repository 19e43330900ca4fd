//! Handlers for the note endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/debtor/{id}/note` | Body: `note`; a general remark about the debtor |
//! | `POST` | `/debtor/{id}/phone` | Body: `phoneNote`; the log of one phone call |
//!
//! Notes are write-only over HTTP: they are recorded and acknowledged but no
//! route reads them back.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Deserialize;
use tallyman_core::{
  note::{NewNote, NewPhoneNote, Note, PhoneNote},
  store::DebtorStore,
};

use crate::{body::required, error::ApiError};

// ─── General notes ────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /debtor/{id}/note`.
#[derive(Debug, Deserialize)]
pub struct NewNoteBody {
  #[serde(deserialize_with = "required")]
  pub note: Option<String>,
}

/// `POST /debtor/{id}/note`
pub async fn create_note<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewNoteBody>,
) -> Result<Json<Note>, ApiError>
where
  S: DebtorStore,
{
  let note = store
    .add_note(NewNote { parent_id: id, note: body.note })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(note))
}

// ─── Phone notes ──────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /debtor/{id}/phone`.
#[derive(Debug, Deserialize)]
pub struct NewPhoneNoteBody {
  #[serde(rename = "phoneNote", deserialize_with = "required")]
  pub phone_note: Option<String>,
}

/// `POST /debtor/{id}/phone`
pub async fn create_phone_note<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewPhoneNoteBody>,
) -> Result<Json<PhoneNote>, ApiError>
where
  S: DebtorStore,
{
  let phone_note = store
    .add_phone_note(NewPhoneNote {
      parent_id:  id,
      phone_note: body.phone_note,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(phone_note))
}
