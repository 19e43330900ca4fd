//! Handlers for the debtor endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/addDebtor` | Body: all fourteen debtor fields, any value may be `null` |
//! | `GET`  | `/debtors` | Every debtor on record; payments are never embedded |
//! | `GET`  | `/debtor/{id}` | `200` with `{}` when the id is unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tallyman_core::{
  debtor::{Debtor, NewDebtor},
  store::DebtorStore,
};

use crate::{body::required, error::ApiError};

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /addDebtor`.
///
/// Every key must be spelled out even when its value is `null`; the
/// `required` wrapper is what turns an absent key into a `422`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebtorBody {
  #[serde(deserialize_with = "required")]
  pub first_name:                   Option<String>,
  #[serde(deserialize_with = "required")]
  pub last_name:                    Option<String>,
  #[serde(deserialize_with = "required")]
  pub address1:                     Option<String>,
  #[serde(deserialize_with = "required")]
  pub address2:                     Option<String>,
  #[serde(deserialize_with = "required")]
  pub phone_number:                 Option<i64>,
  #[serde(deserialize_with = "required")]
  pub employer:                     Option<String>,
  #[serde(deserialize_with = "required")]
  pub employer_phone_number:        Option<i64>,
  #[serde(deserialize_with = "required")]
  pub ssn:                          Option<i64>,
  #[serde(deserialize_with = "required")]
  pub spouse:                       Option<String>,
  #[serde(deserialize_with = "required")]
  pub spouse_phone_number:          Option<i64>,
  #[serde(deserialize_with = "required")]
  pub spouse_employer:              Option<String>,
  #[serde(deserialize_with = "required")]
  pub spouse_employer_phone_number: Option<i64>,
  #[serde(deserialize_with = "required")]
  pub amount_owed:                  Option<i64>,
  #[serde(deserialize_with = "required")]
  pub interest:                     Option<i64>,
}

impl From<NewDebtorBody> for NewDebtor {
  fn from(body: NewDebtorBody) -> Self {
    NewDebtor {
      first_name:                   body.first_name,
      last_name:                    body.last_name,
      address1:                     body.address1,
      address2:                     body.address2,
      phone_number:                 body.phone_number,
      employer:                     body.employer,
      employer_phone_number:        body.employer_phone_number,
      ssn:                          body.ssn,
      spouse:                       body.spouse,
      spouse_phone_number:          body.spouse_phone_number,
      spouse_employer:              body.spouse_employer,
      spouse_employer_phone_number: body.spouse_employer_phone_number,
      amount_owed:                  body.amount_owed,
      interest:                     body.interest,
    }
  }
}

/// `POST /addDebtor`. Answers `200` with the stored record, id assigned.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewDebtorBody>,
) -> Result<Json<Debtor>, ApiError>
where
  S: DebtorStore,
{
  let debtor = store
    .add_debtor(NewDebtor::from(body))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(debtor))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /debtors`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Debtor>>, ApiError>
where
  S: DebtorStore,
{
  let debtors = store
    .list_debtors()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(debtors))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /debtor/{id}`. An unknown id answers `200` with `{}`, never a `404`;
/// clients tell the cases apart by the presence of an `id` key in the body.
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
  S: DebtorStore,
{
  let debtor = store
    .get_debtor(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(match debtor {
    Some(found) => Json(found).into_response(),
    None => Json(json!({})).into_response(),
  })
}
