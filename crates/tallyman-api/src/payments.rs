//! Handlers for the payment endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/debtor/{id}/payments` | Body: `paymentAmount`, `dateDue`; the path id becomes `parent_id` |
//! | `GET`  | `/debtor/{id}/allpayments` | Payments whose `parent_id` equals the path id |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Deserialize;
use tallyman_core::{
  payment::{NewPayment, Payment},
  store::DebtorStore,
};

use crate::{body::required, error::ApiError};

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /debtor/{id}/payments`.
///
/// `dateDue` is a free-form short string and is stored verbatim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentBody {
  #[serde(deserialize_with = "required")]
  pub payment_amount: Option<i64>,
  #[serde(deserialize_with = "required")]
  pub date_due:       Option<String>,
}

/// `POST /debtor/{id}/payments`. The parent id comes from the path and is
/// stored as given; it is never checked against the debtor table.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewPaymentBody>,
) -> Result<Json<Payment>, ApiError>
where
  S: DebtorStore,
{
  let payment = store
    .add_payment(NewPayment {
      parent_id:      id,
      payment_amount: body.payment_amount,
      date_due:       body.date_due,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(payment))
}

// ─── List for one debtor ──────────────────────────────────────────────────────

/// `GET /debtor/{id}/allpayments`. An id with no payments (or no debtor at
/// all) answers `200` with `[]`.
pub async fn list_for_debtor<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<Payment>>, ApiError>
where
  S: DebtorStore,
{
  let payments = store
    .list_payments(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(payments))
}
