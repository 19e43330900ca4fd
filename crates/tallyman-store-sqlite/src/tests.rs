//! Integration tests for `SqliteStore` against an in-memory database.

use tallyman_core::{
  debtor::NewDebtor,
  note::{NewNote, NewPhoneNote},
  payment::NewPayment,
  store::DebtorStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn full_debtor() -> NewDebtor {
  NewDebtor {
    first_name:                   Some("Jane".into()),
    last_name:                    Some("Doe".into()),
    address1:                     Some("12 Elm St".into()),
    address2:                     Some("Apt 4".into()),
    phone_number:                 Some(5_550_100),
    employer:                     Some("Acme Corp".into()),
    employer_phone_number:        Some(5_550_101),
    ssn:                          Some(123_45_6789),
    spouse:                       Some("John Doe".into()),
    spouse_phone_number:          Some(5_550_102),
    spouse_employer:              Some("Globex".into()),
    spouse_employer_phone_number: Some(5_550_103),
    amount_owed:                  Some(500),
    interest:                     Some(5),
  }
}

fn payment_for(parent_id: i64, amount: i64) -> NewPayment {
  NewPayment {
    parent_id,
    payment_amount: Some(amount),
    date_due:       Some("06/01".into()),
  }
}

// ─── Open ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn open_failure_surfaces_database_error() {
  // A directory is not a database file; the failure must come back through
  // the store's own error type rather than a panic.
  let Err(err) = SqliteStore::open("/").await else {
    panic!("opening a directory as a database must fail");
  };
  assert!(matches!(err, crate::Error::Database(_)));
}

// ─── Debtors ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_debtor() {
  let s = store().await;

  let debtor = s.add_debtor(full_debtor()).await.unwrap();
  assert_eq!(debtor.first_name.as_deref(), Some("Jane"));
  assert_eq!(debtor.amount_owed, Some(500));

  // A later lookup sees exactly the row the insert returned.
  let fetched = s.get_debtor(debtor.id).await.unwrap();
  assert_eq!(fetched, Some(debtor));
}

#[tokio::test]
async fn add_debtor_assigns_sequential_ids() {
  let s = store().await;

  let a = s.add_debtor(full_debtor()).await.unwrap();
  let b = s.add_debtor(full_debtor()).await.unwrap();
  let c = s.add_debtor(NewDebtor::default()).await.unwrap();

  assert_eq!((a.id, b.id, c.id), (1, 2, 3));
}

#[tokio::test]
async fn add_debtor_with_all_fields_empty() {
  let s = store().await;

  let debtor = s.add_debtor(NewDebtor::default()).await.unwrap();
  assert_eq!(debtor.first_name, None);
  assert_eq!(debtor.ssn, None);
  assert_eq!(debtor.interest, None);

  let fetched = s.get_debtor(debtor.id).await.unwrap();
  assert_eq!(fetched, Some(debtor));
}

#[tokio::test]
async fn get_debtor_missing_returns_none() {
  let s = store().await;
  let result = s.get_debtor(977).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn list_debtors_returns_all() {
  let s = store().await;
  assert!(s.list_debtors().await.unwrap().is_empty());

  s.add_debtor(full_debtor()).await.unwrap();
  s.add_debtor(NewDebtor::default()).await.unwrap();
  s.add_debtor(full_debtor()).await.unwrap();

  let all = s.list_debtors().await.unwrap();
  assert_eq!(all.len(), 3);
  assert_eq!(all[0].id, 1);
  assert_eq!(all[2].id, 3);
}

// ─── Payments ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_payment_and_get() {
  let s = store().await;
  let debtor = s.add_debtor(full_debtor()).await.unwrap();

  let payment = s.add_payment(payment_for(debtor.id, 50)).await.unwrap();
  assert_eq!(payment.parent_id, debtor.id);
  assert_eq!(payment.payment_amount, Some(50));

  let fetched = s.get_payment(payment.id).await.unwrap();
  assert_eq!(fetched, Some(payment));
}

#[tokio::test]
async fn list_payments_filters_by_parent() {
  let s = store().await;
  let first = s.add_debtor(full_debtor()).await.unwrap();
  let second = s.add_debtor(full_debtor()).await.unwrap();

  s.add_payment(payment_for(first.id, 25)).await.unwrap();
  s.add_payment(payment_for(second.id, 40)).await.unwrap();
  s.add_payment(payment_for(first.id, 75)).await.unwrap();

  let payments = s.list_payments(first.id).await.unwrap();
  assert_eq!(payments.len(), 2);
  assert!(payments.iter().all(|p| p.parent_id == first.id));
  assert_eq!(payments[0].payment_amount, Some(25));
  assert_eq!(payments[1].payment_amount, Some(75));
}

#[tokio::test]
async fn list_payments_unknown_parent_is_empty() {
  let s = store().await;
  s.add_debtor(full_debtor()).await.unwrap();

  let payments = s.list_payments(42).await.unwrap();
  assert!(payments.is_empty());
}

#[tokio::test]
async fn payment_with_dangling_parent_is_accepted() {
  let s = store().await;

  // No debtor rows exist at all; the insert must still succeed.
  let payment = s.add_payment(payment_for(409, 25)).await.unwrap();
  assert_eq!(payment.parent_id, 409);

  let fetched = s.get_payment(payment.id).await.unwrap();
  assert_eq!(fetched, Some(payment));
}

#[tokio::test]
async fn payment_date_due_is_stored_verbatim() {
  let s = store().await;
  let debtor = s.add_debtor(full_debtor()).await.unwrap();

  let input = NewPayment {
    parent_id:      debtor.id,
    payment_amount: None,
    date_due:       Some("whenever, honestly".into()),
  };
  let payment = s.add_payment(input).await.unwrap();

  assert_eq!(payment.payment_amount, None);
  assert_eq!(payment.date_due.as_deref(), Some("whenever, honestly"));
}

// ─── Notes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_note_and_get() {
  let s = store().await;
  let debtor = s.add_debtor(full_debtor()).await.unwrap();

  let note = s
    .add_note(NewNote {
      parent_id: debtor.id,
      note:      Some("left voicemail".into()),
    })
    .await
    .unwrap();
  assert_eq!(note.parent_id, debtor.id);

  let fetched = s.get_note(note.id).await.unwrap();
  assert_eq!(fetched, Some(note));
}

#[tokio::test]
async fn note_with_dangling_parent_is_accepted() {
  let s = store().await;

  let note = s
    .add_note(NewNote { parent_id: 7, note: None })
    .await
    .unwrap();
  assert_eq!(note.parent_id, 7);
  assert_eq!(note.note, None);
}

#[tokio::test]
async fn long_note_is_stored_verbatim() {
  let s = store().await;
  let debtor = s.add_debtor(full_debtor()).await.unwrap();

  // Well past the nominal 50-char column width; no layer truncates.
  let text = "promised to pay after the holidays, ".repeat(4);
  let note = s
    .add_note(NewNote {
      parent_id: debtor.id,
      note:      Some(text.clone()),
    })
    .await
    .unwrap();

  assert_eq!(note.note, Some(text));
}

// ─── Phone notes ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_phone_note_and_get() {
  let s = store().await;
  let debtor = s.add_debtor(full_debtor()).await.unwrap();

  let phone_note = s
    .add_phone_note(NewPhoneNote {
      parent_id:  debtor.id,
      phone_note: Some("call back Tuesday".into()),
    })
    .await
    .unwrap();
  assert_eq!(phone_note.parent_id, debtor.id);

  let fetched = s.get_phone_note(phone_note.id).await.unwrap();
  assert_eq!(fetched, Some(phone_note));
}

#[tokio::test]
async fn phone_note_with_dangling_parent_is_accepted() {
  let s = store().await;

  let phone_note = s
    .add_phone_note(NewPhoneNote {
      parent_id:  91,
      phone_note: Some("number disconnected".into()),
    })
    .await
    .unwrap();
  assert_eq!(phone_note.parent_id, 91);

  let fetched = s.get_phone_note(phone_note.id).await.unwrap();
  assert_eq!(fetched, Some(phone_note));
}

#[tokio::test]
async fn child_ids_are_independent_sequences() {
  let s = store().await;
  let debtor = s.add_debtor(full_debtor()).await.unwrap();

  // Each table numbers its own rows from 1.
  let payment = s.add_payment(payment_for(debtor.id, 10)).await.unwrap();
  let note = s
    .add_note(NewNote { parent_id: debtor.id, note: None })
    .await
    .unwrap();
  let phone_note = s
    .add_phone_note(NewPhoneNote { parent_id: debtor.id, phone_note: None })
    .await
    .unwrap();

  assert_eq!(payment.id, 1);
  assert_eq!(note.id, 1);
  assert_eq!(phone_note.id, 1);
}
