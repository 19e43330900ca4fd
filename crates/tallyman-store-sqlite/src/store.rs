//! [`SqliteStore`], the SQLite implementation of [`DebtorStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use tallyman_core::{
  debtor::{Debtor, NewDebtor},
  note::{NewNote, NewPhoneNote, Note, PhoneNote},
  payment::{NewPayment, Payment},
  store::DebtorStore,
};

use crate::{
  rows::{
    debtor_from_row, note_from_row, payment_from_row, phone_note_from_row,
    DEBTOR_COLUMNS, NOTE_COLUMNS, PAYMENT_COLUMNS, PHONE_COLUMNS,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Tallyman debtor store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DebtorStore impl ────────────────────────────────────────────────────────

impl DebtorStore for SqliteStore {
  type Error = Error;

  // ── Debtors ───────────────────────────────────────────────────────────────

  async fn add_debtor(&self, input: NewDebtor) -> Result<Debtor> {
    let debtor = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO debtor (
             first_name, last_name, address1, address2, phone_number,
             employer, employer_phone_number, ssn, spouse,
             spouse_phone_number, spouse_employer,
             spouse_employer_phone_number, amount_owed, interest
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.address1,
            input.address2,
            input.phone_number,
            input.employer,
            input.employer_phone_number,
            input.ssn,
            input.spouse,
            input.spouse_phone_number,
            input.spouse_employer,
            input.spouse_employer_phone_number,
            input.amount_owed,
            input.interest,
          ],
        )?;

        // Read the row back through the shared decoder so the returned
        // record is exactly what a later lookup will see.
        let id = conn.last_insert_rowid();
        let row = conn.query_row(
          &format!("SELECT {DEBTOR_COLUMNS} FROM debtor WHERE id = ?1"),
          rusqlite::params![id],
          debtor_from_row,
        )?;
        Ok(row)
      })
      .await?;

    Ok(debtor)
  }

  async fn get_debtor(&self, id: i64) -> Result<Option<Debtor>> {
    let debtor = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {DEBTOR_COLUMNS} FROM debtor WHERE id = ?1"),
              rusqlite::params![id],
              debtor_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(debtor)
  }

  async fn list_debtors(&self) -> Result<Vec<Debtor>> {
    let debtors = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {DEBTOR_COLUMNS} FROM debtor"))?;
        let rows = stmt
          .query_map([], debtor_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(debtors)
  }

  // ── Payments ──────────────────────────────────────────────────────────────

  async fn add_payment(&self, input: NewPayment) -> Result<Payment> {
    let payment = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO payment (parent_id, payment_amount, date_due)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![
            input.parent_id,
            input.payment_amount,
            input.date_due,
          ],
        )?;

        let id = conn.last_insert_rowid();
        let row = conn.query_row(
          &format!("SELECT {PAYMENT_COLUMNS} FROM payment WHERE id = ?1"),
          rusqlite::params![id],
          payment_from_row,
        )?;
        Ok(row)
      })
      .await?;

    Ok(payment)
  }

  async fn get_payment(&self, id: i64) -> Result<Option<Payment>> {
    let payment = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PAYMENT_COLUMNS} FROM payment WHERE id = ?1"),
              rusqlite::params![id],
              payment_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(payment)
  }

  async fn list_payments(&self, parent_id: i64) -> Result<Vec<Payment>> {
    let payments = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PAYMENT_COLUMNS} FROM payment WHERE parent_id = ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![parent_id], payment_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(payments)
  }

  // ── Notes ─────────────────────────────────────────────────────────────────

  async fn add_note(&self, input: NewNote) -> Result<Note> {
    let note = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO note (parent_id, note) VALUES (?1, ?2)",
          rusqlite::params![input.parent_id, input.note],
        )?;

        let id = conn.last_insert_rowid();
        let row = conn.query_row(
          &format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = ?1"),
          rusqlite::params![id],
          note_from_row,
        )?;
        Ok(row)
      })
      .await?;

    Ok(note)
  }

  async fn get_note(&self, id: i64) -> Result<Option<Note>> {
    let note = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = ?1"),
              rusqlite::params![id],
              note_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(note)
  }

  async fn add_phone_note(&self, input: NewPhoneNote) -> Result<PhoneNote> {
    let phone_note = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO phone (parent_id, phone_note) VALUES (?1, ?2)",
          rusqlite::params![input.parent_id, input.phone_note],
        )?;

        let id = conn.last_insert_rowid();
        let row = conn.query_row(
          &format!("SELECT {PHONE_COLUMNS} FROM phone WHERE id = ?1"),
          rusqlite::params![id],
          phone_note_from_row,
        )?;
        Ok(row)
      })
      .await?;

    Ok(phone_note)
  }

  async fn get_phone_note(&self, id: i64) -> Result<Option<PhoneNote>> {
    let phone_note = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PHONE_COLUMNS} FROM phone WHERE id = ?1"),
              rusqlite::params![id],
              phone_note_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(phone_note)
  }
}
