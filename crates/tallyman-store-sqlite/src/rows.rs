//! Row decoders shared by every query in the store.
//!
//! Each `*_COLUMNS` list names columns in exactly the index order its
//! decoder reads them; keeping the pairs side by side is what keeps the
//! `SELECT` statements and the decoders in sync.

use rusqlite::Row;

use tallyman_core::{
  debtor::Debtor,
  note::{Note, PhoneNote},
  payment::Payment,
};

/// Column list matching [`debtor_from_row`].
pub const DEBTOR_COLUMNS: &str = "id, first_name, last_name, address1, \
   address2, phone_number, employer, employer_phone_number, ssn, spouse, \
   spouse_phone_number, spouse_employer, spouse_employer_phone_number, \
   amount_owed, interest";

/// Column list matching [`payment_from_row`].
pub const PAYMENT_COLUMNS: &str = "id, parent_id, payment_amount, date_due";

/// Column list matching [`note_from_row`].
pub const NOTE_COLUMNS: &str = "id, parent_id, note";

/// Column list matching [`phone_note_from_row`].
pub const PHONE_COLUMNS: &str = "id, parent_id, phone_note";

pub fn debtor_from_row(row: &Row<'_>) -> rusqlite::Result<Debtor> {
  Ok(Debtor {
    id:                           row.get(0)?,
    first_name:                   row.get(1)?,
    last_name:                    row.get(2)?,
    address1:                     row.get(3)?,
    address2:                     row.get(4)?,
    phone_number:                 row.get(5)?,
    employer:                     row.get(6)?,
    employer_phone_number:        row.get(7)?,
    ssn:                          row.get(8)?,
    spouse:                       row.get(9)?,
    spouse_phone_number:          row.get(10)?,
    spouse_employer:              row.get(11)?,
    spouse_employer_phone_number: row.get(12)?,
    amount_owed:                  row.get(13)?,
    interest:                     row.get(14)?,
  })
}

pub fn payment_from_row(row: &Row<'_>) -> rusqlite::Result<Payment> {
  Ok(Payment {
    id:             row.get(0)?,
    parent_id:      row.get(1)?,
    payment_amount: row.get(2)?,
    date_due:       row.get(3)?,
  })
}

pub fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
  Ok(Note {
    id:        row.get(0)?,
    parent_id: row.get(1)?,
    note:      row.get(2)?,
  })
}

pub fn phone_note_from_row(row: &Row<'_>) -> rusqlite::Result<PhoneNote> {
  Ok(PhoneNote {
    id:         row.get(0)?,
    parent_id:  row.get(1)?,
    phone_note: row.get(2)?,
  })
}
