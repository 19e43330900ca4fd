//! SQL schema for the Tallyman SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Foreign keys stay disabled: the `REFERENCES` clauses document intent, but
/// child rows with a `parent_id` matching no debtor must still be accepted.
/// The nominal string widths noted below are documentation as well; SQLite
/// does not enforce declared column widths, and no layer adds a length check.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = OFF;

-- String columns carry a nominal width of 25 chars (employer 20), kept as
-- documentation only; values of any length are stored as given.
CREATE TABLE IF NOT EXISTS debtor (
    id                           INTEGER PRIMARY KEY,
    first_name                   TEXT,
    last_name                    TEXT,
    address1                     TEXT,
    address2                     TEXT,
    phone_number                 INTEGER,
    employer                     TEXT,
    employer_phone_number        INTEGER,
    ssn                          INTEGER,
    spouse                       TEXT,
    spouse_phone_number          INTEGER,
    spouse_employer              TEXT,
    spouse_employer_phone_number INTEGER,
    amount_owed                  INTEGER,
    interest                     INTEGER
);

-- Child rows are append-only.
-- No UPDATE or DELETE is ever issued against the three tables below.
CREATE TABLE IF NOT EXISTS payment (
    id             INTEGER PRIMARY KEY,
    parent_id      INTEGER REFERENCES debtor(id),
    payment_amount INTEGER,
    date_due       TEXT    -- free-form, nominally 10 chars, never parsed as a date
);

CREATE TABLE IF NOT EXISTS note (
    id        INTEGER PRIMARY KEY,
    parent_id INTEGER REFERENCES debtor(id),
    note      TEXT              -- nominal width 50 chars, unenforced
);

CREATE TABLE IF NOT EXISTS phone (
    id         INTEGER PRIMARY KEY,
    parent_id  INTEGER REFERENCES debtor(id),
    phone_note TEXT             -- nominal width 50 chars, unenforced
);

CREATE INDEX IF NOT EXISTS payment_parent_idx ON payment(parent_id);

PRAGMA user_version = 1;
";
