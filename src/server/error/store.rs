//! Classification of database failures that carry domain meaning.
//!
//! Repositories return raw `DbErr`s. Services use [`StoreViolation::classify`] to tell
//! the few failures that map onto client errors (a missing referenced row, a duplicate,
//! an overlapping reservation) apart from genuine store failures, which propagate as
//! 500s.

use sea_orm::{DbErr, SqlErr};

/// A constraint the store rejected a write with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreViolation {
    /// A foreign key references a row that does not exist.
    ForeignKey,
    /// A unique index or primary key already holds the value.
    Unique,
    /// The reservation overlap trigger aborted the write.
    ReservationOverlap,
    /// Another connection held the write lock past the busy timeout.
    WriteContention,
}

/// Message SQLite reports for `SQLITE_BUSY`.
const DATABASE_LOCKED: &str = "database is locked";

impl StoreViolation {
    /// Classifies a database error, returning `None` for failures without domain meaning.
    pub fn classify(err: &DbErr) -> Option<Self> {
        let message = err.to_string();
        if message.contains(migration::RESERVATION_OVERLAP_ERROR) {
            return Some(Self::ReservationOverlap);
        }
        if message.contains(DATABASE_LOCKED) {
            return Some(Self::WriteContention);
        }

        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(Self::ForeignKey),
            Some(SqlErr::UniqueConstraintViolation(_)) => Some(Self::Unique),
            _ => None,
        }
    }
}
