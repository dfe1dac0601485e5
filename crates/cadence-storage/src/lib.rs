//! # cadence-storage
//!
//! SQLite-backed [`EventStore`](cadence_core::traits::EventStore) and
//! [`AdjustmentLog`](cadence_core::traits::AdjustmentLog).
//!
//! Dates are stored as `YYYY-MM-DD` text, instants as UTC microseconds.
//! Event payloads and contexts are JSON columns.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::SqliteStore;

use cadence_core::errors::{CadenceError, StorageError};

/// Wrap a message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> CadenceError {
    CadenceError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}

/// Classify a rusqlite error: an unreachable or locked database is
/// reported as unavailable, anything else is a plain storage error.
pub(crate) fn sqlite_err(e: rusqlite::Error) -> CadenceError {
    use rusqlite::ErrorCode;
    match e.sqlite_error_code() {
        Some(ErrorCode::CannotOpen | ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
            CadenceError::unavailable("sqlite", e.to_string())
        }
        _ => to_storage_err(e.to_string()),
    }
}

pub(crate) fn malformed(details: impl Into<String>) -> CadenceError {
    CadenceError::StorageError(StorageError::MalformedRow {
        details: details.into(),
    })
}
