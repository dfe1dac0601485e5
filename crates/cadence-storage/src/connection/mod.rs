//! The single serialized connection behind a [`crate::SqliteStore`].

pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use cadence_core::errors::{CadenceError, CadenceResult, StorageError};

use crate::sqlite_err;

pub struct StoreConnection {
    conn: Mutex<Connection>,
    pub db_path: Option<PathBuf>,
}

impl StoreConnection {
    pub fn open(path: &Path) -> CadenceResult<Self> {
        let conn = Connection::open(path).map_err(sqlite_err)?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory databases cannot use WAL; only the remaining pragmas apply.
    pub fn open_in_memory() -> CadenceResult<Self> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(sqlite_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: None,
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> CadenceResult<T>
    where
        F: FnOnce(&Connection) -> CadenceResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| CadenceError::StorageError(StorageError::LockPoisoned))?;
        f(&guard)
    }
}
