//! PRAGMA configuration applied when a connection is opened.

use rusqlite::Connection;

use cadence_core::errors::CadenceResult;

use crate::sqlite_err;

/// WAL journal, NORMAL sync, 5s busy timeout, foreign keys on.
pub fn apply_pragmas(conn: &Connection) -> CadenceResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(sqlite_err)
}

pub fn verify_wal_mode(conn: &Connection) -> CadenceResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(sqlite_err)?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
