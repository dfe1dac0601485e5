//! Schema migrations tracked with `PRAGMA user_version`.

pub mod v001_initial;
pub mod v002_adjustment_log;
pub mod v003_adjustment_dedup;

use rusqlite::Connection;

use cadence_core::errors::{CadenceError, CadenceResult, StorageError};

const MIGRATIONS: &[(&str, u32)] = &[
    (v001_initial::MIGRATION_SQL, 1),
    (v002_adjustment_log::MIGRATION_SQL, 2),
    (v003_adjustment_dedup::MIGRATION_SQL, 3),
];

pub const LATEST_VERSION: u32 = 3;

fn failed(version: u32, e: rusqlite::Error) -> CadenceError {
    CadenceError::StorageError(StorageError::MigrationFailed {
        version,
        reason: e.to_string(),
    })
}

/// Apply every migration above the current version. Each one commits with
/// its version bump or not at all.
pub fn run_migrations(conn: &Connection) -> CadenceResult<()> {
    let current = current_version(conn)?;
    for (sql, version) in MIGRATIONS {
        if current >= *version {
            continue;
        }
        let tx = conn.unchecked_transaction().map_err(|e| failed(*version, e))?;
        tx.execute_batch(sql).map_err(|e| failed(*version, e))?;
        tx.pragma_update(None, "user_version", version)
            .map_err(|e| failed(*version, e))?;
        tx.commit().map_err(|e| failed(*version, e))?;
        tracing::info!(version, "applied migration");
    }
    Ok(())
}

pub fn current_version(conn: &Connection) -> CadenceResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| failed(0, e))
}
