/// Storage-layer errors for the SQLite event store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("stored row is malformed: {details}")]
    MalformedRow { details: String },

    #[error("connection lock poisoned")]
    LockPoisoned,
}
