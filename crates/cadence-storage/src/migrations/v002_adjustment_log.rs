//! v002: append-only adjustment_log.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS adjustment_log (
    id               TEXT PRIMARY KEY,
    user_id          TEXT NOT NULL,
    emitted_on       TEXT NOT NULL,
    adjustment_type  TEXT NOT NULL,
    adjustment       TEXT NOT NULL,
    recorded_micros  INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_adjustment_user_day ON adjustment_log(user_id, emitted_on);
";
