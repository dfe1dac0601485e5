//! v003: one adjustment of each type per user per day.

pub const MIGRATION_SQL: &str = "
DELETE FROM adjustment_log
WHERE rowid NOT IN (
    SELECT MIN(rowid) FROM adjustment_log
    GROUP BY user_id, emitted_on, adjustment_type
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_adjustment_user_day_type
    ON adjustment_log(user_id, emitted_on, adjustment_type);
";
