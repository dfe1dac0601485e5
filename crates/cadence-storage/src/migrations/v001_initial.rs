//! v001: events, habits, habit_completions, daily_activity.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     TEXT NOT NULL,
    event_type  TEXT NOT NULL,
    payload     TEXT NOT NULL,
    context     TEXT NOT NULL DEFAULT '{}',
    ts_micros   INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_events_user_ts ON events(user_id, ts_micros);
CREATE INDEX IF NOT EXISTS idx_events_user_type ON events(user_id, event_type, ts_micros);

CREATE TABLE IF NOT EXISTS habits (
    habit_id    TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL,
    name        TEXT NOT NULL,
    created_on  TEXT NOT NULL,
    active      INTEGER NOT NULL DEFAULT 1,
    time_of_day TEXT
);
CREATE INDEX IF NOT EXISTS idx_habits_user ON habits(user_id);

CREATE TABLE IF NOT EXISTS habit_completions (
    habit_id    TEXT NOT NULL REFERENCES habits(habit_id) ON DELETE CASCADE,
    user_id     TEXT NOT NULL,
    date        TEXT NOT NULL,
    completed   INTEGER NOT NULL,
    quality     TEXT,
    notes       TEXT,
    PRIMARY KEY (habit_id, date)
);
CREATE INDEX IF NOT EXISTS idx_completions_user_date ON habit_completions(user_id, date);

CREATE TABLE IF NOT EXISTS daily_activity (
    user_id          TEXT NOT NULL,
    date             TEXT NOT NULL,
    focused_minutes  REAL NOT NULL DEFAULT 0,
    deep_work_hours  REAL NOT NULL DEFAULT 0,
    focus_quality    REAL NOT NULL DEFAULT 0,
    sessions         INTEGER NOT NULL DEFAULT 0,
    breaks_taken     INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (user_id, date)
);
";
