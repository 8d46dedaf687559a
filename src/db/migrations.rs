use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS prayers (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            prayer  TEXT NOT NULL CHECK(prayer IN ('fajr','zuhr','asr','maghrib','isha')),
            date    TEXT NOT NULL,
            done    INTEGER NOT NULL DEFAULT 0,
            UNIQUE(prayer, date)
        );

        CREATE TABLE IF NOT EXISTS prayer_times_cache (
            date     TEXT PRIMARY KEY,
            fajr     TEXT,
            sunrise  TEXT,
            zuhr     TEXT,
            asr      TEXT,
            maghrib  TEXT,
            isha     TEXT
        );

        CREATE TABLE IF NOT EXISTS sunnah_tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            category    TEXT NOT NULL CHECK(category IN ('builtin','custom')),
            sort_order  INTEGER DEFAULT 0,
            active      INTEGER DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS sunnah_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id   INTEGER NOT NULL REFERENCES sunnah_tasks(id),
            date      TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            UNIQUE(task_id, date)
        );

        CREATE TABLE IF NOT EXISTS fasting_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL UNIQUE,
            kind      TEXT NOT NULL CHECK(kind IN
                ('ramadan','monday_thursday','ayyam_al_bid','ashura','arafah','voluntary')),
            completed INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS quran_bookmark (
            id         INTEGER PRIMARY KEY CHECK(id = 1),
            surah      INTEGER NOT NULL,
            ayah       INTEGER NOT NULL,
            updated_at TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS trivia_log (
            date        TEXT PRIMARY KEY,
            question_id INTEGER NOT NULL,
            choice      INTEGER NOT NULL,
            correct     INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ")?;

    seed_builtin_tasks(conn)?;
    Ok(())
}

fn seed_builtin_tasks(conn: &Connection) -> Result<()> {
    let builtins = [
        ("Morning Adhkar", 0),
        ("Evening Adhkar", 1),
        ("Duha Prayer", 2),
        ("Witr Prayer", 3),
        ("Surah al-Kahf (Friday)", 4),
    ];

    for (name, order) in &builtins {
        conn.execute(
            "INSERT OR IGNORE INTO sunnah_tasks (name, category, sort_order, active)
             VALUES (?1, 'builtin', ?2, 1)",
            rusqlite::params![name, order],
        )?;
    }
    Ok(())
}
