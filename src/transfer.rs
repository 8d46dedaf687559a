//! JSON snapshot export/import of all tracked state.
//!
//! The snapshot is versioned; importing validates every record before any
//! writes so a malformed file is rejected whole with a message the user can
//! act on.

use anyhow::Result;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::db::repository::{FastingRepo, PrayerRepo, QuranRepo, SunnahRepo, TriviaRepo};
use crate::models::{Bookmark, FastKind, PrayerName, TriviaAnswer};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("this is not a valid rafiq export: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported export version {found} (this build reads version {SNAPSHOT_VERSION})")]
    Version { found: u32 },
    #[error("invalid record in export: {0}")]
    InvalidRecord(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerRecord {
    pub date: String,
    pub prayer: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunnahRecord {
    pub date: String,
    pub task: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastRecord {
    pub date: String,
    pub kind: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub surah: u16,
    pub ayah: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub exported_at: String,
    pub prayers: Vec<PrayerRecord>,
    pub sunnah: Vec<SunnahRecord>,
    pub fasts: Vec<FastRecord>,
    pub bookmark: Option<BookmarkRecord>,
    pub trivia: Vec<TriviaAnswer>,
}

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub prayers: usize,
    pub sunnah: usize,
    pub fasts: usize,
    pub trivia: usize,
    pub bookmark: bool,
}

pub fn export(conn: &Connection) -> Result<Snapshot> {
    let prayers = PrayerRepo::all_records(conn)?
        .into_iter()
        .map(|p| PrayerRecord {
            date: p.date,
            prayer: p.name.as_str().to_string(),
            done: p.done,
        })
        .collect();

    let sunnah = SunnahRepo::all_log_records(conn)?
        .into_iter()
        .map(|(task, date, completed)| SunnahRecord { date, task, completed })
        .collect();

    let fasts = FastingRepo::all_records(conn)?
        .into_iter()
        .map(|f| FastRecord {
            date: f.date,
            kind: f.kind.as_str().to_string(),
            completed: f.completed,
        })
        .collect();

    let bookmark = QuranRepo::get_bookmark(conn)?.map(|(b, _)| BookmarkRecord {
        surah: b.surah,
        ayah: b.ayah,
    });

    Ok(Snapshot {
        version: SNAPSHOT_VERSION,
        exported_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        prayers,
        sunnah,
        fasts,
        bookmark,
        trivia: TriviaRepo::all_records(conn)?,
    })
}

/// Validated form of a snapshot, produced before any database writes.
struct ValidatedSnapshot {
    prayers: Vec<(PrayerName, String, bool)>,
    sunnah: Vec<SunnahRecord>,
    fasts: Vec<(String, FastKind, bool)>,
    bookmark: Option<Bookmark>,
    trivia: Vec<TriviaAnswer>,
}

fn validate(snapshot: Snapshot) -> Result<ValidatedSnapshot, TransferError> {
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(TransferError::Version {
            found: snapshot.version,
        });
    }

    let mut prayers = Vec::with_capacity(snapshot.prayers.len());
    for p in snapshot.prayers {
        let name = PrayerName::from_str(&p.prayer).map_err(|_| {
            TransferError::InvalidRecord(format!("'{}' is not a prayer name", p.prayer))
        })?;
        validate_date(&p.date)?;
        prayers.push((name, p.date, p.done));
    }

    for s in &snapshot.sunnah {
        validate_date(&s.date)?;
        if s.task.trim().is_empty() {
            return Err(TransferError::InvalidRecord(
                "a sunnah record has an empty task name".to_string(),
            ));
        }
    }

    let mut fasts = Vec::with_capacity(snapshot.fasts.len());
    for f in snapshot.fasts {
        let kind = FastKind::from_str(&f.kind).map_err(|_| {
            TransferError::InvalidRecord(format!("'{}' is not a fast kind", f.kind))
        })?;
        validate_date(&f.date)?;
        fasts.push((f.date, kind, f.completed));
    }

    let bookmark = match snapshot.bookmark {
        None => None,
        Some(b) => Some(
            Bookmark::new(b.surah, b.ayah)
                .map_err(|e| TransferError::InvalidRecord(e.to_string()))?,
        ),
    };

    for t in &snapshot.trivia {
        validate_date(&t.date)?;
    }

    Ok(ValidatedSnapshot {
        prayers,
        sunnah: snapshot.sunnah,
        fasts,
        bookmark,
        trivia: snapshot.trivia,
    })
}

fn validate_date(s: &str) -> Result<(), TransferError> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| TransferError::InvalidRecord(format!("'{}' is not a YYYY-MM-DD date", s)))
}

/// Parse, validate, and apply a snapshot. All writes are last-write-wins
/// upserts, so importing the same file twice is harmless.
pub fn import(conn: &Connection, json: &str) -> Result<ImportSummary, TransferError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    let validated = validate(snapshot)?;

    let mut summary = ImportSummary::default();

    for (name, date, done) in &validated.prayers {
        PrayerRepo::set_done(conn, *name, date, *done)
            .map_err(|e| TransferError::InvalidRecord(e.to_string()))?;
        summary.prayers += 1;
    }

    for s in &validated.sunnah {
        let task = SunnahRepo::find_or_create(conn, &s.task)
            .map_err(|e| TransferError::InvalidRecord(e.to_string()))?;
        SunnahRepo::set_completed(conn, task.id, &s.date, s.completed)
            .map_err(|e| TransferError::InvalidRecord(e.to_string()))?;
        summary.sunnah += 1;
    }

    for (date, kind, completed) in &validated.fasts {
        FastingRepo::upsert(conn, date, *kind, *completed)
            .map_err(|e| TransferError::InvalidRecord(e.to_string()))?;
        summary.fasts += 1;
    }

    if let Some(bookmark) = validated.bookmark {
        QuranRepo::set_bookmark(conn, bookmark)
            .map_err(|e| TransferError::InvalidRecord(e.to_string()))?;
        summary.bookmark = true;
    }

    for t in &validated.trivia {
        TriviaRepo::record_answer(conn, t)
            .map_err(|e| TransferError::InvalidRecord(e.to_string()))?;
        summary.trivia += 1;
    }

    log::debug!(
        "imported {} prayer, {} sunnah, {} fast, {} trivia records",
        summary.prayers,
        summary.sunnah,
        summary.fasts,
        summary.trivia
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use std::io::Write;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn populate(conn: &Connection) {
        PrayerRepo::set_done(conn, PrayerName::Fajr, "2026-08-05", true).unwrap();
        PrayerRepo::set_done(conn, PrayerName::Zuhr, "2026-08-05", true).unwrap();
        let task = SunnahRepo::find_by_name(conn, "Morning Adhkar").unwrap().unwrap();
        SunnahRepo::set_completed(conn, task.id, "2026-08-05", true).unwrap();
        FastingRepo::upsert(conn, "2026-08-05", FastKind::AyyamAlBid, true).unwrap();
        QuranRepo::set_bookmark(conn, Bookmark::new(18, 10).unwrap()).unwrap();
        TriviaRepo::record_answer(
            conn,
            &TriviaAnswer {
                date: "2026-08-05".into(),
                question_id: 2,
                choice: 1,
                correct: true,
            },
        )
        .unwrap();
    }

    #[test]
    fn export_then_import_into_fresh_db() {
        let source = test_conn();
        populate(&source);
        let json = serde_json::to_string(&export(&source).unwrap()).unwrap();

        let target = test_conn();
        let summary = import(&target, &json).unwrap();
        assert_eq!(summary.prayers, 2);
        assert_eq!(summary.sunnah, 1);
        assert_eq!(summary.fasts, 1);
        assert_eq!(summary.trivia, 1);
        assert!(summary.bookmark);

        let (bookmark, _) = QuranRepo::get_bookmark(&target).unwrap().unwrap();
        assert_eq!(bookmark, Bookmark::new(18, 10).unwrap());
        let prayers = PrayerRepo::get_by_date(&target, "2026-08-05").unwrap();
        assert!(prayers.iter().any(|p| p.name == PrayerName::Fajr && p.done));
    }

    #[test]
    fn import_is_idempotent() {
        let conn = test_conn();
        populate(&conn);
        let json = serde_json::to_string(&export(&conn).unwrap()).unwrap();

        import(&conn, &json).unwrap();
        import(&conn, &json).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM fasting_log", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn malformed_json_gets_a_user_facing_message() {
        let conn = test_conn();
        let err = import(&conn, "{ this is not json").unwrap_err();
        assert!(matches!(err, TransferError::Malformed(_)));
        assert!(err.to_string().contains("not a valid rafiq export"));
    }

    #[test]
    fn truncated_file_is_rejected_whole() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"version\": 1, \"prayers\": [").unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();

        let conn = test_conn();
        let err = import(&conn, &content).unwrap_err();
        assert!(err.to_string().contains("not a valid rafiq export"));
        assert!(PrayerRepo::all_records(&conn).unwrap().is_empty());
    }

    #[test]
    fn wrong_version_is_rejected() {
        let conn = test_conn();
        let json = r#"{"version": 99, "exported_at": "2026-08-05T00:00:00",
                       "prayers": [], "sunnah": [], "fasts": [], "bookmark": null, "trivia": []}"#;
        let err = import(&conn, json).unwrap_err();
        assert!(matches!(err, TransferError::Version { found: 99 }));
    }

    #[test]
    fn invalid_records_are_rejected_before_any_write() {
        let conn = test_conn();
        let json = r#"{"version": 1, "exported_at": "2026-08-05T00:00:00",
                       "prayers": [{"date": "2026-08-05", "prayer": "fajr", "done": true},
                                   {"date": "2026-08-05", "prayer": "brunch", "done": true}],
                       "sunnah": [], "fasts": [], "bookmark": null, "trivia": []}"#;
        let err = import(&conn, json).unwrap_err();
        assert!(err.to_string().contains("brunch"));
        // the valid fajr record before the bad one must not have landed
        assert!(PrayerRepo::all_records(&conn).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_bookmark_is_rejected() {
        let conn = test_conn();
        let json = r#"{"version": 1, "exported_at": "2026-08-05T00:00:00",
                       "prayers": [], "sunnah": [], "fasts": [],
                       "bookmark": {"surah": 1, "ayah": 99}, "trivia": []}"#;
        let err = import(&conn, json).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord(_)));
    }

    #[test]
    fn bad_date_is_rejected() {
        let conn = test_conn();
        let json = r#"{"version": 1, "exported_at": "2026-08-05T00:00:00",
                       "prayers": [], "sunnah": [],
                       "fasts": [{"date": "yesterday", "kind": "voluntary", "completed": true}],
                       "bookmark": null, "trivia": []}"#;
        let err = import(&conn, json).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn import_creates_unknown_sunnah_tasks() {
        let conn = test_conn();
        let json = r#"{"version": 1, "exported_at": "2026-08-05T00:00:00",
                       "prayers": [],
                       "sunnah": [{"date": "2026-08-05", "task": "Tahajjud", "completed": true}],
                       "fasts": [], "bookmark": null, "trivia": []}"#;
        import(&conn, json).unwrap();
        assert!(SunnahRepo::find_by_name(&conn, "Tahajjud").unwrap().is_some());
    }
}
