use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;

use crate::models::{
    Bookmark, DailyStats, FastEntry, FastKind, PrayerDay, PrayerName, Streak, SunnahLog,
    SunnahTask, TriviaAnswer,
};
use crate::models::sunnah::TaskCategory;

// ─── Cached prayer times ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CachedTimes {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub zuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| anyhow!("Bad time '{}': {}", s, e))
}

pub struct CacheRepo;

impl CacheRepo {
    pub fn get_times_for_date(conn: &Connection, date: &str) -> Result<Option<CachedTimes>> {
        let row = conn
            .query_row(
                "SELECT fajr, sunrise, zuhr, asr, maghrib, isha FROM prayer_times_cache WHERE date = ?1",
                params![date],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((fajr, sunrise, zuhr, asr, maghrib, isha)) => Ok(Some(CachedTimes {
                fajr: parse_time(&fajr)?,
                sunrise: parse_time(&sunrise)?,
                zuhr: parse_time(&zuhr)?,
                asr: parse_time(&asr)?,
                maghrib: parse_time(&maghrib)?,
                isha: parse_time(&isha)?,
            })),
        }
    }

    pub fn store_times(conn: &Connection, date: &str, times: &CachedTimes) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO prayer_times_cache (date, fajr, sunrise, zuhr, asr, maghrib, isha)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                date,
                times.fajr.format("%H:%M").to_string(),
                times.sunrise.format("%H:%M").to_string(),
                times.zuhr.format("%H:%M").to_string(),
                times.asr.format("%H:%M").to_string(),
                times.maghrib.format("%H:%M").to_string(),
                times.isha.format("%H:%M").to_string(),
            ],
        )?;
        Ok(())
    }

    pub fn clear_all(conn: &Connection) -> Result<()> {
        conn.execute("DELETE FROM prayer_times_cache", [])?;
        Ok(())
    }
}

// ─── Prayer repo ─────────────────────────────────────────────────────────────

pub struct PrayerRepo;

impl PrayerRepo {
    /// Ensure a row exists for each of the five prayers on the given date.
    pub fn ensure_day_rows(conn: &Connection, date: &str) -> Result<()> {
        for name in PrayerName::all() {
            conn.execute(
                "INSERT OR IGNORE INTO prayers (prayer, date, done) VALUES (?1, ?2, 0)",
                params![name.as_str(), date],
            )?;
        }
        Ok(())
    }

    pub fn get_by_date(conn: &Connection, date: &str) -> Result<Vec<PrayerDay>> {
        let mut stmt = conn.prepare(
            "SELECT prayer, date, done FROM prayers WHERE date = ?1
             ORDER BY CASE prayer
               WHEN 'fajr' THEN 1 WHEN 'zuhr' THEN 2 WHEN 'asr' THEN 3
               WHEN 'maghrib' THEN 4 WHEN 'isha' THEN 5 END",
        )?;

        let rows = stmt.query_map(params![date], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
            ))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (prayer, date, done) = r?;
            result.push(PrayerDay {
                name: PrayerName::from_str(&prayer)
                    .map_err(|e| anyhow!("Corrupt prayer row: {}", e))?,
                date,
                done: done != 0,
                time: None,
            });
        }
        Ok(result)
    }

    /// Set the done flag. Last write wins.
    pub fn set_done(conn: &Connection, prayer: PrayerName, date: &str, done: bool) -> Result<()> {
        conn.execute(
            "INSERT INTO prayers (prayer, date, done) VALUES (?1, ?2, ?3)
             ON CONFLICT(prayer, date) DO UPDATE SET done = ?3",
            params![prayer.as_str(), date, done as i32],
        )?;
        Ok(())
    }

    pub fn all_records(conn: &Connection) -> Result<Vec<PrayerDay>> {
        let mut stmt =
            conn.prepare("SELECT prayer, date, done FROM prayers ORDER BY date, prayer")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
            ))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (prayer, date, done) = r?;
            result.push(PrayerDay {
                name: PrayerName::from_str(&prayer)
                    .map_err(|e| anyhow!("Corrupt prayer row: {}", e))?,
                date,
                done: done != 0,
                time: None,
            });
        }
        Ok(result)
    }
}

// ─── Sunnah repo ─────────────────────────────────────────────────────────────

pub struct SunnahRepo;

impl SunnahRepo {
    pub fn get_active_tasks(conn: &Connection) -> Result<Vec<SunnahTask>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, category, sort_order FROM sunnah_tasks
             WHERE active = 1 ORDER BY sort_order, id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i32>(3)?,
            ))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (id, name, category, sort_order) = r?;
            result.push(SunnahTask {
                id,
                name,
                category: TaskCategory::from_str(&category)
                    .map_err(|e| anyhow!("Corrupt task row: {}", e))?,
                sort_order,
                active: true,
            });
        }
        Ok(result)
    }

    pub fn get_log_for_date(conn: &Connection, date: &str) -> Result<Vec<SunnahLog>> {
        let mut stmt =
            conn.prepare("SELECT id, task_id, date, completed FROM sunnah_log WHERE date = ?1")?;

        let rows = stmt.query_map(params![date], |row| {
            Ok(SunnahLog {
                id: Some(row.get::<_, i64>(0)?),
                task_id: row.get::<_, i64>(1)?,
                date: row.get::<_, String>(2)?,
                completed: row.get::<_, i32>(3)? != 0,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    pub fn set_completed(
        conn: &Connection,
        task_id: i64,
        date: &str,
        completed: bool,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO sunnah_log (task_id, date, completed) VALUES (?1, ?2, ?3)
             ON CONFLICT(task_id, date) DO UPDATE SET completed = ?3",
            params![task_id, date, completed as i32],
        )?;
        Ok(())
    }

    pub fn add_custom(conn: &Connection, name: &str) -> Result<()> {
        let max_order: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(sort_order), 100) FROM sunnah_tasks WHERE category = 'custom'",
                [],
                |row| row.get(0),
            )
            .unwrap_or(100);

        conn.execute(
            "INSERT INTO sunnah_tasks (name, category, sort_order, active)
             VALUES (?1, ?2, ?3, 1)",
            params![name, TaskCategory::Custom.as_str(), max_order + 1],
        )?;
        Ok(())
    }

    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<SunnahTask>> {
        let tasks = Self::get_active_tasks(conn)?;
        Ok(tasks
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name)))
    }

    /// Find a task by name, creating a custom one if it does not exist.
    pub fn find_or_create(conn: &Connection, name: &str) -> Result<SunnahTask> {
        if let Some(task) = Self::find_by_name(conn, name)? {
            return Ok(task);
        }
        Self::add_custom(conn, name)?;
        Self::find_by_name(conn, name)?
            .ok_or_else(|| anyhow!("Task '{}' vanished after insert", name))
    }

    pub fn all_log_records(conn: &Connection) -> Result<Vec<(String, String, bool)>> {
        let mut stmt = conn.prepare(
            "SELECT t.name, l.date, l.completed FROM sunnah_log l
             JOIN sunnah_tasks t ON t.id = l.task_id
             ORDER BY l.date, t.sort_order",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)? != 0,
            ))
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }
}

// ─── Fasting repo ────────────────────────────────────────────────────────────

pub struct FastingRepo;

impl FastingRepo {
    pub fn get_for_date(conn: &Connection, date: &str) -> Result<Option<FastEntry>> {
        conn.query_row(
            "SELECT id, date, kind, completed FROM fasting_log WHERE date = ?1",
            params![date],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i32>(3)?,
                ))
            },
        )
        .optional()?
        .map(|(id, date, kind, completed)| {
            Ok(FastEntry {
                id: Some(id),
                date,
                kind: FastKind::from_str(&kind).map_err(|e| anyhow!("Corrupt fast row: {}", e))?,
                completed: completed != 0,
            })
        })
        .transpose()
    }

    /// Record a fast for a date. Last write wins on the kind.
    pub fn upsert(conn: &Connection, date: &str, kind: FastKind, completed: bool) -> Result<()> {
        conn.execute(
            "INSERT INTO fasting_log (date, kind, completed) VALUES (?1, ?2, ?3)
             ON CONFLICT(date) DO UPDATE SET kind = ?2, completed = ?3",
            params![date, kind.as_str(), completed as i32],
        )?;
        Ok(())
    }

    pub fn remove(conn: &Connection, date: &str) -> Result<bool> {
        let n = conn.execute("DELETE FROM fasting_log WHERE date = ?1", params![date])?;
        Ok(n > 0)
    }

    pub fn get_range(conn: &Connection, start: &str, end: &str) -> Result<Vec<FastEntry>> {
        let mut stmt = conn.prepare(
            "SELECT id, date, kind, completed FROM fasting_log
             WHERE date >= ?1 AND date <= ?2 ORDER BY date",
        )?;
        let rows = stmt.query_map(params![start, end], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i32>(3)?,
            ))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (id, date, kind, completed) = r?;
            result.push(FastEntry {
                id: Some(id),
                date,
                kind: FastKind::from_str(&kind).map_err(|e| anyhow!("Corrupt fast row: {}", e))?,
                completed: completed != 0,
            });
        }
        Ok(result)
    }

    pub fn all_records(conn: &Connection) -> Result<Vec<FastEntry>> {
        Self::get_range(conn, "0000-00-00", "9999-99-99")
    }

    pub fn count_completed(conn: &Connection, start: &str, end: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM fasting_log WHERE date >= ?1 AND date <= ?2 AND completed = 1",
            params![start, end],
            |row| row.get(0),
        )
        .map_err(anyhow::Error::from)
    }
}

// ─── Quran bookmark repo ─────────────────────────────────────────────────────

pub struct QuranRepo;

impl QuranRepo {
    pub fn get_bookmark(conn: &Connection) -> Result<Option<(Bookmark, String)>> {
        let row = conn
            .query_row(
                "SELECT surah, ayah, updated_at FROM quran_bookmark WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((surah, ayah, updated_at)) => {
                let bookmark = Bookmark::new(surah as u16, ayah as u16)
                    .map_err(|e| anyhow!("Corrupt bookmark row: {}", e))?;
                Ok(Some((bookmark, updated_at)))
            }
        }
    }

    /// Overwrite the single bookmark row. Last write wins.
    pub fn set_bookmark(conn: &Connection, bookmark: Bookmark) -> Result<()> {
        conn.execute(
            "INSERT INTO quran_bookmark (id, surah, ayah, updated_at)
             VALUES (1, ?1, ?2, datetime('now'))
             ON CONFLICT(id) DO UPDATE SET surah = ?1, ayah = ?2, updated_at = datetime('now')",
            params![bookmark.surah as i64, bookmark.ayah as i64],
        )?;
        Ok(())
    }
}

// ─── Trivia repo ─────────────────────────────────────────────────────────────

pub struct TriviaRepo;

impl TriviaRepo {
    pub fn get_for_date(conn: &Connection, date: &str) -> Result<Option<TriviaAnswer>> {
        conn.query_row(
            "SELECT date, question_id, choice, correct FROM trivia_log WHERE date = ?1",
            params![date],
            |row| {
                Ok(TriviaAnswer {
                    date: row.get(0)?,
                    question_id: row.get::<_, i64>(1)? as u32,
                    choice: row.get::<_, i64>(2)? as usize,
                    correct: row.get::<_, i32>(3)? != 0,
                })
            },
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn record_answer(conn: &Connection, answer: &TriviaAnswer) -> Result<()> {
        conn.execute(
            "INSERT INTO trivia_log (date, question_id, choice, correct)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(date) DO UPDATE SET question_id = ?2, choice = ?3, correct = ?4",
            params![
                answer.date,
                answer.question_id as i64,
                answer.choice as i64,
                answer.correct as i32
            ],
        )?;
        Ok(())
    }

    pub fn count_correct(conn: &Connection) -> Result<(i64, i64)> {
        let correct: i64 = conn.query_row(
            "SELECT COUNT(*) FROM trivia_log WHERE correct = 1",
            [],
            |row| row.get(0),
        )?;
        let total: i64 =
            conn.query_row("SELECT COUNT(*) FROM trivia_log", [], |row| row.get(0))?;
        Ok((correct, total))
    }

    pub fn all_records(conn: &Connection) -> Result<Vec<TriviaAnswer>> {
        let mut stmt = conn
            .prepare("SELECT date, question_id, choice, correct FROM trivia_log ORDER BY date")?;
        let rows = stmt.query_map([], |row| {
            Ok(TriviaAnswer {
                date: row.get(0)?,
                question_id: row.get::<_, i64>(1)? as u32,
                choice: row.get::<_, i64>(2)? as usize,
                correct: row.get::<_, i32>(3)? != 0,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }
}

// ─── Stats repo ──────────────────────────────────────────────────────────────

pub struct StatsRepo;

impl StatsRepo {
    pub fn get_daily_stats_range(
        conn: &Connection,
        start: &str,
        end: &str,
    ) -> Result<Vec<DailyStats>> {
        let mut stmt = conn.prepare(
            "SELECT date,
                    SUM(CASE WHEN done = 1 THEN 1 ELSE 0 END) as done,
                    COUNT(*) as total
             FROM prayers
             WHERE date >= ?1 AND date <= ?2
             GROUP BY date
             ORDER BY date",
        )?;

        let rows = stmt.query_map(params![start, end], |row| {
            Ok(DailyStats {
                date: row.get(0)?,
                prayers_done: row.get::<_, i32>(1)? as u8,
                prayers_total: row.get::<_, i32>(2)? as u8,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    pub fn calculate_streak(conn: &Connection) -> Result<Streak> {
        // Dates with all five prayers done, newest first
        let mut stmt = conn.prepare(
            "SELECT date FROM prayers
             GROUP BY date
             HAVING SUM(CASE WHEN done = 1 THEN 1 ELSE 0 END) >= 5
             ORDER BY date DESC",
        )?;

        let dates: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let today = chrono::Local::now().date_naive();
        Ok(Streak {
            current: current_streak(&dates, today),
            best: best_streak(&dates),
        })
    }
}

/// Length of the run of consecutive full days ending at `today` (or
/// yesterday, so a streak survives until today's prayers are all in).
fn current_streak(dates_desc: &[String], today: chrono::NaiveDate) -> u32 {
    let parsed: Vec<chrono::NaiveDate> = dates_desc
        .iter()
        .filter_map(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .collect();

    let mut check = today;
    let mut count = 0u32;
    for d in &parsed {
        if *d == check {
            count += 1;
            check = match check.pred_opt() {
                Some(p) => p,
                None => break,
            };
        } else if count == 0 && *d == today.pred_opt().unwrap_or(today) {
            // today not yet complete; streak continues from yesterday
            count += 1;
            check = match d.pred_opt() {
                Some(p) => p,
                None => break,
            };
        } else {
            break;
        }
    }
    count
}

fn best_streak(dates: &[String]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut sorted: Vec<chrono::NaiveDate> = dates
        .iter()
        .filter_map(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .collect();
    sorted.sort();

    let mut best = 0u32;
    let mut current = 1u32;

    for i in 1..sorted.len() {
        let prev = sorted[i - 1];
        let curr = sorted[i];
        if curr == prev.succ_opt().unwrap_or(curr) {
            current += 1;
        } else {
            current = 1;
        }
        best = best.max(current);
    }
    best.max(current)
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use chrono::NaiveDate;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn prayer_flags_toggle_last_write_wins() {
        let conn = test_conn();
        PrayerRepo::ensure_day_rows(&conn, "2026-08-06").unwrap();

        let prayers = PrayerRepo::get_by_date(&conn, "2026-08-06").unwrap();
        assert_eq!(prayers.len(), 5);
        assert!(prayers.iter().all(|p| !p.done));

        PrayerRepo::set_done(&conn, PrayerName::Fajr, "2026-08-06", true).unwrap();
        PrayerRepo::set_done(&conn, PrayerName::Fajr, "2026-08-06", false).unwrap();
        PrayerRepo::set_done(&conn, PrayerName::Fajr, "2026-08-06", true).unwrap();

        let prayers = PrayerRepo::get_by_date(&conn, "2026-08-06").unwrap();
        assert!(prayers[0].done);
        assert!(!prayers[1].done);
    }

    #[test]
    fn set_done_creates_missing_rows() {
        let conn = test_conn();
        PrayerRepo::set_done(&conn, PrayerName::Isha, "2026-08-01", true).unwrap();
        let all = PrayerRepo::all_records(&conn).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, PrayerName::Isha);
    }

    #[test]
    fn builtin_tasks_are_seeded_once() {
        let conn = test_conn();
        run_migrations(&conn).unwrap(); // second run must not duplicate
        let tasks = SunnahRepo::get_active_tasks(&conn).unwrap();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0].name, "Morning Adhkar");
    }

    #[test]
    fn sunnah_log_upserts() {
        let conn = test_conn();
        let task = SunnahRepo::find_by_name(&conn, "duha prayer").unwrap().unwrap();

        SunnahRepo::set_completed(&conn, task.id, "2026-08-06", true).unwrap();
        SunnahRepo::set_completed(&conn, task.id, "2026-08-06", false).unwrap();

        let log = SunnahRepo::get_log_for_date(&conn, "2026-08-06").unwrap();
        assert_eq!(log.len(), 1);
        assert!(!log[0].completed);
    }

    #[test]
    fn find_or_create_adds_custom_task() {
        let conn = test_conn();
        let task = SunnahRepo::find_or_create(&conn, "Tahajjud").unwrap();
        assert_eq!(task.category, TaskCategory::Custom);
        // idempotent
        let again = SunnahRepo::find_or_create(&conn, "tahajjud").unwrap();
        assert_eq!(task.id, again.id);
    }

    #[test]
    fn one_fast_per_date() {
        let conn = test_conn();
        FastingRepo::upsert(&conn, "2026-08-06", FastKind::MondayThursday, true).unwrap();
        FastingRepo::upsert(&conn, "2026-08-06", FastKind::Voluntary, true).unwrap();

        let entry = FastingRepo::get_for_date(&conn, "2026-08-06").unwrap().unwrap();
        assert_eq!(entry.kind, FastKind::Voluntary);

        assert!(FastingRepo::remove(&conn, "2026-08-06").unwrap());
        assert!(FastingRepo::get_for_date(&conn, "2026-08-06").unwrap().is_none());
        assert!(!FastingRepo::remove(&conn, "2026-08-06").unwrap());
    }

    #[test]
    fn bookmark_is_scalar() {
        let conn = test_conn();
        assert!(QuranRepo::get_bookmark(&conn).unwrap().is_none());

        QuranRepo::set_bookmark(&conn, Bookmark::new(2, 255).unwrap()).unwrap();
        QuranRepo::set_bookmark(&conn, Bookmark::new(18, 10).unwrap()).unwrap();

        let (bookmark, _at) = QuranRepo::get_bookmark(&conn).unwrap().unwrap();
        assert_eq!(bookmark, Bookmark::new(18, 10).unwrap());

        // still a single row
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM quran_bookmark", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn trivia_answer_last_write_wins() {
        let conn = test_conn();
        let first = TriviaAnswer {
            date: "2026-08-06".into(),
            question_id: 3,
            choice: 0,
            correct: false,
        };
        TriviaRepo::record_answer(&conn, &first).unwrap();
        let second = TriviaAnswer {
            choice: 2,
            correct: true,
            ..first
        };
        TriviaRepo::record_answer(&conn, &second).unwrap();

        let stored = TriviaRepo::get_for_date(&conn, "2026-08-06").unwrap().unwrap();
        assert_eq!(stored.choice, 2);
        assert!(stored.correct);
        assert_eq!(TriviaRepo::count_correct(&conn).unwrap(), (1, 1));
    }

    #[test]
    fn cached_times_round_trip() {
        let conn = test_conn();
        let times = CachedTimes {
            fajr: NaiveTime::from_hms_opt(4, 30, 0).unwrap(),
            sunrise: NaiveTime::from_hms_opt(5, 55, 0).unwrap(),
            zuhr: NaiveTime::from_hms_opt(12, 10, 0).unwrap(),
            asr: NaiveTime::from_hms_opt(15, 45, 0).unwrap(),
            maghrib: NaiveTime::from_hms_opt(18, 40, 0).unwrap(),
            isha: NaiveTime::from_hms_opt(20, 5, 0).unwrap(),
        };
        CacheRepo::store_times(&conn, "2026-08-06", &times).unwrap();
        let got = CacheRepo::get_times_for_date(&conn, "2026-08-06").unwrap().unwrap();
        assert_eq!(got.fajr, times.fajr);
        assert_eq!(got.isha, times.isha);
        assert!(CacheRepo::get_times_for_date(&conn, "2026-08-07").unwrap().is_none());
    }

    fn mark_full_day(conn: &Connection, date: &str) {
        for p in PrayerName::all() {
            PrayerRepo::set_done(conn, p, date, true).unwrap();
        }
    }

    #[test]
    fn best_streak_spans_gaps() {
        let conn = test_conn();
        for date in ["2026-07-01", "2026-07-02", "2026-07-03", "2026-07-10"] {
            mark_full_day(&conn, date);
        }
        let streak = StatsRepo::calculate_streak(&conn).unwrap();
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn current_streak_counts_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let dates: Vec<String> = ["2026-08-06", "2026-08-05", "2026-08-04", "2026-08-01"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(current_streak(&dates, today), 3);

        // today not yet complete: run ends yesterday but still counts
        let dates: Vec<String> = ["2026-08-05", "2026-08-04"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(current_streak(&dates, today), 2);

        // gap before today kills it
        let dates: Vec<String> = ["2026-08-03"].iter().map(|s| s.to_string()).collect();
        assert_eq!(current_streak(&dates, today), 0);
    }

    #[test]
    fn daily_stats_aggregate() {
        let conn = test_conn();
        PrayerRepo::ensure_day_rows(&conn, "2026-08-05").unwrap();
        PrayerRepo::set_done(&conn, PrayerName::Fajr, "2026-08-05", true).unwrap();
        PrayerRepo::set_done(&conn, PrayerName::Zuhr, "2026-08-05", true).unwrap();

        let stats = StatsRepo::get_daily_stats_range(&conn, "2026-08-01", "2026-08-07").unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].prayers_done, 2);
        assert_eq!(stats[0].prayers_total, 5);
    }

    #[test]
    fn meta_round_trips() {
        let conn = test_conn();
        assert!(MetaRepo::get(&conn, "setup_done").unwrap().is_none());
        MetaRepo::set(&conn, "setup_done", "1").unwrap();
        MetaRepo::set(&conn, "setup_done", "1").unwrap();
        assert_eq!(MetaRepo::get(&conn, "setup_done").unwrap().as_deref(), Some("1"));
    }
}
