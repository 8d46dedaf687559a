use anyhow::{anyhow, Result};
use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime};
use rusqlite::Connection;
use salah::prelude::*;

use crate::db::repository::{CacheRepo, CachedTimes};
use crate::models::PrayerName;

#[derive(Debug, Clone)]
pub struct DailySchedule {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub zuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl DailySchedule {
    pub fn time_of(&self, prayer: PrayerName) -> NaiveTime {
        match prayer {
            PrayerName::Fajr => self.fajr,
            PrayerName::Zuhr => self.zuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }
}

impl From<&DailySchedule> for CachedTimes {
    fn from(s: &DailySchedule) -> Self {
        CachedTimes {
            fajr: s.fajr,
            sunrise: s.sunrise,
            zuhr: s.zuhr,
            asr: s.asr,
            maghrib: s.maghrib,
            isha: s.isha,
        }
    }
}

impl From<CachedTimes> for DailySchedule {
    fn from(c: CachedTimes) -> Self {
        DailySchedule {
            fajr: c.fajr,
            sunrise: c.sunrise,
            zuhr: c.zuhr,
            asr: c.asr,
            maghrib: c.maghrib,
            isha: c.isha,
        }
    }
}

pub struct PrayerCalculator {
    pub lat: f64,
    pub lng: f64,
    pub method_str: String,
    pub madhab_str: String,
    pub tz_offset_minutes: i32,
}

impl PrayerCalculator {
    pub fn new(
        lat: f64,
        lng: f64,
        method: &str,
        madhab: &str,
        tz_offset_minutes: i32,
    ) -> Result<Self> {
        // Validate method + madhab early
        parse_method(method)?;
        parse_madhab(madhab)?;
        Ok(Self {
            lat,
            lng,
            method_str: method.to_string(),
            madhab_str: madhab.to_string(),
            tz_offset_minutes,
        })
    }

    fn compute_times(&self, date: NaiveDate) -> Result<DailySchedule> {
        let coords = Coordinates::new(self.lat, self.lng);
        let method = parse_method(&self.method_str)?;
        let madhab = parse_madhab(&self.madhab_str)?;
        let params = Configuration::with(method, madhab);

        let times = PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
            .map_err(|e| anyhow!("Prayer calculation failed: {}", e))?;

        let offset = FixedOffset::east_opt(self.tz_offset_minutes * 60)
            .ok_or_else(|| anyhow!("Invalid timezone offset: {}", self.tz_offset_minutes))?;

        let to_local = |utc: chrono::DateTime<chrono::Utc>| -> NaiveTime {
            utc.with_timezone(&offset).time()
        };

        Ok(DailySchedule {
            fajr: to_local(times.time(Prayer::Fajr)),
            sunrise: to_local(times.time(Prayer::Sunrise)),
            zuhr: to_local(times.time(Prayer::Dhuhr)),
            asr: to_local(times.time(Prayer::Asr)),
            maghrib: to_local(times.time(Prayer::Maghrib)),
            isha: to_local(times.time(Prayer::Isha)),
        })
    }

    /// Ensure prayer_times_cache has entries for today through `days_ahead` days.
    pub fn ensure_cached(&self, conn: &Connection, days_ahead: u32) -> Result<()> {
        let today = chrono::Local::now().date_naive();

        for i in 0..=(days_ahead as i64) {
            let date = today + Duration::days(i);
            let date_str = date.format("%Y-%m-%d").to_string();

            if CacheRepo::get_times_for_date(conn, &date_str)?.is_none() {
                log::debug!("computing prayer times for {}", date_str);
                let times = self.compute_times(date)?;
                CacheRepo::store_times(conn, &date_str, &CachedTimes::from(&times))?;
            }
        }
        Ok(())
    }

    /// Get times from cache (or compute if missing) for a specific date.
    pub fn get_cached_or_compute(&self, conn: &Connection, date: NaiveDate) -> Result<DailySchedule> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if let Some(cached) = CacheRepo::get_times_for_date(conn, &date_str)? {
            return Ok(cached.into());
        }

        let times = self.compute_times(date)?;
        CacheRepo::store_times(conn, &date_str, &CachedTimes::from(&times))?;
        Ok(times)
    }

    /// Returns (next prayer, seconds until it), given the current local
    /// date and time.
    pub fn get_next_prayer(
        &self,
        conn: &Connection,
        now_date: NaiveDate,
        now_time: NaiveTime,
    ) -> Result<Option<(PrayerName, i64)>> {
        let today_times = self.get_cached_or_compute(conn, now_date)?;

        for prayer in PrayerName::all() {
            let time = today_times.time_of(prayer);
            if time > now_time {
                let secs = (time - now_time).num_seconds();
                return Ok(Some((prayer, secs)));
            }
        }

        // All prayers passed — next is Fajr tomorrow. Count the seconds left
        // today (through 23:59:59), the boundary second, then midnight to Fajr.
        let tomorrow = now_date.succ_opt().unwrap_or(now_date);
        let tomorrow_times = self.get_cached_or_compute(conn, tomorrow)?;
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        let midnight_to_fajr = tomorrow_times.fajr.signed_duration_since(midnight);
        let remaining_today = end_of_day.signed_duration_since(now_time);
        let secs = remaining_today.num_seconds() + midnight_to_fajr.num_seconds() + 1;
        Ok(Some((PrayerName::Fajr, secs)))
    }
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(anyhow!("Unknown calculation method: '{}'", s)),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(anyhow!("Unknown madhab: '{}'", s)),
    }
}

pub const CALC_METHODS: &[&str] = &[
    "MuslimWorldLeague",
    "Egyptian",
    "Karachi",
    "UmmAlQura",
    "Dubai",
    "MoonsightingCommittee",
    "NorthAmerica",
    "Kuwait",
    "Qatar",
    "Singapore",
    "Tehran",
    "Turkey",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn seeded_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let today = CachedTimes {
            fajr: t(4, 30),
            sunrise: t(5, 55),
            zuhr: t(12, 10),
            asr: t(15, 45),
            maghrib: t(18, 40),
            isha: t(20, 5),
        };
        let tomorrow = CachedTimes {
            fajr: t(4, 31),
            sunrise: t(5, 56),
            zuhr: t(12, 10),
            asr: t(15, 44),
            maghrib: t(18, 39),
            isha: t(20, 4),
        };
        CacheRepo::store_times(&conn, "2026-08-06", &today).unwrap();
        CacheRepo::store_times(&conn, "2026-08-07", &tomorrow).unwrap();
        conn
    }

    fn calculator() -> PrayerCalculator {
        PrayerCalculator::new(33.6938, 73.0651, "Karachi", "Hanafi", 300).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn rejects_unknown_method_and_madhab() {
        assert!(PrayerCalculator::new(0.0, 0.0, "Lunar", "Hanafi", 0).is_err());
        assert!(PrayerCalculator::new(0.0, 0.0, "Karachi", "Maliki", 0).is_err());
    }

    #[test]
    fn next_prayer_scans_forward() {
        let conn = seeded_conn();
        let calc = calculator();

        let now = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
        let (prayer, secs) = calc.get_next_prayer(&conn, date(), now).unwrap().unwrap();
        assert_eq!(prayer, PrayerName::Asr);
        assert_eq!(secs, 2 * 3600 + 45 * 60);
    }

    #[test]
    fn before_fajr_the_next_prayer_is_fajr() {
        let conn = seeded_conn();
        let calc = calculator();

        let now = NaiveTime::from_hms_opt(3, 0, 0).unwrap();
        let (prayer, secs) = calc.get_next_prayer(&conn, date(), now).unwrap().unwrap();
        assert_eq!(prayer, PrayerName::Fajr);
        assert_eq!(secs, 90 * 60);
    }

    #[test]
    fn after_isha_wraps_to_tomorrows_fajr() {
        let conn = seeded_conn();
        let calc = calculator();

        let now = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let (prayer, secs) = calc.get_next_prayer(&conn, date(), now).unwrap().unwrap();
        assert_eq!(prayer, PrayerName::Fajr);
        // 22:00 -> midnight is 2h, midnight -> 4:31 is 4h31m
        assert_eq!(secs, 2 * 3600 + 4 * 3600 + 31 * 60);
    }

    #[test]
    fn countdown_at_the_last_second_of_the_day() {
        let conn = seeded_conn();
        let calc = calculator();

        let now = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        let (prayer, secs) = calc.get_next_prayer(&conn, date(), now).unwrap().unwrap();
        assert_eq!(prayer, PrayerName::Fajr);
        // one second to midnight, then midnight -> 4:31
        assert_eq!(secs, 1 + 4 * 3600 + 31 * 60);
    }

    #[test]
    fn exact_prayer_time_moves_to_the_next() {
        let conn = seeded_conn();
        let calc = calculator();

        // At exactly Zuhr the countdown targets Asr
        let now = NaiveTime::from_hms_opt(12, 10, 0).unwrap();
        let (prayer, _) = calc.get_next_prayer(&conn, date(), now).unwrap().unwrap();
        assert_eq!(prayer, PrayerName::Asr);
    }
}
