use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

pub fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

#[derive(Debug, Clone)]
pub struct HijriInfo {
    pub day: usize,
    pub month: usize,
    pub year: usize,
    pub month_name: String,
    pub day_name: String,
}

impl HijriInfo {
    pub fn formatted(&self) -> String {
        format!("{} {} {}", self.day, self.month_name, self.year)
    }
}

/// Convert a Gregorian date, applying the moon-sighting day offset from
/// config (e.g. -1 if your country sights one day behind Saudi Arabia).
pub fn to_hijri(date: NaiveDate, offset_days: i32) -> Result<HijriInfo> {
    let adjusted = date + Duration::days(offset_days as i64);
    let hd = HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    let month = hd.month();
    Ok(HijriInfo {
        day: hd.day(),
        month,
        year: hd.year(),
        month_name: hijri_month_name(month).to_string(),
        day_name: hd.day_name_en(),
    })
}

/// Today's Hijri date as a display string. Falls back to the unadjusted
/// conversion if the offset pushes the date outside the supported range.
pub fn today_hijri_string(offset_days: i32) -> String {
    let today = chrono::Local::now().date_naive();
    match to_hijri(today, offset_days) {
        Ok(h) => h.formatted(),
        Err(_) => {
            let hd = HijriDate::today();
            format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year())
        }
    }
}

/// One day of a Hijri month paired with its Gregorian date.
#[derive(Debug, Clone)]
pub struct HijriMonthDay {
    pub hijri_day: usize,
    pub gregorian: NaiveDate,
    pub note: Option<&'static str>,
}

/// The days of the Hijri month containing `date`.
///
/// `hijri_date` only converts Gregorian -> Hijri, so the month is recovered
/// by scanning the surrounding Gregorian days (a lunar month is at most 30
/// days, so +-35 covers it) and keeping those that land in the same month.
pub fn hijri_month_days(date: NaiveDate, offset_days: i32) -> Result<Vec<HijriMonthDay>> {
    let anchor = to_hijri(date, offset_days)?;

    let mut days = Vec::with_capacity(30);
    for delta in -35i64..=35 {
        let g = date + Duration::days(delta);
        let Ok(h) = to_hijri(g, offset_days) else {
            continue; // edge of the converter's supported range
        };
        if h.year == anchor.year && h.month == anchor.month {
            days.push(HijriMonthDay {
                hijri_day: h.day,
                gregorian: g,
                note: notable_day(h.month, h.day),
            });
        }
    }
    days.sort_by_key(|d| d.hijri_day);
    days.dedup_by_key(|d| d.hijri_day);
    Ok(days)
}

/// Annotation for dates of significance in the Islamic year.
pub fn notable_day(month: usize, day: usize) -> Option<&'static str> {
    match (month, day) {
        (1, 1) => Some("Islamic New Year"),
        (1, 10) => Some("Ashura"),
        (9, 1) => Some("Ramadan begins"),
        (10, 1) => Some("Eid al-Fitr"),
        (12, 9) => Some("Day of Arafah"),
        (12, 10) => Some("Eid al-Adha"),
        (_, 13..=15) => Some("White Days"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_stays_in_range() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let h = to_hijri(d, 0).unwrap();
        assert!((1..=12).contains(&h.month));
        assert!((1..=30).contains(&h.day));
        // 2026 CE sits in 1447-1448 AH
        assert!(h.year == 1447 || h.year == 1448, "year {}", h.year);
    }

    #[test]
    fn offset_shifts_by_one_day() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let base = to_hijri(d, 0).unwrap();
        let behind = to_hijri(d, -1).unwrap();
        let forward = to_hijri(d.pred_opt().unwrap(), 0).unwrap();
        // -1 offset on `d` equals converting the previous Gregorian day
        assert_eq!(behind.day, forward.day);
        assert_eq!(behind.month, forward.month);
        assert!(base.day != behind.day || base.month != behind.month);
    }

    #[test]
    fn month_scan_is_contiguous() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let days = hijri_month_days(d, 0).unwrap();
        assert!((29..=30).contains(&days.len()), "got {} days", days.len());
        for (i, md) in days.iter().enumerate() {
            assert_eq!(md.hijri_day, i + 1);
        }
        // Gregorian dates ascend with the Hijri days
        for pair in days.windows(2) {
            assert_eq!(pair[1].gregorian, pair[0].gregorian.succ_opt().unwrap());
        }
    }

    #[test]
    fn notable_days_cover_the_big_ones() {
        assert_eq!(notable_day(1, 10), Some("Ashura"));
        assert_eq!(notable_day(10, 1), Some("Eid al-Fitr"));
        assert_eq!(notable_day(12, 10), Some("Eid al-Adha"));
        assert_eq!(notable_day(5, 14), Some("White Days"));
        assert_eq!(notable_day(5, 20), None);
    }

    #[test]
    fn month_names_map() {
        assert_eq!(hijri_month_name(1), "Muharram");
        assert_eq!(hijri_month_name(9), "Ramadan");
        assert_eq!(hijri_month_name(13), "Unknown");
    }
}
