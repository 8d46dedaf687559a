use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::hijri::HijriInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FastKind {
    Ramadan,
    MondayThursday,
    AyyamAlBid,
    Ashura,
    Arafah,
    Voluntary,
}

impl FastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FastKind::Ramadan => "ramadan",
            FastKind::MondayThursday => "monday_thursday",
            FastKind::AyyamAlBid => "ayyam_al_bid",
            FastKind::Ashura => "ashura",
            FastKind::Arafah => "arafah",
            FastKind::Voluntary => "voluntary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FastKind::Ramadan => "Ramadan",
            FastKind::MondayThursday => "Monday/Thursday",
            FastKind::AyyamAlBid => "White Days",
            FastKind::Ashura => "Ashura",
            FastKind::Arafah => "Arafah",
            FastKind::Voluntary => "Voluntary",
        }
    }
}

impl std::fmt::Display for FastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FastKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ramadan" | "ramadhan" => Ok(FastKind::Ramadan),
            "monday_thursday" | "monday" | "thursday" => Ok(FastKind::MondayThursday),
            "ayyam_al_bid" | "white_days" => Ok(FastKind::AyyamAlBid),
            "ashura" => Ok(FastKind::Ashura),
            "arafah" => Ok(FastKind::Arafah),
            "voluntary" => Ok(FastKind::Voluntary),
            _ => Err(anyhow::anyhow!("Unknown fast kind: {}", s)),
        }
    }
}

/// At most one fast per date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastEntry {
    pub id: Option<i64>,
    pub date: String,
    pub kind: FastKind,
    pub completed: bool,
}

/// Suggest the most specific sunnah fast that applies to a date.
///
/// Precedence: Ramadan, then the named days (Arafah, Ashura), then the
/// White Days, then the weekly Monday/Thursday fast.
pub fn suggested_fast(date: NaiveDate, hijri: &HijriInfo) -> Option<FastKind> {
    if hijri.month == 9 {
        return Some(FastKind::Ramadan);
    }
    if hijri.month == 12 && hijri.day == 9 {
        return Some(FastKind::Arafah);
    }
    if hijri.month == 1 && hijri.day == 10 {
        return Some(FastKind::Ashura);
    }
    if (13..=15).contains(&hijri.day) {
        return Some(FastKind::AyyamAlBid);
    }
    match date.weekday() {
        Weekday::Mon | Weekday::Thu => Some(FastKind::MondayThursday),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hijri(month: usize, day: usize) -> HijriInfo {
        HijriInfo {
            day,
            month,
            year: 1447,
            month_name: String::new(),
            day_name: String::new(),
        }
    }

    // 2026-08-03 is a Monday, 2026-08-05 a Wednesday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn ramadan_beats_everything() {
        assert_eq!(
            suggested_fast(monday(), &hijri(9, 14)),
            Some(FastKind::Ramadan)
        );
    }

    #[test]
    fn named_days_beat_white_days() {
        assert_eq!(
            suggested_fast(wednesday(), &hijri(1, 10)),
            Some(FastKind::Ashura)
        );
        assert_eq!(
            suggested_fast(wednesday(), &hijri(12, 9)),
            Some(FastKind::Arafah)
        );
    }

    #[test]
    fn white_days_beat_weekday() {
        assert_eq!(
            suggested_fast(monday(), &hijri(3, 13)),
            Some(FastKind::AyyamAlBid)
        );
    }

    #[test]
    fn monday_falls_back_to_weekly() {
        assert_eq!(
            suggested_fast(monday(), &hijri(3, 20)),
            Some(FastKind::MondayThursday)
        );
        assert_eq!(suggested_fast(wednesday(), &hijri(3, 20)), None);
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            FastKind::Ramadan,
            FastKind::MondayThursday,
            FastKind::AyyamAlBid,
            FastKind::Ashura,
            FastKind::Arafah,
            FastKind::Voluntary,
        ] {
            assert_eq!(FastKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }
}
