use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub fn all() -> [PrayerName; 5] {
        [
            PrayerName::Fajr,
            PrayerName::Zuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Zuhr => "zuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Zuhr => "Zuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "zuhr" | "dhuhr" | "dhuhur" => Ok(PrayerName::Zuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

/// One prayer on one day: a single done flag, last write wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerDay {
    pub name: PrayerName,
    pub date: String,
    pub done: bool,
    /// Filled in from the times cache when displaying, never stored here.
    #[serde(skip)]
    pub time: Option<NaiveTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(PrayerName::from_str("FAJR").unwrap(), PrayerName::Fajr);
        assert_eq!(PrayerName::from_str("dhuhr").unwrap(), PrayerName::Zuhr);
        assert!(PrayerName::from_str("midnight").is_err());
    }

    #[test]
    fn five_prayers_in_order() {
        let all = PrayerName::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], PrayerName::Fajr);
        assert_eq!(all[4], PrayerName::Isha);
    }
}
