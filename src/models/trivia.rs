use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct TriviaQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`.
    pub answer: usize,
}

pub const QUESTION_BANK: &[TriviaQuestion] = &[
    TriviaQuestion {
        id: 0,
        prompt: "Which surah is known as the heart of the Quran?",
        options: ["Al-Fatihah", "Ya-Sin", "Al-Ikhlas", "Ar-Rahman"],
        answer: 1,
    },
    TriviaQuestion {
        id: 1,
        prompt: "How many ayahs does Al-Fatihah have?",
        options: ["5", "6", "7", "8"],
        answer: 2,
    },
    TriviaQuestion {
        id: 2,
        prompt: "In which Hijri month does Ramadan fall?",
        options: ["8th", "9th", "10th", "12th"],
        answer: 1,
    },
    TriviaQuestion {
        id: 3,
        prompt: "Which prayer is performed just after sunset?",
        options: ["Asr", "Isha", "Maghrib", "Fajr"],
        answer: 2,
    },
    TriviaQuestion {
        id: 4,
        prompt: "What fraction of eligible wealth is paid as zakat?",
        options: ["1.5%", "2.5%", "5%", "10%"],
        answer: 1,
    },
    TriviaQuestion {
        id: 5,
        prompt: "The Day of Ashura falls on which date?",
        options: [
            "10 Muharram",
            "1 Ramadan",
            "9 Dhu al-Hijjah",
            "15 Sha'ban",
        ],
        answer: 0,
    },
    TriviaQuestion {
        id: 6,
        prompt: "Which surah does the Sunnah recommend reading on Fridays?",
        options: ["Al-Mulk", "Al-Kahf", "Al-Waqi'ah", "As-Sajdah"],
        answer: 1,
    },
    TriviaQuestion {
        id: 7,
        prompt: "The qibla faces which city?",
        options: ["Madinah", "Jerusalem", "Makkah", "Taif"],
        answer: 2,
    },
    TriviaQuestion {
        id: 8,
        prompt: "Which is the longest surah of the Quran?",
        options: ["Aal Imran", "An-Nisa", "Al-Baqarah", "Al-Ma'idah"],
        answer: 2,
    },
    TriviaQuestion {
        id: 9,
        prompt: "The White Days of each Hijri month are which dates?",
        options: ["1-3", "10-12", "13-15", "27-29"],
        answer: 2,
    },
    TriviaQuestion {
        id: 10,
        prompt: "Laylat al-Qadr is sought in which part of Ramadan?",
        options: [
            "The first ten nights",
            "The middle ten nights",
            "The last ten nights",
            "The first Friday",
        ],
        answer: 2,
    },
    TriviaQuestion {
        id: 11,
        prompt: "How many surahs does the Quran contain?",
        options: ["110", "112", "114", "116"],
        answer: 2,
    },
    TriviaQuestion {
        id: 12,
        prompt: "Eid al-Fitr is celebrated on the first day of which month?",
        options: ["Ramadan", "Shawwal", "Dhu al-Hijjah", "Muharram"],
        answer: 1,
    },
    TriviaQuestion {
        id: 13,
        prompt: "The Day of Arafah falls on which date?",
        options: [
            "9 Dhu al-Hijjah",
            "10 Dhu al-Hijjah",
            "1 Muharram",
            "27 Rajab",
        ],
        answer: 0,
    },
    TriviaQuestion {
        id: 14,
        prompt: "On which days is voluntary fasting a weekly Sunnah?",
        options: [
            "Tuesday and Friday",
            "Monday and Thursday",
            "Saturday and Sunday",
            "Wednesday and Thursday",
        ],
        answer: 1,
    },
    TriviaQuestion {
        id: 15,
        prompt: "Which surah is recited in every unit of prayer?",
        options: ["Al-Ikhlas", "Al-Fatihah", "An-Nas", "Al-Kawthar"],
        answer: 1,
    },
];

/// The question for a given date. Deterministic: the same date always maps
/// to the same question, so "daily trivia" needs no stored schedule.
pub fn question_for_date(date: NaiveDate) -> &'static TriviaQuestion {
    let idx = date.num_days_from_ce().unsigned_abs() as usize % QUESTION_BANK.len();
    &QUESTION_BANK[idx]
}

/// A recorded answer for one date, last write wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaAnswer {
    pub date: String,
    pub question_id: u32,
    pub choice: usize,
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_is_well_formed() {
        assert!(!QUESTION_BANK.is_empty());
        for (i, q) in QUESTION_BANK.iter().enumerate() {
            assert_eq!(q.id as usize, i);
            assert!(q.answer < q.options.len(), "bad answer index in q{}", q.id);
        }
    }

    #[test]
    fn selection_is_deterministic() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(question_for_date(d).id, question_for_date(d).id);
    }

    #[test]
    fn consecutive_days_walk_the_bank() {
        let d1 = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let d2 = d1.succ_opt().unwrap();
        let next = (question_for_date(d1).id as usize + 1) % QUESTION_BANK.len();
        assert_eq!(question_for_date(d2).id as usize, next);
    }
}
