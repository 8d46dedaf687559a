pub mod fasting;
pub mod prayer;
pub mod quran;
pub mod stats;
pub mod sunnah;
pub mod trivia;
pub mod zakat;

pub use fasting::{FastEntry, FastKind};
pub use prayer::{PrayerDay, PrayerName};
pub use quran::Bookmark;
pub use stats::{DailyStats, Streak};
pub use sunnah::{SunnahLog, SunnahTask, TaskCategory};
pub use trivia::TriviaAnswer;
