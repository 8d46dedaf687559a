use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub prayers_done: u8,
    pub prayers_total: u8,
}

impl DailyStats {
    pub fn completion_ratio(&self) -> f64 {
        if self.prayers_total == 0 {
            0.0
        } else {
            self.prayers_done as f64 / self.prayers_total as f64
        }
    }
}

/// Consecutive full-prayer days, ending today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}
