use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Builtin,
    Custom,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Builtin => "builtin",
            TaskCategory::Custom => "custom",
        }
    }
}

impl std::str::FromStr for TaskCategory {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "builtin" => Ok(TaskCategory::Builtin),
            "custom" => Ok(TaskCategory::Custom),
            _ => Err(anyhow::anyhow!("Unknown task category: {}", s)),
        }
    }
}

/// A sunnah habit the user tracks with a per-day checkbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunnahTask {
    pub id: i64,
    pub name: String,
    pub category: TaskCategory,
    pub sort_order: i32,
    pub active: bool,
}

/// One task's checkbox on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunnahLog {
    pub id: Option<i64>,
    pub task_id: i64,
    pub date: String,
    pub completed: bool,
}
