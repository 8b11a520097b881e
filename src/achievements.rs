//! Achievement tier derived from completed tasks. Never persisted;
//! recomputed from the board on every invocation.

use serde::Serialize;

use crate::models::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Rookie,
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rookie => "Rookie",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementSummary {
    pub done_count: usize,
    pub total_hours: f64,
    pub tier: Tier,
}

/// Classify the `Done` subset of the board. Thresholds are checked
/// highest tier first; hours are compared as a float, not as the
/// one-decimal string the display layer shows.
pub fn classify(tasks: &[Task]) -> AchievementSummary {
    let done: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .collect();
    let done_count = done.len();
    let total_ms: i64 = done.iter().map(|t| t.elapsed_ms).sum();
    let total_hours = total_ms as f64 / 3_600_000.0;

    let tier = if done_count >= 30 || total_hours > 50.0 {
        Tier::Gold
    } else if done_count >= 10 || total_hours > 10.0 {
        Tier::Silver
    } else if done_count >= 1 {
        Tier::Bronze
    } else {
        Tier::Rookie
    };

    AchievementSummary {
        done_count,
        total_hours,
        tier,
    }
}
