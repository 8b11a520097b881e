use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Column heading shown on the board for this status.
    pub fn column_title(&self) -> &'static str {
        match self {
            Self::Todo => "What to Do",
            Self::InProgress => "Work in Progress",
            Self::Done => "Achievements",
        }
    }
}

/// A board card. Timestamps are milliseconds since the Unix epoch.
///
/// `elapsed_ms` holds closed timer segments only; the open segment, when
/// `is_timer_running`, lives in `last_timer_start` and is folded in at
/// read time by [`crate::timer::projected_total_ms`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub status: TaskStatus,
    pub created_at: i64,
    pub started_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub elapsed_ms: i64,
    pub is_timer_running: bool,
    pub last_timer_start: Option<i64>,
}

impl Task {
    pub fn new(id: String, text: String, now_ms: i64) -> Self {
        Self {
            id,
            text,
            status: TaskStatus::Todo,
            created_at: now_ms,
            started_at: None,
            completed_at: None,
            elapsed_ms: 0,
            is_timer_running: false,
            last_timer_start: None,
        }
    }
}
