use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar entry. Date-only, no time component, no link to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub is_urgent: bool,
}

impl CalendarEvent {
    pub fn new(id: String, title: String, date: NaiveDate, is_urgent: bool) -> Self {
        Self {
            id,
            title,
            date,
            is_urgent,
        }
    }
}
