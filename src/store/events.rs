use chrono::{Days, NaiveDate};

use crate::models::CalendarEvent;

/// Flat calendar-event list. Append-only ordering: no dedup, no sort.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn find(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    /// Events falling exactly on `date`, in store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// The one event worth surfacing in the briefing: an urgent event
    /// dated today or tomorrow wins; otherwise the first today-or-tomorrow
    /// event in store order; otherwise nothing.
    pub fn upcoming_highlight(&self, today: NaiveDate) -> Option<&CalendarEvent> {
        let tomorrow = today.checked_add_days(Days::new(1))?;
        let near = |e: &&CalendarEvent| e.date == today || e.date == tomorrow;

        self.events
            .iter()
            .find(|e| near(e) && e.is_urgent)
            .or_else(|| self.events.iter().find(near))
    }
}
