use chrono::NaiveDate;
use serde_json::json;

use crate::cli::commands::EventCommands;
use crate::cli::{new_id, print_no_match, report_error, resolve_ref};
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::models::CalendarEvent;
use crate::output;
use crate::store::EventStore;

pub fn run(cmd: EventCommands, json_output: bool) -> i32 {
    let result = match cmd {
        EventCommands::Add { title, date, urgent } => run_add(&title, &date, urgent, json_output),
        EventCommands::List { on } => run_list(on.as_deref(), json_output),
        EventCommands::Rm { id } => run_rm(&id, json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, FlowdeckError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| FlowdeckError::validation(format!("'{raw}' is not a YYYY-MM-DD date")))
}

fn event_refs(store: &EventStore) -> Vec<(String, String)> {
    store
        .events()
        .iter()
        .map(|e| (e.id.clone(), e.title.clone()))
        .collect()
}

fn run_add(title: &str, date: &str, urgent: bool, json_output: bool) -> Result<i32, FlowdeckError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FlowdeckError::validation("event title cannot be empty"));
    }
    let date = parse_date(date)?;

    let conn = connection::open_store()?;
    let mut store = EventStore::new(state_repo::load_events(&conn)?);
    let event = CalendarEvent::new(new_id(), title.to_string(), date, urgent);
    store.add(event.clone());
    state_repo::save_events(&conn, store.events())?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "event": output::json::event_json(&event)
            })))
            .unwrap()
        );
    } else {
        println!("Added event: {} on {} ({})", event.title, event.date, event.id);
    }
    Ok(0)
}

fn run_list(on: Option<&str>, json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let store = EventStore::new(state_repo::load_events(&conn)?);

    let events: Vec<&CalendarEvent> = match on {
        Some(raw) => store.events_on(parse_date(raw)?),
        None => store.events().iter().collect(),
    };

    if json_output {
        let events: Vec<_> = events.iter().map(|e| output::json::event_json(e)).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({ "events": events })))
                .unwrap()
        );
    } else {
        output::text::print_event_list(&events);
    }
    Ok(0)
}

fn run_rm(reference: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let mut store = EventStore::new(state_repo::load_events(&conn)?);
    let Some(id) = resolve_ref(reference, &event_refs(&store))? else {
        print_no_match("event", reference, json_output);
        return Ok(0);
    };

    store.remove(&id);
    state_repo::save_events(&conn, store.events())?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({ "removed": id }))).unwrap()
        );
    } else {
        println!("Removed event {id}");
    }
    Ok(0)
}
