use chrono::Datelike;
use serde_json::json;

use crate::calendar::month_grid;
use crate::cli::{report_error, today};
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::output;
use crate::store::EventStore;

pub fn run(month: Option<&str>, json_output: bool) -> i32 {
    match run_inner(month, json_output) {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

fn parse_month(raw: &str) -> Result<(i32, u32), FlowdeckError> {
    raw.split_once('-')
        .and_then(|(y, m)| {
            let year: i32 = y.parse().ok()?;
            let month: u32 = m.parse().ok()?;
            (1..=12).contains(&month).then_some((year, month))
        })
        .ok_or_else(|| FlowdeckError::validation(format!("'{raw}' is not a YYYY-MM month")))
}

fn run_inner(month: Option<&str>, json_output: bool) -> Result<i32, FlowdeckError> {
    let today = today();
    let (year, month) = match month {
        Some(raw) => parse_month(raw)?,
        None => (today.year(), today.month()),
    };
    let grid = month_grid(year, month)
        .ok_or_else(|| FlowdeckError::validation(format!("no such month: {year}-{month:02}")))?;

    let conn = connection::open_store()?;
    let store = EventStore::new(state_repo::load_events(&conn)?);

    if json_output {
        let days: Vec<_> = grid
            .iter()
            .map(|day| {
                let events: Vec<_> = store
                    .events_on(*day)
                    .iter()
                    .map(|e| output::json::event_json(e))
                    .collect();
                json!({
                    "date": day.to_string(),
                    "in_month": day.month() == month,
                    "events": events
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "year": year,
                "month": month,
                "days": days
            })))
            .unwrap()
        );
    } else {
        output::text::print_calendar(year, month, &grid, &store, today);
    }
    Ok(0)
}
