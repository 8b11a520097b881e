pub mod achievements;
pub mod calendar;
pub mod commands;
pub mod dashboard;
pub mod event;
pub mod note;
pub mod task;
pub mod timer;

pub use commands::*;

use serde_json::json;

use crate::error::FlowdeckError;
use crate::output;

pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Calendar "today" is the user's local date, matching how the calendar
/// and briefing screens read dates.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

/// Resolve a user-supplied reference against `(id, label)` pairs: exact id
/// first, then unique prefix. No match is `None` (callers no-op); several
/// matches are an error naming the candidates.
pub(crate) fn resolve_ref(
    reference: &str,
    items: &[(String, String)],
) -> Result<Option<String>, FlowdeckError> {
    if let Some((id, _)) = items.iter().find(|(id, _)| id == reference) {
        return Ok(Some(id.clone()));
    }
    let matches: Vec<&(String, String)> = items
        .iter()
        .filter(|(id, _)| id.starts_with(reference))
        .collect();
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].0.clone())),
        _ => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|(id, label)| format!("{label} ({id})"))
                .collect();
            Err(FlowdeckError::ambiguous_ref(reference, &candidates))
        }
    }
}

/// Unknown references are a notice, not an error: exit 0, state untouched.
pub(crate) fn print_no_match(kind: &str, reference: &str, json_output: bool) {
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "matched": false,
                "reference": reference
            })))
            .unwrap()
        );
    } else {
        println!("No {kind} matching '{reference}'; nothing to do.");
    }
}

pub(crate) fn report_error(e: &FlowdeckError, json_output: bool) -> i32 {
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::error(e)).unwrap()
        );
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}
