use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FlowdeckError;
use crate::models::{CalendarEvent, Task};

pub const TASKS_KEY: &str = "tasks";
pub const NOTES_KEY: &str = "notes";
pub const EVENTS_KEY: &str = "events";

fn read_blob(conn: &Connection, key: &str) -> Result<Option<String>, FlowdeckError> {
    let value = conn
        .query_row(
            "SELECT value FROM store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

fn write_blob(conn: &Connection, key: &str, value: &str) -> Result<(), FlowdeckError> {
    conn.execute(
        "INSERT INTO store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Parse a stored collection. A malformed blob is logged and dropped for
/// the session; the loss is scoped to that one key.
fn load_collection<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> Result<Vec<T>, FlowdeckError> {
    match read_blob(conn, key)? {
        None => Ok(Vec::new()),
        Some(blob) => match serde_json::from_str(&blob) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("stored '{key}' blob is unreadable, starting empty: {e}");
                Ok(Vec::new())
            }
        },
    }
}

fn save_collection<T: Serialize>(
    conn: &Connection,
    key: &str,
    items: &[T],
) -> Result<(), FlowdeckError> {
    let blob =
        serde_json::to_string(items).map_err(|e| FlowdeckError::storage(e.to_string()))?;
    write_blob(conn, key, &blob)
}

pub fn load_tasks(conn: &Connection) -> Result<Vec<Task>, FlowdeckError> {
    load_collection(conn, TASKS_KEY)
}

pub fn save_tasks(conn: &Connection, tasks: &[Task]) -> Result<(), FlowdeckError> {
    save_collection(conn, TASKS_KEY, tasks)
}

pub fn load_events(conn: &Connection) -> Result<Vec<CalendarEvent>, FlowdeckError> {
    load_collection(conn, EVENTS_KEY)
}

pub fn save_events(conn: &Connection, events: &[CalendarEvent]) -> Result<(), FlowdeckError> {
    save_collection(conn, EVENTS_KEY, events)
}

/// Notes are an opaque text blob, never parsed; malformed is not a thing.
pub fn load_notes(conn: &Connection) -> Result<String, FlowdeckError> {
    Ok(read_blob(conn, NOTES_KEY)?.unwrap_or_default())
}

pub fn save_notes(conn: &Connection, notes: &str) -> Result<(), FlowdeckError> {
    write_blob(conn, NOTES_KEY, notes)
}
