use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::FlowdeckError;

use super::migrations;

/// Resolve the data directory: `$FLOWDECK_DATA_DIR` wins, otherwise the
/// per-user data dir for this application.
pub fn data_dir() -> Result<PathBuf, FlowdeckError> {
    if let Ok(dir) = env::var("FLOWDECK_DATA_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    ProjectDirs::from("com", "flowdeck", "flowdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FlowdeckError::storage("could not determine a data directory"))
}

pub fn db_path() -> Result<PathBuf, FlowdeckError> {
    Ok(data_dir()?.join("flowdeck.db"))
}

/// Open the store, creating directory, database and schema on first use.
/// Unlike a missing blob, an unopenable database is a hard error.
pub fn open_store() -> Result<Connection, FlowdeckError> {
    let path = db_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FlowdeckError::storage(e.to_string()))?;
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), FlowdeckError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
