use rusqlite::Connection;

use crate::error::FlowdeckError;

/// One key/value table; each key holds a whole serialized collection and
/// is rewritten in full on change. Keys never participate in a shared
/// transaction.
pub fn run_migrations(conn: &Connection) -> Result<(), FlowdeckError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
