//! Database connection and schema

use anyhow::{Error, Result};
use tokio_rusqlite::Connection;

/// Open the async connection to the events database stored under the
/// given directory.
pub async fn async_db(db_path: &str) -> Result<Connection, Error> {
    let db_file = format!("{}/agenda.sqlite3", db_path);
    let db = Connection::open(db_file).await?;
    Ok(db)
}

/// Create the schema. Safe to run repeatedly.
pub fn initialize_db(conn: &rusqlite::Connection) -> Result<(), Error> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS event (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            recurrence TEXT NOT NULL DEFAULT 'None',
            custom_frequency INTEGER,
            custom_unit TEXT NOT NULL DEFAULT 'Day(s)',
            category_color TEXT NOT NULL DEFAULT '#004D40',
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}
