//! Database connection management
//!
//! Opens and configures SQLite connections and bootstraps the fixed schema.
//! The schema never changes shape, so there is no migration history: every
//! statement is idempotent and runs on each open.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Fixed schema for the browse table and seed provenance
pub const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS pokemon (
    id INTEGER PRIMARY KEY CHECK (id > 0),
    name TEXT NOT NULL,
    type1 TEXT NOT NULL,
    type2 TEXT,
    hp INTEGER NOT NULL CHECK (hp BETWEEN 0 AND 255),
    attack INTEGER NOT NULL CHECK (attack BETWEEN 0 AND 255),
    defense INTEGER NOT NULL CHECK (defense BETWEEN 0 AND 255),
    sp_attack INTEGER NOT NULL CHECK (sp_attack BETWEEN 0 AND 255),
    sp_defense INTEGER NOT NULL CHECK (sp_defense BETWEEN 0 AND 255),
    speed INTEGER NOT NULL CHECK (speed BETWEEN 0 AND 255)
);

CREATE INDEX IF NOT EXISTS idx_pokemon_name ON pokemon(name);
CREATE INDEX IF NOT EXISTS idx_pokemon_type1 ON pokemon(type1);
CREATE INDEX IF NOT EXISTS idx_pokemon_type2 ON pokemon(type2);

CREATE TABLE IF NOT EXISTS provenance_events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    kind TEXT NOT NULL,
    correlation_id TEXT NOT NULL,
    timestamp INTEGER NOT NULL,
    metadata TEXT NOT NULL DEFAULT '{}'
);

CREATE INDEX IF NOT EXISTS idx_provenance_correlation ON provenance_events(correlation_id);
";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open, configure and bootstrap a database file in one step
pub fn open_configured<P: AsRef<Path>>(path: P, busy_timeout_ms: u64) -> Result<Connection> {
    let conn = open(path)?;
    configure(&conn, busy_timeout_ms)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Configure a connection with optimal settings
pub fn configure(conn: &Connection, busy_timeout_ms: u64) -> Result<()> {
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms))
        .map_err(from_rusqlite)?;

    // WAL lets pooled readers proceed while the seed importer writes.
    // The pragma returns a row, so it cannot go through execute().
    conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Create the tables and indexes if they do not exist yet
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(from_rusqlite)
}
