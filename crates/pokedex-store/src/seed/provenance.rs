//! Provenance event tracking for seed imports
//!
//! Records events in the provenance_events table

use crate::errors::{from_rusqlite, serialization_error, Result};
use rusqlite::{Connection, Transaction};

/// Provenance event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvenanceKind {
    /// Seed import started
    ImportStarted,
    /// Seed import completed
    ImportCompleted,
}

impl ProvenanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvenanceKind::ImportStarted => "seed_import_started",
            ProvenanceKind::ImportCompleted => "seed_import_completed",
        }
    }
}

/// Emit a provenance event within a transaction
pub fn emit_event_tx(
    tx: &Transaction,
    kind: ProvenanceKind,
    correlation_id: &str,
    metadata: &serde_json::Value,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    let metadata_str =
        serde_json::to_string(metadata).map_err(|e| serialization_error("provenance", e))?;

    tx.execute(
        "INSERT INTO provenance_events (kind, correlation_id, timestamp, metadata) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![kind.as_str(), correlation_id, now, metadata_str],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Emit "seed import started" event
pub fn emit_started(tx: &Transaction, seed_digest: &str, record_count: usize) -> Result<()> {
    emit_event_tx(
        tx,
        ProvenanceKind::ImportStarted,
        seed_digest,
        &serde_json::json!({
            "seed_digest": seed_digest,
            "record_count": record_count,
        }),
    )
}

/// Emit "seed import completed" event
pub fn emit_completed(tx: &Transaction, seed_digest: &str, rows_written: usize) -> Result<()> {
    emit_event_tx(
        tx,
        ProvenanceKind::ImportCompleted,
        seed_digest,
        &serde_json::json!({
            "seed_digest": seed_digest,
            "rows_written": rows_written,
        }),
    )
}

/// Event kinds recorded for one seed digest, oldest first
pub fn events_for(conn: &Connection, seed_digest: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT kind FROM provenance_events WHERE correlation_id = ? ORDER BY id")
        .map_err(from_rusqlite)?;

    let kinds = stmt
        .query_map([seed_digest], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;

    Ok(kinds)
}
