//! Seed importer orchestration
//!
//! Upserts every record of a validated seed inside one transaction

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use crate::seed::{compute_seed_digest, parse_seed_file, provenance, SeedV0};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// Outcome of one import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// SHA256 of the canonical seed
    pub seed_digest: String,

    /// Records inserted or replaced
    pub rows_written: usize,
}

/// Import a seed file into the database
///
/// This is the main entry point for seed import. It:
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest
/// 3. Upserts every record within a transaction
/// 4. Emits provenance events in the same transaction
///
/// Nothing is written when any step fails.
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<ImportSummary> {
    let seed = parse_seed_file(path)?;
    import_parsed_seed(&seed, conn)
}

/// Import an already-validated seed
pub fn import_parsed_seed(seed: &SeedV0, conn: &mut Connection) -> Result<ImportSummary> {
    let seed_digest = compute_seed_digest(seed)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    provenance::emit_started(&tx, &seed_digest, seed.pokemon.len())?;

    let mut rows_written = 0;
    for pokemon in &seed.pokemon {
        SqliteRepo::upsert_pokemon_tx(&tx, pokemon)?;
        rows_written += 1;
    }

    provenance::emit_completed(&tx, &seed_digest, rows_written)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        seed_digest = %seed_digest,
        rows_written,
        "seed imported"
    );

    Ok(ImportSummary {
        seed_digest,
        rows_written,
    })
}
