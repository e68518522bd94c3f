//! Engine-level action commands for I/O operations.

use std::path::PathBuf;

use pokedex_core::errors::ExResult;
use pokedex_core_types::RequestId;
use pokedex_store::seed::{import_seed, ImportSummary};
use rusqlite::Connection;

use crate::commands::run_logged;

/// Engine-level commands that write to the database.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Validate a seed file and upsert its records.
    SeedImport { path: PathBuf },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    SeedImported(ImportSummary),
}

/// Apply an engine command.
///
/// # Errors
///
/// Seed validation errors (op `seed_parse`) or storage errors; nothing is
/// written when either occurs.
pub fn apply_engine_command(
    cmd: EngineCommand,
    conn: &mut Connection,
) -> ExResult<EngineCommandResult> {
    let request_id = RequestId::new();

    match cmd {
        EngineCommand::SeedImport { path } => run_logged("seed_import", &request_id, || {
            import_seed(&path, conn).map(EngineCommandResult::SeedImported)
        }),
    }
}
