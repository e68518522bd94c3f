//! Pokedex Engine - Orchestration layer
//!
//! Runs browse queries and seed imports against the store with canonical
//! start/end logging, and renders query outcomes as JSON envelopes.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult, QueryKind};
pub use commands::response::{render_response, QueryResponse};
