//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for the browse queries.
//! It only reads through the `PokemonSource` it is given.

use pokedex_core::browse;
use pokedex_core::errors::ExResult;
use pokedex_core::filter::RawParams;
use pokedex_core::model::Pokemon;
use pokedex_core::pagination::PageResult;
use pokedex_core::source::{PokemonSource, StatRanges};
use pokedex_core_types::RequestId;

use crate::commands::run_logged;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// One filtered page; parameters are sanitized, never rejected.
    PokemonList { params: RawParams },
    /// A single record by its raw, not yet parsed, id.
    PokemonGet { id: String },
    /// Observed min/max of every stat.
    StatRanges,
}

/// Which query ran, independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    PokemonList,
    PokemonGet,
    StatRanges,
}

impl QueryKind {
    /// Operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            QueryKind::PokemonList => "pokemon_list",
            QueryKind::PokemonGet => "pokemon_get",
            QueryKind::StatRanges => "stat_ranges",
        }
    }
}

impl EngineQuery {
    pub fn kind(&self) -> QueryKind {
        match self {
            EngineQuery::PokemonList { .. } => QueryKind::PokemonList,
            EngineQuery::PokemonGet { .. } => QueryKind::PokemonGet,
            EngineQuery::StatRanges => QueryKind::StatRanges,
        }
    }
}

/// Result of an engine query.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineQueryResult {
    PokemonList(PageResult<Pokemon>),
    PokemonGet(Pokemon),
    /// The id parsed but no record carries it. Not an error.
    PokemonNotFound { pokemon_id: u32 },
    StatRanges(StatRanges),
}

/// Apply a read-only engine query.
///
/// Every call gets a fresh request id, which tags its log events and any
/// error it returns.
///
/// # Errors
///
/// - `InvalidInput` when a `PokemonGet` id is not a positive integer
/// - `Persistence` (or another storage kind) when the source fails
pub fn apply_engine_query(
    query: EngineQuery,
    source: &dyn PokemonSource,
) -> ExResult<EngineQueryResult> {
    let request_id = RequestId::new();
    let op = query.kind().op_name();

    match query {
        EngineQuery::PokemonList { params } => run_logged(op, &request_id, || {
            let page = browse::list_pokemon(source, &params)?;
            tracing::debug!(
                request_id = %request_id,
                page = page.pagination.page,
                total = page.total(),
                item_count = page.items.len(),
                "pokemon page assembled"
            );
            Ok(EngineQueryResult::PokemonList(page))
        }),

        EngineQuery::PokemonGet { id } => run_logged(op, &request_id, || {
            let pokemon_id = browse::parse_pokemon_id(&id)?;
            match source.get(pokemon_id)? {
                Some(pokemon) => Ok(EngineQueryResult::PokemonGet(pokemon)),
                None => Ok(EngineQueryResult::PokemonNotFound { pokemon_id }),
            }
        }),

        EngineQuery::StatRanges => run_logged(op, &request_id, || {
            browse::stat_ranges(source).map(EngineQueryResult::StatRanges)
        }),
    }
}
