//! JSON envelopes for query outcomes.
//!
//! Success bodies carry `data` (plus `pagination` for lists); failures carry
//! a single user-facing `error` string. Storage detail never reaches the
//! body: it is logged by `apply_engine_query` and replaced here by a fixed
//! message.

use pokedex_core::errors::{ExErrorKind, ExResult};
use serde::Serialize;

use crate::commands::engine_query::{EngineQueryResult, QueryKind};

pub const INVALID_ID_ERROR: &str = "Invalid pokemon ID";
pub const NOT_FOUND_ERROR: &str = "Pokemon not found";
pub const FETCH_POKEMON_ERROR: &str = "Failed to fetch pokemon";
pub const FETCH_STAT_RANGES_ERROR: &str = "Failed to fetch stat ranges";

/// `{ "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// A rendered outcome: an HTTP-style status plus the JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl QueryResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }),
        }
    }
}

fn failure_message(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::StatRanges => FETCH_STAT_RANGES_ERROR,
        QueryKind::PokemonList | QueryKind::PokemonGet => FETCH_POKEMON_ERROR,
    }
}

fn data_response<T: Serialize>(kind: QueryKind, value: &T) -> QueryResponse {
    match serde_json::to_value(value) {
        Ok(body) => QueryResponse { status: 200, body },
        Err(e) => {
            tracing::error!(op = kind.op_name(), error = %e, "failed to serialize response");
            QueryResponse::error(500, failure_message(kind))
        }
    }
}

/// Render the outcome of `apply_engine_query`
pub fn render_response(kind: QueryKind, result: &ExResult<EngineQueryResult>) -> QueryResponse {
    match result {
        Ok(EngineQueryResult::PokemonList(page)) => data_response(kind, page),
        Ok(EngineQueryResult::PokemonGet(pokemon)) => {
            data_response(kind, &DataEnvelope { data: pokemon })
        }
        Ok(EngineQueryResult::PokemonNotFound { .. }) => {
            QueryResponse::error(404, NOT_FOUND_ERROR)
        }
        Ok(EngineQueryResult::StatRanges(ranges)) => {
            data_response(kind, &DataEnvelope { data: ranges })
        }
        Err(e) if e.kind() == ExErrorKind::InvalidInput => {
            QueryResponse::error(400, INVALID_ID_ERROR)
        }
        Err(_) => QueryResponse::error(500, failure_message(kind)),
    }
}
