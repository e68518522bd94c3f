//! Get command
//!
//! Usage: pokedex get <ID> [--json]

use clap::Args;
use pokedex_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use pokedex_store::PoolSource;
use std::path::Path;

use super::output;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// National dex number
    pub id: String,

    /// Print the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute get command
pub fn execute(args: GetArgs, db: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = PoolSource::new(super::open_pool(db)?);
    let query = EngineQuery::PokemonGet { id: args.id };
    let kind = query.kind();

    let result = apply_engine_query(query, &source);
    output::emit(kind, result, args.json, |value| {
        if let EngineQueryResult::PokemonGet(pokemon) = value {
            output::print_detail(pokemon);
        }
    })
}
