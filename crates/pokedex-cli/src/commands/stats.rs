//! Stats command
//!
//! Usage: pokedex stats [--json]

use clap::Args;
use pokedex_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use pokedex_store::PoolSource;
use std::path::Path;

use super::output;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(args: StatsArgs, db: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = PoolSource::new(super::open_pool(db)?);
    let query = EngineQuery::StatRanges;
    let kind = query.kind();

    let result = apply_engine_query(query, &source);
    output::emit(kind, result, args.json, |value| {
        if let EngineQueryResult::StatRanges(ranges) = value {
            output::print_ranges(ranges);
        }
    })
}
