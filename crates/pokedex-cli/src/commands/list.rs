//! List command
//!
//! Usage: pokedex list [--name <TEXT>] [--types <T1,T2>] [--min-hp <N>] ... [--page <N>] [--limit <N>] [--json]
//!
//! Values are passed through as raw request parameters, so unusable ones
//! are ignored the same way a malformed query string would be.

use clap::Args;
use pokedex_core::filter::builder::{PARAM_LIMIT, PARAM_NAME, PARAM_PAGE, PARAM_TYPES};
use pokedex_core::{RawParams, Stat};
use pokedex_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use pokedex_store::PoolSource;
use std::path::Path;

use super::output;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name substring
    #[arg(long)]
    pub name: Option<String>,

    /// Comma-separated types; a Pokemon matches if either of its types is listed
    #[arg(long)]
    pub types: Option<String>,

    #[arg(long)]
    pub min_hp: Option<String>,
    #[arg(long)]
    pub max_hp: Option<String>,
    #[arg(long)]
    pub min_attack: Option<String>,
    #[arg(long)]
    pub max_attack: Option<String>,
    #[arg(long)]
    pub min_defense: Option<String>,
    #[arg(long)]
    pub max_defense: Option<String>,
    #[arg(long)]
    pub min_sp_attack: Option<String>,
    #[arg(long)]
    pub max_sp_attack: Option<String>,
    #[arg(long)]
    pub min_sp_defense: Option<String>,
    #[arg(long)]
    pub max_sp_defense: Option<String>,
    #[arg(long)]
    pub min_speed: Option<String>,
    #[arg(long)]
    pub max_speed: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<String>,

    /// Page size, at most 100
    #[arg(long)]
    pub limit: Option<String>,

    /// Print the JSON envelope instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn bounds(&self, stat: Stat) -> (&Option<String>, &Option<String>) {
        match stat {
            Stat::Hp => (&self.min_hp, &self.max_hp),
            Stat::Attack => (&self.min_attack, &self.max_attack),
            Stat::Defense => (&self.min_defense, &self.max_defense),
            Stat::SpAttack => (&self.min_sp_attack, &self.max_sp_attack),
            Stat::SpDefense => (&self.min_sp_defense, &self.max_sp_defense),
            Stat::Speed => (&self.min_speed, &self.max_speed),
        }
    }

    /// The flags as request parameters
    pub fn to_params(&self) -> RawParams {
        let mut params = RawParams::new();
        let mut put = |key: String, value: &Option<String>| {
            if let Some(value) = value {
                params.insert(key, value.clone());
            }
        };

        put(PARAM_NAME.to_string(), &self.name);
        put(PARAM_TYPES.to_string(), &self.types);
        put(PARAM_PAGE.to_string(), &self.page);
        put(PARAM_LIMIT.to_string(), &self.limit);
        for stat in Stat::ALL {
            let (min, max) = self.bounds(stat);
            put(stat.min_key(), min);
            put(stat.max_key(), max);
        }

        params
    }
}

/// Execute list command
pub fn execute(args: ListArgs, db: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = PoolSource::new(super::open_pool(db)?);
    let query = EngineQuery::PokemonList {
        params: args.to_params(),
    };
    let kind = query.kind();

    let result = apply_engine_query(query, &source);
    output::emit(kind, result, args.json, |value| {
        if let EngineQueryResult::PokemonList(page) = value {
            output::print_table(&page.items);
            println!(
                "Page {} of {} ({} total)",
                page.pagination.page,
                page.total_pages(),
                page.total()
            );
        }
    })
}
