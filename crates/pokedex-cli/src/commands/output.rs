//! Plain-text and JSON rendering for query results

use pokedex_core::errors::ExResult;
use pokedex_core::{Pokemon, Stat, StatRanges};
use pokedex_engine::{render_response, EngineQueryResult, QueryKind};

/// Print a query outcome and turn failures into a CLI error
///
/// With `json`, the envelope goes to stdout for every outcome. Otherwise
/// successes are printed by `plain` and failures only surface as the
/// returned error.
pub fn emit<F>(
    kind: QueryKind,
    result: ExResult<EngineQueryResult>,
    json: bool,
    plain: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&EngineQueryResult),
{
    let response = render_response(kind, &result);

    if json {
        println!("{}", serde_json::to_string_pretty(&response.body)?);
    }

    if !response.is_success() {
        let message = response.body["error"]
            .as_str()
            .unwrap_or("request failed")
            .to_string();
        return Err(message.into());
    }

    if !json {
        if let Ok(value) = &result {
            plain(value);
        }
    }

    Ok(())
}

fn type_label(pokemon: &Pokemon) -> String {
    pokemon.types().collect::<Vec<_>>().join("/")
}

pub fn print_table(records: &[Pokemon]) {
    println!(
        "{:>5}  {:<14} {:<18} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}",
        "#", "Name", "Type", "HP", "Atk", "Def", "SpA", "SpD", "Spe"
    );
    for p in records {
        println!(
            "{:>5}  {:<14} {:<18} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}",
            p.id,
            p.name,
            type_label(p),
            p.hp,
            p.attack,
            p.defense,
            p.sp_attack,
            p.sp_defense,
            p.speed
        );
    }
}

pub fn print_detail(pokemon: &Pokemon) {
    println!("#{} {}", pokemon.id, pokemon.name);
    println!("Type: {}", type_label(pokemon));
    for stat in Stat::ALL {
        println!("{:<11} {:>3}", format!("{}:", stat), pokemon.stat(stat));
    }
}

pub fn print_ranges(ranges: &StatRanges) {
    if ranges.is_empty() {
        println!("No Pokemon in the database");
        return;
    }
    for stat in Stat::ALL {
        if let Some(range) = ranges.get(stat) {
            println!("{:<11} {:>3} - {:>3}", format!("{}:", stat), range.min, range.max);
        }
    }
}
