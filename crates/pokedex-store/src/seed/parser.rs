//! Seed parser with validation
//!
//! Parses YAML and validates schema version, id uniqueness, and every
//! record against the table's domain rules

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use pokedex_core::errors::{ExError, PokedexError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let mut seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    normalize_seed(&mut seed);
    validate_seed(&seed)?;

    Ok(seed)
}

/// Trim names and lower-case type names so stored rows match filter input
fn normalize_seed(seed: &mut SeedV0) {
    for pokemon in &mut seed.pokemon {
        pokemon.name = pokemon.name.trim().to_string();
        pokemon.type1 = pokemon.type1.trim().to_ascii_lowercase();
        pokemon.type2 = pokemon
            .type2
            .take()
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty());
    }
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut ids = HashSet::new();
    for pokemon in &seed.pokemon {
        pokemon.validate().map_err(seed_record_error)?;

        if !ids.insert(pokemon.id) {
            return Err(seed_record_error(PokedexError::DuplicateId {
                pokemon_id: pokemon.id,
            }));
        }
    }

    Ok(())
}

fn seed_record_error(err: PokedexError) -> ExError {
    ExError::from(err).with_op("seed_parse")
}
