//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use crate::errors::{serialization_error, Result};
use crate::seed::format_v0::SeedV0;
use pokedex_core::model::Pokemon;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
#[derive(Debug, Serialize)]
struct CanonicalSeed<'a> {
    schema_version: u32,
    pokemon: Vec<&'a Pokemon>,
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation.
/// Record order and YAML layout do not affect the result.
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let canonical = canonicalize_seed(seed);

    let json = serde_json::to_string(&canonical)
        .map_err(|e| serialization_error("seed_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Sort records by id
fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed<'_> {
    let mut pokemon: Vec<&Pokemon> = seed.pokemon.iter().collect();
    pokemon.sort_by_key(|p| p.id);

    CanonicalSeed {
        schema_version: seed.schema_version,
        pokemon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::parser::parse_seed_str;

    const SEED: &str = r#"
schema_version: 0
pokemon:
  - { id: 1, name: Bulbasaur, type1: grass, type2: poison, hp: 45, attack: 49, defense: 49, sp_attack: 65, sp_defense: 65, speed: 45 }
  - { id: 4, name: Charmander, type1: fire, hp: 39, attack: 52, defense: 43, sp_attack: 60, sp_defense: 50, speed: 65 }
"#;

    #[test]
    fn test_seed_digest_stable() {
        let digest1 = compute_seed_digest(&parse_seed_str(SEED).unwrap()).unwrap();
        let digest2 = compute_seed_digest(&parse_seed_str(SEED).unwrap()).unwrap();

        assert_eq!(digest1, digest2);
        assert_eq!(digest1.len(), 64); // SHA256 is 64 hex chars
    }

    #[test]
    fn test_seed_digest_format_independent() {
        let block_style = r#"
schema_version: 0
pokemon:
    - id: 4
      name: Charmander
      type1: fire
      hp: 39
      attack: 52
      defense: 43
      sp_attack: 60
      sp_defense: 50
      speed: 65
    - id: 1
      name: Bulbasaur
      type1: Grass
      type2: poison
      hp: 45
      attack: 49
      defense: 49
      sp_attack: 65
      sp_defense: 65
      speed: 45
"#;

        let digest1 = compute_seed_digest(&parse_seed_str(SEED).unwrap()).unwrap();
        let digest2 = compute_seed_digest(&parse_seed_str(block_style).unwrap()).unwrap();

        assert_eq!(
            digest1, digest2,
            "Digest should not depend on layout, record order or type case"
        );
    }

    #[test]
    fn test_seed_digest_changes_with_content() {
        let changed = SEED.replace("speed: 65", "speed: 66");

        let digest1 = compute_seed_digest(&parse_seed_str(SEED).unwrap()).unwrap();
        let digest2 = compute_seed_digest(&parse_seed_str(&changed).unwrap()).unwrap();

        assert_ne!(digest1, digest2);
    }
}
