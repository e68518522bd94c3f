use pokedex_core::errors::{ExError, ExErrorKind, ExResult};
use pokedex_core::filter::{CompiledFilter, RawParams};
use pokedex_core::{MemorySource, Pokemon, PokemonSource, StatRanges};
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn pokemon(id: u32, name: &str, type1: &str, type2: Option<&str>, speed: u32) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        type1: type1.to_string(),
        type2: type2.map(str::to_string),
        hp: 50,
        attack: 50,
        defense: 50,
        sp_attack: 50,
        sp_defense: 50,
        speed,
    }
}

#[allow(dead_code)]
pub fn sample_source() -> MemorySource {
    MemorySource::new(vec![
        pokemon(1, "Bulbasaur", "grass", Some("poison"), 45),
        pokemon(4, "Charmander", "fire", None, 65),
        pokemon(6, "Charizard", "fire", Some("flying"), 100),
        pokemon(7, "Squirtle", "water", None, 43),
        pokemon(25, "Pikachu", "electric", None, 90),
    ])
}

#[allow(dead_code)]
fn storage_failure() -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message("unable to open database file")
}

/// A source whose every call fails the way a dropped database would
#[allow(dead_code)]
pub struct FailingSource;

impl PokemonSource for FailingSource {
    fn count(&self, _filter: &CompiledFilter) -> ExResult<u64> {
        Err(storage_failure())
    }

    fn fetch(&self, _filter: &CompiledFilter, _limit: u64, _offset: u64) -> ExResult<Vec<Pokemon>> {
        Err(storage_failure())
    }

    fn get(&self, _id: u32) -> ExResult<Option<Pokemon>> {
        Err(storage_failure())
    }

    fn stat_ranges(&self) -> ExResult<StatRanges> {
        Err(storage_failure())
    }
}

/// Counts from the sample records, then loses the database before the fetch
#[allow(dead_code)]
pub struct FetchFailsSource(pub MemorySource);

impl PokemonSource for FetchFailsSource {
    fn count(&self, filter: &CompiledFilter) -> ExResult<u64> {
        self.0.count(filter)
    }

    fn fetch(&self, _filter: &CompiledFilter, _limit: u64, _offset: u64) -> ExResult<Vec<Pokemon>> {
        Err(storage_failure())
    }

    fn get(&self, id: u32) -> ExResult<Option<Pokemon>> {
        self.0.get(id)
    }

    fn stat_ranges(&self) -> ExResult<StatRanges> {
        self.0.stat_ranges()
    }
}

#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write a two-record seed file into `dir`
#[allow(dead_code)]
pub fn write_seed(dir: &Path) -> PathBuf {
    let path = dir.join("seed.yaml");
    std::fs::write(
        &path,
        r#"schema_version: 0
pokemon:
  - { id: 1, name: Bulbasaur, type1: grass, type2: poison, hp: 45, attack: 49, defense: 49, sp_attack: 65, sp_defense: 65, speed: 45 }
  - { id: 25, name: Pikachu, type1: electric, hp: 35, attack: 55, defense: 40, sp_attack: 50, sp_defense: 50, speed: 90 }
"#,
    )
    .unwrap();
    path
}
