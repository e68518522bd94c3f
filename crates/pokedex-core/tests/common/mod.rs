use pokedex_core::errors::{ExError, ExErrorKind, ExResult};
use pokedex_core::filter::CompiledFilter;
use pokedex_core::{MemorySource, Pokemon, PokemonSource, RawParams, StatRanges};

/// Build a record with every stat at 50
#[allow(dead_code)]
pub fn pokemon(id: u32, name: &str, type1: &str, type2: Option<&str>) -> Pokemon {
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
        speed: 50,
    }
}

/// Build a record with explicit stats `[hp, attack, defense, sp_attack, sp_defense, speed]`
#[allow(dead_code)]
pub fn pokemon_with_stats(
    id: u32,
    name: &str,
    type1: &str,
    type2: Option<&str>,
    stats: [u32; 6],
) -> Pokemon {
    let [hp, attack, defense, sp_attack, sp_defense, speed] = stats;
    Pokemon {
        hp,
        attack,
        defense,
        sp_attack,
        sp_defense,
        speed,
        ..pokemon(id, name, type1, type2)
    }
}

/// A small Kanto sample, deliberately inserted out of id order
#[allow(dead_code)]
pub fn sample_dex() -> MemorySource {
    MemorySource::new(vec![
        pokemon_with_stats(6, "Charizard", "fire", Some("flying"), [78, 84, 78, 109, 85, 100]),
        pokemon_with_stats(1, "Bulbasaur", "grass", Some("poison"), [45, 49, 49, 65, 65, 45]),
        pokemon_with_stats(4, "Charmander", "fire", None, [39, 52, 43, 60, 50, 65]),
        pokemon_with_stats(7, "Squirtle", "water", None, [44, 48, 65, 50, 64, 43]),
        pokemon_with_stats(25, "Pikachu", "electric", None, [35, 55, 40, 50, 50, 90]),
        pokemon_with_stats(16, "Pidgey", "normal", Some("flying"), [40, 45, 40, 35, 35, 56]),
        pokemon_with_stats(122, "Mr. Mime", "psychic", Some("fairy"), [40, 45, 65, 100, 120, 90]),
        pokemon_with_stats(130, "Gyarados", "water", Some("flying"), [95, 125, 79, 60, 100, 81]),
        pokemon_with_stats(143, "Snorlax", "normal", None, [160, 110, 65, 65, 110, 30]),
        pokemon_with_stats(150, "Mewtwo", "psychic", None, [106, 110, 90, 154, 90, 130]),
    ])
}

/// Raw request parameters from literal pairs
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Ids of a record slice, in order
#[allow(dead_code)]
pub fn ids(records: &[Pokemon]) -> Vec<u32> {
    records.iter().map(|p| p.id).collect()
}

/// Answers `count` from its records but fails every `fetch`
#[allow(dead_code)]
pub struct FetchFailsSource(pub MemorySource);

impl PokemonSource for FetchFailsSource {
    fn count(&self, filter: &CompiledFilter) -> ExResult<u64> {
        self.0.count(filter)
    }

    fn fetch(&self, _filter: &CompiledFilter, _limit: u64, _offset: u64) -> ExResult<Vec<Pokemon>> {
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("database disk image is malformed"))
    }

    fn get(&self, id: u32) -> ExResult<Option<Pokemon>> {
        self.0.get(id)
    }

    fn stat_ranges(&self) -> ExResult<StatRanges> {
        self.0.stat_ranges()
    }
}
