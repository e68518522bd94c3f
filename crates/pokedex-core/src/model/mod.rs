pub mod pokemon;
pub mod stat;

pub use pokemon::{is_known_type, Pokemon, MAX_STAT_VALUE, POKEMON_TYPES};
pub use stat::Stat;
