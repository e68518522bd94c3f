use serde::{Deserialize, Serialize};

use super::stat::Stat;
use crate::errors::{PokedexError, Result};

/// The closed set of type names a record may carry, lower-case.
pub const POKEMON_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Upper bound of every stat column.
pub const MAX_STAT_VALUE: u32 = 255;

/// Whether `name` is one of the 18 Pokemon types (ASCII case-insensitive)
pub fn is_known_type(name: &str) -> bool {
    POKEMON_TYPES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
}

/// Pokemon - one row of the `pokemon` table
///
/// Records are read-only for everything in this workspace except the seed
/// importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number, positive and unique
    pub id: u32,

    pub name: String,

    /// Primary type
    pub type1: String,

    /// Secondary type, absent for single-typed Pokemon
    #[serde(default)]
    pub type2: Option<String>,

    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl Pokemon {
    /// Read one stat by its enum tag
    pub fn stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
        }
    }

    /// Both type slots, the second one only when present
    pub fn types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.type1.as_str()).chain(self.type2.as_deref())
    }

    /// Check the record against the table's domain rules
    ///
    /// # Errors
    ///
    /// - `InvalidPokemonId` when `id` is 0
    /// - `EmptyName` when the name is blank
    /// - `UnknownType` when either type is outside `POKEMON_TYPES`
    /// - `StatOutOfRange` when a stat exceeds `MAX_STAT_VALUE`
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(PokedexError::InvalidPokemonId {
                raw: self.id.to_string(),
            });
        }

        if self.name.trim().is_empty() {
            return Err(PokedexError::EmptyName {
                pokemon_id: self.id,
            });
        }

        for type_name in self.types() {
            if !is_known_type(type_name) {
                return Err(PokedexError::UnknownType {
                    pokemon_id: self.id,
                    type_name: type_name.to_string(),
                });
            }
        }

        for stat in Stat::ALL {
            let value = self.stat(stat);
            if value > MAX_STAT_VALUE {
                return Err(PokedexError::StatOutOfRange {
                    pokemon_id: self.id,
                    stat: stat.column().to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Pokemon {
        Pokemon {
            id: 1,
            name: "Bulbasaur".to_string(),
            type1: "grass".to_string(),
            type2: Some("poison".to_string()),
            hp: 45,
            attack: 49,
            defense: 49,
            sp_attack: 65,
            sp_defense: 65,
            speed: 45,
        }
    }

    #[test]
    fn test_known_types_are_case_insensitive() {
        assert!(is_known_type("fire"));
        assert!(is_known_type("Fire"));
        assert!(!is_known_type("shadow"));
        assert!(!is_known_type(""));
    }

    #[test]
    fn test_types_iterates_present_slots_only() {
        let mut p = bulbasaur();
        assert_eq!(p.types().collect::<Vec<_>>(), vec!["grass", "poison"]);

        p.type2 = None;
        assert_eq!(p.types().collect::<Vec<_>>(), vec!["grass"]);
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(bulbasaur().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_type2() {
        let mut p = bulbasaur();
        p.type2 = Some("cosmic".to_string());

        assert_eq!(
            p.validate(),
            Err(PokedexError::UnknownType {
                pokemon_id: 1,
                type_name: "cosmic".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_stat_above_255() {
        let mut p = bulbasaur();
        p.sp_defense = 256;

        match p.validate() {
            Err(PokedexError::StatOutOfRange { stat, value, .. }) => {
                assert_eq!(stat, "sp_defense");
                assert_eq!(value, 256);
            }
            other => panic!("expected StatOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_name_and_zero_id() {
        let mut p = bulbasaur();
        p.name = "  ".to_string();
        assert!(matches!(p.validate(), Err(PokedexError::EmptyName { .. })));

        let mut p = bulbasaur();
        p.id = 0;
        assert!(matches!(
            p.validate(),
            Err(PokedexError::InvalidPokemonId { .. })
        ));
    }

    #[test]
    fn test_missing_type2_deserializes_as_none() {
        let json = r#"{"id":4,"name":"Charmander","type1":"fire","hp":39,"attack":52,
            "defense":43,"sp_attack":60,"sp_defense":50,"speed":65}"#;
        let p: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(p.type2, None);
    }
}
