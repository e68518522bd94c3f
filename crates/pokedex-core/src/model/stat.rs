use serde::{Deserialize, Serialize};

/// One of the six numeric stat columns.
///
/// Variant order is the order in which stat conditions are compiled, so it
/// fixes parameter positions in the generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    Speed,
    SpAttack,
    SpDefense,
}

impl Stat {
    /// All stats in compile order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::Speed,
        Stat::SpAttack,
        Stat::SpDefense,
    ];

    /// Column name in the `pokemon` table
    pub fn column(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
            Stat::SpAttack => "sp_attack",
            Stat::SpDefense => "sp_defense",
        }
    }

    /// Suffix used in request keys (`minHp`, `maxSpAttack`, ...)
    pub fn param_suffix(self) -> &'static str {
        match self {
            Stat::Hp => "Hp",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::Speed => "Speed",
            Stat::SpAttack => "SpAttack",
            Stat::SpDefense => "SpDefense",
        }
    }

    pub fn min_key(self) -> String {
        format!("min{}", self.param_suffix())
    }

    pub fn max_key(self) -> String {
        format!("max{}", self.param_suffix())
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}
