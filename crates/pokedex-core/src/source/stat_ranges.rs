use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::{Pokemon, Stat};

/// Smallest and largest value seen for one stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedRange {
    pub min: u32,
    pub max: u32,
}

/// Per-stat observed ranges over a whole table
///
/// Empty when the table is empty. Serializes flat, the way filter sliders
/// consume it: `{"minHp": 1, "maxHp": 255, "minAttack": ...}`, with `null`
/// for stats that have no observations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatRanges {
    ranges: BTreeMap<Stat, ObservedRange>,
}

impl StatRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stat: Stat, range: ObservedRange) {
        self.ranges.insert(stat, range);
    }

    pub fn get(&self, stat: Stat) -> Option<ObservedRange> {
        self.ranges.get(&stat).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Fold a record set into observed ranges
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Pokemon>,
    {
        let mut ranges = Self::new();
        for pokemon in records {
            for stat in Stat::ALL {
                let value = pokemon.stat(stat);
                ranges
                    .ranges
                    .entry(stat)
                    .and_modify(|r| {
                        r.min = r.min.min(value);
                        r.max = r.max.max(value);
                    })
                    .or_insert(ObservedRange {
                        min: value,
                        max: value,
                    });
            }
        }
        ranges
    }
}

impl Serialize for StatRanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stat::ALL.len() * 2))?;
        for stat in Stat::ALL {
            let range = self.get(stat);
            map.serialize_entry(&stat.min_key(), &range.map(|r| r.min))?;
            map.serialize_entry(&stat.max_key(), &range.map(|r| r.max))?;
        }
        map.end()
    }
}
