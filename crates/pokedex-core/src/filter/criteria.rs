use std::collections::{BTreeMap, BTreeSet};

use crate::model::Stat;

/// Inclusive bounds on one stat; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl StatRange {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// `min <= value <= max`, ignoring absent bounds
    pub fn contains(&self, value: i64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Immutable set of optional match constraints.
///
/// Absent fields impose nothing; a default value matches every record.
/// Normalisation (trimming, case folding, dropping empties) happens here so
/// that every way of constructing criteria yields the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    name_substring: Option<String>,
    types: BTreeSet<String>,
    ranges: BTreeMap<Stat, StatRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring on the name; blank input clears it
    pub fn with_name(mut self, name: &str) -> Self {
        let trimmed = name.trim();
        self.name_substring = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Replace the type set; names are trimmed and ASCII-lower-cased and
    /// blank entries dropped
    pub fn with_types<'a, I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.types = types
            .into_iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    pub fn with_min(mut self, stat: Stat, min: i64) -> Self {
        self.ranges.entry(stat).or_default().min = Some(min);
        self
    }

    pub fn with_max(mut self, stat: Stat, max: i64) -> Self {
        self.ranges.entry(stat).or_default().max = Some(max);
        self
    }

    pub fn name_substring(&self) -> Option<&str> {
        self.name_substring.as_deref()
    }

    pub fn types(&self) -> &BTreeSet<String> {
        &self.types
    }

    /// Bounds for `stat`, unbounded when none were set
    pub fn range(&self, stat: Stat) -> StatRange {
        self.ranges.get(&stat).copied().unwrap_or_default()
    }

    /// True when no field constrains anything
    pub fn is_unconstrained(&self) -> bool {
        self.name_substring.is_none()
            && self.types.is_empty()
            && self.ranges.values().all(StatRange::is_unbounded)
    }
}
