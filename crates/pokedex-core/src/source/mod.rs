//! The storage collaborator consumed by the browse operations
//!
//! Implementations own their connections; the browse layer only sees this
//! trait. `MemorySource` is the in-memory implementation; the SQLite one
//! lives in `pokedex-store`.

pub mod memory;
pub mod stat_ranges;

pub use memory::MemorySource;
pub use stat_ranges::{ObservedRange, StatRanges};

use crate::errors::ExResult;
use crate::filter::CompiledFilter;
use crate::model::Pokemon;

/// Read-only access to the `pokemon` table
///
/// Every list-style method orders rows by `id` ascending so that pages are
/// stable across calls.
pub trait PokemonSource {
    /// Number of rows accepted by `filter`
    fn count(&self, filter: &CompiledFilter) -> ExResult<u64>;

    /// At most `limit` rows accepted by `filter`, skipping the first `offset`
    fn fetch(&self, filter: &CompiledFilter, limit: u64, offset: u64) -> ExResult<Vec<Pokemon>>;

    /// Single record by id; `Ok(None)` when absent
    fn get(&self, id: u32) -> ExResult<Option<Pokemon>>;

    /// Observed min/max of every stat across the whole table
    fn stat_ranges(&self) -> ExResult<StatRanges>;
}

impl<S: PokemonSource + ?Sized> PokemonSource for &S {
    fn count(&self, filter: &CompiledFilter) -> ExResult<u64> {
        (**self).count(filter)
    }

    fn fetch(&self, filter: &CompiledFilter, limit: u64, offset: u64) -> ExResult<Vec<Pokemon>> {
        (**self).fetch(filter, limit, offset)
    }

    fn get(&self, id: u32) -> ExResult<Option<Pokemon>> {
        (**self).get(id)
    }

    fn stat_ranges(&self) -> ExResult<StatRanges> {
        (**self).stat_ranges()
    }
}
