use crate::errors::ExResult;
use crate::filter::CompiledFilter;
use crate::model::Pokemon;
use crate::source::{PokemonSource, StatRanges};

/// In-memory `PokemonSource` evaluating the compiled predicate
///
/// Rows are kept sorted by id so results follow the same order as the SQL
/// backend.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Pokemon>,
}

impl MemorySource {
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Pokemon>,
    {
        let mut records: Vec<Pokemon> = records.into_iter().collect();
        records.sort_by_key(|p| p.id);
        Self { records }
    }

    pub fn records(&self) -> &[Pokemon] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching<'a>(&'a self, filter: &'a CompiledFilter) -> impl Iterator<Item = &'a Pokemon> {
        self.records
            .iter()
            .filter(move |p| filter.predicate().matches(p))
    }
}

impl PokemonSource for MemorySource {
    fn count(&self, filter: &CompiledFilter) -> ExResult<u64> {
        Ok(self.matching(filter).count() as u64)
    }

    fn fetch(&self, filter: &CompiledFilter, limit: u64, offset: u64) -> ExResult<Vec<Pokemon>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .matching(filter)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn get(&self, id: u32) -> ExResult<Option<Pokemon>> {
        Ok(self
            .records
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|idx| self.records[idx].clone()))
    }

    fn stat_ranges(&self) -> ExResult<StatRanges> {
        Ok(StatRanges::from_records(&self.records))
    }
}
