//! Browse operations: list with filters, single lookup, stat ranges
//!
//! These are request-scoped and stateless. Each takes the storage
//! collaborator by reference and holds nothing between calls.

use crate::errors::{ExResult, PokedexError, Result};
use crate::filter::{build_criteria, build_page_request, CompiledFilter, FilterCriteria, RawParams};
use crate::model::Pokemon;
use crate::pagination::{PageMeta, PageRequest, PageResult};
use crate::source::{PokemonSource, StatRanges};

/// List one page of Pokemon matching the raw request parameters
///
/// # Errors
///
/// Propagates any storage failure from `count` or `fetch`; no partial page
/// is returned.
pub fn list_pokemon<S>(source: &S, raw: &RawParams) -> ExResult<PageResult<Pokemon>>
where
    S: PokemonSource + ?Sized,
{
    let criteria = build_criteria(raw);
    let request = build_page_request(raw);
    list_with(source, &criteria, request)
}

/// List one page for already-built criteria
///
/// The count and the fetch share one `CompiledFilter`, so `total` is always
/// the size of the filtered set and never of the whole table.
///
/// # Errors
///
/// Propagates any storage failure from `count` or `fetch`.
pub fn list_with<S>(
    source: &S,
    criteria: &FilterCriteria,
    request: PageRequest,
) -> ExResult<PageResult<Pokemon>>
where
    S: PokemonSource + ?Sized,
{
    let filter = CompiledFilter::new(criteria);
    tracing::debug!(
        condition_count = filter.sql().conditions().len(),
        page = request.page(),
        limit = request.limit(),
        "listing pokemon"
    );

    let total = source.count(&filter)?;
    let meta = PageMeta::new(total, &request);

    // Nothing to fetch past the last page; this also keeps an empty total
    // consistent with an empty page if rows appear between the two calls.
    if meta.is_past_end() {
        return Ok(PageResult::new(Vec::new(), meta));
    }

    let items = source.fetch(&filter, request.limit(), request.offset())?;
    Ok(PageResult::new(items, meta))
}

/// Parse a path-style identifier into a positive id
///
/// # Errors
///
/// Returns `InvalidPokemonId` unless `raw` is a positive integer.
pub fn parse_pokemon_id(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PokedexError::InvalidPokemonId {
            raw: raw.to_string(),
        }),
    }
}

/// Look up one Pokemon by raw identifier
///
/// Absence is `Ok(None)`, not an error, so callers can render a
/// "not found" state.
///
/// # Errors
///
/// `InvalidInput` for a malformed id, or the storage failure.
pub fn get_pokemon<S>(source: &S, raw_id: &str) -> ExResult<Option<Pokemon>>
where
    S: PokemonSource + ?Sized,
{
    let id = parse_pokemon_id(raw_id)?;
    source.get(id)
}

/// Observed stat ranges across the table
///
/// # Errors
///
/// Propagates the storage failure.
pub fn stat_ranges<S>(source: &S) -> ExResult<StatRanges>
where
    S: PokemonSource + ?Sized,
{
    source.stat_ranges()
}
