//! Request parameters → `FilterCriteria` / `PageRequest`
//!
//! Building never fails. A value that cannot be used is treated as if the
//! key were absent: an unparseable stat bound drops that bound, a bad page
//! or limit falls back to its default. Dropped values are logged at debug
//! level only.

use std::collections::BTreeMap;

use crate::filter::criteria::FilterCriteria;
use crate::model::Stat;
use crate::pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_PAGE_LIMIT};

/// String-keyed request parameters, as decoded from a query string
pub type RawParams = BTreeMap<String, String>;

pub const PARAM_NAME: &str = "name";
pub const PARAM_TYPES: &str = "types";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_LIMIT: &str = "limit";

/// Build filter criteria from raw parameters
///
/// - `name`: trimmed; blank means no constraint
/// - `types`: comma-separated, empty segments discarded
/// - `min<Stat>` / `max<Stat>`: integers; anything else is ignored
pub fn build_criteria(raw: &RawParams) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();

    if let Some(name) = raw.get(PARAM_NAME) {
        criteria = criteria.with_name(name);
    }

    if let Some(types) = raw.get(PARAM_TYPES) {
        criteria = criteria.with_types(types.split(','));
    }

    for stat in Stat::ALL {
        let min_key = stat.min_key();
        if let Some(min) = parse_bound(raw, &min_key) {
            criteria = criteria.with_min(stat, min);
        }

        let max_key = stat.max_key();
        if let Some(max) = parse_bound(raw, &max_key) {
            criteria = criteria.with_max(stat, max);
        }
    }

    criteria
}

/// Build the page request from `page` and `limit`
///
/// Defaults are 1 and 20. Non-positive or unparseable values fall back to
/// the default; `limit` is clamped to `MAX_PAGE_LIMIT`.
pub fn build_page_request(raw: &RawParams) -> PageRequest {
    let page = parse_positive(raw, PARAM_PAGE).unwrap_or(DEFAULT_PAGE);
    let limit = parse_positive(raw, PARAM_LIMIT)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_PAGE_LIMIT);

    PageRequest::new(page, limit)
}

fn parse_bound(raw: &RawParams, key: &str) -> Option<i64> {
    let value = raw.get(key)?;
    match value.trim().parse::<i64>() {
        Ok(bound) => Some(bound),
        Err(_) => {
            tracing::debug!(param = key, value = value.as_str(), "ignoring unparseable stat bound");
            None
        }
    }
}

fn parse_positive(raw: &RawParams, key: &str) -> Option<u64> {
    let value = raw.get(key)?;
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Some(n as u64),
        _ => {
            tracing::debug!(param = key, value = value.as_str(), "falling back to default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::criteria::StatRange;

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_params_build_unconstrained_criteria() {
        assert!(build_criteria(&RawParams::new()).is_unconstrained());
    }

    #[test]
    fn test_name_is_trimmed_and_blank_is_absent() {
        let c = build_criteria(&params(&[("name", "  pika ")]));
        assert_eq!(c.name_substring(), Some("pika"));

        let c = build_criteria(&params(&[("name", "   ")]));
        assert_eq!(c.name_substring(), None);
    }

    #[test]
    fn test_types_split_on_commas_discarding_empty_segments() {
        let c = build_criteria(&params(&[("types", "fire,,flying,")]));
        let types: Vec<&str> = c.types().iter().map(String::as_str).collect();
        assert_eq!(types, vec!["fire", "flying"]);

        let c = build_criteria(&params(&[("types", ",,")]));
        assert!(c.types().is_empty());
    }

    #[test]
    fn test_unparseable_bound_is_dropped_not_an_error() {
        let c = build_criteria(&params(&[
            ("minHp", "abc"),
            ("maxHp", "120"),
            ("minAttack", "12.5"),
            ("maxSpeed", " 90 "),
        ]));

        assert_eq!(c.range(Stat::Hp), StatRange { min: None, max: Some(120) });
        assert!(c.range(Stat::Attack).is_unbounded());
        assert_eq!(c.range(Stat::Speed).max, Some(90));
    }

    #[test]
    fn test_special_stat_keys_are_recognised() {
        let c = build_criteria(&params(&[("minSpAttack", "100"), ("maxSpDefense", "80")]));
        assert_eq!(c.range(Stat::SpAttack).min, Some(100));
        assert_eq!(c.range(Stat::SpDefense).max, Some(80));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert!(build_criteria(&params(&[("sort", "name"), ("minLuck", "5")])).is_unconstrained());
    }

    #[test]
    fn test_page_request_defaults() {
        let req = build_page_request(&RawParams::new());
        assert_eq!((req.page(), req.limit()), (1, 20));
    }

    #[test]
    fn test_page_request_falls_back_on_bad_values() {
        let req = build_page_request(&params(&[("page", "0"), ("limit", "-5")]));
        assert_eq!((req.page(), req.limit()), (1, 20));

        let req = build_page_request(&params(&[("page", "two"), ("limit", "")]));
        assert_eq!((req.page(), req.limit()), (1, 20));
    }

    #[test]
    fn test_page_request_clamps_limit() {
        let req = build_page_request(&params(&[("page", "3"), ("limit", "5000")]));
        assert_eq!((req.page(), req.limit()), (3, MAX_PAGE_LIMIT));
    }
}
