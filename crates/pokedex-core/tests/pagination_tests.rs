// Integration tests for page arithmetic and the pagination envelope

use pokedex_core::pagination::{paginate, total_pages, PageMeta, PageRequest};
use proptest::prelude::*;

#[test]
fn test_third_page_of_45_holds_five_items() {
    // Given: 45 items, 20 per page
    let items: Vec<u32> = (1..=45).collect();

    // When: We request page 3
    let page = paginate(&items, &PageRequest::new(3, 20));

    // Then: 3 pages in total, 5 items on the last one
    assert_eq!(page.total(), 45);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.items, vec![41, 42, 43, 44, 45]);
}

#[test]
fn test_empty_total_has_zero_pages_and_no_items() {
    let items: Vec<u32> = Vec::new();

    for page_no in [1, 2, 50] {
        let page = paginate(&items, &PageRequest::new(page_no, 20));
        assert_eq!(page.total(), 0);
        assert_eq!(page.total_pages(), 0);
        assert!(page.items.is_empty());
    }
}

#[test]
fn test_page_past_end_is_empty_but_keeps_totals() {
    let items: Vec<u32> = (1..=45).collect();

    let page = paginate(&items, &PageRequest::new(4, 20));

    assert!(page.items.is_empty());
    assert_eq!(page.total(), 45);
    assert_eq!(page.total_pages(), 3);
    assert!(page.pagination.is_past_end());
}

#[test]
fn test_envelope_serializes_data_and_pagination() {
    let page = paginate(&["a", "b", "c"], &PageRequest::new(2, 2));

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data": ["c"],
            "pagination": {"page": 2, "limit": 2, "total": 3, "totalPages": 2}
        })
    );
}

proptest! {
    #[test]
    fn prop_total_pages_is_ceiling(total in 0u64..10_000, limit in 1u64..200) {
        let meta = PageMeta::new(total, &PageRequest::new(1, limit));
        let expected = (total as f64 / limit as f64).ceil() as u64;
        prop_assert_eq!(meta.total_pages, expected);
        prop_assert_eq!(total_pages(total, limit), expected);
    }

    #[test]
    fn prop_pages_partition_the_items(len in 0usize..300, limit in 1u64..50) {
        let items: Vec<usize> = (0..len).collect();
        let pages = total_pages(len as u64, limit);

        let mut seen = Vec::new();
        for page_no in 1..=pages + 1 {
            let page = paginate(&items, &PageRequest::new(page_no, limit));
            prop_assert!(page.items.len() as u64 <= limit);
            if page_no > pages {
                prop_assert!(page.items.is_empty());
            }
            seen.extend(page.items);
        }

        prop_assert_eq!(seen, items);
    }
}
