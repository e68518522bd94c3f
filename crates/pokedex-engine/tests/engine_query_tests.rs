// Integration tests for the engine query surface
// Covers: list/get/stats results, not-found handling, error envelopes

mod common;

use common::{params, sample_source, FailingSource, FetchFailsSource};
use pokedex_core::errors::ExErrorKind;
use pokedex_engine::{apply_engine_query, render_response, EngineQuery, EngineQueryResult};

fn run(query: EngineQuery, source: &dyn pokedex_core::PokemonSource) -> pokedex_engine::QueryResponse {
    let kind = query.kind();
    render_response(kind, &apply_engine_query(query, source))
}

#[test]
fn test_list_returns_filtered_page() {
    let source = sample_source();
    let query = EngineQuery::PokemonList {
        params: params(&[("types", "fire"), ("minSpeed", "70")]),
    };

    let result = apply_engine_query(query, &source).unwrap();

    match result {
        EngineQueryResult::PokemonList(page) => {
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].name, "Charizard");
            assert_eq!(page.total(), 1);
        }
        other => panic!("Expected PokemonList, got {:?}", other),
    }
}

#[test]
fn test_list_envelope_shape() {
    let source = sample_source();

    let response = run(
        EngineQuery::PokemonList {
            params: params(&[("limit", "2"), ("page", "abc")]),
        },
        &source,
    );

    assert_eq!(response.status, 200);
    assert_eq!(response.body["data"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(response.body["data"][0]["id"], 1);
    assert_eq!(
        response.body["pagination"],
        serde_json::json!({ "page": 1, "limit": 2, "total": 5, "totalPages": 3 })
    );
}

#[test]
fn test_get_found() {
    let source = sample_source();

    let response = run(EngineQuery::PokemonGet { id: "25".to_string() }, &source);

    assert_eq!(response.status, 200);
    assert_eq!(response.body["data"]["name"], "Pikachu");
}

#[test]
fn test_get_missing_is_not_found_result() {
    let source = sample_source();

    let result = apply_engine_query(EngineQuery::PokemonGet { id: "9999".to_string() }, &source);

    assert_eq!(
        result.unwrap(),
        EngineQueryResult::PokemonNotFound { pokemon_id: 9999 }
    );
}

#[test]
fn test_get_invalid_id_is_400() {
    let source = sample_source();

    for raw in ["abc", "0", "-3", ""] {
        let result = apply_engine_query(EngineQuery::PokemonGet { id: raw.to_string() }, &source);
        let err = result.as_ref().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput, "id {:?}", raw);
        assert!(err.request_id().is_some());

        let response = render_response(pokedex_engine::QueryKind::PokemonGet, &result);
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "Invalid pokemon ID");
    }
}

#[test]
fn test_stat_ranges_envelope() {
    let source = sample_source();

    let response = run(EngineQuery::StatRanges, &source);

    assert_eq!(response.status, 200);
    assert_eq!(response.body["data"]["minSpeed"], 43);
    assert_eq!(response.body["data"]["maxSpeed"], 100);
    assert_eq!(response.body["data"]["maxHp"], 50);
}

#[test]
fn test_storage_failure_is_generic_500() {
    let response = run(
        EngineQuery::PokemonList {
            params: params(&[]),
        },
        &FailingSource,
    );

    assert_eq!(response.status, 500);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": "Failed to fetch pokemon" })
    );
}

#[test]
fn test_fetch_failure_after_count_is_generic_500() {
    let source = FetchFailsSource(sample_source());

    let result = apply_engine_query(
        EngineQuery::PokemonList {
            params: params(&[]),
        },
        &source,
    );
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);

    let response = render_response(pokedex_engine::QueryKind::PokemonList, &result);
    assert_eq!(response.status, 500);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": "Failed to fetch pokemon" })
    );
}

#[test]
fn test_storage_failure_keeps_detail_on_error() {
    let err = apply_engine_query(EngineQuery::StatRanges, &FailingSource).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(err.message().contains("unable to open database file"));
    assert!(err.request_id().is_some());
}
