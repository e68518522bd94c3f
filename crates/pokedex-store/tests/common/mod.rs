use pokedex_core::RawParams;
use rusqlite::Connection;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Empty in-memory database with the schema in place
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let conn = pokedex_store::db::open_in_memory().unwrap();
    pokedex_store::db::ensure_schema(&conn).unwrap();
    conn
}

/// In-memory database loaded with the ten-record Kanto fixture
#[allow(dead_code)]
pub fn seeded_db() -> Connection {
    let mut conn = setup_test_db();
    let path = fixtures_dir().join("seed_kanto.yaml");
    pokedex_store::seed::import_seed(&path, &mut conn).unwrap();
    conn
}

/// Raw request parameters from literal pairs
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Ids of a record slice, in order
#[allow(dead_code)]
pub fn ids(records: &[pokedex_core::Pokemon]) -> Vec<u32> {
    records.iter().map(|p| p.id).collect()
}
