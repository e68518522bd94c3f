//! Pokedex Store - SQLite persistence for the browse core
//!
//! Provides:
//! - Connection configuration from the environment
//! - Schema bootstrap for the fixed `pokemon` table
//! - A bounded connection pool
//! - `SqliteRepo`, the SQL-backed `PokemonSource`
//! - Seed Format v0 parser and importer

pub mod config;
pub mod db;
pub mod errors;
pub mod pool;
pub mod repo;
pub mod seed;

// Re-export key types
pub use config::DbConfig;
pub use errors::Result;
pub use pool::{ConnectionPool, PoolSource, PooledConnection};
pub use repo::{SqliteRepo, SqliteSource};
