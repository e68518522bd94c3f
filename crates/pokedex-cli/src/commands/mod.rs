//! Subcommand implementations

pub mod get;
pub mod list;
pub mod output;
pub mod seed;
pub mod stats;

use pokedex_store::{ConnectionPool, DbConfig};
use std::path::Path;

/// Open the pool from environment config, with `--db` taking precedence
pub fn open_pool(db: Option<&Path>) -> Result<ConnectionPool, Box<dyn std::error::Error>> {
    let mut config = DbConfig::from_env()?;
    if let Some(db) = db {
        config = config.with_db_path(db);
    }
    Ok(ConnectionPool::open(&config)?)
}
