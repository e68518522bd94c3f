//! Bounded SQLite connection pool
//!
//! Built from a `DbConfig` and handed to whatever needs storage; nothing in
//! the workspace reaches for a global pool. A checked-out connection is a
//! guard that goes back to the pool when dropped.

use crate::config::DbConfig;
use crate::db;
use crate::errors::{from_pool, Result};
use crate::repo::SqliteRepo;
use pokedex_core::filter::CompiledFilter;
use pokedex_core::model::Pokemon;
use pokedex_core::source::{PokemonSource, StatRanges};
use r2d2_sqlite::SqliteConnectionManager;
use std::time::Duration;

/// A connection checked out of a `ConnectionPool`
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// At most `pool_size` connections to one database file
///
/// Every connection is configured (busy timeout, WAL) as it is opened, and
/// the schema is bootstrapped once when the pool is built.
#[derive(Clone)]
pub struct ConnectionPool {
    pool: r2d2::Pool<SqliteConnectionManager>,
}

impl std::fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("ConnectionPool")
            .field("max_size", &self.pool.max_size())
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

impl ConnectionPool {
    /// Open the pool described by `config`
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for invalid settings, or a `Persistence`
    /// error when the database cannot be opened or bootstrapped.
    pub fn open(config: &DbConfig) -> Result<Self> {
        config.validate()?;

        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let manager = SqliteConnectionManager::file(&config.db_path).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
        });

        let pool = r2d2::Pool::builder()
            .max_size(config.pool_size)
            .min_idle(Some(1))
            .connection_timeout(Duration::from_millis(config.acquire_timeout_ms))
            .build(manager)
            .map_err(from_pool)?;

        let pool = Self { pool };
        {
            let conn = pool.acquire()?;
            db::ensure_schema(&conn)?;
        }

        tracing::debug!(
            db_path = %config.db_path.display(),
            pool_size = config.pool_size,
            "connection pool opened"
        );

        Ok(pool)
    }

    /// Check out a connection, waiting while all of them are in use
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error when no connection frees up within the
    /// acquire timeout.
    pub fn acquire(&self) -> Result<PooledConnection> {
        self.pool.get().map_err(from_pool)
    }

    /// Check out a connection only if one is free right now
    pub fn try_acquire(&self) -> Option<PooledConnection> {
        self.pool.try_get()
    }

    /// Upper bound on simultaneously open connections
    pub fn max_size(&self) -> u32 {
        self.pool.max_size()
    }

    /// Connections currently open (checked out plus idle)
    pub fn open_connections(&self) -> u32 {
        self.pool.state().connections
    }

    /// Connections open and waiting in the pool
    pub fn idle_connections(&self) -> u32 {
        self.pool.state().idle_connections
    }
}

/// `PokemonSource` that checks out one connection per call
#[derive(Debug, Clone)]
pub struct PoolSource {
    pool: ConnectionPool,
}

impl PoolSource {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}

impl PokemonSource for PoolSource {
    fn count(&self, filter: &CompiledFilter) -> Result<u64> {
        let conn = self.pool.acquire()?;
        SqliteRepo::count(&conn, filter)
    }

    fn fetch(&self, filter: &CompiledFilter, limit: u64, offset: u64) -> Result<Vec<Pokemon>> {
        let conn = self.pool.acquire()?;
        SqliteRepo::fetch(&conn, filter, limit, offset)
    }

    fn get(&self, id: u32) -> Result<Option<Pokemon>> {
        let conn = self.pool.acquire()?;
        SqliteRepo::get_pokemon(&conn, id)
    }

    fn stat_ranges(&self) -> Result<StatRanges> {
        let conn = self.pool.acquire()?;
        SqliteRepo::stat_ranges(&conn)
    }
}
