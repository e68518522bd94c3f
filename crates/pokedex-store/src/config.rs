//! Database configuration
//!
//! Defaults, overridden by `POKEDEX_*` environment variables (an optional
//! `.env` file is read first), overridden again by explicit CLI flags.

use crate::errors::{config_error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable prefix, e.g. `POKEDEX_DB_PATH`
pub const ENV_PREFIX: &str = "POKEDEX";

pub const DEFAULT_DB_PATH: &str = "pokedex.db";
pub const DEFAULT_POOL_SIZE: u32 = 10;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 30000;

/// Connection settings for the SQLite store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    /// Database file
    pub db_path: PathBuf,

    /// Maximum number of pooled connections
    pub pool_size: u32,

    /// How long SQLite waits on a locked database
    pub busy_timeout_ms: u64,

    /// How long `ConnectionPool::acquire` waits for a free connection
    pub acquire_timeout_ms: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            pool_size: DEFAULT_POOL_SIZE,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            acquire_timeout_ms: DEFAULT_ACQUIRE_TIMEOUT_MS,
        }
    }
}

impl DbConfig {
    /// Load from `.env` (if present) and the process environment
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when `.env` exists but cannot be read, a
    /// variable cannot be parsed, or the resulting settings are invalid.
    pub fn from_env() -> Result<Self> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load from an explicit source layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the source cannot be deserialized or
    /// the resulting settings are invalid.
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)
            .and_then(|b| b.set_default("pool_size", DEFAULT_POOL_SIZE))
            .and_then(|b| b.set_default("busy_timeout_ms", DEFAULT_BUSY_TIMEOUT_MS))
            .and_then(|b| b.set_default("acquire_timeout_ms", DEFAULT_ACQUIRE_TIMEOUT_MS))
            .map_err(|e| config_error(&e.to_string()))?
            .add_source(source)
            .build()
            .map_err(|e| config_error(&e.to_string()))?;

        let cfg: DbConfig = settings
            .try_deserialize()
            .map_err(|e| config_error(&e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace the database path
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Replace the pool size
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Replace the acquire timeout
    pub fn with_acquire_timeout_ms(mut self, acquire_timeout_ms: u64) -> Self {
        self.acquire_timeout_ms = acquire_timeout_ms;
        self
    }

    /// # Errors
    ///
    /// Returns a `Config` error for a zero pool size or an empty path.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(config_error("pool_size must be at least 1"));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(config_error("db_path must not be empty"));
        }
        Ok(())
    }
}

/// Accept a missing `.env`; anything else that went wrong loading it is fatal
fn check_dotenv<T>(loaded: dotenvy::Result<T>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(config_error(&format!("Failed to load .env: {}", e))),
    }
}
