//! Repository layer for the `pokemon` table
//!
//! `SqliteRepo` holds the SQL; `SqliteSource` exposes it as a
//! `PokemonSource` over one borrowed connection.

pub mod sqlite_repo;

pub use sqlite_repo::{SqliteRepo, SqliteSource};
