//! Pokedex Core - filtering, pagination and browse operations
//!
//! This crate provides the storage-agnostic part of the Pokedex:
//! - The `Pokemon` record model and its stat columns
//! - Filter criteria built leniently from request parameters
//! - Compilation of criteria into a parameterized SQL fragment and an
//!   equivalent in-memory predicate
//! - Page arithmetic and the `{data, pagination}` envelope
//! - The `PokemonSource` storage trait with an in-memory implementation
//! - Structured error and logging facilities shared by the other crates

pub mod browse;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod pagination;
pub mod source;

// Re-export commonly used types
pub use browse::{get_pokemon, list_pokemon, list_with, stat_ranges};
pub use errors::{ExError, ExErrorKind, ExResult, PokedexError, Result};
pub use filter::{CompiledFilter, FilterCriteria, RawParams};
pub use model::{Pokemon, Stat};
pub use pagination::{PageMeta, PageRequest, PageResult};
pub use source::{MemorySource, PokemonSource, StatRanges};
