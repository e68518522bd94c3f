//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import

use pokedex_core::model::Pokemon;
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Records to upsert, in any order
    #[serde(default)]
    pub pokemon: Vec<Pokemon>,
}
