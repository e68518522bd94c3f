//! Core types shared across the Pokedex crates
//!
//! Foundational types used by the error and logging facilities:
//!
//! - **Correlation types**: RequestId for request-scoped log correlation
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
