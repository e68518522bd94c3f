//! Filter criteria, their construction from request parameters, and their
//! compilation into SQL and in-memory predicates.
//!
//! Flow: raw parameters → `builder::build_criteria` → `FilterCriteria` →
//! `CompiledFilter` (SQL fragment + predicate, compiled once and shared by
//! the count and the page fetch).

pub mod builder;
pub mod compile;
pub mod criteria;

pub use builder::{build_criteria, build_page_request, RawParams};
pub use compile::{compile, CompiledFilter, Predicate, SqlFragment, SqlParam};
pub use criteria::{FilterCriteria, StatRange};
