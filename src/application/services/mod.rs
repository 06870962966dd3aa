//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (TagSource) but are themselves
//! concrete structs, not traits.

mod search;

pub use search::{SearchOutcome, SearchService, SearchSummary, DEFAULT_SENTINEL};
