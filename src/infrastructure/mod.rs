//! Infrastructure layer: console input and randomness sources
//!
//! This layer implements I/O boundary traits and wires up real sources.

pub mod rng;
pub mod traits;

pub use rng::make_rng;
pub use traits::{stdin_tags, TagReader, TagSource};
