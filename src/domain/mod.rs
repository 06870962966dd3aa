//! Domain layer: tagged tree entities and construction
//!
//! This layer is independent of external concerns (no stdin, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod node;
pub mod tree;
pub mod value;

pub use builder::{Layout, NodeSpec, TreeBuilder, DEFAULT_TEXT_LEN};
pub use error::{DomainError, DomainResult};
pub use node::{Node, PreOrderIter};
pub use tree::TaggedTree;
pub use value::{Value, ValueKind, ALPHANUMERIC};
