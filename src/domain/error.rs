//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations during tree setup.
///
/// Lookup misses are not errors: `find` returns `None`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("parent node not found: '{0}'")]
    ParentNotFound(char),

    #[error("tree already has a root, cannot add root '{0}'")]
    RootAlreadySet(char),

    #[error("first node '{0}' must be the root (no parent)")]
    MissingRoot(char),

    #[error("duplicate tag: '{0}'")]
    DuplicateTag(char),

    #[error("failed to render node")]
    Render(#[from] std::io::Error),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
