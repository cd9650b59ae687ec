//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::element::ElementId;

/// Errors raised by element mutation and tree traversal.
///
/// A failed name lookup is not an error: lookups return `None` or `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("traversal buffer capacity violation: expected capacity {expected}, got capacity {capacity} with {len} entries")]
    CapacityViolation {
        expected: usize,
        capacity: usize,
        len: usize,
    },

    #[error("element {parent} already has the maximum of {limit} children")]
    FanOutExceeded { parent: ElementId, limit: usize },

    #[error("traversal would enumerate more than {limit} elements")]
    DescendantLimitExceeded { limit: usize },

    #[error("unknown or removed element: {0}")]
    UnknownElement(ElementId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
