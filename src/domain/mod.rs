//! Domain layer: element hierarchy and traversal engine
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod element;
pub mod error;
pub mod scratch;
mod tree_queue;
mod tree_stack;

pub use arena::ElementTree;
pub use element::{Element, ElementId, ElementKind, Limits, MAX_ALL_CHILDREN, MAX_CHILDREN};
pub use error::{TreeError, TreeResult};
pub use scratch::{ScratchBuffer, TraversalQueue, TraversalStack};
