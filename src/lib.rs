//! Hierarchical ui element tree with allocation-free traversal.
//!
//! Elements are owned by an [`ElementTree`](domain::ElementTree) and addressed
//! through [`ElementId`](domain::ElementId) handles. Traversals run over a
//! caller-owned [`TraversalStack`](domain::TraversalStack) or
//! [`TraversalQueue`](domain::TraversalQueue) that is reused between calls:
//!
//! ```
//! use uitree::domain::{ElementKind, ElementTree, TraversalStack};
//!
//! let mut tree = ElementTree::new("window", ElementKind::Box);
//! let root = tree.root();
//! let panel = tree.add_child(root, "panel", ElementKind::Box).unwrap();
//! tree.add_child(panel, "title", ElementKind::Text).unwrap();
//!
//! let mut stack = TraversalStack::new();
//! let all = tree.preorder_descendants(root, &mut stack).unwrap();
//! assert_eq!(all.len(), 3);
//! assert_eq!(tree.find_parent_of(all[2], &mut stack, root).unwrap(), Some(panel));
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod tree_traits;
pub mod util;

pub use error::{Error, Result};
