//! Text rendering of element hierarchies via `termtree`.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{ElementId, ElementTree};

pub trait TreeNodeConvert {
    /// Builds a printable tree of element names starting at `root`.
    fn to_tree_string(&self, root: ElementId) -> Tree<String>;
}

impl TreeNodeConvert for ElementTree {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self, root: ElementId) -> Tree<String> {
        let Some(element) = self.get(root) else {
            return Tree::new("Empty tree".to_string());
        };

        let leaves: Vec<_> = element
            .children()
            .iter()
            .map(|&child| self.to_tree_string(child))
            .collect();

        Tree::new(element.to_string()).with_leaves(leaves)
    }
}

impl fmt::Display for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string(self.root()))
    }
}
