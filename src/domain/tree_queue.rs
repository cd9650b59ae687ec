//! Queue based (breadth-first) traversal over an [`ElementTree`].

use tracing::{debug, instrument};

use crate::domain::arena::ElementTree;
use crate::domain::element::ElementId;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::scratch::{ScratchBuffer, TraversalQueue};

impl ElementTree {
    /// Breadth-first enumeration of `root` and all its descendants.
    ///
    /// Elements come out level by level, left to right within a level, with
    /// `root` first. Returns an empty sequence without touching `queue` if
    /// `root` has no children.
    #[instrument(level = "debug", skip(self, queue))]
    pub fn level_order_descendants(
        &self,
        root: ElementId,
        queue: &mut TraversalQueue,
    ) -> TreeResult<Vec<ElementId>> {
        if self.children(root).is_empty() {
            return Ok(Vec::new());
        }
        let limit = self.limits().max_all_children;
        queue.check_capacity(limit)?;
        queue.clear();
        queue.push_back(root);

        let mut elements = Vec::new();
        while let Some(id) = queue.pop_front() {
            elements.push(id);
            let children = self.children(id);
            if elements.len() + queue.len() + children.len() > limit {
                queue.clear();
                return Err(TreeError::DescendantLimitExceeded { limit });
            }
            for &child in children {
                queue.push_back(child);
            }
        }

        debug!(count = elements.len(), "level order traversal complete");
        Ok(elements)
    }
}
