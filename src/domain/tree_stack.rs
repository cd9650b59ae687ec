//! Stack based traversal algorithms over an [`ElementTree`].
//!
//! All operations work on a caller-owned [`TraversalStack`]. The stack must be
//! reserved for the tree's `max_all_children`; it is cleared on entry and
//! drained on every return path.
//!
//! Children are pushed left to right, so the rightmost subtree of every
//! element is expanded first. Lookups that stop at the first match follow the
//! same expansion order.

use tracing::{debug, instrument, trace};

use crate::domain::arena::ElementTree;
use crate::domain::element::ElementId;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::scratch::{ScratchBuffer, TraversalStack};

impl ElementTree {
    /// Depth-first enumeration of `root` and all its descendants.
    ///
    /// `root` is the first entry. Returns an empty sequence without touching
    /// `stack` if `root` has no children.
    #[instrument(level = "debug", skip(self, stack))]
    pub fn preorder_descendants(
        &self,
        root: ElementId,
        stack: &mut TraversalStack,
    ) -> TreeResult<Vec<ElementId>> {
        if self.children(root).is_empty() {
            return Ok(Vec::new());
        }
        self.begin(root, stack)?;

        let mut elements = Vec::new();
        while let Some(id) = stack.pop() {
            elements.push(id);
            self.push_children(id, stack, elements.len())?;
        }

        debug!(count = elements.len(), "preorder traversal complete");
        Ok(elements)
    }

    /// True if `root` or any of its descendants is named `name`.
    #[instrument(level = "debug", skip(self, stack))]
    pub fn has_descendant_named(
        &self,
        root: ElementId,
        stack: &mut TraversalStack,
        name: &str,
    ) -> TreeResult<bool> {
        self.begin(root, stack)?;

        let mut visited = 0;
        while let Some(id) = stack.pop() {
            visited += 1;
            if self.name(id) == Some(name) {
                stack.clear();
                return Ok(true);
            }
            self.push_children(id, stack, visited)?;
        }
        Ok(false)
    }

    /// First descendant of `root` named `name`. `root` itself never matches.
    #[instrument(level = "debug", skip(self, stack))]
    pub fn find_child_by_name(
        &self,
        root: ElementId,
        stack: &mut TraversalStack,
        name: &str,
    ) -> TreeResult<Option<ElementId>> {
        Ok(self
            .find_owned_by_name(root, stack, name)?
            .map(|(_, child)| child))
    }

    /// Element below `root` whose child list holds an element named like `node`.
    ///
    /// Matching is by name: with duplicate names along the path the first
    /// match in expansion order wins. Returns `None` for the root itself, for
    /// stale handles, and for elements outside `root`'s subtree.
    #[instrument(level = "debug", skip(self, stack))]
    pub fn find_parent_of(
        &self,
        node: ElementId,
        stack: &mut TraversalStack,
        root: ElementId,
    ) -> TreeResult<Option<ElementId>> {
        stack.check_capacity(self.limits().max_all_children)?;
        let Some(name) = self.name(node) else {
            return Ok(None);
        };
        Ok(self
            .find_owned_by_name(root, stack, name)?
            .map(|(owner, _)| owner))
    }

    /// Detaches the first descendant named `name` from its owner and frees its
    /// subtree. Does nothing if `root` has no children or nothing matches.
    #[instrument(level = "debug", skip(self, stack))]
    pub fn remove_descendant_by_name(
        &mut self,
        root: ElementId,
        stack: &mut TraversalStack,
        name: &str,
    ) -> TreeResult<()> {
        if self.children(root).is_empty() {
            return Ok(());
        }
        match self.find_owned_by_name(root, stack, name)? {
            Some((owner, child)) => {
                let freed = self.detach(owner, child);
                debug!(%owner, freed, "removed descendant");
            }
            None => debug!("no descendant to remove"),
        }
        Ok(())
    }

    /// Searches children of expanded elements; returns `(owner, child)`.
    fn find_owned_by_name(
        &self,
        root: ElementId,
        stack: &mut TraversalStack,
        name: &str,
    ) -> TreeResult<Option<(ElementId, ElementId)>> {
        self.begin(root, stack)?;

        let mut visited = 0;
        while let Some(id) = stack.pop() {
            visited += 1;
            if let Some(&child) = self
                .children(id)
                .iter()
                .find(|&&child| self.name(child) == Some(name))
            {
                stack.clear();
                return Ok(Some((id, child)));
            }
            self.push_children(id, stack, visited)?;
        }
        Ok(None)
    }

    fn begin(&self, root: ElementId, stack: &mut TraversalStack) -> TreeResult<()> {
        stack.check_capacity(self.limits().max_all_children)?;
        stack.clear();
        stack.push(root);
        Ok(())
    }

    /// Pushes the children of `id`, refusing to grow past the reserved capacity.
    fn push_children(
        &self,
        id: ElementId,
        stack: &mut TraversalStack,
        visited: usize,
    ) -> TreeResult<()> {
        let children = self.children(id);
        let limit = self.limits().max_all_children;
        if visited + stack.len() + children.len() > limit {
            trace!(visited, pending = stack.len(), "traversal limit reached");
            stack.clear();
            return Err(TreeError::DescendantLimitExceeded { limit });
        }
        for &child in children {
            stack.push(child);
        }
        Ok(())
    }
}
