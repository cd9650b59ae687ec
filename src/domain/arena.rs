//! Arena-backed element tree with exclusive, hierarchical ownership.

use generational_arena::Arena;
use tracing::{debug, instrument, trace};

use crate::domain::element::{Element, ElementId, ElementKind, Limits};
use crate::domain::error::{TreeError, TreeResult};

/// Owner of a complete element hierarchy.
///
/// Every element except the root is listed in exactly one parent's child
/// list. Removing an element frees its whole subtree; dropping the tree frees
/// everything. Handles returned by any operation become stale once the
/// element they point at is removed.
#[derive(Debug)]
pub struct ElementTree {
    /// Arena storage for all elements of this tree
    arena: Arena<Element>,
    /// Handle of the root element
    root: ElementId,
    /// Fan-out and traversal ceilings
    limits: Limits,
}

impl ElementTree {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self::with_limits(name, kind, Limits::default())
    }

    pub fn with_limits(name: impl Into<String>, kind: ElementKind, limits: Limits) -> Self {
        let mut arena = Arena::new();
        let root = ElementId(arena.insert(Element::new(name, kind)));
        Self {
            arena,
            root,
            limits,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Number of live elements, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.arena.contains(id.0)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.arena.get(id.0)
    }

    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(Element::name)
    }

    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.get(id).map(Element::kind)
    }

    /// Immediate children of `id` in insertion order.
    ///
    /// Empty when the element has no children or the handle is stale.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(Element::children).unwrap_or(&[])
    }

    /// Appends a new leaf element to `parent` and returns its handle.
    pub fn add_child(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        kind: ElementKind,
    ) -> TreeResult<ElementId> {
        self.check_fan_out(parent, 1)?;

        let child = ElementId(self.arena.insert(Element::new(name, kind)));
        self.push_child(parent, child);
        trace!(%parent, %child, "added child");
        Ok(child)
    }

    /// Moves a separately built tree under `parent`, appended after the
    /// existing children. Returns the handle of the moved subtree root.
    ///
    /// The subtree keeps its internal child order. Nothing is moved if any
    /// element would exceed this tree's fan-out limit.
    #[instrument(level = "debug", skip(self, subtree), fields(subtree_len = subtree.len()))]
    pub fn attach(&mut self, parent: ElementId, mut subtree: ElementTree) -> TreeResult<ElementId> {
        self.check_fan_out(parent, 1)?;
        if let Some((index, _)) = subtree
            .arena
            .iter()
            .find(|(_, element)| element.children.len() > self.limits.max_children)
        {
            return Err(TreeError::FanOutExceeded {
                parent: ElementId(index),
                limit: self.limits.max_children,
            });
        }

        let mut attached = None;
        let mut stack = vec![(subtree.root, parent)];
        while let Some((source, target_parent)) = stack.pop() {
            let Some(element) = subtree.arena.remove(source.0) else {
                continue;
            };
            let moved = ElementId(self.arena.insert(Element::new(element.name, element.kind)));
            self.push_child(target_parent, moved);
            if attached.is_none() {
                attached = Some(moved);
            }

            // Reverse push keeps left-to-right append order per parent
            for &child in element.children.iter().rev() {
                stack.push((child, moved));
            }
        }

        let attached = attached.ok_or(TreeError::UnknownElement(subtree.root))?;
        debug!(%attached, total = self.len(), "attached subtree");
        Ok(attached)
    }

    /// Destroys all immediate children of `id` together with their subtrees.
    /// No-op when `id` has no children or is stale.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_immediate_children(&mut self, id: ElementId) {
        let Some(element) = self.arena.get_mut(id.0) else {
            return;
        };
        let children = std::mem::take(&mut element.children);
        let freed: usize = children.into_iter().map(|c| self.free_subtree(c)).sum();
        debug!(freed, "removed immediate children");
    }

    /// Unlinks `child` from `owner` and frees its subtree.
    /// Returns the number of freed elements, 0 if `child` is not owned by `owner`.
    pub(crate) fn detach(&mut self, owner: ElementId, child: ElementId) -> usize {
        let Some(element) = self.arena.get_mut(owner.0) else {
            return 0;
        };
        let Some(position) = element.children.iter().position(|&c| c == child) else {
            return 0;
        };
        element.children.remove(position);
        self.free_subtree(child)
    }

    fn check_fan_out(&self, parent: ElementId, additional: usize) -> TreeResult<()> {
        let element = self
            .get(parent)
            .ok_or(TreeError::UnknownElement(parent))?;
        if element.children.len() + additional > self.limits.max_children {
            return Err(TreeError::FanOutExceeded {
                parent,
                limit: self.limits.max_children,
            });
        }
        Ok(())
    }

    fn push_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(element) = self.arena.get_mut(parent.0) {
            element.children.push(child);
        }
    }

    /// Frees `id` and everything below it, using the freed child lists as worklist.
    fn free_subtree(&mut self, id: ElementId) -> usize {
        let Some(element) = self.arena.remove(id.0) else {
            return 0;
        };
        trace!(name = element.name(), "freeing subtree");
        let mut pending = element.children;
        let mut freed = 1;
        while let Some(next) = pending.pop() {
            if let Some(child) = self.arena.remove(next.0) {
                pending.extend(child.children);
                freed += 1;
            }
        }
        freed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_limits() -> Limits {
        Limits {
            max_children: 2,
            max_all_children: 16,
        }
    }

    #[test]
    fn given_new_tree_then_only_root_exists() {
        let tree = ElementTree::new("root", ElementKind::Box);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.name(tree.root()), Some("root"));
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn given_full_parent_when_adding_child_then_fan_out_exceeded() {
        let mut tree = ElementTree::with_limits("root", ElementKind::Box, small_limits());
        let root = tree.root();
        tree.add_child(root, "a", ElementKind::Box).unwrap();
        tree.add_child(root, "b", ElementKind::Box).unwrap();

        let err = tree.add_child(root, "c", ElementKind::Box).unwrap_err();
        assert_eq!(
            err,
            TreeError::FanOutExceeded {
                parent: root,
                limit: 2
            }
        );
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn given_removed_element_when_adding_child_then_unknown_element() {
        let mut tree = ElementTree::new("root", ElementKind::Box);
        let root = tree.root();
        let child = tree.add_child(root, "child", ElementKind::Box).unwrap();
        tree.remove_immediate_children(root);

        assert!(!tree.contains(child));
        assert_eq!(
            tree.add_child(child, "x", ElementKind::Text),
            Err(TreeError::UnknownElement(child))
        );
    }

    #[test]
    fn given_subtree_with_wide_node_when_attaching_then_nothing_moves() {
        let mut wide = ElementTree::new("wide", ElementKind::Box);
        let wide_root = wide.root();
        for i in 0..3 {
            wide.add_child(wide_root, format!("w{i}"), ElementKind::Box)
                .unwrap();
        }
        let mut tree = ElementTree::with_limits("root", ElementKind::Box, small_limits());
        let root = tree.root();

        let result = tree.attach(root, wide);
        assert!(matches!(result, Err(TreeError::FanOutExceeded { limit: 2, .. })));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn given_owner_and_foreign_child_when_detaching_then_nothing_freed() {
        let mut tree = ElementTree::new("root", ElementKind::Box);
        let root = tree.root();
        let a = tree.add_child(root, "a", ElementKind::Box).unwrap();
        let b = tree.add_child(a, "b", ElementKind::Box).unwrap();

        assert_eq!(tree.detach(root, b), 0);
        assert_eq!(tree.detach(root, a), 2);
        assert_eq!(tree.len(), 1);
    }
}
