//! Element entity: a named, typed node and its child list

use std::fmt;

use generational_arena::Index;

/// Maximum number of immediate children a single element may hold.
pub const MAX_CHILDREN: usize = 100;

/// Maximum number of elements a single traversal call may enumerate.
/// Scratch buffers must be reserved with exactly this capacity.
pub const MAX_ALL_CHILDREN: usize = 10_000;

/// Non-owning handle to an element stored in an [`ElementTree`](crate::domain::ElementTree).
///
/// Handles stay valid until the element is removed. A handle to a removed
/// element never aliases a newer one: lookups through it return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) Index);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}v{}", slot, generation)
    }
}

/// Type tag of an element, consumed by the render projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Box,
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Box => write!(f, "box"),
            ElementKind::Text => write!(f, "text"),
        }
    }
}

/// Capacity limits enforced by a tree and its traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Per-element fan-out ceiling
    pub max_children: usize,
    /// Per-traversal element ceiling and required scratch capacity
    pub max_all_children: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_children: MAX_CHILDREN,
            max_all_children: MAX_ALL_CHILDREN,
        }
    }
}

/// Tree node in the arena-based element hierarchy.
///
/// The child list is the only structural link: parents are not stored and are
/// computed on demand by the traversal engine.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) kind: ElementKind,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }

    /// Immediate children in insertion order; empty if there are none.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_limits_then_match_constants() {
        let limits = Limits::default();
        assert_eq!(limits.max_children, 100);
        assert_eq!(limits.max_all_children, 10_000);
    }

    #[test]
    fn given_text_element_then_is_text() {
        let text = Element::new("label", ElementKind::Text);
        let boxed = Element::new("panel", ElementKind::Box);
        assert!(text.is_text());
        assert!(!boxed.is_text());
        assert!(!boxed.has_children());
        assert_eq!(text.to_string(), "label (text)");
    }
}
