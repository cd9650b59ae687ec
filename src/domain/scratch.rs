//! Caller-owned scratch buffers reused across traversal calls.
//!
//! A buffer holds plain [`ElementId`] handles, so a single instance can serve
//! any number of trees, one call at a time. Every traversal clears the buffer
//! on entry and leaves it empty on return.

use std::collections::VecDeque;

use crate::domain::element::{ElementId, Limits, MAX_ALL_CHILDREN};
use crate::domain::error::{TreeError, TreeResult};

/// Common surface of traversal worklists.
pub trait ScratchBuffer {
    /// Reserved capacity of the underlying storage.
    fn capacity(&self) -> usize;

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails unless the buffer has exactly `expected` capacity and holds no
    /// more than `expected` entries. A buffer that was resized elsewhere would
    /// reallocate during traversal, so it is rejected before any work is done.
    fn check_capacity(&self, expected: usize) -> TreeResult<()> {
        let capacity = self.capacity();
        let len = self.len();
        if len > expected || capacity != expected {
            return Err(TreeError::CapacityViolation {
                expected,
                capacity,
                len,
            });
        }
        Ok(())
    }
}

/// LIFO worklist for depth-first traversals.
#[derive(Debug, Clone)]
pub struct TraversalStack {
    items: Vec<ElementId>,
}

impl Default for TraversalStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalStack {
    /// Stack reserved for the default traversal limit.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ALL_CHILDREN)
    }

    /// Stack reserved for trees built with `limits`.
    pub fn for_limits(limits: &Limits) -> Self {
        Self::with_capacity(limits.max_all_children)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Shrinks the reserved capacity, dropping entries beyond it.
    pub fn shrink_to(&mut self, capacity: usize) {
        self.items.truncate(capacity);
        self.items.shrink_to(capacity);
    }

    /// Reserves room for exactly `additional` more entries.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.items.reserve_exact(additional);
    }

    pub fn push(&mut self, id: ElementId) {
        self.items.push(id);
    }

    pub fn pop(&mut self) -> Option<ElementId> {
        self.items.pop()
    }
}

impl ScratchBuffer for TraversalStack {
    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// FIFO worklist for breadth-first traversals.
#[derive(Debug, Clone)]
pub struct TraversalQueue {
    items: VecDeque<ElementId>,
}

impl Default for TraversalQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalQueue {
    /// Queue reserved for the default traversal limit.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ALL_CHILDREN)
    }

    /// Queue reserved for trees built with `limits`.
    pub fn for_limits(limits: &Limits) -> Self {
        Self::with_capacity(limits.max_all_children)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Shrinks the reserved capacity, dropping entries beyond it.
    pub fn shrink_to(&mut self, capacity: usize) {
        self.items.truncate(capacity);
        self.items.shrink_to(capacity);
    }

    pub fn push_back(&mut self, id: ElementId) {
        self.items.push_back(id);
    }

    pub fn pop_front(&mut self) -> Option<ElementId> {
        self.items.pop_front()
    }
}

impl ScratchBuffer for TraversalQueue {
    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
