//! Projection of an element tree into drawables for a graphics backend.
//!
//! The renderer walks the tree breadth-first and produces one [`Drawable`] per
//! element. Drawables from the previous frame are reused when an element with
//! the same name and kind is still present, so a backend can keep the visual
//! objects it created for them.

use tracing::{debug, instrument};

use crate::domain::{ElementId, ElementKind, ElementTree, Limits, TraversalQueue, TreeResult};

/// Visual primitive a backend should create for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Label,
}

impl From<ElementKind> for Shape {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Box => Shape::Rectangle,
            ElementKind::Text => Shape::Label,
        }
    }
}

/// Stable `(name, kind)` projection of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawable {
    pub name: String,
    pub kind: ElementKind,
    pub shape: Shape,
}

/// What the last call to [`Renderer::drawables`] did with the cached frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Drawables carried over from the previous frame
    pub reused: usize,
    /// Drawables created for new elements
    pub created: usize,
    /// Previous drawables with no element left
    pub dropped: usize,
}

/// Breadth-first projector with a one-frame cache keyed by element name.
#[derive(Debug, Default)]
pub struct Renderer {
    queue: TraversalQueue,
    frame: Vec<Drawable>,
    stats: FrameStats,
}

impl Renderer {
    /// Renderer for trees using the default [`Limits`].
    pub fn new() -> Self {
        Self::with_queue(TraversalQueue::new())
    }

    /// Renderer for trees built with `limits`, e.g. from `Settings::limits()`.
    pub fn for_limits(limits: &Limits) -> Self {
        Self::with_queue(TraversalQueue::for_limits(limits))
    }

    /// Renderer using `queue` as its traversal buffer.
    pub fn with_queue(queue: TraversalQueue) -> Self {
        Self {
            queue,
            frame: Vec::new(),
            stats: FrameStats::default(),
        }
    }

    /// Projects `root` and its descendants, in level order.
    ///
    /// A root without children yields an empty frame.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn drawables(&mut self, tree: &ElementTree, root: ElementId) -> TreeResult<&[Drawable]> {
        let elements = tree.level_order_descendants(root, &mut self.queue)?;

        let mut previous = std::mem::take(&mut self.frame);
        let mut stats = FrameStats::default();
        let mut frame = Vec::with_capacity(elements.len());

        for element in elements.iter().filter_map(|&id| tree.get(id)) {
            let cached = previous
                .iter()
                .position(|d| d.name == element.name() && d.kind == element.kind());
            match cached {
                Some(position) => {
                    frame.push(previous.swap_remove(position));
                    stats.reused += 1;
                }
                None => {
                    frame.push(Drawable {
                        name: element.name().to_string(),
                        kind: element.kind(),
                        shape: element.kind().into(),
                    });
                    stats.created += 1;
                }
            }
        }
        stats.dropped = previous.len();

        debug!(?stats, "projected frame");
        self.frame = frame;
        self.stats = stats;
        Ok(self.frame.as_slice())
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Drawables of the last projected frame.
    pub fn frame(&self) -> &[Drawable] {
        &self.frame
    }
}
