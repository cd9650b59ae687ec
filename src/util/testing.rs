use std::env;
use std::sync::Once;

use tracing::info;

use crate::config::Settings;
use crate::domain::{ElementId, ElementKind, ElementTree, TreeResult};
use crate::util::logging::init_logging;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        init_logging(&Settings::default());
        info!("Test Setup complete");
    });
}

/// Handles into the tree built by [`sample_tree`].
#[derive(Debug, Clone, Copy)]
pub struct SampleTree {
    pub parent: ElementId,
    pub child1: ElementId,
    pub child2: ElementId,
    pub child3: ElementId,
    pub child31: ElementId,
}

/// Builds the reference tree:
///
/// ```text
/// parent
/// ├── child-1
/// │   ├── child-12
/// │   ├── child-13
/// │   └── child-14
/// ├── child-2
/// └── child-3
///     ├── child-31
///     └── child-32
/// ```
pub fn sample_tree() -> TreeResult<(ElementTree, SampleTree)> {
    let mut tree = ElementTree::new("parent", ElementKind::Box);
    let parent = tree.root();

    let child1 = tree.add_child(parent, "child-1", ElementKind::Box)?;
    let child2 = tree.add_child(parent, "child-2", ElementKind::Box)?;
    let child3 = tree.add_child(parent, "child-3", ElementKind::Box)?;

    for name in ["child-12", "child-13", "child-14"] {
        tree.add_child(child1, name, ElementKind::Box)?;
    }
    let child31 = tree.add_child(child3, "child-31", ElementKind::Box)?;
    tree.add_child(child3, "child-32", ElementKind::Box)?;

    let handles = SampleTree {
        parent,
        child1,
        child2,
        child3,
        child31,
    };
    Ok((tree, handles))
}
