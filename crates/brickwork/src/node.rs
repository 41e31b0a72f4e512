//! Generic layout-node protocol shared by every node in the layout tree.
//!
//! A layout node is the geometric counterpart of one domain entity. It owns
//! its children, carries a size and a parent-relative position, and knows how
//! to recompute both. Parent back-references are stored as stable
//! [`LayoutId`] handles rather than pointers, so detaching a subtree can
//! never leave a dangling owning reference; resolve a handle back to a node
//! with [`find_descendant`].

use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use crate::config::LayoutConfig;
use crate::primitives::{Point, Size};

/// Stable identifier for a layout node.
///
/// Handles are process-unique and never reused, so a stored handle stays
/// unambiguous even after the node it named has been detached and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(u64);

impl LayoutId {
    /// Allocate a fresh handle.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-node layout state embedded by every [`LayoutNode`] implementor.
///
/// The core does not own the node's children (those live in the implementor,
/// which alone knows their concrete type); it owns everything else a node in
/// the tree needs: identity, the parent handle, geometry, and the revision
/// counter that makes size assignment observable.
#[derive(Debug)]
pub struct LayoutCore {
    id: LayoutId,
    parent: Option<LayoutId>,
    size: Size,
    relative_position: Point,
    revision: u64,
}

impl LayoutCore {
    /// Create state for a new, unparented node with zero geometry.
    pub fn new() -> Self {
        Self {
            id: LayoutId::next(),
            parent: None,
            size: Size::ZERO,
            relative_position: Point::ZERO,
            revision: 0,
        }
    }

    /// This node's handle.
    pub fn id(&self) -> LayoutId {
        self.id
    }

    /// Handle of the parent node, if this node is currently attached.
    pub fn parent(&self) -> Option<LayoutId> {
        self.parent
    }

    /// Attach to or detach from a parent.
    ///
    /// Only the containers in this crate set parents, as part of their
    /// append/remove operations; that keeps "a node has at most one parent"
    /// enforceable in one place.
    pub(crate) fn set_parent(&mut self, parent: Option<LayoutId>) {
        self.parent = parent;
    }

    /// This node's current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Assign a new size, clamped to non-negative dimensions.
    ///
    /// Assignment is observable: the revision counter is bumped whenever the
    /// stored value actually changes, so a consumer polling [`revision`]
    /// (e.g. a view deciding whether to repaint) can react to it. Returns
    /// whether the size changed.
    ///
    /// [`revision`]: LayoutCore::revision
    pub fn set_size(&mut self, size: Size) -> bool {
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        if self.size == size {
            return false;
        }
        trace!(
            "layout node {:?} resized {:?} -> {:?}",
            self.id,
            self.size,
            size
        );
        self.size = size;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// This node's position relative to its parent's origin.
    pub fn relative_position(&self) -> Point {
        self.relative_position
    }

    /// Move this node within its parent.
    pub fn set_relative_position(&mut self, position: Point) {
        self.relative_position = position;
    }

    /// Number of size changes so far; see [`set_size`](LayoutCore::set_size).
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for LayoutCore {
    fn default() -> Self {
        Self::new()
    }
}

/// The recursive layout protocol.
///
/// Implementors embed a [`LayoutCore`] and expose their children; the
/// protocol's aggregate queries are provided on top of that.
pub trait LayoutNode {
    /// The node's embedded layout state.
    fn core(&self) -> &LayoutCore;

    /// Mutable access to the node's embedded layout state.
    fn core_mut(&mut self) -> &mut LayoutCore;

    /// Ordered read-only view of this node's direct children.
    ///
    /// Leaves return an empty list.
    fn children(&self) -> Vec<&dyn LayoutNode> {
        Vec::new()
    }

    /// Recompute this node's own size and the geometry of every descendant.
    ///
    /// Implementations must recurse into each child before reading its size:
    /// a node is the sole authority on its own size, and a parent must never
    /// arrange children from stale geometry. Calling this twice without an
    /// intervening mutation yields identical geometry on every node.
    fn layout_children(&mut self, config: &LayoutConfig);

    /// Minimal bounding size of the current direct-child geometry.
    ///
    /// A pure function of already-computed child positions and sizes; it
    /// performs no recursion. A node with no children fits in zero area.
    fn size_that_fits_for_child_layouts(&self) -> Size {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for child in self.children() {
            let core = child.core();
            let position = core.relative_position();
            let size = core.size();
            width = width.max(position.x + size.width);
            height = height.max(position.y + size.height);
        }
        Size::new(width.max(0.0), height.max(0.0))
    }

    /// This node's current size.
    fn size(&self) -> Size {
        self.core().size()
    }

    /// This node's position relative to its parent's origin.
    fn relative_position(&self) -> Point {
        self.core().relative_position()
    }
}

/// Resolve a handle to a node within `root`'s subtree.
///
/// Searches depth-first, `root` included. Together with
/// [`LayoutCore::parent`] this supports upward traversal: walk parent
/// handles, resolving each against the tree root.
pub fn find_descendant<'a>(root: &'a dyn LayoutNode, id: LayoutId) -> Option<&'a dyn LayoutNode> {
    if root.core().id() == id {
        return Some(root);
    }

    for child in root.children() {
        if let Some(found) = find_descendant(child, id) {
            return Some(found);
        }
    }

    None
}
