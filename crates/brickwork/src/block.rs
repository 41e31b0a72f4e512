//! Block layout: arranges one block's input layouts per its policy.

use std::rc::Rc;

use log::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::events::{change_channel, ChangeReceiver};
use crate::field::FieldLayout;
use crate::input::InputLayout;
use crate::model::{BlockModel, InputArrangement};
use crate::node::{LayoutCore, LayoutNode};
use crate::primitives::{Point, Size};

/// Stores the on-screen geometry for one domain block.
///
/// A block layout owns the layout counterparts of its block's inputs, in
/// input order — the order is semantically meaningful, determining both
/// vertical stacking order and inline left-to-right order.
pub struct BlockLayout {
    core: LayoutCore,
    /// The block to lay out. Shared with the domain model, never mutated
    /// from the layout side.
    block: Rc<dyn BlockModel>,
    input_layouts: Vec<InputLayout>,
    /// Receiving half of the block's change channel.
    changes: ChangeReceiver,
}

impl std::fmt::Debug for BlockLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockLayout")
            .field("core", &self.core)
            .field("input_layouts", &self.input_layouts)
            .field("changes", &self.changes)
            .finish_non_exhaustive()
    }
}

impl BlockLayout {
    /// Create the layout for `block` and subscribe to its change
    /// notifications, replacing any previous subscriber.
    ///
    /// The new layout starts unparented; it becomes someone's child when a
    /// container appends it.
    pub fn new(block: Rc<dyn BlockModel>) -> Self {
        let (sender, receiver) = change_channel();
        block.subscribe_layout(sender);
        Self {
            core: LayoutCore::new(),
            block,
            input_layouts: Vec::new(),
            changes: receiver,
        }
    }

    /// The block this layout mirrors.
    pub fn block(&self) -> &Rc<dyn BlockModel> {
        &self.block
    }

    /// Ordered view of the input layouts.
    pub fn input_layouts(&self) -> &[InputLayout] {
        &self.input_layouts
    }

    /// Mutable access to the input layouts.
    ///
    /// The slice cannot grow or shrink; structural changes go through
    /// [`append_input_layout`](BlockLayout::append_input_layout) and
    /// [`remove_input_layout_at`](BlockLayout::remove_input_layout_at).
    pub fn input_layouts_mut(&mut self) -> &mut [InputLayout] {
        &mut self.input_layouts
    }

    /// Append `input_layout`, parenting it to this block layout.
    ///
    /// Structural only: no geometry is recomputed until the next
    /// [`layout_children`](LayoutNode::layout_children) call. The input
    /// layout must not already be parented elsewhere; silently reparenting
    /// would corrupt the old parent's child list.
    pub fn append_input_layout(&mut self, mut input_layout: InputLayout) {
        assert!(
            input_layout.core().parent().is_none(),
            "input layout is already parented"
        );
        input_layout.core_mut().set_parent(Some(self.core.id()));
        debug!(
            "block layout {:?}: appended input layout {:?}",
            self.core.id(),
            input_layout.core().id()
        );
        self.input_layouts.push(input_layout);
    }

    /// Remove and return the input layout at `index`, clearing its parent.
    ///
    /// Later inputs shift down one position, preserving their relative
    /// order. The sequence is untouched when `index` is out of range.
    /// Ownership of the removed subtree transfers to the caller; the
    /// subtree itself is not torn down.
    pub fn remove_input_layout_at(&mut self, index: usize) -> Result<InputLayout, LayoutError> {
        let len = self.input_layouts.len();
        if index >= len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }
        let mut removed = self.input_layouts.remove(index);
        removed.core_mut().set_parent(None);
        debug!(
            "block layout {:?}: removed input layout {:?} at index {}",
            self.core.id(),
            removed.core().id(),
            index
        );
        Ok(removed)
    }

    /// All field layouts under this block, in input order.
    ///
    /// The concatenation of each input layout's own flattened field
    /// sequence; callers that need every editable leaf under a block get
    /// them without knowing about the input tier.
    pub fn field_layouts(&self) -> Vec<&dyn FieldLayout> {
        self.input_layouts
            .iter()
            .flat_map(|input_layout| {
                input_layout
                    .field_layouts()
                    .iter()
                    .map(|field_layout| &**field_layout)
            })
            .collect()
    }

    /// Whether unacknowledged change notifications from the block are
    /// pending.
    pub fn has_pending_changes(&self) -> bool {
        self.changes.has_pending()
    }

    /// Acknowledge pending change notifications, returning how many had
    /// arrived.
    ///
    /// Receipt is currently the only handling; reacting to a change (dirty
    /// marking, forwarding an event to a view) is a reserved extension
    /// point.
    pub fn take_pending_changes(&self) -> u64 {
        self.changes.take_pending()
    }
}

impl LayoutNode for BlockLayout {
    fn core(&self) -> &LayoutCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LayoutCore {
        &mut self.core
    }

    fn children(&self) -> Vec<&dyn LayoutNode> {
        self.input_layouts
            .iter()
            .map(|input_layout| input_layout as &dyn LayoutNode)
            .collect()
    }

    fn layout_children(&mut self, config: &LayoutConfig) {
        // Policy is read from the block on every pass, never cached.
        let arrangement = self.block.input_arrangement();

        let mut x_offset = 0.0;
        let mut y_offset = 0.0;
        let mut maximum_input_width = 0.0f32;

        for input_layout in &mut self.input_layouts {
            // Bottom-up: an input's size is only valid after its own pass.
            input_layout.layout_children(config);
            input_layout
                .core_mut()
                .set_relative_position(Point::new(x_offset, y_offset));

            let input_size = input_layout.core().size();
            match arrangement {
                InputArrangement::Inline => {
                    x_offset += input_size.width;
                }
                InputArrangement::Stacked => {
                    maximum_input_width = maximum_input_width.max(input_size.width);
                    y_offset += input_size.height;
                }
            }
        }

        if arrangement == InputArrangement::Stacked && config.normalize_stacked_width {
            // Re-flow the column so every input spans the widest one
            for input_layout in &mut self.input_layouts {
                input_layout.normalize_width(maximum_input_width);
            }
        }

        let fitted = self.size_that_fits_for_child_layouts();
        let new_size = Size::new(
            fitted.width + config.block_margin.get_horizontal(),
            fitted.height + config.block_margin.get_vertical(),
        );
        self.core.set_size(new_size);
    }
}
