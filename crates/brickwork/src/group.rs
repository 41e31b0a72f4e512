//! Block group layout: a vertical sequence of sibling block layouts.

use log::debug;

use crate::block::BlockLayout;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::node::{LayoutCore, LayoutNode};
use crate::primitives::Point;

/// Arranges sibling top-level block layouts in a single vertical sequence.
///
/// A block group is the canonical parent of a [`BlockLayout`]; blocks are
/// stacked top-to-bottom in append order and the group's size is the
/// bounding box of its blocks.
pub struct BlockGroupLayout {
    core: LayoutCore,
    block_layouts: Vec<BlockLayout>,
}

impl BlockGroupLayout {
    /// Create an empty, unparented block group layout.
    pub fn new() -> Self {
        Self {
            core: LayoutCore::new(),
            block_layouts: Vec::new(),
        }
    }

    /// Ordered view of the block layouts.
    pub fn block_layouts(&self) -> &[BlockLayout] {
        &self.block_layouts
    }

    /// Mutable access to the block layouts.
    pub fn block_layouts_mut(&mut self) -> &mut [BlockLayout] {
        &mut self.block_layouts
    }

    /// Append `block_layout`, parenting it to this group.
    ///
    /// The block layout must not already be parented elsewhere.
    pub fn append_block_layout(&mut self, mut block_layout: BlockLayout) {
        assert!(
            block_layout.core().parent().is_none(),
            "block layout is already parented"
        );
        block_layout.core_mut().set_parent(Some(self.core.id()));
        debug!(
            "block group layout {:?}: appended block layout {:?}",
            self.core.id(),
            block_layout.core().id()
        );
        self.block_layouts.push(block_layout);
    }

    /// Remove and return the block layout at `index`, clearing its parent.
    ///
    /// Later blocks shift down one position, preserving their relative
    /// order. The sequence is untouched when `index` is out of range.
    pub fn remove_block_layout_at(&mut self, index: usize) -> Result<BlockLayout, LayoutError> {
        let len = self.block_layouts.len();
        if index >= len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }
        let mut removed = self.block_layouts.remove(index);
        removed.core_mut().set_parent(None);
        debug!(
            "block group layout {:?}: removed block layout {:?} at index {}",
            self.core.id(),
            removed.core().id(),
            index
        );
        Ok(removed)
    }
}

impl LayoutNode for BlockGroupLayout {
    fn core(&self) -> &LayoutCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LayoutCore {
        &mut self.core
    }

    fn children(&self) -> Vec<&dyn LayoutNode> {
        self.block_layouts
            .iter()
            .map(|block_layout| block_layout as &dyn LayoutNode)
            .collect()
    }

    fn layout_children(&mut self, config: &LayoutConfig) {
        let mut y_offset = 0.0;

        for block_layout in &mut self.block_layouts {
            block_layout.layout_children(config);
            block_layout
                .core_mut()
                .set_relative_position(Point::new(0.0, y_offset));
            y_offset += block_layout.core().size().height;
        }

        let new_size = self.size_that_fits_for_child_layouts();
        self.core.set_size(new_size);
    }
}

impl Default for BlockGroupLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Size;
    use crate::test_util::{StubBlock, StubField};
    use crate::{InputArrangement, InputLayout};

    fn block_layout_with_field(width: f32, height: f32) -> BlockLayout {
        let mut block_layout = BlockLayout::new(StubBlock::new(InputArrangement::Inline));
        let mut input_layout = InputLayout::new();
        input_layout.append_field_layout(StubField::boxed(width, height));
        block_layout.append_input_layout(input_layout);
        block_layout
    }

    #[test]
    fn test_blocks_stack_top_to_bottom() {
        let mut group = BlockGroupLayout::new();
        group.append_block_layout(block_layout_with_field(10.0, 4.0));
        group.append_block_layout(block_layout_with_field(6.0, 8.0));

        group.layout_children(&LayoutConfig::default());

        let blocks = group.block_layouts();
        assert_eq!(blocks[0].relative_position(), Point::new(0.0, 0.0));
        assert_eq!(blocks[1].relative_position(), Point::new(0.0, 4.0));
        assert_eq!(group.size(), Size::new(10.0, 12.0));
    }

    #[test]
    fn test_append_parents_and_remove_unparents() {
        let mut group = BlockGroupLayout::new();
        group.append_block_layout(block_layout_with_field(1.0, 1.0));

        let child = &group.block_layouts()[0];
        assert_eq!(child.core().parent(), Some(group.core().id()));

        let removed = group
            .remove_block_layout_at(0)
            .expect("index 0 is in range");
        assert!(removed.core().parent().is_none());
        assert!(group.block_layouts().is_empty());

        let err = group.remove_block_layout_at(0).unwrap_err();
        assert_eq!(err, LayoutError::IndexOutOfRange { index: 0, len: 0 });
    }
}
