//! Layout for a single input slot: its fields and an optional nested block.

use log::debug;

use crate::block::BlockLayout;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::field::FieldLayout;
use crate::node::{LayoutCore, LayoutNode};
use crate::primitives::{Point, Size};

/// Lays out one input's field layouts and, if the input holds a nested
/// block, that block's layout, into a single bounding box.
///
/// Fields are placed left-to-right from the input's origin; the nested
/// block, if any, follows the last field. The input's own size is the
/// bounding box of everything it placed.
#[derive(Debug)]
pub struct InputLayout {
    core: LayoutCore,
    field_layouts: Vec<Box<dyn FieldLayout>>,
    block_layout: Option<BlockLayout>,
}

impl InputLayout {
    /// Create an empty, unparented input layout.
    pub fn new() -> Self {
        Self {
            core: LayoutCore::new(),
            field_layouts: Vec::new(),
            block_layout: None,
        }
    }

    /// Ordered view of this input's own field layouts.
    ///
    /// This is the flattening unit consumed by
    /// [`BlockLayout::field_layouts`]: it does not descend into a nested
    /// block's fields.
    pub fn field_layouts(&self) -> &[Box<dyn FieldLayout>] {
        &self.field_layouts
    }

    /// Mutable access to this input's field layouts.
    ///
    /// The slice cannot grow or shrink; structural changes go through
    /// [`append_field_layout`](InputLayout::append_field_layout) and
    /// [`remove_field_layout_at`](InputLayout::remove_field_layout_at).
    pub fn field_layouts_mut(&mut self) -> &mut [Box<dyn FieldLayout>] {
        &mut self.field_layouts
    }

    /// Append `field_layout`, parenting it to this input.
    ///
    /// The field layout must not already be parented elsewhere; silently
    /// reparenting would corrupt the old parent's child list.
    pub fn append_field_layout(&mut self, mut field_layout: Box<dyn FieldLayout>) {
        assert!(
            field_layout.core().parent().is_none(),
            "field layout is already parented"
        );
        field_layout.core_mut().set_parent(Some(self.core.id()));
        debug!(
            "input layout {:?}: appended field layout {:?}",
            self.core.id(),
            field_layout.core().id()
        );
        self.field_layouts.push(field_layout);
    }

    /// Remove and return the field layout at `index`, clearing its parent.
    ///
    /// Later fields shift down one position, preserving their relative
    /// order. The sequence is untouched when `index` is out of range.
    pub fn remove_field_layout_at(
        &mut self,
        index: usize,
    ) -> Result<Box<dyn FieldLayout>, LayoutError> {
        let len = self.field_layouts.len();
        if index >= len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }
        let mut removed = self.field_layouts.remove(index);
        removed.core_mut().set_parent(None);
        debug!(
            "input layout {:?}: removed field layout {:?} at index {}",
            self.core.id(),
            removed.core().id(),
            index
        );
        Ok(removed)
    }

    /// The nested block layout, if this input holds one.
    pub fn block_layout(&self) -> Option<&BlockLayout> {
        self.block_layout.as_ref()
    }

    /// Mutable access to the nested block layout, if any.
    pub fn block_layout_mut(&mut self) -> Option<&mut BlockLayout> {
        self.block_layout.as_mut()
    }

    /// Attach `block_layout` as the nested block, parenting it to this
    /// input. Returns the previously attached block layout, unparented, if
    /// there was one.
    pub fn set_block_layout(&mut self, mut block_layout: BlockLayout) -> Option<BlockLayout> {
        assert!(
            block_layout.core().parent().is_none(),
            "block layout is already parented"
        );
        block_layout.core_mut().set_parent(Some(self.core.id()));
        let mut previous = self.block_layout.replace(block_layout);
        if let Some(previous) = &mut previous {
            previous.core_mut().set_parent(None);
        }
        previous
    }

    /// Detach and return the nested block layout, unparented.
    pub fn take_block_layout(&mut self) -> Option<BlockLayout> {
        let mut removed = self.block_layout.take();
        if let Some(removed) = &mut removed {
            removed.core_mut().set_parent(None);
        }
        removed
    }

    /// Widen this input to `width` if it is currently narrower.
    ///
    /// Used by the stacked-column re-flow pass; never shrinks, so repeating
    /// the pass is a no-op.
    pub(crate) fn normalize_width(&mut self, width: f32) {
        let size = self.core.size();
        if width > size.width {
            self.core.set_size(Size::new(width, size.height));
        }
    }
}

impl LayoutNode for InputLayout {
    fn core(&self) -> &LayoutCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LayoutCore {
        &mut self.core
    }

    fn children(&self) -> Vec<&dyn LayoutNode> {
        let mut children: Vec<&dyn LayoutNode> = self
            .field_layouts
            .iter()
            .map(|field_layout| &**field_layout as &dyn LayoutNode)
            .collect();
        if let Some(block_layout) = &self.block_layout {
            children.push(block_layout);
        }
        children
    }

    fn layout_children(&mut self, config: &LayoutConfig) {
        let mut x_offset = 0.0;

        for field_layout in &mut self.field_layouts {
            field_layout.layout_children(config);
            field_layout
                .core_mut()
                .set_relative_position(Point::new(x_offset, 0.0));
            x_offset += field_layout.core().size().width;
        }

        if let Some(block_layout) = &mut self.block_layout {
            block_layout.layout_children(config);
            block_layout
                .core_mut()
                .set_relative_position(Point::new(x_offset, 0.0));
        }

        let new_size = self.size_that_fits_for_child_layouts();
        self.core.set_size(new_size);
    }
}

impl Default for InputLayout {
    fn default() -> Self {
        Self::new()
    }
}
