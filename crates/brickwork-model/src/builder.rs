//! Builds the parallel layout tree for a model tree.

use std::rc::Rc;

use brickwork::{BlockGroupLayout, BlockLayout, InputLayout};

use crate::block::Block;
use crate::field::FieldSlot;

/// Create the layout counterpart of `block`, recursing into nested blocks.
///
/// The returned layout is subscribed to `block` and ready for a
/// `layout_children` call; it stays unparented until a container appends
/// it. The model tree must be acyclic.
pub fn build_block_layout(block: &Rc<Block>) -> BlockLayout {
    let mut block_layout = BlockLayout::new(block.clone());

    for input in block.inputs().iter() {
        let mut input_layout = InputLayout::new();
        for field in input.fields() {
            input_layout.append_field_layout(Box::new(FieldSlot::new(field.clone())));
        }
        if let Some(child_block) = input.child_block() {
            input_layout.set_block_layout(build_block_layout(child_block));
        }
        block_layout.append_input_layout(input_layout);
    }

    block_layout
}

/// Lay `blocks` into a fresh group layout, in order.
pub fn build_group_layout(blocks: &[Rc<Block>]) -> BlockGroupLayout {
    let mut group_layout = BlockGroupLayout::new();
    for block in blocks {
        group_layout.append_block_layout(build_block_layout(block));
    }
    group_layout
}
