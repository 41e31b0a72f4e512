//! Input slots for the reference model.

use std::rc::Rc;

use crate::block::Block;
use crate::field::{Field, FieldHandle};

/// A slot within a block holding fields and, optionally, one nested block.
pub struct Input {
    fields: Vec<FieldHandle>,
    child_block: Option<Rc<Block>>,
}

impl Input {
    /// Create an empty input.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            child_block: None,
        }
    }

    /// Append `field` to this input
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field.handle());
        self
    }

    /// Attach `block` as this input's nested block
    pub fn with_child_block(mut self, block: Rc<Block>) -> Self {
        self.child_block = Some(block);
        self
    }

    /// This input's fields, in order.
    pub fn fields(&self) -> &[FieldHandle] {
        &self.fields
    }

    /// The nested block, if this input holds one.
    pub fn child_block(&self) -> Option<&Rc<Block>> {
        self.child_block.as_ref()
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
