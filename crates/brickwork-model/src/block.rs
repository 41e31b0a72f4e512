//! The reference block type.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use brickwork::{BlockModel, ChangeSender, InputArrangement};
use log::debug;

use crate::field::Field;
use crate::input::Input;

/// A unit of visual code: an ordered list of inputs plus an arrangement
/// policy.
///
/// Blocks are shared (`Rc`) between the domain tree and the layout tree.
/// All mutation goes through `&self` methods, each of which notifies the
/// subscribed layout exactly once, synchronously, before returning.
pub struct Block {
    inner: RefCell<BlockData>,
}

struct BlockData {
    inputs: Vec<Input>,
    arrangement: InputArrangement,
    /// Single-slot layout subscriber; installing a new one replaces it.
    subscriber: Option<ChangeSender>,
}

impl Block {
    /// Create an empty block with the default (stacked) arrangement.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            inner: RefCell::new(BlockData {
                inputs: Vec::new(),
                arrangement: InputArrangement::default(),
                subscriber: None,
            }),
        })
    }

    /// The block's inputs, in order.
    pub fn inputs(&self) -> Ref<'_, Vec<Input>> {
        Ref::map(self.inner.borrow(), |inner| &inner.inputs)
    }

    /// Number of inputs.
    pub fn input_count(&self) -> usize {
        self.inner.borrow().inputs.len()
    }

    /// Append `input` to the end of the block.
    pub fn append_input(&self, input: Input) {
        self.inner.borrow_mut().inputs.push(input);
        self.notify();
    }

    /// Remove and return the input at `index`, or `None` when out of range.
    ///
    /// A failed removal mutates nothing and notifies nothing.
    pub fn remove_input(&self, index: usize) -> Option<Input> {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            if index >= inner.inputs.len() {
                return None;
            }
            inner.inputs.remove(index)
        };
        self.notify();
        Some(removed)
    }

    /// Change how the block's inputs are arranged.
    pub fn set_input_arrangement(&self, arrangement: InputArrangement) {
        self.inner.borrow_mut().arrangement = arrangement;
        self.notify();
    }

    /// Edit the field at (`input_index`, `field_index`) in place.
    ///
    /// Returns whether the field existed; notifies the subscribed layout
    /// once after a successful edit.
    pub fn edit_field(
        &self,
        input_index: usize,
        field_index: usize,
        edit: impl FnOnce(&mut Field),
    ) -> bool {
        let edited = {
            let inner = self.inner.borrow();
            match inner
                .inputs
                .get(input_index)
                .and_then(|input| input.fields().get(field_index))
            {
                Some(field) => {
                    edit(&mut *field.borrow_mut());
                    true
                }
                None => false,
            }
        };
        if edited {
            self.notify();
        }
        edited
    }

    /// Replace the text of a label or text-box field.
    pub fn set_field_text(
        &self,
        input_index: usize,
        field_index: usize,
        text: impl Into<String>,
    ) -> bool {
        let text = text.into();
        self.edit_field(input_index, field_index, |field| match field {
            Field::Label(current) | Field::TextBox(current) => *current = text,
            Field::Checkbox(_) => {}
        })
    }

    fn notify(&self) {
        if let Some(sender) = self.inner.borrow().subscriber.as_ref() {
            sender.block_did_change();
        }
    }
}

impl BlockModel for Block {
    fn input_arrangement(&self) -> InputArrangement {
        self.inner.borrow().arrangement
    }

    fn subscribe_layout(&self, sender: ChangeSender) {
        let mut inner = self.inner.borrow_mut();
        if inner.subscriber.is_some() {
            debug!("block: replacing layout subscriber");
        }
        inner.subscriber = Some(sender);
    }
}
