//! Shared stubs for the crate's unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::LayoutConfig;
use crate::events::ChangeSender;
use crate::field::FieldLayout;
use crate::model::{BlockModel, InputArrangement};
use crate::node::{LayoutCore, LayoutNode};
use crate::primitives::Size;

/// Field layout stub with a fixed (but externally adjustable) intrinsic
/// size.
#[derive(Debug)]
pub(crate) struct StubField {
    core: LayoutCore,
    intrinsic: Rc<Cell<Size>>,
}

impl StubField {
    pub(crate) fn boxed(width: f32, height: f32) -> Box<dyn FieldLayout> {
        Box::new(Self {
            core: LayoutCore::new(),
            intrinsic: Rc::new(Cell::new(Size::new(width, height))),
        })
    }

    /// A handle that can later resize a field built with
    /// [`boxed_shared`](StubField::boxed_shared).
    pub(crate) fn shared_intrinsic(size: Size) -> Rc<Cell<Size>> {
        Rc::new(Cell::new(size))
    }

    pub(crate) fn boxed_shared(intrinsic: Rc<Cell<Size>>) -> Box<dyn FieldLayout> {
        Box::new(Self {
            core: LayoutCore::new(),
            intrinsic,
        })
    }
}

impl LayoutNode for StubField {
    fn core(&self) -> &LayoutCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LayoutCore {
        &mut self.core
    }

    fn layout_children(&mut self, _config: &LayoutConfig) {
        let intrinsic = self.intrinsic.get();
        self.core.set_size(intrinsic);
    }
}

impl FieldLayout for StubField {}

/// Block model stub with a settable arrangement and a single-slot
/// subscriber.
pub(crate) struct StubBlock {
    arrangement: Cell<InputArrangement>,
    subscriber: RefCell<Option<ChangeSender>>,
}

impl StubBlock {
    pub(crate) fn new(arrangement: InputArrangement) -> Rc<Self> {
        Rc::new(Self {
            arrangement: Cell::new(arrangement),
            subscriber: RefCell::new(None),
        })
    }

    pub(crate) fn set_arrangement(&self, arrangement: InputArrangement) {
        self.arrangement.set(arrangement);
        self.notify();
    }

    pub(crate) fn notify(&self) {
        if let Some(sender) = self.subscriber.borrow().as_ref() {
            sender.block_did_change();
        }
    }
}

impl BlockModel for StubBlock {
    fn input_arrangement(&self) -> InputArrangement {
        self.arrangement.get()
    }

    fn subscribe_layout(&self, sender: ChangeSender) {
        *self.subscriber.borrow_mut() = Some(sender);
    }
}
