//! Field kinds for the reference model, and their layout leaf.

use std::cell::RefCell;
use std::rc::Rc;

use brickwork::{FieldLayout, LayoutConfig, LayoutCore, LayoutNode, Size};

/// Shared handle to one field's data.
///
/// Fields are shared between the model tree and their [`FieldSlot`] so that
/// content edits are visible to the next layout pass without rebuilding.
pub type FieldHandle = Rc<RefCell<Field>>;

/// An atomic editable value inside an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Static text
    Label(String),
    /// Single-line editable text
    TextBox(String),
    /// A boolean toggle
    Checkbox(bool),
}

impl Field {
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    pub fn text_box(text: impl Into<String>) -> Self {
        Self::TextBox(text.into())
    }

    pub fn checkbox(checked: bool) -> Self {
        Self::Checkbox(checked)
    }

    /// Wrap this field in a shared handle.
    pub fn handle(self) -> FieldHandle {
        Rc::new(RefCell::new(self))
    }

    /// Intrinsic on-screen size for this field.
    ///
    /// The reference model uses flat per-glyph metrics; a real editor
    /// delegates to its text engine here.
    pub fn intrinsic_size(&self) -> Size {
        const GLYPH_WIDTH: f32 = 8.0;
        const LINE_HEIGHT: f32 = 18.0;
        const TEXT_BOX_CHROME: f32 = 12.0;
        const TEXT_BOX_MIN_GLYPHS: usize = 4;

        match self {
            Field::Label(text) => {
                Size::new(text.chars().count() as f32 * GLYPH_WIDTH, LINE_HEIGHT)
            }
            Field::TextBox(text) => Size::new(
                text.chars().count().max(TEXT_BOX_MIN_GLYPHS) as f32 * GLYPH_WIDTH
                    + TEXT_BOX_CHROME,
                LINE_HEIGHT,
            ),
            Field::Checkbox(_) => Size::new(LINE_HEIGHT, LINE_HEIGHT),
        }
    }
}

/// Layout leaf for one model field.
///
/// Reads the field's intrinsic size on every pass, so content edits are
/// picked up by the next layout without rebuilding the tree.
#[derive(Debug)]
pub struct FieldSlot {
    core: LayoutCore,
    field: FieldHandle,
}

impl FieldSlot {
    pub fn new(field: FieldHandle) -> Self {
        Self {
            core: LayoutCore::new(),
            field,
        }
    }

    /// The field this slot lays out.
    pub fn field(&self) -> &FieldHandle {
        &self.field
    }
}

impl LayoutNode for FieldSlot {
    fn core(&self) -> &LayoutCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LayoutCore {
        &mut self.core
    }

    fn layout_children(&mut self, _config: &LayoutConfig) {
        let intrinsic = self.field.borrow().intrinsic_size();
        self.core.set_size(intrinsic);
    }
}

impl FieldLayout for FieldSlot {}
