//! Model mutation -> notification -> re-layout consistency across the crate
//! boundary.

use brickwork::{InputArrangement, InputLayout, LayoutConfig, LayoutNode};
use brickwork_model::{build_block_layout, Block, Field, FieldSlot, Input};

#[test]
fn test_field_edit_grows_the_root_block() {
    let sum = Block::new();
    sum.set_input_arrangement(InputArrangement::Inline);
    sum.append_input(Input::new().with_field(Field::text_box("x")));

    let outer = Block::new();
    outer.set_input_arrangement(InputArrangement::Inline);
    outer.append_input(
        Input::new()
            .with_field(Field::label("print"))
            .with_child_block(sum.clone()),
    );

    let mut layout = build_block_layout(&outer);
    let config = LayoutConfig::default();
    layout.layout_children(&config);
    let before = layout.size();

    // Four more glyphs in the nested text box (8 wide each)
    assert!(sum.set_field_text(0, 0, "abcdefgh"));
    let nested = layout.input_layouts()[0]
        .block_layout()
        .expect("nested layout");
    assert!(nested.has_pending_changes());

    layout.layout_children(&config);
    assert_eq!(layout.size().width, before.width + 32.0);
    assert_eq!(layout.size().height, before.height);
}

#[test]
fn test_structural_mutation_is_relayed_and_recomputed() {
    let block = Block::new();
    block.append_input(Input::new().with_field(Field::label("first")));

    let mut layout = build_block_layout(&block);
    let config = LayoutConfig::default();
    layout.layout_children(&config);
    let before = layout.size();

    // Model first, then the layout counterpart, then a recompute
    block.append_input(Input::new().with_field(Field::label("second")));
    assert_eq!(layout.take_pending_changes(), 1);

    let mut input_layout = InputLayout::new();
    {
        let inputs = block.inputs();
        for field in inputs[1].fields() {
            input_layout.append_field_layout(Box::new(FieldSlot::new(field.clone())));
        }
    }
    layout.append_input_layout(input_layout);
    layout.layout_children(&config);

    assert_eq!(layout.input_layouts().len(), 2);
    assert!(layout.size().height > before.height);
    // Stacked column: both inputs share the widest input's width
    assert_eq!(
        layout.input_layouts()[0].size().width,
        layout.input_layouts()[1].size().width
    );
}

#[test]
fn test_each_mutation_notifies_exactly_once() {
    let block = Block::new();
    let layout = build_block_layout(&block);
    assert_eq!(layout.take_pending_changes(), 0);

    block.append_input(Input::new().with_field(Field::label("a")));
    assert_eq!(layout.take_pending_changes(), 1);

    block.set_input_arrangement(InputArrangement::Inline);
    block.set_input_arrangement(InputArrangement::Stacked);
    assert_eq!(layout.take_pending_changes(), 2);

    assert!(block.remove_input(0).is_some());
    assert_eq!(layout.take_pending_changes(), 1);

    // A failed mutation leaves the model untouched and notifies nothing
    assert!(block.remove_input(5).is_none());
    assert_eq!(layout.take_pending_changes(), 0);
}

#[test]
fn test_rebuilding_the_layout_replaces_the_subscription() {
    let block = Block::new();
    block.append_input(Input::new().with_field(Field::label("a")));

    let stale = build_block_layout(&block);
    let fresh = build_block_layout(&block);

    block.set_field_text(0, 0, "b");

    assert!(!stale.has_pending_changes());
    assert_eq!(fresh.take_pending_changes(), 1);
}
