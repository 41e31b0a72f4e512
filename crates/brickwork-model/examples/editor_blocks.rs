//! Builds a small block program, lays it out, and prints the geometry tree.
//!
//! Run with `RUST_LOG=trace` to watch the structural and layout tracing:
//!
//! ```sh
//! RUST_LOG=trace cargo run -p brickwork-model --example editor_blocks
//! ```

use brickwork::{InputArrangement, LayoutConfig, LayoutNode, Spacing};
use brickwork_model::{build_group_layout, Block, Field, Input};

fn main() {
    env_logger::init();

    // x + 1
    let sum = Block::new();
    sum.append_input(
        Input::new()
            .with_field(Field::text_box("x"))
            .with_field(Field::label("+"))
            .with_field(Field::text_box("1")),
    );
    sum.set_input_arrangement(InputArrangement::Inline);

    // set x to (x + 1)
    let assign = Block::new();
    assign.append_input(
        Input::new()
            .with_field(Field::label("set"))
            .with_field(Field::text_box("x"))
            .with_field(Field::label("to"))
            .with_child_block(sum),
    );
    assign.set_input_arrangement(InputArrangement::Inline);

    // repeat 10 times { set x to (x + 1) }
    let repeat = Block::new();
    repeat.append_input(
        Input::new()
            .with_field(Field::label("repeat"))
            .with_field(Field::text_box("10"))
            .with_field(Field::label("times")),
    );
    repeat.append_input(Input::new().with_child_block(assign));

    let mut workspace = build_group_layout(&[repeat]);
    let config = LayoutConfig::default().with_block_margin(Spacing::all(8.0));
    workspace.layout_children(&config);

    print_tree(&workspace, 0);
}

fn print_tree(node: &dyn LayoutNode, depth: usize) {
    let core = node.core();
    println!(
        "{:indent$}{:?}  pos ({:>6.1}, {:>6.1})  size {:.1} x {:.1}",
        "",
        core.id(),
        core.relative_position().x,
        core.relative_position().y,
        core.size().width,
        core.size().height,
        indent = depth * 2
    );
    for child in node.children() {
        print_tree(child, depth + 1);
    }
}
