//! Contracts the layout engine consumes from the domain model.
//!
//! The engine never sees a concrete block type: everything it needs from
//! the domain side goes through [`BlockModel`]. The reference implementation
//! lives in the `brickwork-model` crate.

use crate::events::ChangeSender;

/// How a block arranges its inputs.
///
/// A tagged policy rather than a boolean flag, so that further arrangements
/// (e.g. a wrapping flow) are an additive change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputArrangement {
    /// Inputs are placed left-to-right on a single row.
    Inline,
    /// Inputs are placed top-to-bottom in a single column.
    Stacked,
}

impl Default for InputArrangement {
    fn default() -> Self {
        Self::Stacked
    }
}

/// What a [`BlockLayout`](crate::BlockLayout) needs from its domain block.
///
/// This trait is intentionally minimal and model-agnostic: core layout must
/// not depend on any concrete block representation.
pub trait BlockModel {
    /// The block's current arrangement policy.
    ///
    /// Read on every layout pass, never cached by the layout.
    fn input_arrangement(&self) -> InputArrangement;

    /// Install `sender` as the block's sole layout subscriber.
    ///
    /// A block has at most one active subscriber at a time; installing a new
    /// one replaces the previous one. The block must call
    /// [`ChangeSender::block_did_change`] exactly once per logical change,
    /// synchronously, before the mutating call returns.
    fn subscribe_layout(&self, sender: ChangeSender);
}
