//! # brickwork-model
//!
//! Reference domain model for the brickwork layout engine: concrete block,
//! input, and field types implementing the engine's
//! [`BlockModel`](brickwork::BlockModel) and
//! [`FieldLayout`](brickwork::FieldLayout) contracts, plus a builder that
//! derives the parallel layout tree for a model tree.
//!
//! The model is deliberately small: it exists to exercise the engine and to
//! show how a real editor model plugs in, not to be one.

mod block;
mod builder;
mod field;
mod input;

pub use block::*;
pub use builder::*;
pub use field::*;
pub use input::*;
