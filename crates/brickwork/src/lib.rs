//! # brickwork
//!
//! Model-agnostic layout engine for hierarchical block-programming editors.
//!
//! Given a tree of domain blocks, inputs, and fields, brickwork computes a
//! parallel tree of layout nodes carrying sizes and parent-relative
//! positions for a rendering layer to consume. The engine is purely
//! geometric: it knows nothing about styling, rendering, or gesture
//! handling, and it consumes the domain model only through the
//! [`BlockModel`] and [`FieldLayout`] contracts.
//!
//! ## Core Types
//!
//! - [`LayoutNode`] - the recursive protocol every layout node implements
//! - [`BlockLayout`] - arranges one block's inputs per its policy
//! - [`InputLayout`] - arranges one input's fields and nested block
//! - [`BlockGroupLayout`] - stacks sibling top-level blocks
//!
//! ## Model Contracts
//!
//! - [`BlockModel`] - what the engine reads from a domain block
//! - [`FieldLayout`] - leaf collaborator supplying a field's intrinsic size
//! - [`change_channel`] - one-way change notification from model to layout
//!
//! Geometry recomputation is explicit: structural mutations never re-lay
//! out the tree on their own. Call [`LayoutNode::layout_children`] on an
//! ancestor when geometry should catch up with the model. Recomputation is
//! idempotent and strictly bottom-up.
//!
//! Everything here is single-threaded and synchronous; callers that share a
//! layout tree across threads must serialize access externally.

mod block;
mod config;
mod error;
mod events;
mod field;
mod group;
mod input;
mod model;
mod node;
mod primitives;

pub use block::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use field::*;
pub use group::*;
pub use input::*;
pub use model::*;
pub use node::*;
pub use primitives::*;

#[cfg(test)]
mod test_util;
