//! Field layout contract.
//!
//! A field is an atomic editable value inside an input. Its on-screen size
//! is intrinsic to the field type (text metrics, glyph dimensions, ...) and
//! supplied by the implementor; the engine places fields but never computes
//! field-specific geometry.

use crate::node::LayoutNode;

/// Leaf layout for a single field.
///
/// Implementors assign their intrinsic size from their own
/// [`layout_children`](LayoutNode::layout_children) and have no children of
/// their own.
pub trait FieldLayout: LayoutNode + std::fmt::Debug {}
