//! Error types for layout-tree mutations.

use thiserror::Error;

/// Failures surfaced by layout-tree operations.
///
/// The taxonomy is deliberately narrow: the engine performs pure in-process
/// geometry computation, so every failure is a local precondition violation
/// reported to the caller before any mutation has taken place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A removal index was outside `[0, len)`.
    #[error("index {index} out of range for {len} child layout(s)")]
    IndexOutOfRange { index: usize, len: usize },
}
