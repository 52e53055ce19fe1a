//! Error types for the layout engine.

use crate::child::ChildId;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur in the layout engine.
///
/// Both variants are caller contract violations; there are no transient or
/// retryable failure modes. Arithmetic edge cases saturate instead of
/// erroring, and inconsistent size-requirement triples are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout was asked to operate on a container it is not bound to.
    ///
    /// A layout instance must not be shared across containers.
    #[error("layout is bound to container {expected:?}, not {requested:?}")]
    WrongTarget {
        /// The container this layout was constructed for.
        expected: ChildId,
        /// The container the caller passed in.
        requested: ChildId,
    },

    /// A numeric axis index outside the four recognized logical axes.
    #[error("invalid layout axis index {0}, expected 0..=3")]
    InvalidAxis(u8),
}
