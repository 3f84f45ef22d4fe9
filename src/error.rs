//! Error types.

use thiserror::Error;

use crate::BoundingRect;

/// Errors returned by quadtree construction and insertion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// Width or height is negative, or a component is not finite. Also
    /// returned for a tree domain without area.
    #[error("Invalid bounds: {0:?}")]
    InvalidBounds(BoundingRect),
}

/// Result type used throughout the crate.
pub type Result<T, E = QuadTreeError> = std::result::Result<T, E>;
