//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadindex::prelude::*;
//! ```

pub use crate::{BoundingRect, IndexedObject, ObjectId, QuadTree, QuadTreeConfig, QuadTreeError};
