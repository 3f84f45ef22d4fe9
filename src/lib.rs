//! # quadindex - Region Quadtree for Rectangles
//!
//! A dynamic spatial index over axis-aligned 2D rectangles. The domain is
//! partitioned recursively into quadrants as objects are inserted, so region
//! queries only walk the branches a query rectangle falls into.
//!
//! ## Features
//!
//! - **Incremental**: objects can be inserted at any time, between queries
//! - **Split on Overflow**: a node splits into four children once it holds more than `max_objects` objects
//! - **Straddling Objects**: an object overlapping several quadrants is referenced from each of them, never copied
//! - **Bounded Depth**: nodes at `max_levels` never split
//!
//! ## Quick Start
//!
//! ```rust
//! use quadindex::prelude::*;
//!
//! // Tree over an 800x800 domain, at most 8 levels deep
//! let mut tree = QuadTree::new(8, BoundingRect::new(0.0, 0.0, 800.0, 800.0)).unwrap();
//!
//! // Insert objects with their extents (x, y, width, height)
//! let a = tree.insert("a", BoundingRect::new(600.0, 600.0, 10.0, 10.0)).unwrap();
//! let b = tree.insert("b", BoundingRect::new(610.0, 600.0, 10.0, 10.0)).unwrap();
//! let c = tree.insert("c", BoundingRect::new(50.0, 50.0, 10.0, 10.0)).unwrap();
//!
//! // Query a region in the top-right quadrant
//! let found = tree.retrieve_unique(&BoundingRect::new(590.0, 590.0, 40.0, 40.0));
//! assert!(found.contains(&a));
//! assert!(found.contains(&b));
//! assert!(!found.contains(&c));
//!
//! // Start over
//! tree.clear();
//! assert!(tree.is_empty());
//! ```
//!
//! ## How It Works
//!
//! Each node compares a rectangle against its own midpoints and classifies it
//! into a set of quadrants:
//!
//! ```text
//! |2 | 3|  top (increasing y)
//! |1 | 0|  bottom
//! ```
//!
//! Inserting into a split node forwards the object to every quadrant it
//! touches. Retrieval collects the objects stored directly at every visited
//! node and descends only into the quadrants the query touches, so the
//! result is a candidate set: it can contain objects that do not overlap the
//! query, and the same object more than once. Use
//! [`QuadTree::retrieve_unique`] for a deduplicated list.

pub mod config;
pub mod error;
pub mod node;
pub mod prelude;
pub mod quadrant;
pub mod quadtree;
pub mod rect;

pub use config::QuadTreeConfig;
pub use error::{QuadTreeError, Result};
pub use node::{NodeEntry, Nodes, QuadNode};
pub use quadrant::Quadrants;
pub use quadtree::{IndexedObject, ObjectId, QuadTree};
pub use rect::BoundingRect;

#[cfg(test)]
mod integration_test;
