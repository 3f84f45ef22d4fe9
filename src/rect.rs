//! Axis-aligned rectangle used for node regions, object extents and queries.

use crate::error::{QuadTreeError, Result};

/// Rectangle given by an origin corner and a size.
///
/// The origin is one corner of the rectangle; the quadrant rules in
/// [`Quadrants::classify`](crate::Quadrants::classify) compare it against the
/// node midpoints as-is, so no normalization to a minimum corner happens here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRect {
    /// Origin x coordinate
    pub x: f64,
    /// Origin y coordinate
    pub y: f64,
    /// Extent along x, non-negative when well formed
    pub width: f64,
    /// Extent along y, non-negative when well formed
    pub height: f64,
}

impl BoundingRect {
    /// Creates a rectangle from origin `(x, y)` and size `(width, height)`.
    ///
    /// No validation happens here; use [`validate`](Self::validate) or let
    /// [`QuadTree::insert`](crate::QuadTree::insert) reject ill-formed input.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Midpoint along x: the boundary between left and right quadrants.
    #[inline]
    pub fn vertical_mid(&self) -> f64 {
        self.x + self.width * 0.5
    }

    /// Midpoint along y: the boundary between bottom and top quadrants.
    #[inline]
    pub fn horizontal_mid(&self) -> f64 {
        self.y + self.height * 0.5
    }

    /// True when every component is finite and the size is non-negative.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// True when the rectangle is well formed and encloses a positive area.
    ///
    /// A tree domain must have area: a node without area classifies every
    /// object into all four quadrants, so each split copies every object
    /// four times over.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.is_well_formed() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns `self` if well formed.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::InvalidBounds`] when a size is negative or a
    /// component is not finite.
    pub fn validate(self) -> Result<Self> {
        if self.is_well_formed() {
            Ok(self)
        } else {
            Err(QuadTreeError::InvalidBounds(self))
        }
    }

    /// True when `other` lies entirely inside `self` (edges inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// The four quadrant rectangles in quadrant index order.
    pub(crate) fn quarters(&self) -> [Self; 4] {
        let sub_width = self.width * 0.5;
        let sub_height = self.height * 0.5;
        let (x, y) = (self.x, self.y);
        [
            Self::new(x + sub_width, y, sub_width, sub_height),
            Self::new(x, y, sub_width, sub_height),
            Self::new(x, y + sub_height, sub_width, sub_height),
            Self::new(x + sub_width, y + sub_height, sub_width, sub_height),
        ]
    }
}
