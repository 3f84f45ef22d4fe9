//! Quadrant numbering and the midpoint classification rule.
//!
//! ```text
//! -------
//! |2 | 3|  top (increasing y)
//! -------
//! |1 | 0|  bottom
//! -------
//! ```

use bitflags::bitflags;

use crate::BoundingRect;

bitflags! {
    /// Set of quadrants a rectangle was classified into.
    ///
    /// Iteration yields quadrants in ascending index order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// Quadrant 0
        const BOTTOM_RIGHT = 1 << 0;
        /// Quadrant 1
        const BOTTOM_LEFT = 1 << 1;
        /// Quadrant 2
        const TOP_LEFT = 1 << 2;
        /// Quadrant 3
        const TOP_RIGHT = 1 << 3;
    }
}

impl Quadrants {
    /// Classifies `rect` against the midpoints of `node`.
    ///
    /// Vertical placement is one of top, bottom or straddling (straddling
    /// wins over the other two). Horizontal placement is checked as spans
    /// both halves, then right only, then left only. Combinations outside
    /// that table produce the empty set.
    pub fn classify(node: &BoundingRect, rect: &BoundingRect) -> Self {
        let vertical_mid = node.vertical_mid();
        let horizontal_mid = node.horizontal_mid();

        let straddles = rect.y + rect.height >= horizontal_mid && rect.y <= horizontal_mid;
        let top = !straddles && rect.y >= horizontal_mid;
        let bottom = !straddles && rect.y - rect.height <= horizontal_mid;

        let pick = |on_top: Self, on_bottom: Self| {
            if top {
                on_top
            } else if bottom {
                on_bottom
            } else if straddles {
                on_top | on_bottom
            } else {
                Self::empty()
            }
        };

        if rect.x + rect.width >= vertical_mid && rect.x <= vertical_mid {
            pick(
                Self::TOP_LEFT | Self::TOP_RIGHT,
                Self::BOTTOM_RIGHT | Self::BOTTOM_LEFT,
            )
        } else if rect.x >= vertical_mid {
            pick(Self::TOP_RIGHT, Self::BOTTOM_RIGHT)
        } else if rect.x + rect.width <= vertical_mid {
            pick(Self::TOP_LEFT, Self::BOTTOM_LEFT)
        } else {
            Self::empty()
        }
    }

    /// Child slot indices (0..4) of the quadrants in this set, ascending.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        self.iter().map(|q| q.bits().trailing_zeros() as usize)
    }

    /// Quadrant for a child slot index, `None` outside `0..4`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 4).then(|| Self::from_bits_retain(1 << index))
    }
}
