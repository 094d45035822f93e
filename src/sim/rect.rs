//! Axis-aligned rectangle geometry
//!
//! Every positioned entity (walls, gate, pickups, actors) is a `Rect` in
//! screen space: `x` grows to the right, `y` grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent (never negative)
    pub width: i32,
    /// Vertical extent (never negative)
    pub height: i32,
}

impl Rect {
    /// Create a rect; negative sizes collapse to zero
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Square box of the given size
    pub const fn square(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Top-left corner
    #[inline]
    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Copy of this rect with its top-left corner at `pos`
    #[inline]
    pub fn at(&self, pos: IVec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..*self
        }
    }

    /// Strict intersection test; boxes that only share an edge do not overlap.
    /// Zero-area boxes never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
