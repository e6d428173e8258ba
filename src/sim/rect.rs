//! Axis-aligned rectangle geometry
//!
//! The only geometric primitive the simulation needs: screen-space AABBs
//! (y grows downward) with an open-interval overlap test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in playfield units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner (y grows downward)
    pub min: Vec2,
    /// Extent; both components non-negative
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect extent");
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// A zero-area rect has no interior and never overlaps anything
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Open-interval AABB overlap test: the rects' interiors must intersect
    /// on both axes, so touching edges do not count and an empty rect never
    /// overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.right()
            && other.min.x < self.right()
            && self.min.y < other.bottom()
            && other.min.y < self.bottom()
    }
}
