//! Axis-aligned boxes for walls and sprite hit-volumes
//!
//! Screen coordinates: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    /// Rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `side` centered on `center`
    pub fn centered(center: Vec2, side: f32) -> Self {
        let size = Vec2::splat(side);
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}
