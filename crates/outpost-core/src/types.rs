//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Overlap region between two rectangles. Only produced for overlaps of
/// strictly positive area, so `width` and `height` are always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Rectangle of the given extents centered on `center`.
    pub fn from_center(center: DVec2, width: f64, height: f64) -> Self {
        Self {
            left: center.x - width / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y - height / 2.0,
            top: center.y + height / 2.0,
        }
    }

    /// Degenerate zero-size rectangle at a point.
    pub fn point(loc: DVec2) -> Self {
        Self {
            left: loc.x,
            right: loc.x,
            bottom: loc.y,
            top: loc.y,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Intersection with another rectangle, if it has strictly positive
    /// area. Edge-touching rectangles do not overlap.
    pub fn overlap(&self, other: &Rect) -> Option<Manifold> {
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);
        let bottom = self.bottom.max(other.bottom);
        let top = self.top.min(other.top);

        if left < right && bottom < top {
            Some(Manifold {
                left,
                right,
                bottom,
                top,
                width: right - left,
                height: top - bottom,
            })
        } else {
            None
        }
    }
}

/// Simulation time tracking. A tick is the atomic unit of progress,
/// advanced once per external update call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
