//! Toroidal arena geometry
//!
//! The arena's opposite edges are identified: leaving through one side
//! re-enters through the other. Distances are plain Euclidean and do NOT
//! take the wrap-around shortcut, so two bodies hugging opposite edges never
//! register as touching.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Wrap a scalar into `[0, bound)`, whatever the sign or magnitude of `value`
#[inline]
pub fn wrap(value: f32, bound: f32) -> f32 {
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round tiny negatives up to exactly `bound`
    if wrapped >= bound { 0.0 } else { wrapped }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Strict circle overlap: tangent circles do not collide, coincident centers do
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    distance(a_pos, b_pos) < a_radius + b_radius
}

/// Immutable play field bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the arena (ship spawn point)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position onto the torus
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }

    /// Whether a position satisfies the wrap invariant
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::consts::ARENA_WIDTH, crate::consts::ARENA_HEIGHT)
    }
}
