//! Per-entity kinematic state and its bounding geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, velocity, scale and facing of an entity
///
/// `scale` doubles as the size of the entity's axis-aligned box; its sign
/// encodes facing direction (a mirrored sprite has negative x scale).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    pub scale: Vec2,
    /// Facing direction (radians)
    pub angle: f32,
}

impl Motion {
    pub fn new(position: Vec2, velocity: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            velocity,
            scale,
            angle: 0.0,
        }
    }

    /// Bounding box extent (scale with facing sign stripped)
    #[inline]
    pub fn bounding_extent(&self) -> Vec2 {
        self.scale.abs()
    }

    /// Squared radius of the circle circumscribing the bounding box
    ///
    /// Over-approximates the box: two boxes may be reported as overlapping
    /// when only their circles touch.
    #[inline]
    pub fn radius_squared(&self) -> f32 {
        let half = self.bounding_extent() / 2.0;
        half.dot(half)
    }

    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.radius_squared().sqrt()
    }
}
