//! Orbital flight around the central planet
//!
//! The player's motion is integrated under a central field
//! `(center - p) * G*M / r^2`, whose magnitude is G*M/r. Gravity is
//! sampled at the current position and at a look-ahead position one step
//! along the current velocity, which tracks curved orbits much better than
//! the plain Euler update used for everything else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::Motion;
use crate::consts::{GRAVITATIONAL_CONSTANT, PLANET_CENTER, PLANET_MASS};
use crate::facing_angle;

/// Central point-mass gravity field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityField {
    /// Gravitational constant
    pub g: f32,
    /// Mass of the attractor
    pub mass: f32,
    /// Attractor position (pixels)
    pub center: Vec2,
}

impl Default for GravityField {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            mass: PLANET_MASS,
            center: PLANET_CENTER,
        }
    }
}

impl GravityField {
    /// Acceleration toward the center at `position`
    ///
    /// Not guarded at the center itself: the result is NaN/infinite there.
    #[inline]
    pub fn acceleration(&self, position: Vec2) -> Vec2 {
        let to_center = self.center - position;
        let r = (to_center.x * to_center.x + to_center.y * to_center.y).sqrt();
        to_center * ((self.g * self.mass) / (r * r))
    }

    /// Advance `motion` by `h` seconds, overwriting position, velocity and angle
    pub fn advance(&self, motion: &mut Motion, h: f32) {
        let xn = motion.position;
        let vn = motion.velocity;

        let accel = self.acceleration(xn) + self.acceleration(xn + vn * h) * h;

        motion.position = xn + h * vn;
        motion.velocity = vn + h * accel;
        motion.angle = facing_angle(motion.velocity);
    }
}
