//! Orbital Flight - per-frame physics for a 2D arcade game
//!
//! Core modules:
//! - `sim`: Frame step (integration, broad-phase collisions, orbital flight)
//! - `settings`: Flight/debug flags and gravity field, persisted as JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Physics configuration constants
pub mod consts {
    use glam::Vec2;

    /// Gravitational constant of the central field
    pub const GRAVITATIONAL_CONSTANT: f32 = 1.0;
    /// Mass of the central planet
    pub const PLANET_MASS: f32 = 50_000.0;
    /// Planet center in window pixels
    pub const PLANET_CENTER: Vec2 = Vec2::new(600.0, 400.0);

    /// Default window dimensions (pixels)
    pub const WINDOW_WIDTH_PX: f32 = 1200.0;
    pub const WINDOW_HEIGHT_PX: f32 = 800.0;

    /// Debug line thickness is the entity's x scale divided by this
    pub const DEBUG_LINE_THICKNESS_DIVISOR: f32 = 10.0;

    /// Milliseconds per second, for elapsed-time conversion
    pub const MS_PER_SECOND: f32 = 1000.0;
}

/// Convert elapsed milliseconds to seconds
#[inline]
pub fn step_seconds(elapsed_ms: f32) -> f32 {
    elapsed_ms / consts::MS_PER_SECOND
}

/// Facing angle of a velocity vector (radians, atan2 convention)
#[inline]
pub fn facing_angle(velocity: Vec2) -> f32 {
    velocity.y.atan2(velocity.x)
}
