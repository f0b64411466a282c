//! Bounding-circle visualization
//!
//! Draws each body's collision radius as a cross of two axis-aligned lines.
//! Purely visual: the lines are spawned after collision detection.

use glam::Vec2;

use super::world::World;
use crate::consts::DEBUG_LINE_THICKNESS_DIVISOR;

/// Spawn a vertical and a horizontal line across every body's bounding circle
///
/// Only motions present before this call are visited, so the lines spawned
/// here are never themselves visualized. Returns the number of lines created.
pub fn draw_bounding_circles(world: &mut World) -> usize {
    let snapshot = world.motions.components().to_vec();
    let mut created = 0;

    for motion in &snapshot {
        let radius = motion.bounding_radius();
        let thickness = motion.scale.x / DEBUG_LINE_THICKNESS_DIVISOR;

        world.create_line(motion.position, Vec2::new(thickness, 2.0 * radius));
        world.create_line(motion.position, Vec2::new(2.0 * radius, thickness));
        created += 2;
    }

    created
}
