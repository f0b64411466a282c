//! Seeded scene generation
//!
//! Builds a reproducible world: the player parked on a circular orbit around
//! the planet plus a field of drifting bodies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::orbit::GravityField;
use super::world::World;

/// Player sprite size (pixels); negative x mirrors the sprite
pub const PLAYER_SCALE: Vec2 = Vec2::new(-60.0, 40.0);
/// Player orbit radius around the planet center
pub const PLAYER_ORBIT_RADIUS: f32 = 250.0;
/// Size range of generated bodies
pub const BODY_MIN_SIZE: f32 = 20.0;
pub const BODY_MAX_SIZE: f32 = 60.0;
/// Max drift speed of generated bodies (pixels/s)
pub const BODY_MAX_SPEED: f32 = 120.0;

/// Speed of a circular orbit in `field`
///
/// The pull has magnitude G*M/r, so v^2/r = G*M/r and the speed is the same
/// at every radius.
pub fn circular_orbit_speed(field: &GravityField) -> f32 {
    (field.g * field.mass).sqrt()
}

/// Generate a world from `seed` with `count` bodies inside `viewport`
///
/// Returns the world and its player entity.
pub fn generate(seed: u64, count: usize, viewport: Vec2, field: &GravityField) -> (World, Entity) {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut world = World::new();

    // Start above the planet, moving right: a clockwise orbit on screen
    let offset = Vec2::new(0.0, -PLAYER_ORBIT_RADIUS);
    let speed = circular_orbit_speed(field);
    let player = world.create_player(field.center + offset, Vec2::new(speed, 0.0), PLAYER_SCALE);

    for _ in 0..count {
        let position = Vec2::new(
            rng.random_range(0.0..viewport.x),
            rng.random_range(0.0..viewport.y),
        );
        let heading: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(0.0..BODY_MAX_SPEED);
        let size = rng.random_range(BODY_MIN_SIZE..BODY_MAX_SIZE);
        // Bodies heading left face left
        let facing = if heading.cos() < 0.0 { -1.0 } else { 1.0 };

        world.create_body(
            position,
            Vec2::new(heading.cos(), heading.sin()) * speed,
            Vec2::new(facing * size, size),
        );
    }

    log::info!(
        "Scene seed {}: player {} + {} bodies in {}x{}",
        seed,
        player,
        count,
        viewport.x,
        viewport.y
    );

    (world, player)
}
