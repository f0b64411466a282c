//! Per-frame physics step
//!
//! Runs the stages in a fixed order on the shared world:
//! 1. Drop last frame's collision events and debug lines
//! 2. Euler-integrate every motion (the player's pre-move motion is kept for flight)
//! 3. Broad-phase collision detection
//! 4. Bounding-circle debug lines (debug mode only)
//! 5. Orbital flight override for the player (flight mode only)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::detect_collisions;
use super::debug::draw_bounding_circles;
use super::entity::Entity;
use super::integrator::integrate;
use super::motion::Motion;
use super::orbit::GravityField;
use super::store::ComponentStore;
use super::world::World;
use crate::consts::{WINDOW_HEIGHT_PX, WINDOW_WIDTH_PX};
use crate::step_seconds;

/// Per-frame input from the game loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    /// Wall-clock time since the previous frame (ms, non-negative)
    pub elapsed_ms: f32,
    /// Viewport size (pixels); reserved for wall collisions
    pub window_width_px: f32,
    pub window_height_px: f32,
}

impl StepInput {
    pub fn new(elapsed_ms: f32) -> Self {
        Self {
            elapsed_ms,
            ..Default::default()
        }
    }
}

impl Default for StepInput {
    fn default() -> Self {
        Self {
            elapsed_ms: 0.0,
            window_width_px: WINDOW_WIDTH_PX,
            window_height_px: WINDOW_HEIGHT_PX,
        }
    }
}

/// Flags and field parameters controlling the step
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Orbital flight for the player
    pub flight_mode: bool,
    /// Spawn bounding-circle debug lines
    pub debug_mode: bool,
    pub gravity: GravityField,
}

/// Summary of what a step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub collision_events: usize,
    pub debug_lines: usize,
    /// Player updated by the orbital integrator
    pub orbited: Option<Entity>,
}

/// Broken preconditions; the frame loop cannot continue
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    #[error("flight mode is active but no player entity exists")]
    MissingPlayer,
    #[error("player {0} has no motion component")]
    PlayerWithoutMotion(Entity),
}

/// The player and a copy of its motion
fn player_motion(world: &World) -> Result<(Entity, Motion), StepError> {
    let Some(player) = world.player() else {
        log::error!("flight mode enabled without a player");
        return Err(StepError::MissingPlayer);
    };
    match world.motions.get(player) {
        Some(motion) => Ok((player, *motion)),
        None => {
            log::error!("player {} has no motion", player);
            Err(StepError::PlayerWithoutMotion(player))
        }
    }
}

/// Advance the world by one frame
pub fn step(
    world: &mut World,
    input: &StepInput,
    config: &PhysicsConfig,
) -> Result<StepReport, StepError> {
    let mut report = StepReport::default();

    // Events and debug lines live for exactly one frame
    world.collisions.clear();
    world.clear_debug_lines();

    // Orbital flight starts from the player's motion before this frame's Euler move
    let orbit_start = if config.flight_mode {
        Some(player_motion(world)?)
    } else {
        None
    };

    integrate(&mut world.motions, input.elapsed_ms);

    report.collision_events = detect_collisions(&world.motions, &mut world.collisions);

    if config.debug_mode {
        report.debug_lines = draw_bounding_circles(world);
    }

    if let Some((player, mut motion)) = orbit_start {
        config
            .gravity
            .advance(&mut motion, step_seconds(input.elapsed_ms));
        world.motions.insert(player, motion);
        report.orbited = Some(player);
    }

    log::debug!(
        "step {:.1}ms: {} bodies, {} collision events, {} debug lines",
        input.elapsed_ms,
        world.motions.len(),
        report.collision_events,
        report.debug_lines
    );

    Ok(report)
}
