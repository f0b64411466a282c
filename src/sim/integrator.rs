//! Explicit Euler position update
//!
//! Motion scales with real elapsed time, not frame count, so entities move at
//! the same speed regardless of the machine's frame rate.

use super::motion::Motion;
use super::store::ComponentStore;
use crate::step_seconds;

/// Advance every motion by `velocity * elapsed_ms / 1000`
pub fn integrate<S: ComponentStore<Motion>>(motions: &mut S, elapsed_ms: f32) {
    let dt = step_seconds(elapsed_ms);
    for i in 0..motions.len() {
        if let Some(motion) = motions.at_mut(i) {
            motion.position += motion.velocity * dt;
        }
    }
}
