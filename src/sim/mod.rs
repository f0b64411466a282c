//! Frame simulation module
//!
//! Everything the per-frame physics step touches lives here. The step is
//! single-threaded and runs to completion:
//! - Euler integration of every motion
//! - All-pairs broad-phase collisions
//! - Optional orbital flight for the player
//! - No rendering or platform dependencies

pub mod collision;
pub mod debug;
pub mod entity;
pub mod integrator;
pub mod motion;
pub mod orbit;
pub mod scene;
pub mod step;
pub mod store;
pub mod world;

pub use collision::{Collision, CollisionEvents, collides, detect_collisions};
pub use debug::draw_bounding_circles;
pub use entity::{Entity, EntityAllocator};
pub use integrator::integrate;
pub use motion::Motion;
pub use orbit::GravityField;
pub use step::{PhysicsConfig, StepError, StepInput, StepReport, step};
pub use store::{ComponentStore, Registry};
pub use world::{DebugLine, Player, World};
