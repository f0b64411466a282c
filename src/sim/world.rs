//! The world: entity allocator plus component registries
//!
//! Every entity with a physical presence has exactly one `Motion`. Players and
//! debug lines are tagged through their own registries.

use glam::Vec2;

use super::collision::CollisionEvents;
use super::entity::{Entity, EntityAllocator};
use super::motion::Motion;
use super::store::{ComponentStore, Registry};

/// Marks the player-controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player;

/// Marks a transient bounding-circle visualization line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugLine;

/// All entities and components the frame step reads and writes
#[derive(Debug, Clone, Default)]
pub struct World {
    allocator: EntityAllocator,
    pub motions: Registry<Motion>,
    pub players: Registry<Player>,
    pub debug_lines: Registry<DebugLine>,
    pub collisions: CollisionEvents,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a plain moving body
    pub fn create_body(&mut self, position: Vec2, velocity: Vec2, scale: Vec2) -> Entity {
        let entity = self.allocator.allocate();
        self.motions
            .insert(entity, Motion::new(position, velocity, scale));
        entity
    }

    /// Spawn the player
    pub fn create_player(&mut self, position: Vec2, velocity: Vec2, scale: Vec2) -> Entity {
        let entity = self.create_body(position, velocity, scale);
        self.players.insert(entity, Player);
        entity
    }

    /// Spawn a stationary debug line centered at `position`
    pub fn create_line(&mut self, position: Vec2, scale: Vec2) -> Entity {
        let entity = self.create_body(position, Vec2::ZERO, scale);
        self.debug_lines.insert(entity, DebugLine);
        entity
    }

    /// First registered player, if any
    pub fn player(&self) -> Option<Entity> {
        self.players.entity_at(0)
    }

    /// Remove every component of `entity`
    pub fn remove_entity(&mut self, entity: Entity) {
        self.motions.remove(entity);
        self.players.remove(entity);
        self.debug_lines.remove(entity);
    }

    /// Remove all debug lines (and their motions)
    pub fn clear_debug_lines(&mut self) -> usize {
        let lines: Vec<Entity> = self.debug_lines.entities().to_vec();
        for &entity in &lines {
            self.remove_entity(entity);
        }
        lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_player_has_motion() {
        let mut world = World::new();
        let p = world.create_player(Vec2::new(1.0, 2.0), Vec2::ZERO, Vec2::ONE);
        assert_eq!(world.player(), Some(p));
        assert_eq!(
            world.motions.get(p).map(|m| m.position),
            Some(Vec2::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_no_player() {
        let mut world = World::new();
        world.create_body(Vec2::ZERO, Vec2::ZERO, Vec2::ONE);
        assert!(world.player().is_none());
    }

    #[test]
    fn test_clear_debug_lines_keeps_bodies() {
        let mut world = World::new();
        let body = world.create_body(Vec2::ZERO, Vec2::X, Vec2::ONE);
        world.create_line(Vec2::ZERO, Vec2::new(1.0, 10.0));
        world.create_line(Vec2::ZERO, Vec2::new(10.0, 1.0));
        assert_eq!(world.motions.len(), 3);

        assert_eq!(world.clear_debug_lines(), 2);
        assert_eq!(world.motions.len(), 1);
        assert!(world.debug_lines.is_empty());
        assert!(world.motions.contains(body));
    }

    #[test]
    fn test_remove_entity() {
        let mut world = World::new();
        let p = world.create_player(Vec2::ZERO, Vec2::ZERO, Vec2::ONE);
        world.remove_entity(p);
        assert!(world.player().is_none());
        assert!(world.motions.is_empty());
    }
}
