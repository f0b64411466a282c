//! Entity identifiers
//!
//! An entity carries no data of its own; it is only a key into component
//! registries.

use serde::{Deserialize, Serialize};

/// Opaque entity handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(u64);

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh entity ids in increasing order
///
/// Ids are never reused; debug mode burns two per body every frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityAllocator {
    next_id: u64,
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(a, Entity(1));
    }

    #[test]
    fn test_allocator_runs_past_u32() {
        let mut alloc = EntityAllocator {
            next_id: u64::from(u32::MAX),
        };
        let a = alloc.allocate();
        let b = alloc.allocate();
        let c = alloc.allocate();
        assert_eq!(a, Entity(u64::from(u32::MAX)));
        assert_eq!(b, Entity(u64::from(u32::MAX) + 1));
        assert!(c > b && b > a);
    }
}
