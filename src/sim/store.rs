//! Component storage
//!
//! The frame step only needs a keyed, iterable store. `ComponentStore` is that
//! capability; `Registry` is the dense container the `World` uses.

use std::collections::HashMap;

use super::entity::Entity;

/// Keyed component storage with stable positional access
///
/// Positions `0..len()` enumerate the components in insertion order (until a
/// removal swaps the last element into the hole).
pub trait ComponentStore<T> {
    /// Number of stored components
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity owning the component at `index`
    fn entity_at(&self, index: usize) -> Option<Entity>;

    /// Component at `index`
    fn at(&self, index: usize) -> Option<&T>;

    fn at_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Component owned by `entity`
    fn get(&self, entity: Entity) -> Option<&T>;

    fn get_mut(&mut self, entity: Entity) -> Option<&mut T>;

    /// Insert or replace the component of `entity`, returning the old one
    fn insert(&mut self, entity: Entity, component: T) -> Option<T>;

    fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }
}

/// Dense component container: parallel entity/component vectors plus an
/// entity -> index map
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entities: Vec<Entity>,
    components: Vec<T>,
    index: HashMap<Entity, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            components: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities in storage order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Components in storage order
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Remove the component of `entity` (swap-remove)
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let idx = self.index.remove(&entity)?;
        let last = self.entities.len() - 1;
        self.entities.swap_remove(idx);
        let component = self.components.swap_remove(idx);
        if idx != last {
            // The former last element now lives at `idx`
            self.index.insert(self.entities[idx], idx);
        }
        Some(component)
    }
}

impl<T> ComponentStore<T> for Registry<T> {
    fn len(&self) -> usize {
        self.components.len()
    }

    fn entity_at(&self, index: usize) -> Option<Entity> {
        self.entities.get(index).copied()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.components.get(index)
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.components.get_mut(index)
    }

    fn get(&self, entity: Entity) -> Option<&T> {
        self.index.get(&entity).map(|&idx| &self.components[idx])
    }

    fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        match self.index.get(&entity) {
            Some(&idx) => Some(&mut self.components[idx]),
            None => None,
        }
    }

    fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        if let Some(&idx) = self.index.get(&entity) {
            return Some(std::mem::replace(&mut self.components[idx], component));
        }
        self.index.insert(entity, self.components.len());
        self.entities.push(entity);
        self.components.push(component);
        None
    }
}
