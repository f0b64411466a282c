//! Broad-phase collision detection
//!
//! Every entity's box is replaced by its circumscribed circle and all ordered
//! pairs are tested. This is deliberately coarse and O(n²): fine for the
//! handful of bodies on screen, and consumers rely on the loose bound.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::motion::Motion;
use super::store::ComponentStore;

/// A recorded overlap: `subject` touched `other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub subject: Entity,
    pub other: Entity,
}

/// Collision events of the current frame
///
/// Insertion-ordered and duplicate-permitting: one event per overlapping
/// neighbor per visit, never coalesced.
#[derive(Debug, Clone, Default)]
pub struct CollisionEvents {
    events: Vec<Collision>,
}

impl CollisionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event without checking for an existing one
    pub fn push_with_duplicates(&mut self, subject: Entity, other: Entity) {
        self.events.push(Collision { subject, other });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn as_slice(&self) -> &[Collision] {
        &self.events
    }

    /// Entities `subject` collided with this frame (in event order, with repeats)
    pub fn involving(&self, subject: Entity) -> impl Iterator<Item = Entity> + '_ {
        self.events
            .iter()
            .filter(move |c| c.subject == subject)
            .map(|c| c.other)
    }

    /// Whether any event pairs `subject` with `other`
    pub fn contains(&self, subject: Entity, other: Entity) -> bool {
        self.events
            .iter()
            .any(|c| c.subject == subject && c.other == other)
    }
}

/// Circle-vs-circle overlap of two motions' bounding circles
///
/// Passes when the center distance is below the larger of the two radii, so
/// it is really "is either center inside the other's circle".
pub fn collides(motion1: &Motion, motion2: &Motion) -> bool {
    let dp = motion1.position - motion2.position;
    let dist_squared = dp.dot(dp);
    // Naming is from motion2's point of view: motion1 is the "other"
    let other_r_squared = motion1.radius_squared();
    let my_r_squared = motion2.radius_squared();
    let r_squared = other_r_squared.max(my_r_squared);
    dist_squared < r_squared
}

/// Test every ordered pair of motions and record both directions of each hit
///
/// `(i, j)` and `(j, i)` are visited separately, so a single overlapping pair
/// yields four events. Returns the number of events appended.
pub fn detect_collisions<S: ComponentStore<Motion>>(
    motions: &S,
    events: &mut CollisionEvents,
) -> usize {
    let before = events.len();
    let n = motions.len();

    for i in 0..n {
        let (Some(entity_i), Some(motion_i)) = (motions.entity_at(i), motions.at(i)) else {
            continue;
        };
        for j in 0..n {
            if i == j {
                continue;
            }
            let (Some(entity_j), Some(motion_j)) = (motions.entity_at(j), motions.at(j)) else {
                continue;
            };
            if collides(motion_i, motion_j) {
                log::trace!("collision {} <-> {}", entity_i, entity_j);
                events.push_with_duplicates(entity_i, entity_j);
                events.push_with_duplicates(entity_j, entity_i);
            }
        }
    }

    events.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityAllocator;
    use crate::sim::store::Registry;
    use glam::Vec2;

    fn body(x: f32, y: f32, scale: Vec2) -> Motion {
        Motion::new(Vec2::new(x, y), Vec2::ZERO, scale)
    }

    #[test]
    fn test_collides_within_radius() {
        // 2x2 box -> radius sqrt(2) > 1
        let a = body(0.0, 0.0, Vec2::new(2.0, 2.0));
        let b = body(1.0, 0.0, Vec2::new(2.0, 2.0));
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
    }

    #[test]
    fn test_collides_uses_larger_radius() {
        // Tiny body inside a big body's circle still collides
        let big = body(0.0, 0.0, Vec2::new(100.0, 100.0));
        let tiny = body(60.0, 0.0, Vec2::new(1.0, 1.0));
        assert!(collides(&big, &tiny));
        assert!(collides(&tiny, &big));
    }

    #[test]
    fn test_touching_is_not_colliding() {
        // radius exactly 5, distance exactly 5: strict comparison
        let a = body(0.0, 0.0, Vec2::new(6.0, 8.0));
        let b = body(5.0, 0.0, Vec2::new(6.0, 8.0));
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_circle_over_approximates_box() {
        // 10x10 boxes: r ~ 7.07, so (7, 0) is inside and (6.5, 6.5) is not
        let a = body(0.0, 0.0, Vec2::new(10.0, 10.0));
        assert!(collides(&a, &body(7.0, 0.0, Vec2::new(10.0, 10.0))));
        assert!(!collides(&a, &body(6.5, 6.5, Vec2::new(10.0, 10.0))));
        // Circle reaches far beyond a thin box along its short axis
        let thin = body(0.0, 0.0, Vec2::new(20.0, 2.0));
        assert!(collides(&thin, &body(0.0, 8.0, Vec2::new(0.5, 0.5))));
    }

    #[test]
    fn test_detect_records_both_directions() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        let mut motions = Registry::new();
        motions.insert(a, body(0.0, 0.0, Vec2::new(2.0, 2.0)));
        motions.insert(b, body(1.0, 0.0, Vec2::new(2.0, 2.0)));

        let mut events = CollisionEvents::new();
        let added = detect_collisions(&motions, &mut events);

        assert_eq!(added, 4);
        assert!(events.contains(a, b));
        assert!(events.contains(b, a));
        // Visiting (a, b) then (b, a), each pushing both directions
        assert_eq!(
            events.as_slice(),
            &[
                Collision { subject: a, other: b },
                Collision { subject: b, other: a },
                Collision { subject: b, other: a },
                Collision { subject: a, other: b },
            ]
        );
    }

    #[test]
    fn test_detect_no_overlap_no_events() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        let mut motions = Registry::new();
        motions.insert(a, body(0.0, 0.0, Vec2::new(2.0, 2.0)));
        motions.insert(b, body(100.0, 0.0, Vec2::new(2.0, 2.0)));

        let mut events = CollisionEvents::new();
        assert_eq!(detect_collisions(&motions, &mut events), 0);
        assert!(events.is_empty());
        assert!(!events.contains(a, b));
        assert!(!events.contains(b, a));
    }

    #[test]
    fn test_three_way_overlap_keeps_duplicates() {
        let mut alloc = EntityAllocator::new();
        let ids: Vec<Entity> = (0..3).map(|_| alloc.allocate()).collect();
        let mut motions = Registry::new();
        for (k, &e) in ids.iter().enumerate() {
            motions.insert(e, body(k as f32, 0.0, Vec2::new(10.0, 10.0)));
        }

        let mut events = CollisionEvents::new();
        detect_collisions(&motions, &mut events);

        // 6 ordered pairs, 2 events each
        assert_eq!(events.len(), 12);
        // Each subject sees each neighbor twice
        let seen: Vec<Entity> = events.involving(ids[0]).collect();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen.iter().filter(|&&e| e == ids[1]).count(), 2);
        assert_eq!(seen.iter().filter(|&&e| e == ids[2]).count(), 2);
    }

    #[test]
    fn test_detect_appends_to_existing_events() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        let mut motions = Registry::new();
        motions.insert(a, body(0.0, 0.0, Vec2::new(4.0, 4.0)));
        motions.insert(b, body(0.5, 0.5, Vec2::new(4.0, 4.0)));

        let mut events = CollisionEvents::new();
        events.push_with_duplicates(a, a);
        assert_eq!(detect_collisions(&motions, &mut events), 4);
        assert_eq!(events.len(), 5);
    }
}
