//! Pairwise collision detector
//!
//! Every sweep tests all unordered pairs of collidable entities: O(n²), which
//! is fine for the tens to low hundreds of shapes an arena holds. Overlaps are
//! appended to a queue that game logic drains by tag pair.

use crate::ecs::{ComponentMask, EntityKey, EntityManager, Tag};
use crate::foundation::math::{distance, Vec2};

/// Two overlapping entities waiting to be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    /// First entity, in sweep order
    pub entity_a: EntityKey,
    /// Tag of the first entity
    pub tag_a: Tag,
    /// Second entity, in sweep order
    pub entity_b: EntityKey,
    /// Tag of the second entity
    pub tag_b: Tag,
}

impl CollisionPair {
    /// Order the pair so the entity tagged `first` comes first
    ///
    /// Returns `None` when the pair's tags are not `{first, second}`.
    pub fn oriented(&self, first: Tag, second: Tag) -> Option<(EntityKey, EntityKey)> {
        if self.tag_a == first && self.tag_b == second {
            Some((self.entity_a, self.entity_b))
        } else if self.tag_a == second && self.tag_b == first {
            Some((self.entity_b, self.entity_a))
        } else {
            None
        }
    }

    /// Whether either side of the pair is `key`
    pub fn involves(&self, key: EntityKey) -> bool {
        self.entity_a == key || self.entity_b == key
    }
}

struct Candidate {
    key: EntityKey,
    tag: Tag,
    position: Vec2,
    radius: f32,
}

/// Collision queue fed by sweeps and emptied by tag-pair drains
#[derive(Default)]
pub struct CollisionDetector {
    pending: Vec<CollisionPair>,
    candidates: Vec<Candidate>,
}

impl CollisionDetector {
    /// Create an empty detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan all live entities for new overlaps
    ///
    /// Entities need a transform, a shape and a collision component, and must
    /// be active. A pair overlaps when the sum of collision radii exceeds the
    /// distance between positions; it is queued unless both entities are
    /// already marked handled, and queuing marks both. Returns the number of
    /// pairs queued.
    pub fn sweep(&mut self, entities: &mut EntityManager) -> usize {
        self.candidates.clear();
        for &key in entities.live_entities() {
            if !entities.matches(key, ComponentMask::COLLIDABLE) {
                continue;
            }
            let components = entities.components();
            let (Some(transform), Some(collision), Some(record)) = (
                components.transforms.get(key),
                components.collisions.get(key),
                entities.record(key),
            ) else {
                continue;
            };
            self.candidates.push(Candidate {
                key,
                tag: record.tag(),
                position: transform.position,
                radius: collision.radius,
            });
        }

        let collisions = &mut entities.components_mut().collisions;
        let mut queued = 0;

        for (i, x) in self.candidates.iter().enumerate() {
            for y in &self.candidates[i + 1..] {
                if x.radius + y.radius <= distance(&x.position, &y.position) {
                    continue;
                }

                let both_handled = collisions.get(x.key).is_some_and(|c| c.is_handled())
                    && collisions.get(y.key).is_some_and(|c| c.is_handled());
                if both_handled {
                    continue;
                }

                for key in [x.key, y.key] {
                    if let Some(collision) = collisions.get_mut(key) {
                        collision.mark_handled();
                    }
                }
                self.pending.push(CollisionPair {
                    entity_a: x.key,
                    tag_a: x.tag,
                    entity_b: y.key,
                    tag_b: y.tag,
                });
                queued += 1;
            }
        }

        if queued > 0 {
            log::trace!("Sweep queued {} pair(s), {} pending", queued, self.pending.len());
        }
        queued
    }

    /// Deliver and remove every queued pair tagged `{first, second}`
    ///
    /// Pairs are visited in queue order and matched in either tag order; the
    /// handler always receives the `first`-tagged entity first. Each pair is
    /// delivered at most once. Returns the number delivered.
    pub fn drain<F>(&mut self, first: Tag, second: Tag, mut handler: F) -> usize
    where
        F: FnMut(EntityKey, EntityKey),
    {
        let mut delivered = 0;
        self.pending.retain(|pair| match pair.oriented(first, second) {
            Some((a, b)) => {
                handler(a, b);
                delivered += 1;
                false
            }
            None => true,
        });
        delivered
    }

    /// Drop pairs referencing entities that are no longer in storage
    pub fn retain_live(&mut self, entities: &EntityManager) {
        self.pending
            .retain(|pair| entities.record(pair.entity_a).is_some() && entities.record(pair.entity_b).is_some());
    }

    /// Pairs still waiting for a drain, in queue order
    pub fn pending(&self) -> &[CollisionPair] {
        &self.pending
    }

    /// Number of pairs waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no pairs are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forget every queued pair
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{CollisionComponent, ShapeComponent, TransformComponent};
    use crate::foundation::math::Color;

    fn spawn(manager: &mut EntityManager, tag: Tag, x: f32, y: f32, radius: f32) -> EntityKey {
        let key = manager.create_entity(tag);
        manager.insert(key, TransformComponent::at(Vec2::new(x, y)));
        manager.insert(key, ShapeComponent::new(radius, 8, Color::WHITE, Color::RED, 1.0));
        manager.insert(key, CollisionComponent::new(radius));
        key
    }

    #[test]
    fn test_overlap_queued_once() {
        let mut manager = EntityManager::new();
        let a = spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        let b = spawn(&mut manager, Tag::Bullet, 3.0, 0.0, 5.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.sweep(&mut manager), 1);
        assert_eq!(detector.sweep(&mut manager), 0);
        assert_eq!(detector.len(), 1);

        let pair = detector.pending()[0];
        assert!(pair.involves(a) && pair.involves(b));
        assert!(manager.get::<CollisionComponent>(a).unwrap().is_handled());
        assert!(manager.get::<CollisionComponent>(b).unwrap().is_handled());
    }

    #[test]
    fn test_touching_is_not_overlapping() {
        let mut manager = EntityManager::new();
        spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        spawn(&mut manager, Tag::Bullet, 10.0, 0.0, 5.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.sweep(&mut manager), 0);
    }

    #[test]
    fn test_reversed_drain_claims_pair() {
        let mut manager = EntityManager::new();
        let x = spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        let y = spawn(&mut manager, Tag::Bullet, 3.0, 0.0, 5.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        detector.sweep(&mut manager);

        let mut seen = Vec::new();
        let delivered = detector.drain(Tag::Bullet, Tag::Enemy, |first, second| seen.push((first, second)));
        assert_eq!(delivered, 1);
        assert_eq!(seen, vec![(y, x)]);
        assert!(detector.is_empty());

        let mut called = false;
        detector.drain(Tag::Enemy, Tag::Bullet, |_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn test_unmatched_pairs_persist() {
        let mut manager = EntityManager::new();
        spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        spawn(&mut manager, Tag::Player, 3.0, 0.0, 5.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        detector.sweep(&mut manager);
        assert_eq!(detector.drain(Tag::Enemy, Tag::Bullet, |_, _| {}), 0);
        assert_eq!(detector.len(), 1);
        assert_eq!(detector.drain(Tag::Player, Tag::Enemy, |_, _| {}), 1);
    }

    #[test]
    fn test_missing_components_excluded() {
        let mut manager = EntityManager::new();
        spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        let ghost = manager.create_entity(Tag::Bullet);
        manager.insert(ghost, TransformComponent::at(Vec2::new(1.0, 0.0)));
        manager.insert(ghost, CollisionComponent::new(5.0));
        manager.commit();

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.sweep(&mut manager), 0);
    }

    #[test]
    fn test_destroyed_entities_not_matched() {
        let mut manager = EntityManager::new();
        spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        let b = spawn(&mut manager, Tag::Bullet, 3.0, 0.0, 5.0);
        manager.commit();
        manager.destroy(b);

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.sweep(&mut manager), 0);
    }

    #[test]
    fn test_third_entity_still_pairs_with_handled_one() {
        let mut manager = EntityManager::new();
        let enemy = spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 10.0);
        spawn(&mut manager, Tag::Bullet, 5.0, 0.0, 2.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.sweep(&mut manager), 1);

        let late = spawn(&mut manager, Tag::Bullet, -5.0, 0.0, 2.0);
        manager.commit();
        assert_eq!(detector.sweep(&mut manager), 1);

        let mut hits = Vec::new();
        detector.drain(Tag::Enemy, Tag::Bullet, |e, b| hits.push((e, b)));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1], (enemy, late));
    }

    #[test]
    fn test_reset_handled_allows_requeue() {
        let mut manager = EntityManager::new();
        let a = spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        spawn(&mut manager, Tag::Player, 3.0, 0.0, 5.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        detector.sweep(&mut manager);
        detector.drain(Tag::Enemy, Tag::Player, |_, _| {});

        manager.get_mut::<CollisionComponent>(a).unwrap().reset_handled();
        assert_eq!(detector.sweep(&mut manager), 1);
    }

    #[test]
    fn test_retain_live_drops_removed_entities() {
        let mut manager = EntityManager::new();
        let a = spawn(&mut manager, Tag::Enemy, 0.0, 0.0, 5.0);
        spawn(&mut manager, Tag::Player, 3.0, 0.0, 5.0);
        manager.commit();

        let mut detector = CollisionDetector::new();
        detector.sweep(&mut manager);

        manager.destroy(a);
        detector.retain_live(&manager);
        assert_eq!(detector.len(), 1, "inactive but not yet removed");

        manager.commit();
        detector.retain_live(&manager);
        assert!(detector.is_empty());
    }
}
