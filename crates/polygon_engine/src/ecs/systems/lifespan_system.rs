//! Lifespan system
//!
//! Counts lifespans down once per pass, applies the fade/blink effect inside
//! the action window and destroys entities whose countdown ran out.

use crate::ecs::components::LifespanStep;
use crate::ecs::{ComponentMask, EntityKey, EntityManager};
use crate::foundation::time::Ticks;

/// System that ages mortal entities
#[derive(Default)]
pub struct LifespanSystem {
    snapshot: Vec<EntityKey>,
    expired: Vec<EntityKey>,
}

impl LifespanSystem {
    /// Create a new lifespan system
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every live entity with a shape and a lifespan by one tick
    ///
    /// Expired entities are destroyed immediately and physically removed at
    /// the next commit. Returns the number destroyed.
    pub fn update(&mut self, entities: &mut EntityManager, ticks: Ticks) -> usize {
        let half_cycle = ticks.half_second();

        self.snapshot.clear();
        self.snapshot.extend_from_slice(entities.live_entities());
        self.expired.clear();

        for &key in &self.snapshot {
            if !entities.matches(key, ComponentMask::MORTAL) {
                continue;
            }
            let components = entities.components_mut();
            let (Some(lifespan), Some(shape)) =
                (components.lifespans.get_mut(key), components.shapes.get_mut(key))
            else {
                continue;
            };

            match lifespan.tick() {
                LifespanStep::Alive => {}
                LifespanStep::Effect => lifespan.apply_effect(shape, half_cycle),
                LifespanStep::Expired => self.expired.push(key),
            }
        }

        for &key in &self.expired {
            entities.destroy(key);
        }
        self.expired.len()
    }
}
