//! Movement system: bounds reflection and velocity integration

use crate::ecs::{ComponentMask, EntityKey, EntityManager};
use crate::render::Extent;

/// System that bounces shapes off the world edges and moves them
#[derive(Default)]
pub struct MovementSystem {
    snapshot: Vec<EntityKey>,
}

impl MovementSystem {
    /// Create a new movement system
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every live entity with a transform and a shape
    ///
    /// The shape radius is tested against `bounds` before integrating, so a
    /// shape touching an edge reverses on the same frame. Returns the number
    /// of entities moved.
    pub fn update(&mut self, entities: &mut EntityManager, bounds: Extent, delta_time: f32) -> usize {
        let (width, height) = (bounds.width_f32(), bounds.height_f32());
        let mut moved = 0;

        self.snapshot.clear();
        self.snapshot.extend_from_slice(entities.live_entities());

        for &key in &self.snapshot {
            if !entities.matches(key, ComponentMask::DRAWABLE) {
                continue;
            }
            let components = entities.components_mut();
            let Some(radius) = components.shapes.get(key).map(|shape| shape.radius) else {
                continue;
            };
            if let Some(transform) = components.transforms.get_mut(key) {
                transform.reflect_within(radius, width, height);
                transform.integrate(delta_time);
                moved += 1;
            }
        }

        moved
    }
}
