//! Frame scheduler
//!
//! Runs the built-in passes in their fixed order: render, movement,
//! lifespan, then the collision sweep. Later passes observe what earlier
//! passes changed in the same frame.

use super::entity_manager::EntityManager;
use super::systems::{LifespanSystem, MovementSystem, RenderSystem};
use crate::foundation::time::Ticks;
use crate::physics::CollisionDetector;
use crate::render::RenderSurface;

/// Counts of what one scheduler run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Shape draws submitted
    pub rendered_shapes: usize,
    /// Text draws submitted
    pub rendered_texts: usize,
    /// Entities moved
    pub moved: usize,
    /// Entities destroyed by an expired lifespan
    pub expired: usize,
    /// Collision pairs queued by the sweep
    pub new_collisions: usize,
}

/// Owner of the built-in passes and the collision queue
#[derive(Default)]
pub struct Systems {
    render: RenderSystem,
    movement: MovementSystem,
    lifespan: LifespanSystem,
    collisions: CollisionDetector,
}

impl Systems {
    /// Create a scheduler with an empty collision queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every pass once over the committed live entities
    ///
    /// The surface extent at the start of the frame is the world bounds for
    /// the movement pass.
    pub fn run(
        &mut self,
        entities: &mut EntityManager,
        surface: &mut dyn RenderSurface,
        delta_time: f32,
        ticks: Ticks,
    ) -> FrameStats {
        let bounds = surface.extent();

        let rendered = self.render.update(entities, surface);
        let moved = self.movement.update(entities, bounds, delta_time);
        let expired = self.lifespan.update(entities, ticks);
        let new_collisions = self.collisions.sweep(entities);

        FrameStats {
            rendered_shapes: rendered.shapes,
            rendered_texts: rendered.texts,
            moved,
            expired,
            new_collisions,
        }
    }

    /// Collision queue filled by the sweep
    pub fn collisions(&self) -> &CollisionDetector {
        &self.collisions
    }

    /// Mutable collision queue, for draining
    pub fn collisions_mut(&mut self) -> &mut CollisionDetector {
        &mut self.collisions
    }
}
