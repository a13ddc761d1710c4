//! # Rendering System
//!
//! Turns drawable entities into draw commands for the render surface. Shapes
//! and labels are submitted in creation order, which is also paint order.

use crate::ecs::{ComponentMask, EntityKey, EntityManager};
use crate::render::{DrawCommand, RenderSurface, ShapeDraw, TextDraw};

/// Counts of what one render pass submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderCounts {
    /// Shape draws submitted
    pub shapes: usize,
    /// Text draws submitted
    pub texts: usize,
}

/// System that submits shapes and labels to a render surface
#[derive(Default)]
pub struct RenderSystem {
    snapshot: Vec<EntityKey>,
}

impl RenderSystem {
    /// Create a new rendering system
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit every live drawable entity
    ///
    /// Entities with a transform and a shape get the transform's position
    /// and angle copied into the shape before it is drawn. Entities with a
    /// text component draw their label.
    pub fn update(&mut self, entities: &mut EntityManager, surface: &mut dyn RenderSurface) -> RenderCounts {
        let mut counts = RenderCounts::default();

        self.snapshot.clear();
        self.snapshot.extend_from_slice(entities.live_entities());

        for &key in &self.snapshot {
            if entities.matches(key, ComponentMask::DRAWABLE) {
                let components = entities.components_mut();
                if let (Some(transform), Some(shape)) =
                    (components.transforms.get(key), components.shapes.get_mut(key))
                {
                    shape.position = transform.position;
                    shape.rotation = transform.angle;
                    surface.draw(&DrawCommand::Shape(ShapeDraw::from(&*shape)));
                    counts.shapes += 1;
                }
            }

            if entities.matches(key, ComponentMask::TEXT) {
                if let Some(text) = entities.components().texts.get(key) {
                    surface.draw(&DrawCommand::Text(TextDraw::from(text)));
                    counts.texts += 1;
                }
            }
        }

        counts
    }
}
