//! Column-per-component storage
//!
//! Every component type lives in its own `SecondaryMap` keyed by the
//! entity's slot key. A pass walks the live list and looks up only the
//! columns it needs; the per-entity [`ComponentMask`] answers "does this
//! entity have X and Y" without touching the columns at all.

use bitflags::bitflags;
use slotmap::SecondaryMap;

use super::components::{
    CollisionComponent, LifespanComponent, ShapeComponent, TextComponent, TransformComponent,
};
use super::entity::EntityKey;

bitflags! {
    /// Set of component kinds attached to an entity
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentMask: u8 {
        /// Position, velocity, angle
        const TRANSFORM = 1 << 0;
        /// Renderable polygon
        const SHAPE = 1 << 1;
        /// Collision radius
        const COLLISION = 1 << 2;
        /// Countdown with visual effect
        const LIFESPAN = 1 << 3;
        /// Text label
        const TEXT = 1 << 4;

        /// Required by the render and movement passes
        const DRAWABLE = Self::TRANSFORM.bits() | Self::SHAPE.bits();
        /// Required by the collision sweep
        const COLLIDABLE = Self::DRAWABLE.bits() | Self::COLLISION.bits();
        /// Required by the lifespan pass
        const MORTAL = Self::SHAPE.bits() | Self::LIFESPAN.bits();
    }
}

/// Component columns owned by the entity manager
#[derive(Default)]
pub struct ComponentStore {
    /// Transform column
    pub transforms: SecondaryMap<EntityKey, TransformComponent>,
    /// Shape column
    pub shapes: SecondaryMap<EntityKey, ShapeComponent>,
    /// Collision column
    pub collisions: SecondaryMap<EntityKey, CollisionComponent>,
    /// Lifespan column
    pub lifespans: SecondaryMap<EntityKey, LifespanComponent>,
    /// Text column
    pub texts: SecondaryMap<EntityKey, TextComponent>,
}

impl ComponentStore {
    /// Drop every component of an entity
    pub(crate) fn remove_all(&mut self, key: EntityKey) {
        self.transforms.remove(key);
        self.shapes.remove(key);
        self.collisions.remove(key);
        self.lifespans.remove(key);
        self.texts.remove(key);
    }
}
