//! Component trait and implementations

use slotmap::SecondaryMap;

use super::components::{
    CollisionComponent, LifespanComponent, ShapeComponent, TextComponent, TransformComponent,
};
use super::entity::EntityKey;
use super::storage::{ComponentMask, ComponentStore};

/// Plain data that can be attached to an entity
///
/// Each component type maps to one column of the [`ComponentStore`] and one
/// bit of the [`ComponentMask`].
pub trait Component: Sized + 'static {
    /// Mask bit for this component
    const MASK: ComponentMask;

    /// Column holding this component type
    fn column(store: &ComponentStore) -> &SecondaryMap<EntityKey, Self>;

    /// Mutable column holding this component type
    fn column_mut(store: &mut ComponentStore) -> &mut SecondaryMap<EntityKey, Self>;
}

macro_rules! impl_component {
    ($ty:ty, $mask:ident, $field:ident) => {
        impl Component for $ty {
            const MASK: ComponentMask = ComponentMask::$mask;

            fn column(store: &ComponentStore) -> &SecondaryMap<EntityKey, Self> {
                &store.$field
            }

            fn column_mut(store: &mut ComponentStore) -> &mut SecondaryMap<EntityKey, Self> {
                &mut store.$field
            }
        }
    };
}

impl_component!(TransformComponent, TRANSFORM, transforms);
impl_component!(ShapeComponent, SHAPE, shapes);
impl_component!(CollisionComponent, COLLISION, collisions);
impl_component!(LifespanComponent, LIFESPAN, lifespans);
impl_component!(TextComponent, TEXT, texts);
