//! ECS Components module
//!
//! Plain data aggregates attachable to an entity. Presence is independent per
//! component: an entity carrying only a transform and a text label (a score
//! display) is as valid as a fully simulated shape.

pub mod transform;
pub mod shape;
pub mod collision;
pub mod lifespan;
pub mod text;

pub use transform::TransformComponent;
pub use shape::ShapeComponent;
pub use collision::CollisionComponent;
pub use lifespan::{EffectKind, EffectState, LifespanComponent, LifespanStep};
pub use text::{FontHandle, TextComponent};
