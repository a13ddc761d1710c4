//! Entity-Component-System implementation
//!
//! Entities are slot keys into the [`EntityManager`]; components live in one
//! column per type. The [`Systems`] scheduler runs the built-in passes over
//! the committed live list once per frame.

pub mod component;
pub mod components;
pub mod entity;
pub mod entity_manager;
pub mod scheduler;
pub mod storage;
pub mod systems;

#[cfg(test)]
mod tests;

pub use component::Component;
pub use entity::{EntityId, EntityKey, EntityRecord, Tag, TagParseError};
pub use entity_manager::{CommitSummary, EntityManager};
pub use scheduler::{FrameStats, Systems};
pub use storage::{ComponentMask, ComponentStore};
