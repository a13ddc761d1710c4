//! ECS Systems module
//!
//! Per-frame passes over the committed live list. Each pass iterates a
//! snapshot of the list and skips entities that are inactive or lack the
//! components it needs.

pub mod lifespan_system;
pub mod movement_system;
pub mod render_system;

pub use lifespan_system::LifespanSystem;
pub use movement_system::MovementSystem;
pub use render_system::RenderSystem;
