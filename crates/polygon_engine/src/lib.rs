//! # Polygon Engine
//!
//! A small 2D game engine for shape-based arcade games.
//!
//! ## Features
//!
//! - **ECS Core**: Slot-keyed entities, per-type component columns, deferred commit
//! - **Built-in Passes**: Rendering, bounds-reflecting movement, lifespan effects
//! - **Collision Queue**: Pairwise circle overlap, drained by tag pair
//! - **Headless-Friendly**: Rendering and events sit behind traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polygon_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Layer for MyGame {
//!     fn name(&self) -> &str {
//!         "my-game"
//!     }
//!
//!     fn on_update(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), AppError> {
//!         ctx.collisions.drain(Tag::Bullet, Tag::Enemy, |bullet, enemy| {
//!             // react to hits
//!             let _ = (bullet, enemy);
//!         });
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let surface = RecordingSurface::new(Extent::new(config.window.width, config.window.height));
//!     let mut engine = Engine::new(config, surface, ScriptedEvents::new());
//!     engine.push_layer(Box::new(MyGame))?;
//!     engine.run()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, FrameContext, Layer};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, EngineConfig},
        ecs::components::{
            CollisionComponent, EffectKind, FontHandle, LifespanComponent, ShapeComponent, TextComponent,
            TransformComponent,
        },
        ecs::{Component, ComponentMask, EntityId, EntityKey, EntityManager, Tag},
        events::{Event, EventSource, ScriptedEvents},
        foundation::{
            math::{Color, Vec2},
            time::{Ticks, Timer},
        },
        input::{InputManager, KeyCode, MouseButton},
        physics::CollisionDetector,
        render::{DrawCommand, Extent, RecordingSurface, RenderSurface},
        AppError, Engine, EngineError, FrameContext, Layer,
    };
}
