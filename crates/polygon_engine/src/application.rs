//! Layer trait and per-frame context
//!
//! Game logic plugs into the engine as one or more [`Layer`]s. Each frame
//! every layer receives a [`FrameContext`] carrying the engine state it may
//! touch; there is no global state to reach for.

use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::ecs::EntityManager;
use crate::foundation::time::Ticks;
use crate::input::InputManager;
use crate::physics::CollisionDetector;
use crate::render::Extent;

/// Engine state lent to a layer for one call
pub struct FrameContext<'a> {
    /// Entity storage; structural changes apply at the next commit
    pub entities: &'a mut EntityManager,

    /// Collision queue filled by last frame's sweep
    pub collisions: &'a mut CollisionDetector,

    /// Input state for this frame
    pub input: &'a InputManager,

    /// Current surface size, the world bounds
    pub extent: Extent,

    /// Engine configuration
    pub config: &'a EngineConfig,

    /// Seconds since the previous frame
    pub delta_time: f32,

    /// Frame number, starting at zero
    pub frame: u64,

    quit_requested: bool,
}

impl<'a> FrameContext<'a> {
    /// Assemble a context from borrowed engine state
    pub fn new(
        entities: &'a mut EntityManager,
        collisions: &'a mut CollisionDetector,
        input: &'a InputManager,
        extent: Extent,
        config: &'a EngineConfig,
        delta_time: f32,
        frame: u64,
    ) -> Self {
        Self {
            entities,
            collisions,
            input,
            extent,
            config,
            delta_time,
            frame,
            quit_requested: false,
        }
    }

    /// Tick converter for the configured simulation rate
    pub fn ticks(&self) -> Ticks {
        self.config.ticks()
    }

    /// Ask the engine to stop after this frame
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Whether any layer asked to stop
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

/// A slice of application logic driven by the engine
///
/// Layers update in the order they were pushed.
pub trait Layer {
    /// Name used in log messages and errors
    fn name(&self) -> &str;

    /// Called once when the layer is pushed
    fn on_attach(&mut self, _ctx: &mut FrameContext<'_>) -> Result<(), AppError> {
        Ok(())
    }

    /// Called every frame before the entity commit
    fn on_update(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), AppError>;

    /// Called once when the engine shuts down
    fn on_detach(&mut self) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
