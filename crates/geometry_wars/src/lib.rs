//! # Geometry Wars
//!
//! Arena shooter built on `polygon_engine`: the [`game::Game`] layer holds
//! the rules, [`config::GameConfig`] the tuning.

#![warn(missing_docs)]

pub mod config;
pub mod game;

pub use config::GameConfig;
pub use game::Game;
