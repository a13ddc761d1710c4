//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types (vectors, colors)
//! - Time management (frame timer, tick conversion)
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
