//! Physics module for collision detection
//!
//! Brute-force pairwise overlap tests between circular colliders, queued for
//! game logic to consume by tag pair.

pub mod collision_detector;

pub use collision_detector::{CollisionDetector, CollisionPair};
