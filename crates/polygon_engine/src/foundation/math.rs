//! Math utilities and types
//!
//! Provides the small set of 2D math types the engine needs.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &Vec2, b: &Vec2) -> f32 {
    (a - b).norm()
}

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Scale an alpha value by `numerator / denominator`, rounding down.
///
/// A zero denominator yields zero.
pub fn scale_alpha(alpha: u8, numerator: u32, denominator: u32) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let scaled = u32::from(alpha) * numerator.min(denominator) / denominator;
    u8::try_from(scaled).unwrap_or(u8::MAX)
}
