//! Shape component for renderable regular polygons

use crate::foundation::math::{Color, Vec2};

/// A filled regular polygon with an outline, centred on its position
///
/// The core only reads `radius`; everything else is passed through to the
/// render surface. `position` and `rotation` mirror the transform as of the
/// last render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeComponent {
    /// Circumscribed radius in pixels
    pub radius: f32,

    /// Number of vertices (a high count approximates a circle)
    pub point_count: u32,

    /// Fill color
    pub fill_color: Color,

    /// Outline color
    pub outline_color: Color,

    /// Outline thickness in pixels
    pub outline_thickness: f32,

    /// World position the shape was last drawn at
    pub position: Vec2,

    /// Rotation in degrees the shape was last drawn at
    pub rotation: f32,
}

impl ShapeComponent {
    /// Create a new shape
    pub fn new(radius: f32, point_count: u32, fill_color: Color, outline_color: Color, outline_thickness: f32) -> Self {
        Self {
            radius,
            point_count,
            fill_color,
            outline_color,
            outline_thickness,
            position: Vec2::zeros(),
            rotation: 0.0,
        }
    }

    /// Set both fill and outline alpha
    pub fn set_alpha(&mut self, fill: u8, outline: u8) {
        self.fill_color.a = fill;
        self.outline_color.a = outline;
    }
}
