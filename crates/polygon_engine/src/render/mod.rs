//! # Render Surface Abstraction
//!
//! The engine never talks to a window or GPU directly. Passes describe what
//! to draw as [`DrawCommand`]s and hand them to a [`RenderSurface`]; the
//! surface implementation decides how they reach the screen.
//!
//! - **RenderSurface**: target that accepts draw commands and presents frames
//! - **DrawCommand**: one shape or text label with everything needed to draw it
//! - **RecordingSurface**: headless surface that keeps the commands it receives

pub mod recording;

pub use recording::RecordingSurface;

use serde::{Deserialize, Serialize};

use crate::ecs::components::{FontHandle, ShapeComponent, TextComponent};
use crate::foundation::math::{Color, Vec2};

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Extent {
    /// Create a new extent
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a float, for world-space math
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    /// Height as a float, for world-space math
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }
}

/// A regular polygon to draw, centred on `position`
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDraw {
    /// Centre in pixels
    pub position: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Circumscribed radius in pixels
    pub radius: f32,
    /// Number of vertices
    pub point_count: u32,
    /// Fill color
    pub fill_color: Color,
    /// Outline color
    pub outline_color: Color,
    /// Outline thickness in pixels
    pub outline_thickness: f32,
}

impl From<&ShapeComponent> for ShapeDraw {
    fn from(shape: &ShapeComponent) -> Self {
        Self {
            position: shape.position,
            rotation: shape.rotation,
            radius: shape.radius,
            point_count: shape.point_count,
            fill_color: shape.fill_color,
            outline_color: shape.outline_color,
            outline_thickness: shape.outline_thickness,
        }
    }
}

/// A text label to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    /// Label contents
    pub text: String,
    /// Font to draw with
    pub font: FontHandle,
    /// Top-left position in pixels
    pub position: Vec2,
    /// Fill color
    pub color: Color,
    /// Character size in pixels
    pub size: u32,
}

impl From<&TextComponent> for TextDraw {
    fn from(text: &TextComponent) -> Self {
        Self {
            text: text.text.clone(),
            font: text.font.clone(),
            position: text.position,
            color: text.color,
            size: text.size,
        }
    }
}

/// Single drawing instruction, painted in submission order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled polygon with outline
    Shape(ShapeDraw),
    /// Text label
    Text(TextDraw),
}

/// Target the render pass draws into
pub trait RenderSurface {
    /// Current drawable area
    fn extent(&self) -> Extent;

    /// Change the drawable area, e.g. after a window resize
    fn set_extent(&mut self, extent: Extent);

    /// Start a new frame
    fn clear(&mut self);

    /// Draw one command on top of everything drawn so far this frame
    fn draw(&mut self, command: &DrawCommand);

    /// Show the finished frame
    fn present(&mut self);
}
