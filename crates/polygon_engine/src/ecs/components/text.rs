//! Text component for screen-space labels

use std::path::{Path, PathBuf};

use crate::foundation::math::{Color, Vec2};

/// Reference to a font resource
///
/// Loading the font is the render surface's business; the core only carries
/// the path along with each text draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontHandle(PathBuf);

impl FontHandle {
    /// Create a handle for a font file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Path of the font file
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Screen-space text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    /// Font to draw with
    pub font: FontHandle,

    /// Label contents
    pub text: String,

    /// Top-left position in pixels
    pub position: Vec2,

    /// Fill color
    pub color: Color,

    /// Character size in pixels
    pub size: u32,
}

impl TextComponent {
    /// Create a new text label
    pub fn new(font: FontHandle, text: impl Into<String>, position: Vec2, color: Color, size: u32) -> Self {
        Self {
            font,
            text: text.into(),
            position,
            color,
            size,
        }
    }

    /// Replace the label contents
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
