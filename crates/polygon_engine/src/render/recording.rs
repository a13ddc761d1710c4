//! Headless render surface

use super::{DrawCommand, Extent, RenderSurface};

/// Surface that records draw commands instead of drawing them
///
/// Keeps the commands of the frame in progress and of the last presented
/// frame. Used by tests and by headless runs.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    extent: Extent,
    current: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingSurface {
    /// Create a surface with the given size
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            current: Vec::new(),
            presented: Vec::new(),
            frames_presented: 0,
        }
    }

    /// Commands drawn since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.current
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSurface for RecordingSurface {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn set_extent(&mut self, extent: Extent) {
        self.extent = extent;
    }

    fn clear(&mut self) {
        self.current.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.current.push(command.clone());
    }

    fn present(&mut self) {
        self.presented.clone_from(&self.current);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::FontHandle;
    use crate::foundation::math::{Color, Vec2};
    use crate::render::TextDraw;

    fn label(text: &str) -> DrawCommand {
        DrawCommand::Text(TextDraw {
            text: text.to_string(),
            font: FontHandle::new("font.ttf"),
            position: Vec2::zeros(),
            color: Color::WHITE,
            size: 12,
        })
    }

    #[test]
    fn test_present_snapshots_frame() {
        let mut surface = RecordingSurface::new(Extent::new(640, 480));
        surface.clear();
        surface.draw(&label("a"));
        surface.draw(&label("b"));
        surface.present();

        surface.clear();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.last_frame(), &[label("a"), label("b")]);
        assert_eq!(surface.frames_presented(), 1);
    }
}
