//! Transform component for entity position, velocity and rotation

use crate::foundation::math::Vec2;

/// Position, velocity and rotation of an entity in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// Position in pixels
    pub position: Vec2,

    /// Velocity in pixels per second
    pub velocity: Vec2,

    /// Rotation in degrees
    pub angle: f32,
}

impl TransformComponent {
    /// Create a new transform
    pub fn new(position: Vec2, velocity: Vec2, angle: f32) -> Self {
        Self {
            position,
            velocity,
            angle,
        }
    }

    /// Create a stationary transform at a position
    pub fn at(position: Vec2) -> Self {
        Self::new(position, Vec2::zeros(), 0.0)
    }

    /// Advance the position by `velocity * delta_time`
    pub fn integrate(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
    }

    /// Reflect the velocity off the world bounds
    ///
    /// Horizontal contact is checked first; only when it does not apply is the
    /// vertical axis considered, so at most one axis flips per call. Returns
    /// true when an axis was flipped.
    pub fn reflect_within(&mut self, radius: f32, width: f32, height: f32) -> bool {
        let (x, y) = (self.position.x, self.position.y);

        if width - x <= radius || x <= radius {
            self.velocity.x = -self.velocity.x;
            true
        } else if height - y <= radius || y <= radius {
            self.velocity.y = -self.velocity.y;
            true
        } else {
            false
        }
    }
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self::at(Vec2::zeros())
    }
}
