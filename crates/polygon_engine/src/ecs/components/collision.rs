//! Collision component

/// Circular collision volume centred on the entity's transform
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionComponent {
    /// Collision radius in pixels
    pub radius: f32,

    handled: bool,
}

impl CollisionComponent {
    /// Create a new collision component
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            handled: false,
        }
    }

    /// Whether this entity has already been paired by a sweep
    ///
    /// The flag is sticky: a sweep never clears it. Two entities that are
    /// both handled are not paired again until game logic calls
    /// [`reset_handled`](Self::reset_handled) on one of them.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Allow this entity to be paired again
    pub fn reset_handled(&mut self) {
        self.handled = false;
    }

    pub(crate) fn mark_handled(&mut self) {
        self.handled = true;
    }
}
