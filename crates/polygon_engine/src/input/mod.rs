//! Input management system
//!
//! Tracks which keys and mouse buttons are held, which changed state this
//! frame, and where the cursor last was.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::foundation::math::Vec2;

/// Input manager
#[derive(Debug)]
pub struct InputManager {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_held: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    mouse_position: Vec2,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_held: HashSet::new(),
            buttons_pressed: HashSet::new(),
            mouse_position: Vec2::zeros(),
        }
    }

    /// Start a new frame, forgetting last frame's press/release edges
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
    }

    /// Apply one event; window events are ignored
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::KeyPressed(key) => self.handle_key_input(key, true),
            Event::KeyReleased(key) => self.handle_key_input(key, false),
            Event::MouseButtonPressed { button, x, y } => {
                self.handle_mouse_move(x, y);
                self.handle_mouse_button(button, true);
            }
            Event::MouseButtonReleased { button, x, y } => {
                self.handle_mouse_move(x, y);
                self.handle_mouse_button(button, false);
            }
            Event::MouseMoved { x, y } => self.handle_mouse_move(x, y),
            Event::WindowClosed | Event::WindowResized { .. } => {}
        }
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.keys_held.insert(key) {
                self.keys_pressed.insert(key);
            }
        } else if self.keys_held.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            if self.buttons_held.insert(button) {
                self.buttons_pressed.insert(button);
            }
        } else {
            self.buttons_held.remove(&button);
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    /// Whether the key is currently held
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Whether the key went down this frame
    pub fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether the key went up this frame
    pub fn was_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Whether the mouse button went down this frame
    pub fn was_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Last known cursor position in pixels
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// P key
    P,
    /// R key
    R,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}
