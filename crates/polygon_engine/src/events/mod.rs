//! Event system
//!
//! Raw window and input events come from an [`EventSource`] owned by the
//! platform layer. The engine polls it once per frame, feeds input events to
//! the [`InputManager`](crate::input::InputManager) and handles window
//! events itself.

use bitflags::bitflags;

use crate::input::{KeyCode, MouseButton};

bitflags! {
    /// Groups of events, for filtering
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventCategory: u8 {
        /// Window lifecycle events
        const WINDOW = 1 << 0;
        /// Keyboard events
        const KEYBOARD = 1 << 1;
        /// Mouse events
        const MOUSE = 1 << 2;
        /// Any input event
        const INPUT = Self::KEYBOARD.bits() | Self::MOUSE.bits();
    }
}

/// Platform event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Window close requested
    WindowClosed,

    /// Window was resized
    WindowResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// Key was pressed
    KeyPressed(KeyCode),

    /// Key was released
    KeyReleased(KeyCode),

    /// Mouse button was pressed
    MouseButtonPressed {
        /// Button pressed
        button: MouseButton,
        /// Cursor X in pixels
        x: f32,
        /// Cursor Y in pixels
        y: f32,
    },

    /// Mouse button was released
    MouseButtonReleased {
        /// Button released
        button: MouseButton,
        /// Cursor X in pixels
        x: f32,
        /// Cursor Y in pixels
        y: f32,
    },

    /// Mouse cursor moved
    MouseMoved {
        /// Cursor X in pixels
        x: f32,
        /// Cursor Y in pixels
        y: f32,
    },
}

impl Event {
    /// Category the event belongs to
    pub const fn category(&self) -> EventCategory {
        match self {
            Self::WindowClosed | Self::WindowResized { .. } => EventCategory::WINDOW,
            Self::KeyPressed(_) | Self::KeyReleased(_) => EventCategory::KEYBOARD,
            Self::MouseButtonPressed { .. } | Self::MouseButtonReleased { .. } | Self::MouseMoved { .. } => {
                EventCategory::MOUSE
            }
        }
    }

    /// Whether the event belongs to any of the given categories
    pub fn is_in(&self, categories: EventCategory) -> bool {
        categories.intersects(self.category())
    }
}

/// Producer of platform events
pub trait EventSource {
    /// Append every event that arrived since the last poll
    fn poll(&mut self, events: &mut Vec<Event>);
}

/// Event source that replays a fixed script, frame by frame
///
/// Frame numbers count polls, starting at zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    script: Vec<(u64, Event)>,
    frame: u64,
}

impl ScriptedEvents {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` on the poll numbered `frame` (builder pattern)
    #[must_use]
    pub fn at(mut self, frame: u64, event: Event) -> Self {
        self.push(frame, event);
        self
    }

    /// Deliver `event` on the poll numbered `frame`
    pub fn push(&mut self, frame: u64, event: Event) {
        let index = self.script.partition_point(|(at, _)| *at <= frame);
        self.script.insert(index, (frame, event));
    }

    /// Events not delivered yet
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, events: &mut Vec<Event>) {
        let due = self.script.partition_point(|(at, _)| *at <= self.frame);
        events.extend(self.script.drain(..due).map(|(_, event)| event));
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Event::WindowClosed.category(), EventCategory::WINDOW);
        assert!(Event::KeyPressed(KeyCode::W).is_in(EventCategory::INPUT));
        assert!(Event::MouseMoved { x: 0.0, y: 0.0 }.is_in(EventCategory::MOUSE));
        assert!(!Event::MouseMoved { x: 0.0, y: 0.0 }.is_in(EventCategory::KEYBOARD));
    }

    #[test]
    fn test_scripted_events_replay_by_frame() {
        let mut source = ScriptedEvents::new()
            .at(2, Event::WindowClosed)
            .at(0, Event::KeyPressed(KeyCode::A))
            .at(0, Event::KeyReleased(KeyCode::A));

        let mut events = Vec::new();
        source.poll(&mut events);
        assert_eq!(events, vec![Event::KeyPressed(KeyCode::A), Event::KeyReleased(KeyCode::A)]);

        events.clear();
        source.poll(&mut events);
        assert!(events.is_empty());

        source.poll(&mut events);
        assert_eq!(events, vec![Event::WindowClosed]);
        assert_eq!(source.remaining(), 0);
    }
}
