//! Time management utilities
//!
//! Two clocks exist in the engine: the wall-clock [`Timer`] that produces the
//! per-frame delta used for movement, and the frame-count clock expressed in
//! [`Ticks`] that drives lifespans and effects.

use std::time::Instant;

/// Default simulation rate used to convert seconds into ticks
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame) and return the new delta
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.advance(now.duration_since(self.last_frame).as_secs_f32());
        self.last_frame = now;
        self.delta_time
    }

    /// Advance by an explicit delta instead of reading the wall clock
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time.max(0.0);
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Converts between seconds and simulation ticks at a fixed rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticks {
    per_second: u32,
}

impl Ticks {
    /// Create a converter for the given tick rate (clamped to at least 1)
    pub fn new(per_second: u32) -> Self {
        Self { per_second: per_second.max(1) }
    }

    /// Ticks in one second
    pub fn per_second(self) -> u32 {
        self.per_second
    }

    /// Number of ticks covering `secs` seconds, truncated
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs(self, secs: f32) -> u32 {
        (secs.max(0.0) * self.per_second as f32) as u32
    }

    /// Length of half a second, the blink half-cycle
    pub fn half_second(self) -> u32 {
        (self.per_second / 2).max(1)
    }
}

impl Default for Ticks {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_SECOND)
    }
}
