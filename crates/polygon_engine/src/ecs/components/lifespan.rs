//! Lifespan Component
//!
//! Counts an entity down tick by tick and drives its fade/blink effect over
//! the final stretch. All effect state lives in the component itself, so two
//! blinking entities never share a timer or each other's base alpha.

use serde::{Deserialize, Serialize};

use super::shape::ShapeComponent;
use crate::foundation::math::scale_alpha;

/// Visual effect applied while the countdown is inside its action window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EffectKind {
    /// No visual change; the entity simply vanishes at zero
    #[default]
    Disappear,
    /// Alpha falls linearly to zero across the action window
    Fade,
    /// Alpha oscillates: half a second out, half a second back in
    Blink,
}

/// Result of advancing a lifespan by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifespanStep {
    /// Still counting, outside the action window
    Alive,
    /// Inside the action window; the effect should be applied
    Effect,
    /// The countdown reached zero
    Expired,
}

/// Per-instance effect state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectState {
    base_fill_alpha: Option<u8>,
    base_outline_alpha: Option<u8>,
    blink_timer: u32,
}

/// Countdown measured in simulation ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifespanComponent {
    /// Ticks left before the entity is destroyed
    pub remaining: u32,

    /// The effect runs while `remaining <= action_threshold`
    pub action_threshold: u32,

    /// Effect kind
    pub effect: EffectKind,

    state: EffectState,
}

impl LifespanComponent {
    /// Create a new lifespan
    pub fn new(total: u32, action_threshold: u32, effect: EffectKind) -> Self {
        Self {
            remaining: total,
            action_threshold,
            effect,
            state: EffectState::default(),
        }
    }

    /// Advance by one tick
    ///
    /// A countdown of N expires on exactly the N-th call; a countdown that is
    /// already zero expires on the first.
    pub fn tick(&mut self) -> LifespanStep {
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            LifespanStep::Expired
        } else if self.remaining <= self.action_threshold {
            LifespanStep::Effect
        } else {
            LifespanStep::Alive
        }
    }

    /// Apply the configured effect to a shape for the current tick
    ///
    /// `half_cycle` is the blink half period in ticks.
    pub fn apply_effect(&mut self, shape: &mut ShapeComponent, half_cycle: u32) {
        let base_fill = *self.state.base_fill_alpha.get_or_insert(shape.fill_color.a);
        let base_outline = *self.state.base_outline_alpha.get_or_insert(shape.outline_color.a);

        match self.effect {
            EffectKind::Disappear => {}
            EffectKind::Fade => {
                let window = self.action_threshold.max(1);
                shape.set_alpha(
                    scale_alpha(base_fill, self.remaining, window),
                    scale_alpha(base_outline, self.remaining, window),
                );
            }
            EffectKind::Blink => {
                let half = half_cycle.max(1);
                if self.state.blink_timer == 0 {
                    self.state.blink_timer = half * 2;
                }
                let timer = self.state.blink_timer;
                let visible = if timer > half { timer - half } else { half - timer };
                shape.set_alpha(
                    scale_alpha(base_fill, visible, half),
                    scale_alpha(base_outline, visible, half),
                );
                self.state.blink_timer -= 1;
            }
        }
    }

    /// Effect state, for inspection
    pub fn state(&self) -> &EffectState {
        &self.state
    }
}

impl EffectState {
    /// Fill alpha captured when the effect first ran
    pub fn base_fill_alpha(&self) -> Option<u8> {
        self.base_fill_alpha
    }

    /// Outline alpha captured when the effect first ran
    pub fn base_outline_alpha(&self) -> Option<u8> {
        self.base_outline_alpha
    }

    /// Ticks left in the current blink cycle
    pub fn blink_timer(&self) -> u32 {
        self.blink_timer
    }
}
