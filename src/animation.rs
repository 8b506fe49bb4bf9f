//! Tick-driven progress clock for the selection transition.
//!
//! The clock does not own a timer. The host calls [`AnimationClock::step`]
//! from its own recurring callback and repaints while it reports running.

use serde::{Deserialize, Serialize};

/// Raw progress added per tick unless configured otherwise.
pub const DEFAULT_INCREMENT: f64 = 0.04;

/// Accumulated float steps within this distance of the end snap to it.
const SETTLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, smooth deceleration.
    #[default]
    EaseOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationDirection {
    /// Progress runs toward 1.
    In,
    /// Progress runs toward 0.
    Out,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub progress: f64,
    pub direction: AnimationDirection,
    pub running: bool,
}

#[derive(Debug, Clone)]
pub struct AnimationClock {
    state: AnimationState,
    increment: f64,
    easing: Easing,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_INCREMENT, Easing::EaseOut)
    }
}

impl AnimationClock {
    pub fn new(increment: f64, easing: Easing) -> Self {
        Self {
            state: AnimationState {
                progress: 0.0,
                direction: AnimationDirection::None,
                running: false,
            },
            increment,
            easing,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn set_increment(&mut self, increment: f64) {
        self.increment = increment;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.state.progress = progress.clamp(0.0, 1.0);
    }

    /// Starts a new run, superseding whatever was in flight.
    pub fn start(&mut self, direction: AnimationDirection) {
        self.state.direction = direction;
        self.state.running = direction != AnimationDirection::None;
    }

    /// Advances by `increment` and returns the eased progress.
    pub fn tick(&mut self, increment: f64) -> f64 {
        if !self.state.running {
            return self.progress();
        }
        let s = &mut self.state;
        match s.direction {
            AnimationDirection::In => {
                s.progress = (s.progress + increment).min(1.0);
                if s.progress >= 1.0 - SETTLE_EPSILON {
                    s.progress = 1.0;
                    s.running = false;
                }
            }
            AnimationDirection::Out => {
                s.progress = (s.progress - increment).max(0.0);
                if s.progress <= SETTLE_EPSILON {
                    s.progress = 0.0;
                    s.running = false;
                }
            }
            AnimationDirection::None => s.running = false,
        }
        self.progress()
    }

    /// One tick with the configured increment.
    pub fn step(&mut self) -> f64 {
        self.tick(self.increment)
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Eased progress, the value interpolations use.
    pub fn progress(&self) -> f64 {
        self.easing.apply(self.state.progress)
    }

    pub fn raw_progress(&self) -> f64 {
        self.state.progress
    }

    /// Ticks needed from 0 to finish a run with the configured increment.
    pub fn ticks_to_complete(&self) -> u32 {
        if self.increment <= 0.0 {
            return u32::MAX;
        }
        (1.0 / self.increment - SETTLE_EPSILON).ceil() as u32
    }
}
