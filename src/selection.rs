//! Selection transition: indicator slide, label emphasis fade and the
//! click ripple.
//!
//! The animator only remembers which tab was selected before and after the
//! last change. Everything it hands out is derived from that memory, the
//! clock and the rectangles the caller lends it for one frame.

use serde::Serialize;

use crate::animation::{AnimationClock, AnimationDirection};
use crate::core::{Point, TabRect};

/// Inset of the boundary line gap around the selected tab.
const BOUNDARY_INSET: i32 = 3;

/// Ripple diameter at full progress, relative to the selected tab width.
const RIPPLE_SPREAD: f64 = 1.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionMemory {
    /// Selection before the last change, captured on deselect.
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

/// Label emphasis levels, from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisAlphas {
    pub high: u8,
    pub medium: u8,
}

/// Per-frame inputs that do not belong to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameParams {
    pub draw_indicator: bool,
    pub indicator_height: i32,
    /// Right edge of the strip, where the trailing boundary line ends.
    pub strip_right: i32,
    pub alphas: EmphasisAlphas,
}

/// Horizontal line drawn when the indicator is turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundarySegment {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionFrame {
    pub indicator: Option<TabRect>,
    pub boundary: Option<[BoundarySegment; 2]>,
    /// Label alpha per tab, parallel to the rects.
    pub alphas: Vec<u8>,
}

/// Expanding circle drawn from the click point while the transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ripple {
    pub center: Point,
    pub diameter: i32,
    pub alpha: u8,
    /// The ripple is only visible inside the selected tab.
    pub clip: TabRect,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionAnimator {
    memory: SelectionMemory,
    clock: AnimationClock,
}

impl SelectionAnimator {
    pub fn new(clock: AnimationClock) -> Self {
        Self {
            memory: SelectionMemory::default(),
            clock,
        }
    }

    pub fn memory(&self) -> SelectionMemory {
        self.memory
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    /// Forgets history and settles on `selected` without animating.
    pub fn reset(&mut self, selected: Option<usize>) {
        self.memory = SelectionMemory {
            previous: selected,
            current: selected,
        };
        self.clock.set_progress(1.0);
        self.clock.start(AnimationDirection::None);
    }

    pub fn on_selection_will_change(&mut self) {
        self.memory.previous = self.memory.current;
    }

    pub fn on_selection_changed(&mut self, selected: Option<usize>) {
        self.memory.current = selected;
        self.clock.set_progress(0.0);
        self.clock.start(AnimationDirection::In);
        log::trace!(
            "selection {:?} -> {:?}",
            self.memory.previous,
            self.memory.current
        );
    }

    /// Shifts remembered indices after tab `removed` left the collection.
    pub fn on_tab_removed(&mut self, removed: usize) {
        let shift = |idx: Option<usize>| match idx {
            Some(i) if i == removed => None,
            Some(i) if i > removed => Some(i - 1),
            other => other,
        };
        self.memory.previous = shift(self.memory.previous);
        self.memory.current = shift(self.memory.current);
    }

    /// Shifts remembered indices after a tab was inserted at `added`.
    pub fn on_tab_added(&mut self, added: usize) {
        let shift = |idx: Option<usize>| idx.map(|i| if i >= added { i + 1 } else { i });
        self.memory.previous = shift(self.memory.previous);
        self.memory.current = shift(self.memory.current);
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_running()
    }

    /// Advances the clock `ticks` times, then computes the frame.
    pub fn frame_update(
        &mut self,
        ticks: u32,
        rects: &[TabRect],
        params: &FrameParams,
    ) -> SelectionFrame {
        for _ in 0..ticks {
            self.clock.step();
        }
        self.frame(rects, params)
    }

    pub fn frame(&self, rects: &[TabRect], params: &FrameParams) -> SelectionFrame {
        let p = self.clock.progress();
        let current = self.memory.current.and_then(|i| rects.get(i));

        let mut indicator = None;
        let mut boundary = None;
        if let Some(cur) = current {
            if params.draw_indicator {
                let previous = self.memory.previous.or(self.memory.current);
                indicator = previous
                    .and_then(|i| rects.get(i))
                    .map(|prev| indicator_rect(prev, cur, p, params.indicator_height));
            } else {
                boundary = Some(boundary_segments(cur, params.strip_right));
            }
        }

        let alphas = (0..rects.len())
            .map(|i| self.label_alpha(i, params.alphas))
            .collect();

        SelectionFrame {
            indicator,
            boundary,
            alphas,
        }
    }

    /// Emphasis alpha for the label of tab `index` at the current progress.
    pub fn label_alpha(&self, index: usize, alphas: EmphasisAlphas) -> u8 {
        let SelectionMemory { previous, current } = self.memory;
        let high = alphas.high as i32;
        let medium = alphas.medium as i32;
        let delta = ((high - medium) as f64 * self.clock.progress()) as i32;

        let alpha = if current == Some(index) && !self.is_animating() {
            high
        } else if previous != Some(index) && current != Some(index) {
            medium
        } else if previous == Some(index) {
            high - delta
        } else {
            medium + delta
        };
        alpha.clamp(0, 255) as u8
    }

    /// Click feedback for the running transition, or `None` when idle.
    pub fn ripple(&self, origin: Point, rects: &[TabRect]) -> Option<Ripple> {
        if !self.is_animating() {
            return None;
        }
        let selected = self.memory.current.and_then(|i| rects.get(i))?;
        let p = self.clock.progress();
        Some(Ripple {
            center: origin,
            diameter: (p * selected.width as f64 * RIPPLE_SPREAD) as i32,
            alpha: (51.0 - p * 50.0).clamp(0.0, 255.0) as u8,
            clip: *selected,
        })
    }
}

fn indicator_rect(prev: &TabRect, cur: &TabRect, p: f64, height: i32) -> TabRect {
    TabRect::new(
        prev.x + ((cur.x - prev.x) as f64 * p) as i32,
        cur.bottom() - height,
        prev.width + ((cur.width - prev.width) as f64 * p) as i32,
        height,
    )
}

fn boundary_segments(cur: &TabRect, strip_right: i32) -> [BoundarySegment; 2] {
    let y = cur.bottom() - 1;
    [
        BoundarySegment {
            y,
            x_start: 0,
            x_end: cur.x + BOUNDARY_INSET,
        },
        BoundarySegment {
            y,
            x_start: cur.right() - BOUNDARY_INSET,
            x_end: strip_right,
        },
    ]
}

#[cfg(test)]
#[path = "../tests/unit/selection.rs"]
mod tests;
