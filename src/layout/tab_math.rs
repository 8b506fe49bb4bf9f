//! Pure layout math for the tab strip.
//!
//! Every function in this module is a pure calculation: given tab
//! descriptors, the control size, the layout config and a text measurer it
//! returns rectangles. No rendering, no side effects; identical inputs give
//! identical output.

use crate::config::{LabelStyle, LayoutConfig};
use crate::core::{Size, TabRect};

use super::measure::{FontRef, TextMeasure};
use super::TabDescriptor;

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabLayout {
    pub rects: Vec<TabRect>,
    /// Width the control needs: never less than the width it was given.
    pub required_width: i32,
}

/// Width of the label content before padding and clamping.
pub fn measured_label_width<M: TextMeasure + ?Sized>(
    tab: &TabDescriptor,
    config: &LayoutConfig,
    measure: &M,
    font: &FontRef,
) -> i32 {
    let icon = if tab.has_icon { config.icon_size } else { 0 };
    match config.label_style {
        LabelStyle::Icon => icon,
        LabelStyle::Text => measure.measure(&tab.label, font).width,
        LabelStyle::IconAndText => measure.measure(&tab.label, font).width + icon,
    }
}

/// Clamps to `[min, max]`, applying the max bound first.
///
/// With `min > max` the result is `min`.
pub fn clamp_width(width: i32, min: i32, max: i32) -> i32 {
    width.min(max).max(min)
}

/// Width a tab takes outside shrink mode.
pub fn natural_tab_width(measured: i32, config: &LayoutConfig) -> i32 {
    clamp_width(
        2 * config.header_padding + measured,
        config.effective_min_width(),
        config.max_width,
    )
}

/// X of the first tab's left edge.
pub fn strip_origin_x(config: &LayoutConfig) -> i32 {
    config.left_padding - config.header_padding
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    width: i32,
    locked: bool,
}

/// Computes one rectangle per tab, packed left to right without gaps.
pub fn compute_layout<M: TextMeasure + ?Sized>(
    tabs: &[TabDescriptor],
    control: Size,
    config: &LayoutConfig,
    measure: &M,
    font: &FontRef,
) -> TabLayout {
    if tabs.is_empty() {
        return TabLayout {
            rects: Vec::new(),
            required_width: control.width,
        };
    }

    let mut slots: Vec<Slot> = tabs
        .iter()
        .map(|tab| {
            let locked = config.is_locked(tab.name.as_deref());
            let width = match config.locked_tab_width {
                Some(fixed) if locked => fixed,
                _ => natural_tab_width(measured_label_width(tab, config, measure, font), config),
            };
            Slot { width, locked }
        })
        .collect();

    if config.shrink_enabled {
        shrink_to_fit(&mut slots, control.width, config);
    }

    let mut rects = Vec::with_capacity(slots.len());
    let mut x = strip_origin_x(config);
    for slot in &slots {
        rects.push(TabRect::new(x, 0, slot.width, control.height));
        x += slot.width;
    }

    let required_width = rects
        .iter()
        .map(TabRect::right)
        .fold(control.width, i32::max);

    TabLayout {
        rects,
        required_width,
    }
}

/// Redistributes the free width evenly over the unlocked tabs.
///
/// The integer remainder goes to the last unlocked tab. Packing afterwards
/// moves every later tab right by that remainder, which keeps trailing locked
/// tabs flush with the right edge. Locked tabs before the last unlocked one
/// keep their position.
fn shrink_to_fit(slots: &mut [Slot], control_width: i32, config: &LayoutConfig) {
    let unlocked = slots.iter().filter(|s| !s.locked).count() as i32;
    if unlocked == 0 {
        return;
    }

    let locked_total: i32 = slots.iter().filter(|s| s.locked).map(|s| s.width).sum();
    let available = (control_width - config.left_padding - locked_total).max(0);
    let share = available / unlocked;
    let remainder = available % unlocked;
    let min = config.effective_min_width();

    for slot in slots.iter_mut().filter(|s| !s.locked) {
        slot.width = share.max(min);
    }

    if remainder != 0 && share >= min {
        if let Some(last) = slots.iter_mut().rev().find(|s| !s.locked) {
            last.width += remainder;
        }
    }

    log::trace!(
        "shrink: available={available} unlocked={unlocked} share={share} remainder={remainder}"
    );
}

#[cfg(test)]
#[path = "../../tests/unit/layout_tab_math.rs"]
mod tests;
