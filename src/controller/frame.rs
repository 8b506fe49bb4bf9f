//! Render hand-off: everything the host needs to paint one frame.

use serde::Serialize;

use crate::config::{LabelStyle, LayoutConfig, ResolvedColors};
use crate::core::{Color, TabRect};
use crate::layout::FontRef;
use crate::selection::{BoundarySegment, Ripple};

/// Label row of an icon-and-text tab when the text fits on one line.
const SINGLE_LINE_LABEL: (i32, i32) = (46, 10);
/// Label rows of an icon-and-text tab when the text wraps.
const MULTI_LINE_LABEL: (i32, i32) = (40, 26);
/// Icon top edge for icon-and-text tabs.
const STACKED_ICON_Y: i32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelVisual {
    /// Label after character casing.
    pub text: String,
    pub area: TabRect,
    pub alpha: u8,
    /// Text color at `alpha`.
    pub color: Color,
    pub multi_line: bool,
    pub font: FontRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabVisual {
    pub index: usize,
    pub rect: TabRect,
    pub selected: bool,
    pub locked: bool,
    pub label: Option<LabelVisual>,
    pub icon: Option<TabRect>,
    /// Where the remove image goes; absent for locked tabs.
    pub remove_button: Option<TabRect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tabs: Vec<TabVisual>,
    pub indicator: Option<TabRect>,
    pub boundary: Option<[BoundarySegment; 2]>,
    pub hover: Option<TabRect>,
    /// Remove zone under the pointer, highlighted while hovered.
    pub remove_highlight: Option<TabRect>,
    pub ripple: Option<Ripple>,
    pub colors: ResolvedColors,
}

impl Frame {
    pub fn empty(colors: ResolvedColors) -> Self {
        Self {
            tabs: Vec::new(),
            indicator: None,
            boundary: None,
            hover: None,
            remove_highlight: None,
            ripple: None,
            colors,
        }
    }
}

/// A label wraps once its padded width reaches the maximum tab width.
pub fn is_multi_line(measured: i32, config: &LayoutConfig) -> bool {
    config.label_multi_line && 2 * config.header_padding + measured >= config.max_width
}

pub fn label_area(rect: &TabRect, config: &LayoutConfig, multi_line: bool) -> TabRect {
    let mut area = TabRect::new(
        rect.x + config.header_padding / 2 + config.bottom_radius,
        rect.y,
        rect.width - config.header_padding - 2 * config.bottom_radius,
        rect.height,
    );
    if config.label_style == LabelStyle::IconAndText {
        let (y, height) = if multi_line {
            MULTI_LINE_LABEL
        } else {
            SINGLE_LINE_LABEL
        };
        area.y = y;
        area.height = height;
    }
    area
}

/// Icon square centered in the tab, or pinned near the top above the text.
pub fn icon_rect(rect: &TabRect, config: &LayoutConfig) -> TabRect {
    let size = config.icon_size;
    let y = if config.label_style == LabelStyle::IconAndText {
        STACKED_ICON_Y
    } else {
        rect.y + rect.height / 2 - size / 2
    };
    TabRect::new(rect.x + rect.width / 2 - size / 2, y, size, size)
}

/// Hover fill stops above the indicator.
pub fn hover_rect(rect: &TabRect, indicator_height: i32) -> TabRect {
    TabRect::new(rect.x, rect.y, rect.width, rect.height - indicator_height)
}
