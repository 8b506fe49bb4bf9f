//! Tab rectangle computation.
//!
//! This module contains the text-measurement capability and the pure
//! layout pass that turns tab descriptors into packed rectangles.

mod measure;
mod tab_math;

use serde::{Deserialize, Serialize};

pub use measure::{CellMeasure, FontRef, FontWeight, FontdueMeasure, TextMeasure};
pub use tab_math::{
    TabLayout, clamp_width, compute_layout, measured_label_width, natural_tab_width,
    strip_origin_x,
};

/// Read-only snapshot of one tab taken for a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Unique name; only used for the locked-set lookup.
    pub name: Option<String>,
    pub label: String,
    pub has_icon: bool,
}

impl TabDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            name: None,
            label: label.into(),
            has_icon: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_icon(mut self) -> Self {
        self.has_icon = true;
        self
    }
}
