//! Text measurement capability consumed by the layout pass.
//!
//! The engine never rasterizes; it only needs label extents. Hosts plug in
//! their own measurer, a closure, or one of the two implementations here.

use fontdue::Font;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::core::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
}

/// Font descriptor passed through to the measurer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontRef {
    pub size: f32,
    pub weight: FontWeight,
}

impl FontRef {
    /// Single-line label font.
    pub fn body(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Font used when a label wraps onto two lines.
    pub fn body_medium(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Medium,
        }
    }
}

pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontRef) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &FontRef) -> Size,
{
    fn measure(&self, text: &str, font: &FontRef) -> Size {
        self(text, font)
    }
}

/// Monospace measurer: display columns times a fixed cell size.
///
/// Font size is ignored; the cell already encodes it.
#[derive(Debug, Clone, Copy)]
pub struct CellMeasure {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str, _font: &FontRef) -> Size {
        let columns = UnicodeWidthStr::width(text) as i32;
        Size::new(columns * self.cell_width, self.cell_height)
    }
}

/// Proportional measurer backed by a loaded `fontdue` font.
pub struct FontdueMeasure {
    regular: Font,
    medium: Option<Font>,
}

impl FontdueMeasure {
    pub fn new(regular: Font) -> Self {
        Self {
            regular,
            medium: None,
        }
    }

    pub fn with_medium(mut self, medium: Font) -> Self {
        self.medium = Some(medium);
        self
    }

    fn font_for(&self, weight: FontWeight) -> &Font {
        match weight {
            FontWeight::Medium => self.medium.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }
}

impl TextMeasure for FontdueMeasure {
    fn measure(&self, text: &str, font: &FontRef) -> Size {
        let face = self.font_for(font.weight);
        let width: f32 = text
            .chars()
            .map(|ch| face.metrics(ch, font.size).advance_width)
            .sum();
        let height = face
            .horizontal_line_metrics(font.size)
            .map_or(font.size, |lm| lm.new_line_size);
        Size::new(width.ceil() as i32, height.ceil() as i32)
    }
}
