use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_INCREMENT, Easing};
use crate::core::Size;

use super::theme::StripColors;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
    pub indicator: IndicatorConfig,
    pub font: FontConfig,
    /// Size of the remove-button image; `None` disables the remove button.
    pub remove_button: Option<Size>,
    pub casing: CharacterCasing,
    pub theme: ThemeChoice,
    pub colors: StripColors,
}

/// Every parameter that influences tab rectangles.
///
/// A change to any field invalidates the current layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub left_padding: i32,
    pub header_padding: i32,
    pub min_width: i32,
    pub max_width: i32,
    /// Fixed width for locked tabs; `None` lets them size like any other tab.
    pub locked_tab_width: Option<i32>,
    pub locked_names: BTreeSet<String>,
    pub shrink_enabled: bool,
    pub label_style: LabelStyle,
    pub label_multi_line: bool,
    pub icon_size: i32,
    pub upper_radius: i32,
    pub bottom_radius: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_padding: 50,
            header_padding: 24,
            min_width: 160,
            max_width: 264,
            locked_tab_width: None,
            locked_names: BTreeSet::new(),
            shrink_enabled: false,
            label_style: LabelStyle::Text,
            label_multi_line: true,
            icon_size: 24,
            upper_radius: 0,
            bottom_radius: 0,
        }
    }
}

impl LayoutConfig {
    pub fn has_rounded_corners(&self) -> bool {
        self.upper_radius > 0 || self.bottom_radius > 0
    }

    /// Minimum tab width, floored so an icon plus both corner arcs fit.
    pub fn effective_min_width(&self) -> i32 {
        if self.has_rounded_corners() {
            self.min_width
                .max(self.icon_size + 2 * self.upper_radius + 2 * self.bottom_radius)
        } else {
            self.min_width
        }
    }

    pub fn is_locked(&self, name: Option<&str>) -> bool {
        name.is_some_and(|n| self.locked_names.contains(n))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelStyle {
    #[default]
    Text,
    Icon,
    IconAndText,
}

impl LabelStyle {
    /// Control height the strip asks for in this style.
    pub fn preferred_height(self) -> i32 {
        match self {
            LabelStyle::IconAndText => 72,
            LabelStyle::Text | LabelStyle::Icon => 48,
        }
    }

    pub fn shows_text(self) -> bool {
        self != LabelStyle::Icon
    }

    pub fn shows_icon(self) -> bool {
        self != LabelStyle::Text
    }
}

/// Case transform applied to labels at draw time (never at measurement).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterCasing {
    #[default]
    Normal,
    Upper,
    Lower,
    /// Title case: first letter of every word upper, rest lower.
    Proper,
}

impl CharacterCasing {
    pub fn apply(self, text: &str) -> String {
        match self {
            CharacterCasing::Normal => text.to_string(),
            CharacterCasing::Upper => text.to_uppercase(),
            CharacterCasing::Lower => text.to_lowercase(),
            CharacterCasing::Proper => {
                let mut out = String::with_capacity(text.len());
                let mut word_start = true;
                for ch in text.chars() {
                    if ch.is_alphanumeric() {
                        if word_start {
                            out.extend(ch.to_uppercase());
                        } else {
                            out.extend(ch.to_lowercase());
                        }
                        word_start = false;
                    } else {
                        out.push(ch);
                        word_start = true;
                    }
                }
                out
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Raw progress added per tick.
    pub increment: f64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT,
            easing: Easing::EaseOut,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub height: i32,
    pub draw: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self { height: 2, draw: true }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 14.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeChoice {
    #[default]
    MaterialLight,
    MaterialDark,
}
