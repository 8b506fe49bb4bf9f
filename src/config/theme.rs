use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::ThemeChoice;

/// A value that is either explicitly set by the host or falls back to the
/// theme default at resolve time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Override<T> {
    Unset,
    Set(T),
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Override::Unset
    }
}

impl<T> From<Option<T>> for Override<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Override::Unset, Override::Set)
    }
}

impl<T: Copy> Override<T> {
    pub fn resolve(self, default: T) -> T {
        resolve(self, default)
    }
}

pub fn resolve<T>(value: Override<T>, default: T) -> T {
    match value {
        Override::Set(v) => v,
        Override::Unset => default,
    }
}

/// Theme capability injected into the controller.
///
/// Replaces a process-wide skin manager: everything color related that the
/// strip needs is asked from this trait.
pub trait ThemeProvider {
    fn primary(&self) -> Color;
    fn text(&self) -> Color;
    fn accent(&self) -> Color;
    fn hover_fill(&self) -> Color;
    /// Alpha of selected-label text.
    fn high_emphasis_alpha(&self) -> u8;
    /// Alpha of unselected-label text.
    fn medium_emphasis_alpha(&self) -> u8;
}

/// Complete color palette resolved from a [`ThemeChoice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: Color,
    pub text: Color,
    pub accent: Color,
    pub hover_fill: Color,
    pub high_emphasis_alpha: u8,
    pub medium_emphasis_alpha: u8,
}

impl ThemeChoice {
    /// Resolves this theme choice into a full color palette.
    pub fn resolve(self) -> ThemePalette {
        match self {
            ThemeChoice::MaterialLight => ThemePalette {
                primary: Color::from_hex(0x3F51B5), // Indigo 500
                text: Color::WHITE,
                accent: Color::from_hex(0xFF4081), // Pink A200
                hover_fill: Color::rgba(0, 0, 0, 20),
                high_emphasis_alpha: 222,
                medium_emphasis_alpha: 153,
            },
            ThemeChoice::MaterialDark => ThemePalette {
                primary: Color::from_hex(0x303F9F), // Indigo 700
                text: Color::WHITE,
                accent: Color::from_hex(0xFF80AB), // Pink A100
                hover_fill: Color::rgba(255, 255, 255, 20),
                high_emphasis_alpha: 255,
                medium_emphasis_alpha: 179,
            },
        }
    }
}

impl ThemeProvider for ThemePalette {
    fn primary(&self) -> Color {
        self.primary
    }

    fn text(&self) -> Color {
        self.text
    }

    fn accent(&self) -> Color {
        self.accent
    }

    fn hover_fill(&self) -> Color {
        self.hover_fill
    }

    fn high_emphasis_alpha(&self) -> u8 {
        self.high_emphasis_alpha
    }

    fn medium_emphasis_alpha(&self) -> u8 {
        self.medium_emphasis_alpha
    }
}

/// Per-strip color overrides. Unset fields follow the theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripColors {
    pub primary: Override<Color>,
    pub text: Override<Color>,
    /// Tab background; falls back to the resolved primary color.
    pub tab_back: Override<Color>,
    /// Selected tab background; no theme default.
    pub tab_selected: Option<Color>,
    pub tab_hover: Override<Color>,
}

/// Colors after overrides were applied, ready for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedColors {
    pub background: Color,
    pub text: Color,
    pub tab_back: Color,
    pub tab_selected: Option<Color>,
    pub tab_hover: Color,
    pub indicator: Color,
}

impl StripColors {
    pub fn resolve(&self, theme: &dyn ThemeProvider) -> ResolvedColors {
        let primary = self.primary.resolve(theme.primary());
        ResolvedColors {
            background: primary,
            text: self.text.resolve(theme.text()),
            tab_back: self.tab_back.resolve(primary),
            tab_selected: self.tab_selected,
            tab_hover: self.tab_hover.resolve(theme.hover_fill()),
            indicator: theme.accent(),
        }
    }
}
