use serde::{Deserialize, Serialize};

/// Opaque resolved color handed to the renderer.
///
/// The engine never inspects channels except for alpha, which the
/// emphasis fade overrides per tab.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Same channels with a replaced alpha (`Color.FromArgb(alpha, color)`).
    pub const fn with_alpha(self, a: u8) -> Color {
        Color { a, ..self }
    }

    /// Converts a `0xRRGGBB` literal into an opaque color.
    pub const fn from_hex(hex: u32) -> Color {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}
