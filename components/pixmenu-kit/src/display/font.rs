use serde::{Deserialize, Serialize};

/// Handle to a fixed-cell bitmap font
///
/// The kit never rasterizes glyphs itself. A `Font` only tells the display
/// surface which font to measure and print with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub name: String,
    pub glyph_width: i32,
    pub glyph_height: i32,
    /// Horizontal gap between glyphs
    pub spacing: i32,
}

impl Font {
    pub fn new(name: impl Into<String>, glyph_width: i32, glyph_height: i32) -> Self {
        Self {
            name: name.into(),
            glyph_width,
            glyph_height,
            spacing: 1,
        }
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Advance of a single glyph including spacing
    pub fn advance(&self) -> i32 {
        self.glyph_width + self.spacing
    }
}

impl Default for Font {
    fn default() -> Self {
        // 5x8 is the classic HD44780 cell, common on small OLEDs
        Self::new("5x8", 5, 8)
    }
}
