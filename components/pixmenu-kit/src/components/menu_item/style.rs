use crate::common::Dimension;
use crate::display::{Color, Font};
use crate::theme::Theme;

/// Visual styling for menu rows
#[derive(Clone, Debug)]
pub struct MenuItemStyle {
    // === Typography ===
    pub font: Font,

    // === Colors ===
    /// Text of normal rows, background of the selected row
    pub foreground: Color,
    /// Background of normal rows, text of the selected row
    pub background: Color,

    // === Dimensions ===
    /// Room reserved for a glyph drawn next to the selected row
    pub selection_glyph: Dimension,
}

impl Default for MenuItemStyle {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            font: Font::default(),
            foreground: theme.foreground,
            background: theme.background,
            selection_glyph: Dimension::zero(),
        }
    }
}

impl MenuItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder API ===

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn with_theme(self, theme: &Theme) -> Self {
        self.with_colors(theme.foreground, theme.background)
    }

    pub fn with_selection_glyph(mut self, glyph: Dimension) -> Self {
        self.selection_glyph = glyph;
        self
    }

    /// (text, background) colors for a row
    pub fn colors(&self, selected: bool) -> (Color, Color) {
        if selected {
            (self.background, self.foreground)
        } else {
            (self.foreground, self.background)
        }
    }
}
