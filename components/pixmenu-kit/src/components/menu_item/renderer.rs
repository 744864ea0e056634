use super::{MenuItem, MenuItemStyle, MenuItemValueArguments, ValueFormatter};
use crate::common::{Dimension, Position};
use crate::display::{DisplaySurface, TextAlign};

/// Measuring and drawing of a single menu row
///
/// Stateless apart from the borrowed style and formatter; everything about
/// the row is passed per call.
pub struct MenuItemRenderer<'a> {
    style: &'a MenuItemStyle,
    formatter: &'a dyn ValueFormatter,
}

impl<'a> MenuItemRenderer<'a> {
    pub fn new(style: &'a MenuItemStyle, formatter: &'a dyn ValueFormatter) -> Self {
        Self { style, formatter }
    }

    /// Item text followed by the formatted value, if the item has one
    pub fn label(&self, item: &MenuItem, selected: bool, editing: bool) -> String {
        let mut label = item.text().to_string();
        if item.has_value() {
            let args = MenuItemValueArguments::new(item, selected, editing);
            label.push(' ');
            label.push_str(&self.formatter.format(&args));
        }
        label
    }

    /// Outer size of a row.
    ///
    /// Width is the text only; the selected row's background is stretched
    /// when drawing, not here.
    pub fn measure_item(
        &self,
        display: &dyn DisplaySurface,
        item: &MenuItem,
        selected: bool,
        editing: bool,
    ) -> Dimension {
        let mut width = 0;
        let mut height = 0;

        if selected {
            width += self.style.selection_glyph.width;
            height += self.style.selection_glyph.height;
        }

        let label = self.label(item, selected, editing);
        let bounds = display.text_bounds(0, 0, &label, &self.style.font, TextAlign::TopLeft);

        width += bounds.width;
        height = height.max(bounds.height);

        Dimension::new(width, height)
    }

    /// Draw a row at `position` using its measured size
    pub fn draw_item(
        &self,
        display: &mut dyn DisplaySurface,
        item: &MenuItem,
        position: Position,
        measured: Dimension,
        selected: bool,
        editing: bool,
    ) {
        let (text_color, background_color) = self.style.colors(selected);

        if selected {
            let background_width = measured.width.max(display.width());
            display.filled_rectangle(
                position.x,
                position.y,
                background_width,
                measured.height,
                background_color,
            );
        }

        let label = self.label(item, selected, editing);
        display.print(
            position.x,
            position.y,
            &self.style.font,
            text_color,
            TextAlign::TopLeft,
            &label,
        );
    }
}
