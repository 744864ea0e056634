use tracing::{debug, info};

use super::traits::LayoutItem;
use crate::common::Rect;
use crate::display::DisplaySurface;

/// Owns the top node of a layout tree and renders it on a whole display
pub struct RootLayout {
    layout_root: Box<dyn LayoutItem>,
}

impl RootLayout {
    pub fn new(layout_root: impl LayoutItem + 'static) -> Self {
        Self {
            layout_root: Box::new(layout_root),
        }
    }

    /// Measure the tree and render it from the top-left of the display.
    ///
    /// The root gets its measured size, capped to the display.
    pub fn render_to(&mut self, display: &mut dyn DisplaySurface) {
        let measured = self.layout_root.measure(display);
        let bounds = Rect::new(
            0,
            0,
            measured.width.min(display.width()),
            measured.height.min(display.height()),
        );
        debug!(?measured, ?bounds, "rendering layout");
        self.layout_root.render(display, bounds);
    }

    pub fn dump_config(&self) {
        info!("Graphical Layout");
        self.layout_root.dump_config(2, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::{BoxModel, Stack, TextPanel};
    use crate::display::{Color, Font};
    use crate::rendering::Framebuffer;

    #[test]
    fn test_render_to_draws_tree() {
        let mut fb = Framebuffer::new(64, 32);
        let font = Font::new("test", 5, 8);
        let mut root = RootLayout::new(
            Stack::vertical()
                .with_gap(1)
                .with_box_model(BoxModel::new().with_border(1, Color::ON).with_padding(1))
                .with_child(TextPanel::new("a").with_font(font.clone()))
                .with_child(TextPanel::new("b").with_font(font)),
        );

        root.render_to(&mut fb);

        let printed: Vec<_> = fb.printed().iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(printed, vec![(2, 2), (2, 11)]);
        assert_eq!(fb.pixel(0, 0), Some(Color::ON));
    }

    #[test]
    fn test_render_to_caps_to_display() {
        let mut fb = Framebuffer::new(8, 8);
        let mut root = RootLayout::new(
            TextPanel::new("far too long for this display")
                .with_box_model(BoxModel::new().with_border(1, Color::ON)),
        );

        root.render_to(&mut fb);

        // right edge of the border lands on the last column
        assert_eq!(fb.pixel(7, 4), Some(Color::ON));
    }
}
