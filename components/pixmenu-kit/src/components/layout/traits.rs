use tracing::info;

use crate::common::Rect;
use crate::display::{Color, DisplaySurface};

/// Margin, border and padding around a node's content
///
/// Works like the CSS box model: the outer size of a node is its content
/// size plus `margin + border + padding` on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxModel {
    pub margin: i32,
    pub padding: i32,
    pub border: i32,
    pub border_color: Color,
}

impl BoxModel {
    pub fn new() -> Self {
        Self {
            margin: 0,
            padding: 0,
            border: 0,
            border_color: Color::new(0, 0, 0, 0),
        }
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin.max(0);
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding.max(0);
        self
    }

    pub fn with_border(mut self, border: i32, color: Color) -> Self {
        self.border = border.max(0);
        self.border_color = color;
        self
    }

    /// Space taken on each side of the content
    pub fn inset(&self) -> i32 {
        self.margin + self.border + self.padding
    }

    /// Outer size for a given content size
    pub fn outer_size(&self, inner: Rect) -> Rect {
        let inset = self.inset();
        Rect::from_size(
            inner.width.max(0) + inset * 2,
            inner.height.max(0) + inset * 2,
        )
    }

    /// Content area inside `bounds`
    pub fn inner_bounds(&self, bounds: Rect) -> Rect {
        bounds.contract(self.inset())
    }

    /// Draw `border` concentric outlines just inside the margin
    pub fn render_border(&self, display: &mut dyn DisplaySurface, bounds: Rect) {
        let mut outline = bounds.contract(self.margin);
        for _ in 0..self.border {
            if outline.is_empty() {
                break;
            }
            display.rectangle(
                outline.x,
                outline.y,
                outline.width,
                outline.height,
                self.border_color,
            );
            outline = outline.contract(1);
        }
    }

    pub(crate) fn dump_config(&self, indent: &str) {
        info!(
            "{indent}Margin: {}, Border: {}, Padding: {}, Border color: {}",
            self.margin,
            self.border,
            self.padding,
            self.border_color.to_hex()
        );
    }
}

impl Default for BoxModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Core trait for every node of a layout tree
///
/// Nodes describe their content only through [`measure_internal`] and
/// [`render_internal`]. The provided [`measure`] and [`render`] wrap that
/// content in the node's [`BoxModel`], so containers can place children by
/// outer size while leaves never reason about spacing.
///
/// [`measure`]: LayoutItem::measure
/// [`render`]: LayoutItem::render
/// [`measure_internal`]: LayoutItem::measure_internal
/// [`render_internal`]: LayoutItem::render_internal
pub trait LayoutItem {
    /// Margin, border and padding of this node
    fn box_model(&self) -> &BoxModel;

    /// Outer size including margin, border and padding.
    /// Rarely overridden.
    fn measure(&self, display: &dyn DisplaySurface) -> Rect {
        self.box_model()
            .outer_size(self.measure_internal(display))
    }

    /// Content size only
    fn measure_internal(&self, display: &dyn DisplaySurface) -> Rect;

    /// Draw the box (border) then the content inside `bounds`.
    /// Rarely overridden.
    fn render(&mut self, display: &mut dyn DisplaySurface, bounds: Rect) {
        let box_model = *self.box_model();
        if box_model.border > 0 {
            box_model.render_border(display, bounds);
        }
        let inner = box_model.inner_bounds(bounds);
        self.render_internal(display, inner);
    }

    /// Draw the content; `bounds` already excludes margin, border and padding
    fn render_internal(&mut self, display: &mut dyn DisplaySurface, bounds: Rect);

    /// Log this node's configuration.
    ///
    /// Children are dumped at `indent_depth + additional_level_depth`.
    fn dump_config(&self, indent_depth: usize, additional_level_depth: usize);
}

pub(crate) fn indent(depth: usize) -> String {
    " ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Framebuffer;

    struct Block {
        box_model: BoxModel,
        size: (i32, i32),
        rendered_at: Option<Rect>,
    }

    impl LayoutItem for Block {
        fn box_model(&self) -> &BoxModel {
            &self.box_model
        }

        fn measure_internal(&self, _display: &dyn DisplaySurface) -> Rect {
            Rect::from_size(self.size.0, self.size.1)
        }

        fn render_internal(&mut self, _display: &mut dyn DisplaySurface, bounds: Rect) {
            self.rendered_at = Some(bounds);
        }

        fn dump_config(&self, _indent_depth: usize, _additional_level_depth: usize) {}
    }

    fn block(box_model: BoxModel) -> Block {
        Block {
            box_model,
            size: (10, 4),
            rendered_at: None,
        }
    }

    #[test]
    fn test_measure_adds_box_on_both_sides() {
        let fb = Framebuffer::new(64, 32);
        let item = block(
            BoxModel::new()
                .with_margin(1)
                .with_border(2, Color::ON)
                .with_padding(3),
        );

        // 10 + 2 * (1 + 2 + 3)
        assert_eq!(item.measure(&fb), Rect::from_size(22, 16));
    }

    #[test]
    fn test_measure_without_box_is_content() {
        let fb = Framebuffer::new(64, 32);
        let item = block(BoxModel::default());

        assert_eq!(item.measure(&fb), Rect::from_size(10, 4));
    }

    #[test]
    fn test_render_contracts_bounds() {
        let mut fb = Framebuffer::new(64, 32);
        let mut item = block(
            BoxModel::new()
                .with_margin(1)
                .with_border(1, Color::ON)
                .with_padding(2),
        );

        item.render(&mut fb, Rect::new(10, 10, 20, 12));

        assert_eq!(item.rendered_at, Some(Rect::new(14, 14, 12, 4)));
    }

    #[test]
    fn test_render_draws_border_inside_margin() {
        let mut fb = Framebuffer::new(32, 32);
        let mut item = block(BoxModel::new().with_margin(2).with_border(2, Color::ON));

        item.render(&mut fb, Rect::new(0, 0, 20, 20));

        // margin stays dark
        assert_eq!(fb.pixel(1, 1), Some(Color::OFF));
        // both outline rings are lit
        assert_eq!(fb.pixel(2, 2), Some(Color::ON));
        assert_eq!(fb.pixel(3, 3), Some(Color::ON));
        assert_eq!(fb.pixel(17, 10), Some(Color::ON));
        // inside the border is untouched
        assert_eq!(fb.pixel(4, 4), Some(Color::OFF));
    }

    #[test]
    fn test_no_border_draws_nothing() {
        let mut fb = Framebuffer::new(32, 32);
        let mut item = block(BoxModel::new().with_padding(2));

        item.render(&mut fb, Rect::new(0, 0, 20, 20));

        assert!(!fb.to_ascii().contains('#'));
    }
}
