use tracing::info;

use super::traits::{indent, BoxModel, LayoutItem};
use crate::common::Rect;
use crate::display::DisplaySurface;

type DrawFn = Box<dyn FnMut(&mut dyn DisplaySurface, Rect)>;

/// Fixed-size node drawn by a user supplied function
///
/// Useful for gauges, icons or anything the other nodes can't express. The
/// draw function receives the content bounds, already inside the box model.
pub struct DrawingPanel {
    width: i32,
    height: i32,
    box_model: BoxModel,
    draw_fn: DrawFn,
}

impl DrawingPanel {
    pub fn new<F>(width: i32, height: i32, draw_fn: F) -> Self
    where
        F: FnMut(&mut dyn DisplaySurface, Rect) + 'static,
    {
        Self {
            width: width.max(0),
            height: height.max(0),
            box_model: BoxModel::new(),
            draw_fn: Box::new(draw_fn),
        }
    }

    pub fn with_box_model(mut self, box_model: BoxModel) -> Self {
        self.box_model = box_model;
        self
    }
}

impl LayoutItem for DrawingPanel {
    fn box_model(&self) -> &BoxModel {
        &self.box_model
    }

    fn measure_internal(&self, _display: &dyn DisplaySurface) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn render_internal(&mut self, display: &mut dyn DisplaySurface, bounds: Rect) {
        (self.draw_fn)(display, bounds);
    }

    fn dump_config(&self, indent_depth: usize, _additional_level_depth: usize) {
        let pad = indent(indent_depth);
        info!("{pad}Drawing panel: {}x{}", self.width, self.height);
        self.box_model.dump_config(&pad);
    }
}
