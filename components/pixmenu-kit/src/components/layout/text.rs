use tracing::info;

use super::traits::{indent, BoxModel, LayoutItem};
use crate::common::Rect;
use crate::display::{Color, DisplaySurface, Font, TextAlign};

/// A single line of text
pub struct TextPanel {
    pub text: String,
    pub font: Font,
    pub foreground: Color,
    /// Filled behind the text when set
    pub background: Option<Color>,
    pub align: TextAlign,
    box_model: BoxModel,
}

impl TextPanel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
            foreground: Color::ON,
            background: None,
            align: TextAlign::TopLeft,
            box_model: BoxModel::new(),
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_box_model(mut self, box_model: BoxModel) -> Self {
        self.box_model = box_model;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Anchor point inside `bounds` matching the alignment
    fn anchor(&self, bounds: Rect) -> (i32, i32) {
        let x = match self.align {
            TextAlign::TopLeft | TextAlign::CenterLeft | TextAlign::BottomLeft => bounds.x,
            TextAlign::TopCenter | TextAlign::Center | TextAlign::BottomCenter => {
                bounds.x + bounds.width / 2
            }
            TextAlign::TopRight | TextAlign::CenterRight | TextAlign::BottomRight => {
                bounds.right()
            }
        };
        let y = match self.align {
            TextAlign::TopLeft | TextAlign::TopCenter | TextAlign::TopRight => bounds.y,
            TextAlign::CenterLeft | TextAlign::Center | TextAlign::CenterRight => {
                bounds.y + bounds.height / 2
            }
            TextAlign::BottomLeft | TextAlign::BottomCenter | TextAlign::BottomRight => {
                bounds.bottom()
            }
        };
        (x, y)
    }
}

impl LayoutItem for TextPanel {
    fn box_model(&self) -> &BoxModel {
        &self.box_model
    }

    fn measure_internal(&self, display: &dyn DisplaySurface) -> Rect {
        let bounds = display.text_bounds(0, 0, &self.text, &self.font, TextAlign::TopLeft);
        Rect::from_size(bounds.width, bounds.height)
    }

    fn render_internal(&mut self, display: &mut dyn DisplaySurface, bounds: Rect) {
        if let Some(background) = self.background {
            display.filled_rectangle(bounds.x, bounds.y, bounds.width, bounds.height, background);
        }
        let (x, y) = self.anchor(bounds);
        display.print(x, y, &self.font, self.foreground, self.align, &self.text);
    }

    fn dump_config(&self, indent_depth: usize, _additional_level_depth: usize) {
        let pad = indent(indent_depth);
        info!(
            "{pad}Text panel: {:?}, font: {}, align: {:?}",
            self.text, self.font.name, self.align
        );
        self.box_model.dump_config(&pad);
    }
}
