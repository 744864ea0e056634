use tracing::info;

use super::traits::{indent, BoxModel, LayoutItem};
use crate::common::Rect;
use crate::display::DisplaySurface;

/// Direction for stack layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackDirection {
    /// Stack children vertically (top to bottom)
    Vertical,
    /// Stack children horizontally (left to right)
    Horizontal,
}

/// Alignment for children on the cross axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackAlignment {
    /// Align to start (left for vertical, top for horizontal)
    Start,
    /// Center children
    Center,
    /// Align to end (right for vertical, bottom for horizontal)
    End,
    /// Stretch children to fill the cross axis
    Stretch,
}

/// A layout node that stacks children in a single direction
///
/// Children are placed by their outer size, separated by `gap` pixels.
///
/// # Examples
///
/// ```
/// use pixmenu_kit::components::layout::{Stack, StackDirection, TextPanel};
///
/// let stack = Stack::new(StackDirection::Vertical)
///     .with_gap(2)
///     .with_child(TextPanel::new("Temperature"))
///     .with_child(TextPanel::new("21.5 C"));
///
/// assert_eq!(stack.len(), 2);
/// ```
pub struct Stack {
    box_model: BoxModel,
    direction: StackDirection,
    alignment: StackAlignment,
    gap: i32,
    children: Vec<Box<dyn LayoutItem>>,
}

impl Stack {
    /// Create a new stack with the specified direction
    pub fn new(direction: StackDirection) -> Self {
        Self {
            box_model: BoxModel::new(),
            direction,
            alignment: StackAlignment::Start,
            gap: 0,
            children: Vec::new(),
        }
    }

    pub fn vertical() -> Self {
        Self::new(StackDirection::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(StackDirection::Horizontal)
    }

    /// Set the gap between children
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self
    }

    /// Set the alignment of children
    pub fn with_alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_box_model(mut self, box_model: BoxModel) -> Self {
        self.box_model = box_model;
        self
    }

    pub fn with_child(mut self, child: impl LayoutItem + 'static) -> Self {
        self.add(Box::new(child));
        self
    }

    /// Add a child to the stack
    pub fn add(&mut self, child: Box<dyn LayoutItem>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the stack direction
    pub fn direction(&self) -> StackDirection {
        self.direction
    }

    /// Get the gap between children
    pub fn gap(&self) -> i32 {
        self.gap
    }

    /// Get the alignment
    pub fn alignment(&self) -> StackAlignment {
        self.alignment
    }

    /// Bounds of every child inside `content`, in child order
    fn layout(&self, display: &dyn DisplaySurface, content: Rect) -> Vec<Rect> {
        let mut cursor = match self.direction {
            StackDirection::Vertical => content.y,
            StackDirection::Horizontal => content.x,
        };

        self.children
            .iter()
            .map(|child| {
                let size = child.measure(display);
                let bounds = match self.direction {
                    StackDirection::Vertical => {
                        let (x, width) = self.cross_axis(content.x, content.width, size.width);
                        Rect::new(x, cursor, width, size.height)
                    }
                    StackDirection::Horizontal => {
                        let (y, height) =
                            self.cross_axis(content.y, content.height, size.height);
                        Rect::new(cursor, y, size.width, height)
                    }
                };
                cursor += match self.direction {
                    StackDirection::Vertical => size.height,
                    StackDirection::Horizontal => size.width,
                } + self.gap;
                bounds
            })
            .collect()
    }

    /// Start and length of a child on the cross axis
    fn cross_axis(&self, start: i32, available: i32, child: i32) -> (i32, i32) {
        match self.alignment {
            StackAlignment::Start => (start, child),
            StackAlignment::Center => (start + (available - child) / 2, child),
            StackAlignment::End => (start + available - child, child),
            StackAlignment::Stretch => (start, available.max(child)),
        }
    }
}

impl LayoutItem for Stack {
    fn box_model(&self) -> &BoxModel {
        &self.box_model
    }

    fn measure_internal(&self, display: &dyn DisplaySurface) -> Rect {
        let mut main: i32 = 0;
        let mut cross: i32 = 0;

        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                main += self.gap;
            }
            let size = child.measure(display);
            match self.direction {
                StackDirection::Vertical => {
                    main += size.height;
                    cross = cross.max(size.width);
                }
                StackDirection::Horizontal => {
                    main += size.width;
                    cross = cross.max(size.height);
                }
            }
        }

        match self.direction {
            StackDirection::Vertical => Rect::from_size(cross, main),
            StackDirection::Horizontal => Rect::from_size(main, cross),
        }
    }

    fn render_internal(&mut self, display: &mut dyn DisplaySurface, bounds: Rect) {
        let placements = self.layout(display, bounds);
        for (child, child_bounds) in self.children.iter_mut().zip(placements) {
            child.render(display, child_bounds);
        }
    }

    fn dump_config(&self, indent_depth: usize, additional_level_depth: usize) {
        let pad = indent(indent_depth);
        info!(
            "{pad}{:?} stack, gap: {}, alignment: {:?}, children: {}",
            self.direction,
            self.gap,
            self.alignment,
            self.children.len()
        );
        self.box_model.dump_config(&pad);
        for child in &self.children {
            child.dump_config(indent_depth + additional_level_depth, additional_level_depth);
        }
    }
}
