//! Display surface abstraction
//!
//! Everything the menu and layout code draws goes through [`DisplaySurface`].
//! Drivers (SPI OLEDs, e-paper, the in-memory [`Framebuffer`]) implement it;
//! font rasterization, color conversion and the transport stay on their side.
//!
//! [`Framebuffer`]: crate::rendering::Framebuffer

mod color;
mod font;

use std::fmt;

use thiserror::Error;

pub use color::{Color, ColorParseError};
pub use font::Font;

/// Where the `(x, y)` passed to text calls sits relative to the text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAlign {
    /// Top-left corner of a `width`x`height` text box anchored at `(x, y)`
    pub fn top_left(self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        let x = match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => x,
            Self::TopCenter | Self::Center | Self::BottomCenter => x - width / 2,
            Self::TopRight | Self::CenterRight | Self::BottomRight => x - width,
        };
        let y = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => y,
            Self::CenterLeft | Self::Center | Self::CenterRight => y - height / 2,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => y - height,
        };
        (x, y)
    }
}

/// Result of measuring a string on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Opaque handle to a page owned by a display surface
///
/// Holding a `PageId` does not keep the page alive; the surface resolves it
/// on use and reports [`DisplayError::UnknownPage`] when it is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub(crate) u32);

impl PageId {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("{0} is not known to this display")]
    UnknownPage(PageId),
}

/// Drawing surface of a small pixel display
pub trait DisplaySurface {
    /// Visible width in pixels
    fn width(&self) -> i32;

    /// Visible height in pixels
    fn height(&self) -> i32;

    /// Measure `text` as it would be printed at `(x, y)` with `font` and `align`
    fn text_bounds(&self, x: i32, y: i32, text: &str, font: &Font, align: TextAlign)
        -> TextBounds;

    /// Fill a rectangle; parts outside the surface are clipped
    fn filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a 1px rectangle outline
    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.filled_rectangle(x, y, width, 1, color);
        self.filled_rectangle(x, y + height - 1, width, 1, color);
        self.filled_rectangle(x, y, 1, height, color);
        self.filled_rectangle(x + width - 1, y, 1, height, color);
    }

    /// Print `text`, clipped to the surface
    fn print(&mut self, x: i32, y: i32, font: &Font, color: Color, align: TextAlign, text: &str);

    /// Clear the active page
    fn clear(&mut self);

    /// Allocate a new page
    fn create_page(&mut self) -> PageId;

    /// Switch the active page
    fn show_page(&mut self, page: PageId) -> Result<(), DisplayError>;

    /// Currently shown page, if any
    fn active_page(&self) -> Option<PageId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_top_left() {
        assert_eq!(TextAlign::TopLeft.top_left(10, 10, 20, 8), (10, 10));
        assert_eq!(TextAlign::Center.top_left(10, 10, 20, 8), (0, 6));
        assert_eq!(TextAlign::BottomRight.top_left(30, 10, 20, 8), (10, 2));
    }
}
