//! Common geometry shared across components
//!
//! All values are in display pixels. Positions may be negative while a
//! scrolled menu is being drawn; sizes never are.

/// Outer measured size of a row or node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    /// Create a dimension, clamping negative values to zero
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Top-left draw origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `x`/`y` is the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect at the origin with the given size
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Grow the rect by `amount` on every side
    pub fn expand(&self, amount: i32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2,
            self.height + amount * 2,
        )
    }

    /// Shrink the rect by `amount` on every side.
    /// Width and height stop at zero.
    pub fn contract(&self, amount: i32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - amount * 2).max(0),
            (self.height - amount * 2).max(0),
        )
    }

    /// Overlapping area of two rects, `None` when they don't touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect::new(left, top, right - left, bottom - top))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

impl From<Dimension> for Rect {
    fn from(dimension: Dimension) -> Self {
        Rect::from_size(dimension.width, dimension.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_clamps_negative() {
        let d = Dimension::new(-4, 10);
        assert_eq!(d.width, 0);
        assert_eq!(d.height, 10);
    }

    #[test]
    fn test_expand_then_contract() {
        let rect = Rect::new(10, 10, 20, 30);

        let outer = rect.expand(3);
        assert_eq!(outer, Rect::new(7, 7, 26, 36));
        assert_eq!(outer.contract(3), rect);
    }

    #[test]
    fn test_contract_never_negative() {
        let rect = Rect::new(0, 0, 4, 4).contract(5);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 10, 10);

        assert_eq!(a.intersection(&b), Some(Rect::new(5, 0, 5, 5)));
        assert_eq!(a.intersection(&Rect::new(20, 20, 2, 2)), None);
    }
}
