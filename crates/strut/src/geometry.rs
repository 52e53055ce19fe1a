//! Integer geometry value types used at the engine's call boundary.
//!
//! The solver contract is exact 32-bit arithmetic saturating at `i32::MAX`,
//! so all extents are `i32` rather than floating point. Positions grow to
//! the right and downward.

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// A zero-sized `Size`.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A positioned rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Insets around a container's interior.
///
/// The layout subtracts these from the allocated size before solving, and
/// adds `left`/`top` to every computed child position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    /// Left inset.
    pub left: i32,
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl Insets {
    /// Zero insets on all four sides.
    pub const ZERO: Insets = Insets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Create new insets.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform insets on all four sides.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined left + right inset.
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Combined top + bottom inset.
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1, 2, 3, 4);
        assert_eq!(insets.horizontal(), 4);
        assert_eq!(insets.vertical(), 6);

        let uniform = Insets::uniform(5);
        assert_eq!(uniform.horizontal(), 10);
        assert_eq!(uniform.vertical(), 10);
    }

    #[test]
    fn test_insets_saturate() {
        let insets = Insets::new(i32::MAX, i32::MAX, 1, 1);
        assert_eq!(insets.horizontal(), i32::MAX);
        assert_eq!(insets.vertical(), i32::MAX);
    }

    #[test]
    fn test_rect_size() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.size(), Size::new(30, 40));
        assert_eq!(Rect::ZERO.size(), Size::ZERO);
    }
}
