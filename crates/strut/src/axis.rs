//! Logical layout axes and their resolution against a text orientation.
//!
//! A box layout tiles along a logical axis. Two of the four axes are
//! absolute (horizontal, vertical); the other two are flow-relative and
//! resolve against the container's text orientation: the line axis follows
//! the direction text runs within a line, the page axis the direction lines
//! stack on a page.

use crate::error::{LayoutError, Result};

/// The logical axis a box layout tiles along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    /// Tile left to right, regardless of text orientation.
    Horizontal = 0,
    /// Tile top to bottom, regardless of text orientation.
    Vertical = 1,
    /// Tile in the direction text runs within a line.
    Line = 2,
    /// Tile in the direction lines stack on a page.
    Page = 3,
}

impl Axis {
    /// Construct an axis from its numeric index.
    ///
    /// This is the bean-style construction path for callers that carry the
    /// axis as a plain integer. Fails fast with [`LayoutError::InvalidAxis`]
    /// for anything outside `0..=3`.
    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Axis::Horizontal),
            1 => Ok(Axis::Vertical),
            2 => Ok(Axis::Line),
            3 => Ok(Axis::Page),
            other => Err(LayoutError::InvalidAxis(other)),
        }
    }

    /// Resolve the logical axis to an absolute one.
    ///
    /// Horizontal and vertical pass through unchanged. The line axis is
    /// horizontal when text runs horizontally, vertical otherwise; the page
    /// axis is the opposite.
    pub fn resolve(self, orientation: TextOrientation) -> AbsoluteAxis {
        match self {
            Axis::Horizontal => AbsoluteAxis::Horizontal,
            Axis::Vertical => AbsoluteAxis::Vertical,
            Axis::Line => {
                if orientation.is_horizontal() {
                    AbsoluteAxis::Horizontal
                } else {
                    AbsoluteAxis::Vertical
                }
            }
            Axis::Page => {
                if orientation.is_horizontal() {
                    AbsoluteAxis::Vertical
                } else {
                    AbsoluteAxis::Horizontal
                }
            }
        }
    }

    /// Whether tiling runs forward (left-to-right / top-to-bottom).
    ///
    /// Only the line axis is direction-sensitive in practice: it reverses
    /// when it resolves to horizontal under right-to-left text. The page
    /// axis and the absolute axes always tile forward.
    pub fn tiles_forward(self, orientation: TextOrientation) -> bool {
        match self {
            Axis::Line => !orientation.is_horizontal() || orientation.is_left_to_right(),
            _ => true,
        }
    }
}

/// An absolute layout axis after resolution.
///
/// The cross axis is implied: a box layout tiles along the resolved axis
/// and aligns along the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsoluteAxis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// The direction text flows in the container being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextOrientation {
    /// Horizontal text running left to right.
    #[default]
    LeftToRight,
    /// Horizontal text running right to left.
    RightToLeft,
    /// Vertical text (lines stack horizontally).
    Vertical,
}

impl TextOrientation {
    /// Whether text runs horizontally within a line.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        !matches!(self, TextOrientation::Vertical)
    }

    /// Whether items within a line flow left to right.
    #[inline]
    pub fn is_left_to_right(self) -> bool {
        !matches!(self, TextOrientation::RightToLeft)
    }
}
