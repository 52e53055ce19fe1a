//! Box and tiled layout engine for retained-mode widget trees.
//!
//! `strut` computes concrete positions and sizes for a row or column of
//! components from their minimum/preferred/maximum extents and alignments.
//! It is the layout half of a widget toolkit, with the widgets themselves
//! left to the caller: components are anything implementing
//! [`LayoutChild`], reached through a [`ChildAccess`] storage.
//!
//! Two layers are exposed:
//!
//! - The solver layer: [`SizeRequirements`] aggregation
//!   ([`SizeRequirements::tiled`], [`SizeRequirements::aligned`]) and the
//!   position solvers ([`calculate_tiled_positions`],
//!   [`calculate_aligned_positions`]), operating on plain slices along one
//!   axis.
//! - The orchestration layer: [`BoxLayout`], which resolves a logical
//!   [`Axis`] against a [`TextOrientation`], caches per-child constraints,
//!   and drives both solvers per layout pass.
//!
//! # Example
//!
//! ```
//! use strut::{SizeRequirements, calculate_tiled_positions};
//!
//! let children = [
//!     SizeRequirements::new(10, 20, 30, 0.5),
//!     SizeRequirements::new(5, 15, 25, 0.5),
//! ];
//! let placements = calculate_tiled_positions(35, &children, true);
//! assert_eq!(placements[0].span, 20);
//! assert_eq!(placements[1].offset, 20);
//! ```

pub mod axis;
pub mod box_layout;
pub mod child;
pub mod geometry;
pub mod requirements;

mod error;

pub use axis::{AbsoluteAxis, Axis, TextOrientation};
pub use box_layout::BoxLayout;
pub use child::{ChildAccess, ChildId, LayoutChild};
pub use error::{LayoutError, Result};
pub use geometry::{Insets, Rect, Size};
pub use requirements::{
    Placement, SizeRequirements, UNBOUNDED, calculate_aligned_positions,
    calculate_tiled_positions,
};
