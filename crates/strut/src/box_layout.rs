//! Box layout orchestration: tiling along one axis, aligning along the other.
//!
//! `BoxLayout` drives the requirement aggregation and position solvers twice
//! per layout pass: the resolved main axis is tiled (sizes add, with
//! direction control) and the cross axis is aligned (components share an
//! alignment line). Per-child requirement arrays and the two aggregates are
//! cached between passes and rebuilt lazily after an [`invalidate`].
//!
//! One layout instance serves exactly one container. The instance is bound
//! to its target id at construction; asking it to lay out any other
//! container is a caller bug and fails with [`LayoutError::WrongTarget`].
//!
//! # Example
//!
//! ```ignore
//! use strut::{Axis, BoxLayout, Insets, Size};
//!
//! let mut layout = BoxLayout::new(panel_id, Axis::Line);
//! layout.add_child(button_id);
//! layout.add_child(label_id);
//!
//! layout.layout_container(panel_id, Size::new(320, 48), Insets::uniform(4), &mut widgets)?;
//! ```
//!
//! [`invalidate`]: BoxLayout::invalidate
//! [`LayoutError::WrongTarget`]: crate::LayoutError::WrongTarget

use parking_lot::Mutex;

use crate::axis::{AbsoluteAxis, Axis, TextOrientation};
use crate::child::{ChildAccess, ChildId, LayoutChild};
use crate::error::{LayoutError, Result};
use crate::geometry::{Insets, Rect, Size};
use crate::requirements::{
    SizeRequirements, calculate_aligned_positions, calculate_tiled_positions,
};

/// Per-child requirement arrays and aggregates, rebuilt lazily.
#[derive(Debug, Clone)]
struct RequestCache {
    /// One x-axis requirement per child, in child order.
    x_children: Vec<SizeRequirements>,
    /// One y-axis requirement per child, in child order.
    y_children: Vec<SizeRequirements>,
    /// Aggregate x requirements (tiled when the main axis is horizontal,
    /// aligned otherwise).
    x_total: SizeRequirements,
    /// Aggregate y requirements (the counterpart of `x_total`).
    y_total: SizeRequirements,
}

/// A layout manager that arranges children in a single row or column.
///
/// Children are tiled along the resolved main axis and aligned along the
/// cross axis. The main axis may be flow-relative ([`Axis::Line`] /
/// [`Axis::Page`]), in which case it resolves against the container's text
/// orientation, and line-axis tiling reverses under right-to-left text.
///
/// The layout never owns its children: it holds [`ChildId`]s and reaches the
/// components through the [`ChildAccess`] storage supplied to each call,
/// querying constraints fresh whenever the cache has been invalidated.
///
/// All computation is synchronous and bounded by the child count. The
/// constraint cache sits behind a mutex so an invalidation arriving from
/// another thread cannot race a layout pass in progress; the lock is never
/// held while bounds are applied, since `set_bounds` may re-enter
/// invalidation.
#[derive(Debug)]
pub struct BoxLayout {
    /// The container this layout is bound to.
    target: ChildId,
    /// The logical tiling axis, fixed at construction.
    axis: Axis,
    /// Text orientation used to resolve flow-relative axes.
    orientation: TextOrientation,
    /// Managed children, in tiling order.
    children: Vec<ChildId>,
    /// Cached requirements, `None` after invalidation.
    cache: Mutex<Option<RequestCache>>,
}

impl BoxLayout {
    /// Create a layout bound to `target`, tiling along `axis`.
    pub fn new(target: ChildId, axis: Axis) -> Self {
        Self {
            target,
            axis,
            orientation: TextOrientation::default(),
            children: Vec::new(),
            cache: Mutex::new(None),
        }
    }

    /// Create a layout from a numeric axis index.
    ///
    /// Fails fast with [`LayoutError::InvalidAxis`] before any layout work
    /// happens, for callers that carry the axis as a plain integer.
    pub fn from_axis_index(target: ChildId, axis_index: u8) -> Result<Self> {
        Ok(Self::new(target, Axis::from_index(axis_index)?))
    }

    /// The container this layout is bound to.
    #[inline]
    pub fn target(&self) -> ChildId {
        self.target
    }

    /// The logical tiling axis.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The text orientation used to resolve flow-relative axes.
    #[inline]
    pub fn text_orientation(&self) -> TextOrientation {
        self.orientation
    }

    /// Set the text orientation.
    ///
    /// Invalidates the cache when the orientation changes, since the choice
    /// of which axis is tiled depends on it.
    pub fn set_text_orientation(&mut self, orientation: TextOrientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.invalidate();
        }
    }

    // =========================================================================
    // Child Management
    // =========================================================================

    /// Append a child to the end of the tiling order.
    pub fn add_child(&mut self, child: ChildId) {
        self.children.push(child);
        self.invalidate();
    }

    /// Insert a child at a specific index.
    ///
    /// Children at and after the index shift toward the trailing edge.
    /// Panics if `index > child_count()`.
    pub fn insert_child(&mut self, index: usize, child: ChildId) {
        self.children.insert(index, child);
        self.invalidate();
    }

    /// Remove a child by id.
    ///
    /// Returns true if the child was found and removed.
    pub fn remove_child(&mut self, child: ChildId) -> bool {
        if let Some(index) = self.children.iter().position(|&id| id == child) {
            self.children.remove(index);
            self.invalidate();
            true
        } else {
            false
        }
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
        self.invalidate();
    }

    /// Number of managed children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if the layout manages no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The managed children in tiling order.
    #[inline]
    pub fn children(&self) -> &[ChildId] {
        &self.children
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Drop the cached constraint arrays and aggregates.
    ///
    /// Idempotent and cheap; the next layout query rebuilds the cache from
    /// fresh child constraints.
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }

    // =========================================================================
    // Aggregate Size Queries
    // =========================================================================

    /// Smallest size the container's interior plus insets can shrink to.
    pub fn minimum_layout_size<S: ChildAccess>(
        &self,
        container: ChildId,
        insets: Insets,
        storage: &S,
    ) -> Result<Size> {
        self.check_target(container)?;
        let mut guard = self.cache.lock();
        let cache = self.ensure_requests(&mut guard, storage);
        Ok(Size::new(
            cache.x_total.minimum.saturating_add(insets.horizontal()),
            cache.y_total.minimum.saturating_add(insets.vertical()),
        ))
    }

    /// Natural size of the container, insets included.
    pub fn preferred_layout_size<S: ChildAccess>(
        &self,
        container: ChildId,
        insets: Insets,
        storage: &S,
    ) -> Result<Size> {
        self.check_target(container)?;
        let mut guard = self.cache.lock();
        let cache = self.ensure_requests(&mut guard, storage);
        Ok(Size::new(
            cache.x_total.preferred.saturating_add(insets.horizontal()),
            cache.y_total.preferred.saturating_add(insets.vertical()),
        ))
    }

    /// Largest size the container benefits from, insets included.
    pub fn maximum_layout_size<S: ChildAccess>(
        &self,
        container: ChildId,
        insets: Insets,
        storage: &S,
    ) -> Result<Size> {
        self.check_target(container)?;
        let mut guard = self.cache.lock();
        let cache = self.ensure_requests(&mut guard, storage);
        Ok(Size::new(
            cache.x_total.maximum.saturating_add(insets.horizontal()),
            cache.y_total.maximum.saturating_add(insets.vertical()),
        ))
    }

    /// Aggregate alignment along the x axis.
    pub fn layout_alignment_x<S: ChildAccess>(
        &self,
        container: ChildId,
        storage: &S,
    ) -> Result<f32> {
        self.check_target(container)?;
        let mut guard = self.cache.lock();
        let cache = self.ensure_requests(&mut guard, storage);
        Ok(cache.x_total.alignment)
    }

    /// Aggregate alignment along the y axis.
    pub fn layout_alignment_y<S: ChildAccess>(
        &self,
        container: ChildId,
        storage: &S,
    ) -> Result<f32> {
        self.check_target(container)?;
        let mut guard = self.cache.lock();
        let cache = self.ensure_requests(&mut guard, storage);
        Ok(cache.y_total.alignment)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lay out the container's children into `allocated`.
    ///
    /// Insets are subtracted from the allocation to get the interior extent
    /// and added back to every computed position. The resolved main axis is
    /// tiled (reversed for a horizontal line axis under right-to-left text);
    /// the cross axis is aligned. Bounds are applied to every child through
    /// `storage`, with position adds saturating at `i32::MAX`.
    pub fn layout_container<S: ChildAccess>(
        &self,
        container: ChildId,
        allocated: Size,
        insets: Insets,
        storage: &mut S,
    ) -> Result<()> {
        self.check_target(container)?;

        let interior_width = allocated.width.saturating_sub(insets.horizontal());
        let interior_height = allocated.height.saturating_sub(insets.vertical());
        let resolved = self.axis.resolve(self.orientation);
        let forward = self.axis.tiles_forward(self.orientation);

        let (x_placements, y_placements) = {
            let mut guard = self.cache.lock();
            let cache = self.ensure_requests(&mut guard, &*storage);
            match resolved {
                AbsoluteAxis::Horizontal => (
                    calculate_tiled_positions(interior_width, &cache.x_children, forward),
                    calculate_aligned_positions(
                        interior_height,
                        cache.y_total,
                        &cache.y_children,
                        true,
                    ),
                ),
                AbsoluteAxis::Vertical => (
                    calculate_aligned_positions(
                        interior_width,
                        cache.x_total,
                        &cache.x_children,
                        true,
                    ),
                    calculate_tiled_positions(interior_height, &cache.y_children, forward),
                ),
            }
        };

        // The cache lock is released before bounds are applied: set_bounds
        // touches live components and may re-enter invalidate().
        for (i, &id) in self.children.iter().enumerate() {
            if let Some(child) = storage.get_child_mut(id) {
                child.set_bounds(Rect::new(
                    insets.left.saturating_add(x_placements[i].offset),
                    insets.top.saturating_add(y_placements[i].offset),
                    x_placements[i].span,
                    y_placements[i].span,
                ));
            }
        }

        tracing::trace!(
            ?resolved,
            forward,
            children = self.children.len(),
            "laid out container"
        );
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Fail unless `container` is the bound target.
    fn check_target(&self, container: ChildId) -> Result<()> {
        if container == self.target {
            Ok(())
        } else {
            Err(LayoutError::WrongTarget {
                expected: self.target,
                requested: container,
            })
        }
    }

    /// Rebuild the request cache if it has been invalidated.
    ///
    /// Safe to call repeatedly: a valid cache is returned as-is with no
    /// churn. Invisible children and ids that no longer resolve contribute
    /// zero extents.
    fn ensure_requests<'a, S: ChildAccess>(
        &self,
        guard: &'a mut Option<RequestCache>,
        storage: &S,
    ) -> &'a RequestCache {
        guard.get_or_insert_with(|| {
            let mut x_children = Vec::with_capacity(self.children.len());
            let mut y_children = Vec::with_capacity(self.children.len());
            for &id in &self.children {
                let (x, y) = child_requirements(storage.get_child(id));
                x_children.push(x);
                y_children.push(y);
            }

            let (x_total, y_total) = match self.axis.resolve(self.orientation) {
                AbsoluteAxis::Horizontal => (
                    SizeRequirements::tiled(&x_children),
                    SizeRequirements::aligned(&y_children),
                ),
                AbsoluteAxis::Vertical => (
                    SizeRequirements::aligned(&x_children),
                    SizeRequirements::tiled(&y_children),
                ),
            };

            tracing::trace!(children = self.children.len(), "rebuilt request cache");
            RequestCache {
                x_children,
                y_children,
                x_total,
                y_total,
            }
        })
    }
}

/// Query one child's per-axis requirements.
///
/// Invisible children keep their alignment but contribute zero extents;
/// missing children contribute the default (zero, centered) requirements.
fn child_requirements(child: Option<&dyn LayoutChild>) -> (SizeRequirements, SizeRequirements) {
    match child {
        Some(c) if c.is_visible() => {
            let min = c.minimum_size();
            let pref = c.preferred_size();
            let max = c.maximum_size();
            (
                SizeRequirements::new(min.width, pref.width, max.width, c.alignment_x()),
                SizeRequirements::new(min.height, pref.height, max.height, c.alignment_y()),
            )
        }
        Some(c) => (
            SizeRequirements::new(0, 0, 0, c.alignment_x()),
            SizeRequirements::new(0, 0, 0, c.alignment_y()),
        ),
        None => (SizeRequirements::default(), SizeRequirements::default()),
    }
}
