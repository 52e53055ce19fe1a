//! The component capability a layout operates on.
//!
//! The engine never owns components. It references them by [`ChildId`] and
//! reaches them through a [`ChildAccess`] storage, querying size constraints
//! fresh at the start of each layout pass and handing back concrete bounds
//! at the end. Anything that can answer those queries can be laid out; there
//! is no widget inheritance hierarchy involved.

use slotmap::new_key_type;

use crate::geometry::{Rect, Size};

new_key_type! {
    /// A stable identifier for a component managed by a layout.
    ///
    /// Ids are minted by whatever storage owns the components (a
    /// [`slotmap::SlotMap`] keyed by `ChildId` is the simplest choice) and
    /// stay valid until the component is removed from that storage.
    pub struct ChildId;
}

/// Capability trait for anything a box layout can position.
///
/// Size queries are made fresh on every cache rebuild, since a component's
/// constraints can change between layout passes. All extents are expected to
/// be non-negative; `i32::MAX` in a maximum means unbounded.
pub trait LayoutChild {
    /// Smallest acceptable size.
    fn minimum_size(&self) -> Size;

    /// Natural size.
    fn preferred_size(&self) -> Size;

    /// Largest acceptable size.
    fn maximum_size(&self) -> Size;

    /// Alignment point along the x axis, in `[0.0, 1.0]`.
    fn alignment_x(&self) -> f32 {
        0.5
    }

    /// Alignment point along the y axis, in `[0.0, 1.0]`.
    fn alignment_y(&self) -> f32 {
        0.5
    }

    /// Whether the component currently takes part in layout.
    ///
    /// Invisible components keep their slot but contribute zero extents.
    fn is_visible(&self) -> bool {
        true
    }

    /// Apply computed bounds to the component.
    fn set_bounds(&mut self, bounds: Rect);
}

/// Storage-mediated access to layout children.
///
/// The layout holds ids, not components; the caller supplies the storage on
/// every operation. Ids that no longer resolve are treated like invisible
/// components.
pub trait ChildAccess {
    /// Resolve a child id to the component, if it still exists.
    fn get_child(&self, id: ChildId) -> Option<&dyn LayoutChild>;

    /// Resolve a child id to the component mutably.
    fn get_child_mut(&mut self, id: ChildId) -> Option<&mut dyn LayoutChild>;
}

impl<T: LayoutChild + 'static> ChildAccess for slotmap::SlotMap<ChildId, T> {
    fn get_child(&self, id: ChildId) -> Option<&dyn LayoutChild> {
        self.get(id).map(|c| c as &dyn LayoutChild)
    }

    fn get_child_mut(&mut self, id: ChildId) -> Option<&mut dyn LayoutChild> {
        self.get_mut(id).map(|c| c as &mut dyn LayoutChild)
    }
}
