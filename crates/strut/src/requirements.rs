//! Size requirements and the tiled/aligned position solvers.
//!
//! A [`SizeRequirements`] describes one axis of one component: how small it
//! can get, how large it wants to be, how large it can get, and where its
//! alignment point sits within its extent. The free-standing solvers turn a
//! sequence of requirements plus an allocated extent into concrete
//! offset/span pairs along that axis.
//!
//! Two composition modes are supported:
//!
//! - **Tiled**: components are laid end to end; extents add up. Used for a
//!   box layout's main axis.
//! - **Aligned**: components overlap around a shared alignment line; the
//!   envelope is the largest ascent plus the largest descent. Used for the
//!   cross axis.
//!
//! All arithmetic saturates at `i32::MAX` instead of overflowing, using
//! 64-bit intermediates. The solvers do not validate that
//! `minimum <= preferred <= maximum`; inconsistent triples produce a
//! deterministic (if visually nonsensical) result rather than an error.

/// Sentinel for an unbounded maximum extent.
pub const UNBOUNDED: i32 = i32::MAX;

/// Size constraints for one component along one axis.
///
/// The three extents are non-negative by caller convention but are not
/// cross-validated; the alignment is clamped to `[0.0, 1.0]` on every
/// construction path. `0.0` puts the alignment point at the leading edge,
/// `1.0` at the trailing edge, `0.5` in the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRequirements {
    /// Smallest acceptable extent.
    pub minimum: i32,
    /// Natural extent.
    pub preferred: i32,
    /// Largest acceptable extent ([`UNBOUNDED`] if unlimited).
    pub maximum: i32,
    /// Alignment point in `[0.0, 1.0]`.
    pub alignment: f32,
}

impl Default for SizeRequirements {
    fn default() -> Self {
        Self::new(0, 0, 0, 0.5)
    }
}

/// The computed position of one component along one axis.
///
/// `offset` is the distance from the allocation's origin; `span` is the
/// extent granted to the component. Consumers apply these directly as
/// component bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Distance from the allocation's origin.
    pub offset: i32,
    /// Extent granted along the axis.
    pub span: i32,
}

impl SizeRequirements {
    /// Create new size requirements.
    ///
    /// The alignment is clamped to `[0.0, 1.0]`; the extents are taken as
    /// given.
    pub fn new(minimum: i32, preferred: i32, maximum: i32, alignment: f32) -> Self {
        Self {
            minimum,
            preferred,
            maximum,
            alignment: clamp_alignment(alignment),
        }
    }

    /// Combine requirements for components laid end to end.
    ///
    /// Each extent field is summed independently, saturating at `i32::MAX`.
    /// The aggregate alignment is always centered: a tiled run has no
    /// meaningful alignment point of its own. An empty slice yields the
    /// zero/zero/zero/centered aggregate.
    pub fn tiled(children: &[SizeRequirements]) -> SizeRequirements {
        let mut total = SizeRequirements::new(0, 0, 0, 0.5);
        for req in children {
            total.minimum = add_saturating(total.minimum, req.minimum);
            total.preferred = add_saturating(total.preferred, req.preferred);
            total.maximum = add_saturating(total.maximum, req.maximum);
        }
        total
    }

    /// Combine requirements for components overlapping around a shared
    /// alignment line.
    ///
    /// For each extent field, every component is split into an ascent
    /// (`extent * alignment`, truncated) and a descent (`extent - ascent`);
    /// the field's aggregate is the largest ascent plus the largest descent
    /// seen across all components, saturating. The aggregate alignment is
    /// the minimum-field ascent share, or `0.0` when the aggregate minimum
    /// is zero.
    pub fn aligned(children: &[SizeRequirements]) -> SizeRequirements {
        let mut min_ascent = 0;
        let mut min_descent = 0;
        let mut pref_ascent = 0;
        let mut pref_descent = 0;
        let mut max_ascent = 0;
        let mut max_descent = 0;

        for req in children {
            let ascent = ascent_of(req.minimum, req.alignment);
            min_ascent = min_ascent.max(ascent);
            min_descent = min_descent.max(req.minimum - ascent);

            let ascent = ascent_of(req.preferred, req.alignment);
            pref_ascent = pref_ascent.max(ascent);
            pref_descent = pref_descent.max(req.preferred - ascent);

            let ascent = ascent_of(req.maximum, req.alignment);
            max_ascent = max_ascent.max(ascent);
            max_descent = max_descent.max(req.maximum - ascent);
        }

        let minimum = add_saturating(min_ascent, min_descent);
        let alignment = if minimum > 0 {
            clamp_alignment(min_ascent as f32 / minimum as f32)
        } else {
            0.0
        };

        SizeRequirements {
            minimum,
            preferred: add_saturating(pref_ascent, pref_descent),
            maximum: add_saturating(max_ascent, max_descent),
            alignment,
        }
    }
}

/// Compute offsets and spans for components laid end to end.
///
/// The minimum/preferred/maximum totals are re-summed here in 64 bits, so
/// the result is exact even when a precomputed aggregate would have
/// saturated. When `allocated` is at least the preferred total, components
/// grow from preferred toward maximum proportionally to their growth room;
/// otherwise they shrink from preferred toward minimum proportionally to
/// their shrink room. At `allocated == total preferred` the growth factor is
/// zero and every span equals its preferred extent.
///
/// With `forward`, offsets accumulate from `0` in input order. Otherwise
/// components are placed from the trailing edge backward while still being
/// visited in input order: the running offset starts at `allocated`, drops
/// by each component's span, and floors at `0`; the floored value is the
/// component's offset. Reverse offsets are therefore non-negative and
/// non-increasing for any non-negative allocation, even one below the
/// minimum total.
pub fn calculate_tiled_positions(
    allocated: i32,
    children: &[SizeRequirements],
    forward: bool,
) -> Vec<Placement> {
    let mut min: i64 = 0;
    let mut pref: i64 = 0;
    let mut max: i64 = 0;
    for req in children {
        min += req.minimum as i64;
        pref += req.preferred as i64;
        max += req.maximum as i64;
    }

    if allocated as i64 >= pref {
        expanded_tile(allocated, pref, max, children, forward)
    } else {
        compressed_tile(allocated, min, pref, children, forward)
    }
}

/// Grow each component from preferred toward maximum.
fn expanded_tile(
    allocated: i32,
    pref: i64,
    max: i64,
    children: &[SizeRequirements],
    forward: bool,
) -> Vec<Placement> {
    let total_play = (allocated as i64 - pref).min(max - pref);
    let factor = if max - pref == 0 {
        0.0f64
    } else {
        total_play as f64 / (max - pref) as f64
    };

    let mut placements = Vec::with_capacity(children.len());
    if forward {
        let mut total_offset = 0;
        for req in children {
            let play = (factor * (req.maximum as i64 - req.preferred as i64) as f64) as i32;
            let span = add_saturating(req.preferred, play);
            placements.push(Placement {
                offset: total_offset,
                span,
            });
            total_offset = add_saturating(total_offset, span);
        }
    } else {
        let mut total_offset = allocated;
        for req in children {
            let play = (factor * (req.maximum as i64 - req.preferred as i64) as f64) as i32;
            let span = add_saturating(req.preferred, play);
            total_offset = total_offset.saturating_sub(span).max(0);
            placements.push(Placement {
                offset: total_offset,
                span,
            });
        }
    }
    placements
}

/// Shrink each component from preferred toward minimum.
///
/// The compressed span is truncated as a whole (`trunc(preferred - play)`
/// rather than `preferred - trunc(play)`), which keeps the spans summing to
/// no more than the allocation whenever the allocation covers the minimum
/// total.
fn compressed_tile(
    allocated: i32,
    min: i64,
    pref: i64,
    children: &[SizeRequirements],
    forward: bool,
) -> Vec<Placement> {
    let total_play = (pref - allocated as i64).min(pref - min);
    let factor = if pref - min == 0 {
        0.0f64
    } else {
        total_play as f64 / (pref - min) as f64
    };

    let mut placements = Vec::with_capacity(children.len());
    if forward {
        let mut total_offset = 0;
        for req in children {
            let play = factor * (req.preferred as i64 - req.minimum as i64) as f64;
            let span = (req.preferred as f64 - play) as i32;
            placements.push(Placement {
                offset: total_offset,
                span,
            });
            total_offset = add_saturating(total_offset, span);
        }
    } else {
        let mut total_offset = allocated;
        for req in children {
            let play = factor * (req.preferred as i64 - req.minimum as i64) as f64;
            let span = (req.preferred as f64 - play) as i32;
            total_offset = total_offset.saturating_sub(span).max(0);
            placements.push(Placement {
                offset: total_offset,
                span,
            });
        }
    }
    placements
}

/// Compute offsets and spans for components overlapping around a shared
/// alignment line.
///
/// Only `total.alignment` is consulted from the aggregate; the allocated
/// extent is split into an ascent/descent budget at that alignment and each
/// component is clamped independently against the budget. There is no
/// over/under-allocation regime split; spans may overlap in the conceptual
/// layout. With `normal` false, every alignment (including the aggregate's)
/// is flipped to `1 - alignment`.
pub fn calculate_aligned_positions(
    allocated: i32,
    total: SizeRequirements,
    children: &[SizeRequirements],
    normal: bool,
) -> Vec<Placement> {
    let total_alignment = if normal {
        total.alignment
    } else {
        1.0 - total.alignment
    };
    let total_ascent = ascent_of(allocated, total_alignment);
    let total_descent = allocated - total_ascent;

    children
        .iter()
        .map(|req| {
            let alignment = if normal {
                req.alignment
            } else {
                1.0 - req.alignment
            };
            let max_ascent = ascent_of(req.maximum, alignment);
            let max_descent = req.maximum - max_ascent;
            let ascent = total_ascent.min(max_ascent);
            let descent = total_descent.min(max_descent);
            Placement {
                offset: total_ascent - ascent,
                span: add_saturating(ascent, descent),
            }
        })
        .collect()
}

/// Add two extents, clamping the sum at `i32::MAX`.
#[inline]
fn add_saturating(a: i32, b: i32) -> i32 {
    (a as i64 + b as i64).min(i32::MAX as i64) as i32
}

/// The ascent portion of an extent: `extent * alignment`, truncated.
///
/// Computed in `f64`, which is exact for every `i32` extent, so the ascent
/// never exceeds the extent for alignments in `[0.0, 1.0]`.
#[inline]
fn ascent_of(extent: i32, alignment: f32) -> i32 {
    (extent as f64 * alignment as f64) as i32
}

/// Clamp an alignment into `[0.0, 1.0]`.
#[inline]
fn clamp_alignment(alignment: f32) -> f32 {
    if alignment < 0.0 {
        0.0
    } else if alignment > 1.0 {
        1.0
    } else {
        alignment
    }
}
