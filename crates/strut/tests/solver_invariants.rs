//! Property-based invariant tests for the size-requirement solvers.
//!
//! These verify the invariants that must hold for any valid inputs:
//!
//! 1. Tiled aggregation saturates at `i32::MAX` and never overflows.
//! 2. Aggregation is idempotent (bit-identical on repeat).
//! 3. Forward tiled placements are contiguous and monotone; compressed spans
//!    fit the allocation whenever it covers the minimum total.
//! 4. `allocated == total preferred` reproduces every preferred extent.
//! 5. Reverse tiling mirrors forward tiling around the allocation.
//! 6. Reverse offsets are non-negative and non-increasing for any
//!    allocation, including one below the minimum total.
//! 7. Aligned placements stay inside the allocation and each component's
//!    maximum.
//! 8. No panics on extreme extents.

use proptest::prelude::*;
use strut::{SizeRequirements, calculate_aligned_positions, calculate_tiled_positions};

// ── Strategies ──────────────────────────────────────────────────────────

/// Well-formed requirements: min <= pref <= max, alignment in [0, 1].
fn req_strategy() -> impl Strategy<Value = SizeRequirements> {
    (0i32..=1000, 0i32..=1000, 0i32..=1000, 0.0f32..=1.0).prop_map(|(a, b, c, alignment)| {
        let mut extents = [a, b, c];
        extents.sort_unstable();
        SizeRequirements::new(extents[0], extents[1], extents[2], alignment)
    })
}

fn children_strategy() -> impl Strategy<Value = Vec<SizeRequirements>> {
    prop::collection::vec(req_strategy(), 1..=16)
}

/// Extents anywhere in the non-negative i32 range.
fn extreme_req_strategy() -> impl Strategy<Value = SizeRequirements> {
    (
        0i32..=i32::MAX,
        0i32..=i32::MAX,
        0i32..=i32::MAX,
        -2.0f32..=3.0,
    )
        .prop_map(|(min, pref, max, alignment)| SizeRequirements::new(min, pref, max, alignment))
}

fn total_minimum(children: &[SizeRequirements]) -> i64 {
    children.iter().map(|r| r.minimum as i64).sum()
}

fn total_preferred(children: &[SizeRequirements]) -> i64 {
    children.iter().map(|r| r.preferred as i64).sum()
}

// ── 1. Tiled aggregation saturates ──────────────────────────────────────

proptest! {
    #[test]
    fn tiled_aggregation_saturates(children in prop::collection::vec(extreme_req_strategy(), 0..=8)) {
        let total = SizeRequirements::tiled(&children);
        let expect = |f: fn(&SizeRequirements) -> i32| {
            children.iter().map(|r| f(r) as i64).sum::<i64>().min(i32::MAX as i64) as i32
        };
        prop_assert_eq!(total.minimum, expect(|r| r.minimum));
        prop_assert_eq!(total.preferred, expect(|r| r.preferred));
        prop_assert_eq!(total.maximum, expect(|r| r.maximum));
        prop_assert_eq!(total.alignment, 0.5);
    }
}

// ── 2. Aggregation is idempotent ────────────────────────────────────────

proptest! {
    #[test]
    fn aggregation_idempotent(children in children_strategy()) {
        let a = SizeRequirements::tiled(&children);
        let b = SizeRequirements::tiled(&children);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.alignment.to_bits(), b.alignment.to_bits());

        let a = SizeRequirements::aligned(&children);
        let b = SizeRequirements::aligned(&children);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.alignment.to_bits(), b.alignment.to_bits());
    }
}

// ── 3. Forward tiling is contiguous; compression fits the allocation ────

proptest! {
    #[test]
    fn forward_tiling_contiguous(children in children_strategy(), allocated in 0i32..=40_000) {
        let placements = calculate_tiled_positions(allocated, &children, true);
        prop_assert_eq!(placements.len(), children.len());

        prop_assert_eq!(placements[0].offset, 0);
        for pair in placements.windows(2) {
            prop_assert!(pair[0].span >= 0);
            prop_assert_eq!(pair[0].offset + pair[0].span, pair[1].offset);
            prop_assert!(pair[1].offset >= pair[0].offset);
        }

        // In compression, spans fit the allocation once it covers the
        // minimum total.
        let min = total_minimum(&children);
        let pref = total_preferred(&children);
        if (allocated as i64) < pref && allocated as i64 >= min {
            let sum: i64 = placements.iter().map(|p| p.span as i64).sum();
            prop_assert!(
                sum <= allocated as i64,
                "compressed spans sum to {} > allocated {}",
                sum,
                allocated
            );
        }
    }
}

// ── 4. Exact preferred allocation reproduces preferred extents ──────────

proptest! {
    #[test]
    fn preferred_allocation_is_identity(children in children_strategy()) {
        let pref = total_preferred(&children);
        prop_assume!(pref <= i32::MAX as i64);
        let placements = calculate_tiled_positions(pref as i32, &children, true);
        for (placement, req) in placements.iter().zip(&children) {
            prop_assert_eq!(placement.span, req.preferred);
        }
    }
}

// ── 5. Reverse tiling mirrors forward tiling ────────────────────────────

proptest! {
    #[test]
    fn reverse_mirrors_forward(children in children_strategy(), allocated in 0i32..=40_000) {
        // Below the minimum total the reverse running offset floors at zero
        // and the mirror identity no longer applies.
        prop_assume!(allocated as i64 >= total_minimum(&children));

        let forward = calculate_tiled_positions(allocated, &children, true);
        let reverse = calculate_tiled_positions(allocated, &children, false);
        for (f, r) in forward.iter().zip(&reverse) {
            prop_assert_eq!(f.span, r.span);
            prop_assert_eq!(r.offset, allocated - f.offset - f.span);
        }
    }
}

// ── 6. Reverse offsets floor at zero ────────────────────────────────────

proptest! {
    #[test]
    fn reverse_offsets_floor_at_zero(children in children_strategy(), allocated in 0i32..=40_000) {
        // Holds for any allocation, including ones below the minimum total
        // where the mirror identity no longer applies.
        let placements = calculate_tiled_positions(allocated, &children, false);
        for pair in placements.windows(2) {
            prop_assert!(pair[1].offset <= pair[0].offset);
        }
        for p in &placements {
            prop_assert!(p.offset >= 0);
            prop_assert!(p.offset <= allocated);
        }
    }
}

// ── 7. Aligned placements stay inside their budgets ─────────────────────

proptest! {
    #[test]
    fn aligned_placements_bounded(
        children in children_strategy(),
        allocated in 0i32..=40_000,
        total_alignment in 0.0f32..=1.0,
    ) {
        let total = SizeRequirements::new(0, 0, 0, total_alignment);
        let placements = calculate_aligned_positions(allocated, total, &children, true);
        for (placement, req) in placements.iter().zip(&children) {
            prop_assert!(placement.offset >= 0);
            prop_assert!(placement.span >= 0);
            prop_assert!(placement.span <= allocated.max(0));
            prop_assert!(placement.span <= req.maximum);
            prop_assert!(placement.offset + placement.span <= allocated.max(0));
        }
    }
}

// ── 8. No panics on extreme extents ─────────────────────────────────────

proptest! {
    #[test]
    fn no_panic_on_extremes(
        children in prop::collection::vec(extreme_req_strategy(), 0..=8),
        allocated in 0i32..=i32::MAX,
        forward in any::<bool>(),
        normal in any::<bool>(),
    ) {
        let tiled_total = SizeRequirements::tiled(&children);
        let aligned_total = SizeRequirements::aligned(&children);
        let _ = calculate_tiled_positions(allocated, &children, forward);
        let _ = calculate_aligned_positions(allocated, aligned_total, &children, normal);
        let _ = calculate_aligned_positions(allocated, tiled_total, &children, normal);
    }
}
