//! Property-based invariant tests for the grid layout engine.
//!
//! 1. Column count is always at least 1, for any width.
//! 2. Every slot satisfies `col = i mod cols` and `row = floor(i / cols)`.
//! 3. No two tiles share a `(row, col)` pair.
//! 4. Planned tiles never overlap.
//! 5. Applying twice with unchanged geometry yields identical positions.
//! 6. Rows fit within the effective width whenever more than one column is used.

use std::collections::HashSet;

use proptest::prelude::*;
use tilegrid_core::simulated::SimulatedHost;
use tilegrid_core::{ComputedPadding, Sides, Size, TileId};
use tilegrid_layout::{GridLayout, GridParams, column_count};

// ── Helpers ─────────────────────────────────────────────────────────────

fn params_strategy() -> impl Strategy<Value = GridParams> {
    (1u16..=300, 0u16..=64).prop_map(|(s, g)| GridParams::new(f64::from(s), f64::from(g)))
}

fn padding_strategy() -> impl Strategy<Value = Sides> {
    (0u16..=64, 0u16..=64, 0u16..=64, 0u16..=64).prop_map(|(t, r, b, l)| {
        Sides::new(f64::from(t), f64::from(r), f64::from(b), f64::from(l))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. At least one column
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn column_count_at_least_one(width in any::<f64>(), params in params_strategy()) {
        prop_assert!(column_count(width, params) >= 1, "width={}", width);
    }

    #[test]
    fn column_count_matches_formula(width in 0u32..20_000, params in params_strategy()) {
        let w = f64::from(width);
        let expected = (((w + params.gap) / (params.size + params.gap)).floor() as usize).max(1);
        prop_assert_eq!(column_count(w, params), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 + 3. Row-major slots, unique cells
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slots_are_row_major_and_unique(
        width in 0u32..4000,
        tiles in 0usize..200,
        params in params_strategy(),
        padding in padding_strategy(),
    ) {
        let plan = GridLayout::new(params).plan(padding, f64::from(width), tiles);
        prop_assert_eq!(plan.slots.len(), tiles);
        let mut cells = HashSet::new();
        for (i, slot) in plan.slots.iter().enumerate() {
            prop_assert_eq!(slot.tile, TileId(i));
            prop_assert_eq!(slot.col, i % plan.columns);
            prop_assert_eq!(slot.row, i / plan.columns);
            prop_assert!(cells.insert((slot.row, slot.col)), "duplicate cell {:?}", slot);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. No overlap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn planned_tiles_do_not_overlap(
        width in 0u32..2000,
        tiles in 0usize..40,
        params in params_strategy(),
    ) {
        let plan = GridLayout::new(params).plan(Sides::all(12.0), f64::from(width), tiles);
        for (i, a) in plan.slots.iter().enumerate() {
            for b in &plan.slots[i + 1..] {
                prop_assert!(!a.rect.overlaps(&b.rect), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn apply_is_idempotent(width in 0u32..3000, tiles in 0usize..60, pad in 0u16..40) {
        let mut host = SimulatedHost::new(
            Size::new(f64::from(width), 600.0),
            ComputedPadding::uniform(&format!("{pad}px")),
            tiles,
        );
        let layout = GridLayout::default();
        let first = layout.apply(&mut host, tiles);
        let before: Vec<_> = (0..tiles).map(|i| host.position(TileId(i))).collect();
        let second = layout.apply(&mut host, tiles);
        let after: Vec<_> = (0..tiles).map(|i| host.position(TileId(i))).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(before, after);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Rows fit
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn multi_column_rows_fit(
        width in 0u32..4000,
        params in params_strategy(),
        padding in padding_strategy(),
    ) {
        let effective = f64::from(width) - padding.left - padding.right;
        let tiles = column_count(effective, params);
        let plan = GridLayout::new(params).plan(padding, f64::from(width), tiles);
        if plan.columns > 1 {
            let row_right = plan.slots[plan.columns - 1].rect.right();
            prop_assert!(
                row_right <= padding.left + plan.effective_width + 1e-9,
                "row ends at {} but content ends at {}",
                row_right,
                padding.left + plan.effective_width
            );
        }
    }
}
