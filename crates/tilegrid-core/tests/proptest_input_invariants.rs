//! Property-based invariant tests for padding parsing, input normalization,
//! and the pointer trace JSON form.
//!
//! 1. `parse_css_px` recovers the integer part of any `"<n>px"` / `"<n>.<f>px"`.
//! 2. Strings without a leading digit parse to 0 through `to_sides`.
//! 3. The legacy adapter always reports a mouse on the constant stream.
//! 4. The native adapter preserves the stream id and position.
//! 5. Trace JSON decodes back to the same event (integral coordinates).
//! 6. `Rect::inner` never produces negative dimensions.

use proptest::prelude::*;
use tilegrid_core::adapter::{
    InputAdapter, LegacyMouseAdapter, NativePointerAdapter, RawPointerSample,
};
use tilegrid_core::viewport::parse_css_px;
use tilegrid_core::{
    ComputedPadding, DeviceClass, Point, PointerButton, PointerId, PointerInput, PointerKind, Rect,
    Sides, TileId,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn kind_strategy() -> impl Strategy<Value = PointerKind> {
    prop_oneof![
        (0usize..64).prop_map(|i| PointerKind::Down { target: TileId(i) }),
        Just(PointerKind::Move),
        Just(PointerKind::Up),
        Just(PointerKind::Cancel),
    ]
}

fn sample_strategy() -> impl Strategy<Value = RawPointerSample> {
    (
        prop_oneof![
            Just(String::new()),
            Just("mouse".to_owned()),
            Just("pen".to_owned()),
            Just("touch".to_owned()),
        ],
        any::<i32>(),
        -1i16..5,
        -2000i32..2000,
        -2000i32..2000,
    )
        .prop_map(|(pointer_type, pointer_id, button, x, y)| RawPointerSample {
            pointer_type,
            pointer_id,
            button,
            client_x: f64::from(x),
            client_y: f64::from(y),
        })
}

fn input_strategy() -> impl Strategy<Value = PointerInput> {
    (
        kind_strategy(),
        prop_oneof![
            Just(DeviceClass::Mouse),
            Just(DeviceClass::Pen),
            Just(DeviceClass::Touch),
            Just(DeviceClass::Unknown),
        ],
        proptest::option::of(0i16..5),
        proptest::option::of(any::<i32>()),
        -5000i32..5000,
        -5000i32..5000,
    )
        .prop_map(|(kind, device, button, id, x, y)| PointerInput {
            kind,
            device,
            button: button.and_then(PointerButton::from_dom),
            pointer_id: id.map_or(PointerId::LegacyMouse, PointerId::Native),
            position: Point::new(f64::from(x), f64::from(y)),
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Integer prefix parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn css_px_integer_prefix(n in -100_000i32..100_000, frac in proptest::option::of(0u8..100)) {
        let raw = match frac {
            Some(f) => format!("{n}.{f}px"),
            None => format!("{n}px"),
        };
        prop_assert_eq!(parse_css_px(&raw), Some(f64::from(n)), "raw={}", raw);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Non-numeric values default to zero
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_numeric_padding_is_zero(s in "[a-z%() ]{0,12}") {
        let sides = ComputedPadding::uniform(&s).to_sides();
        prop_assert_eq!(sides, Sides::all(0.0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Legacy adapter identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn legacy_adapter_is_always_mouse(kind in kind_strategy(), sample in sample_strategy()) {
        let input = LegacyMouseAdapter.normalize(kind, &sample);
        prop_assert_eq!(input.device, DeviceClass::Mouse);
        prop_assert_eq!(input.pointer_id, PointerId::LegacyMouse);
        prop_assert_eq!(input.kind, kind);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Native adapter preserves identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn native_adapter_preserves_stream(kind in kind_strategy(), sample in sample_strategy()) {
        let input = NativePointerAdapter.normalize(kind, &sample);
        prop_assert_eq!(input.pointer_id, PointerId::Native(sample.pointer_id));
        prop_assert_eq!(input.position, Point::new(sample.client_x, sample.client_y));
        if kind == PointerKind::Move {
            prop_assert_eq!(input.button, None);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Trace JSON
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn trace_json_decodes_to_same_event(input in input_strategy()) {
        let json = input.to_json_string().expect("serialize");
        let back = PointerInput::from_json_str(&json).expect("decode");
        prop_assert_eq!(back, input, "json={}", json);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Inner margin never negative
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inner_never_negative(
        w in 0.0f64..5000.0,
        h in 0.0f64..5000.0,
        pad in 0.0f64..3000.0,
    ) {
        let inner = Rect::new(0.0, 0.0, w, h).inner(Sides::all(pad));
        prop_assert!(inner.width >= 0.0);
        prop_assert!(inner.height >= 0.0);
    }
}
