//! Property-based tests for color operations.
//!
//! Covers the blending behind layered drawing, the averaging behind the
//! backdrop blur and the hex parsing used for palettes.

use experience_panel::Rgba;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn rgba_strategy() -> impl Strategy<Value = Rgba> {
    (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

fn opaque_rgba_strategy() -> impl Strategy<Value = Rgba> {
    (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0).prop_map(|(r, g, b)| Rgba::rgb(r, g, b))
}

fn hex_strategy(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select("0123456789abcdefABCDEF".chars().collect::<Vec<_>>()),
        len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Unit range with room for float rounding.
fn in_unit(value: f32) -> bool {
    (-1e-5..=1.0 + 1e-5).contains(&value)
}

fn in_unit_rgba(c: Rgba) -> bool {
    in_unit(c.r) && in_unit(c.g) && in_unit(c.b) && in_unit(c.a)
}

// ============================================================================
// Blending
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn blend_opaque_fg_wins(fg in opaque_rgba_strategy(), bg in rgba_strategy()) {
        prop_assert_eq!(fg.blend_over(bg), fg);
    }

    #[test]
    fn blend_transparent_fg_keeps_bg(fg in rgba_strategy(), bg in rgba_strategy()) {
        prop_assert_eq!(fg.with_alpha(0.0).blend_over(bg), bg);
    }

    #[test]
    fn blend_stays_in_range(fg in rgba_strategy(), bg in rgba_strategy()) {
        prop_assert!(in_unit_rgba(fg.blend_over(bg)), "{:?}", fg.blend_over(bg));
    }

    #[test]
    fn blend_over_opaque_is_opaque(fg in rgba_strategy(), bg in opaque_rgba_strategy()) {
        prop_assert!(fg.blend_over(bg).approx_eq(fg.blend_over(bg).with_alpha(1.0)));
    }
}

// ============================================================================
// Interpolation and averaging
// ============================================================================

proptest! {
    #[test]
    fn lerp_endpoints(a in rgba_strategy(), b in rgba_strategy()) {
        prop_assert!(a.lerp(b, 0.0).approx_eq(a));
        prop_assert!(a.lerp(b, 1.0).approx_eq(b));
        // t is clamped
        prop_assert!(a.lerp(b, -3.0).approx_eq(a));
        prop_assert!(a.lerp(b, 7.0).approx_eq(b));
    }

    #[test]
    fn average_of_copies_is_identity(c in rgba_strategy(), n in 1usize..20) {
        prop_assert!(Rgba::average(&vec![c; n]).approx_eq(c));
    }

    #[test]
    fn average_is_bounded(colors in prop::collection::vec(rgba_strategy(), 1..30)) {
        let avg = Rgba::average(&colors);
        prop_assert!(in_unit_rgba(avg));

        let min_r = colors.iter().map(|c| c.r).fold(f32::INFINITY, f32::min);
        let max_r = colors.iter().map(|c| c.r).fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(avg.r >= min_r - 1e-5 && avg.r <= max_r + 1e-5);
    }
}

// ============================================================================
// Hex parsing
// ============================================================================

proptest! {
    #[test]
    fn hex_valid_lengths_parse(short in hex_strategy(3), long in hex_strategy(6), alpha in hex_strategy(8)) {
        for hex in [&short, &long, &alpha] {
            let parsed = Rgba::from_hex(hex);
            prop_assert!(parsed.is_some(), "{} should parse", hex);
            prop_assert_eq!(parsed, Rgba::from_hex(&format!("#{hex}")));
            prop_assert!(in_unit_rgba(parsed.unwrap_or_default()));
        }
        prop_assert!(Rgba::from_hex(&long).unwrap().is_opaque());
    }

    #[test]
    fn hex_is_case_insensitive(hex in hex_strategy(6)) {
        prop_assert_eq!(
            Rgba::from_hex(&hex.to_lowercase()),
            Rgba::from_hex(&hex.to_uppercase())
        );
    }

    #[test]
    fn hex_rgb_roundtrips_through_u8(hex in hex_strategy(6)) {
        let color = Rgba::from_hex(&hex).unwrap();
        let (r, g, b) = color.to_rgb_u8();
        prop_assert_eq!(format!("{r:02x}{g:02x}{b:02x}"), hex.to_lowercase());
    }

    #[test]
    fn hex_other_lengths_fail(len in (0usize..12).prop_filter("valid length", |l| ![3, 6, 8].contains(l))) {
        prop_assert!(Rgba::from_hex(&"a".repeat(len)).is_none());
    }
}
