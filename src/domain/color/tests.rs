use super::*;

const TEAL: Rgb = Rgb::new(0x00, 0x96, 0x88);

#[test]
fn hex_parsing_accepts_both_forms() {
    assert_eq!(Rgb::from_hex("#009688"), Ok(TEAL));
    assert_eq!(Rgb::from_hex("#FFFFFF"), Ok(Rgb::WHITE));
    assert_eq!(Rgb::from_hex("#fff"), Ok(Rgb::WHITE));
    assert_eq!(Rgb::from_hex("#abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
}

#[test]
fn hex_parsing_rejects_malformed_input() {
    for input in ["009688", "#00968", "#0096880", "#xyzxyz", "", "#"] {
        assert!(Rgb::from_hex(input).is_err(), "accepted {input:?}");
    }
}

#[test]
fn display_round_trips_through_from_hex() {
    let rendered = TEAL.to_string();
    assert_eq!(rendered, "#009688");
    assert_eq!(Rgb::from_hex(&rendered), Ok(TEAL));
}

#[test]
fn grayscale_hue_normalises_to_zero() {
    for rgb in [Rgb::BLACK, Rgb::WHITE, Rgb::new(128, 128, 128)] {
        let hsv = Hsv::from(rgb);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
    }
}

#[test]
fn rgb_hsv_round_trip_on_saturated_colors() {
    for rgb in [
        TEAL,
        Rgb::new(0xf4, 0x43, 0x36),
        Rgb::new(0x43, 0xa0, 0x47),
        Rgb::new(0x12, 0x34, 0x56),
    ] {
        assert_eq!(Rgb::from(Hsv::from(rgb)), rgb);
    }
}

#[test]
fn hsv_hsl_conversion_matches_known_points() {
    // Full-saturation full-value red maps to HSL (1, 0.5).
    let hsl = Hsv { h: 0.0, s: 1.0, v: 1.0 }.to_hsl();
    assert!((hsl.s - 1.0).abs() < 1e-6);
    assert!((hsl.l - 0.5).abs() < 1e-6);

    // White: saturation collapses instead of dividing by zero.
    let white = Hsv { h: 0.3, s: 0.0, v: 1.0 }.to_hsl();
    assert_eq!(white.s, 0.0);
    assert!((white.l - 1.0).abs() < 1e-6);

    // Black in HSL converts back to black in HSV.
    let black = Hsl { h: 0.3, s: 0.5, l: 0.0 }.to_hsv();
    assert_eq!(black.v, 0.0);
    assert_eq!(black.s, 0.0);
}

#[test]
fn darken_reduces_lightness_and_clamps_at_black() {
    let darker = darken(TEAL, 12);
    let base_l = Hsv::from(TEAL).to_hsl().l;
    let darker_l = Hsv::from(darker).to_hsl().l;
    assert!(darker_l < base_l);

    assert_eq!(darken(TEAL, 100), Rgb::BLACK);
    assert_eq!(darken(TEAL, 255), Rgb::BLACK);
}

#[test]
fn lighten_raises_lightness_and_clamps_at_white() {
    let lighter = lighten(TEAL, 12);
    let base_l = Hsv::from(TEAL).to_hsl().l;
    let lighter_l = Hsv::from(lighter).to_hsl().l;
    assert!(lighter_l > base_l);

    assert_eq!(lighten(TEAL, 100), Rgb::WHITE);
}

#[test]
fn safe_darken_passes_black_and_white_through() {
    assert_eq!(safe_darken(Rgb::BLACK, 12), Rgb::BLACK);
    assert_eq!(safe_darken(Rgb::WHITE, 50), Rgb::WHITE);
    assert_ne!(safe_darken(TEAL, 12), TEAL);
}

#[test]
fn safe_desaturate_keeps_white_unchanged() {
    assert_eq!(safe_desaturate(Rgb::WHITE, 15), Rgb::WHITE);
}

#[test]
fn safe_desaturate_rejects_lighter_results() {
    // The raw transform raises saturation; on colors where that brightens
    // the result, the safe wrapper must return the input.
    for rgb in [TEAL, Rgb::new(0x20, 0x20, 0x80), Rgb::new(0x80, 0x20, 0x20)] {
        let result = safe_desaturate(rgb, 15);
        let base_l = Hsv::from(rgb).to_hsl().l;
        let result_l = Hsv::from(result).to_hsl().l;
        assert!(result_l <= base_l, "{rgb} got lighter: {result}");
    }
}

#[test]
fn safe_desaturate_rejects_hue_shifts() {
    for rgb in [TEAL, Rgb::new(0x38, 0x8e, 0x3c), Rgb::new(0x40, 0x40, 0x40)] {
        let result = safe_desaturate(rgb, 15);
        let base = Hsv::from(rgb);
        let result_hsv = Hsv::from(result);
        let base_hue = if base.s <= f32::EPSILON { 0.0 } else { base.h };
        let result_hue = if result_hsv.s <= f32::EPSILON {
            0.0
        } else {
            result_hsv.h
        };
        assert!(
            (base_hue - result_hue).abs() <= 1e-4,
            "{rgb} shifted hue to {result}"
        );
    }
}

#[test]
fn rgba_display_appends_alpha() {
    assert_eq!(TEAL.with_alpha(0xb2).to_string(), "#009688b2");
    assert_eq!(Rgba::opaque(TEAL).alpha, 0xff);
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&TEAL).expect("serialize");
    assert_eq!(json, "\"#009688\"");
    let back: Rgb = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, TEAL);
}
