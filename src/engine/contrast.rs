use crate::domain::color::Rgb;

/// Decision threshold for [`is_too_bright`]: `sqrt(1.05 * 0.05) - 0.05`.
///
/// Sits slightly below the exact W3C mid-point so the stock brand green
/// still reads as a dark background. An earlier revision shipped the
/// `+ 0.05` form of the same expression; that variant misclassified every
/// mid-tone color and is deliberately not reproduced.
pub const BRIGHTNESS_THRESHOLD: f32 = 0.179_128_78;

/// W3C relative luminance: sRGB channels linearized piecewise, then weighted
/// by the Rec. 709 coefficients.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f32 {
    let r = linearize(rgb.r);
    let g = linearize(rgb.g);
    let b = linearize(rgb.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Whether a background color is too bright to carry light foreground text.
#[must_use]
pub fn is_too_bright(rgb: Rgb) -> bool {
    relative_luminance(rgb) > BRIGHTNESS_THRESHOLD
}

#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f32 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

fn linearize(channel: u8) -> f32 {
    let s = f32::from(channel) / 255.0;
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}
