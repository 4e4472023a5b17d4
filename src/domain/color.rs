use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A 24-bit sRGB color. The engine never carries alpha, except for the
/// quote-text path which produces an [`Rgba`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a hex color: {0:?}")]
pub struct ColorParseError(pub String);

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the input is not one of the two
    /// accepted hex forms.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(input.to_string());
        let digits = input.strip_prefix('#').ok_or_else(err)?;
        let nibbles: Vec<u8> = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(err)?;
        match *nibbles.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0))
            }
            _ => Err(err()),
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba { color: self, alpha }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// An [`Rgb`] with an alpha channel, used only for the quote-text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub color: Rgb,
    pub alpha: u8,
}

impl Rgba {
    #[must_use]
    pub const fn opaque(color: Rgb) -> Self {
        Self { color, alpha: 0xff }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02x}", self.color, self.alpha)
    }
}

/// Hue, saturation, value, all in `[0, 1]`. Grayscale inputs normalise to
/// hue 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Hue, saturation, lightness, all in `[0, 1]`. Intermediate representation
/// for the lightness/saturation transforms; never exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let r = f32::from(rgb.r) / 255.0;
        let g = f32::from(rgb.g) / 255.0;
        let b = f32::from(rgb.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta <= f32::EPSILON {
            0.0
        } else if (max - r).abs() <= f32::EPSILON {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if (max - g).abs() <= f32::EPSILON {
            (((b - r) / delta) + 2.0) / 6.0
        } else {
            (((r - g) / delta) + 4.0) / 6.0
        };
        let s = if max <= f32::EPSILON { 0.0 } else { delta / max };
        Self { h, s, v: max }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let s = hsv.s.clamp(0.0, 1.0);
        let v = hsv.v.clamp(0.0, 1.0);
        let h = hsv.h.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl Hsv {
    /// HSV to HSL. Exact inverse of [`Hsl::to_hsv`] away from the degenerate
    /// denominators (pure black, pure white), which collapse to saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let n = (2.0 - self.s) * self.v;
        let denom = if n < 1.0 { n } else { 2.0 - n };
        let s = if denom <= f32::EPSILON {
            0.0
        } else {
            (self.s * self.v / denom).min(1.0)
        };
        Hsl { h: self.h, s, l: n / 2.0 }
    }
}

impl Hsl {
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let m = self.s * self.l.min(1.0 - self.l);
        let denom = self.l + m;
        let s = if denom <= f32::EPSILON { 0.0 } else { 2.0 * m / denom };
        Hsv { h: self.h, s, v: denom }
    }
}

fn channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn amount_ratio(amount: u8) -> f32 {
    f32::from(amount) / 100.0
}

fn shift_lightness(base: Rgb, delta: f32) -> Rgb {
    let mut hsl = Hsv::from(base).to_hsl();
    hsl.l = (hsl.l + delta).clamp(0.0, 1.0);
    Rgb::from(hsl.to_hsv())
}

/// Lowers HSL lightness by `amount / 100`, clamped at 0.
#[must_use]
pub fn darken(base: Rgb, amount: u8) -> Rgb {
    shift_lightness(base, -amount_ratio(amount))
}

/// Raises HSL lightness by `amount / 100`, clamped at 1.
#[must_use]
pub fn lighten(base: Rgb, amount: u8) -> Rgb {
    shift_lightness(base, amount_ratio(amount))
}

/// Raises the raw HSL saturation channel by `amount / 100`. Despite the
/// name, the raw transform saturates; [`safe_desaturate`] is the wrapper
/// that rejects perceptually wrong results.
#[must_use]
pub fn desaturate(base: Rgb, amount: u8) -> Rgb {
    let mut hsl = Hsv::from(base).to_hsl();
    hsl.s = (hsl.s + amount_ratio(amount)).clamp(0.0, 1.0);
    Rgb::from(hsl.to_hsv())
}

/// [`darken`], except pure black and pure white pass through unchanged
/// instead of picking up a reddish cast.
#[must_use]
pub fn safe_darken(base: Rgb, amount: u8) -> Rgb {
    if base == Rgb::BLACK || base == Rgb::WHITE {
        base
    } else {
        darken(base, amount)
    }
}

/// [`desaturate`], rejected (input returned) when the result shifts hue,
/// comes out lighter than the input, or the input is pure white.
#[must_use]
pub fn safe_desaturate(base: Rgb, amount: u8) -> Rgb {
    let candidate = desaturate(base, amount);
    if hue_differs(candidate, base) || lightness(candidate) > lightness(base) || base == Rgb::WHITE
    {
        return base;
    }
    candidate
}

const HUE_EPSILON: f32 = 1e-4;

fn hue_differs(a: Rgb, b: Rgb) -> bool {
    (effective_hue(a) - effective_hue(b)).abs() > HUE_EPSILON
}

// Grayscale has no hue; treat it as 0 so the comparison never trips on it.
fn effective_hue(rgb: Rgb) -> f32 {
    let hsv = Hsv::from(rgb);
    if hsv.s <= f32::EPSILON { 0.0 } else { hsv.h }
}

fn lightness(rgb: Rgb) -> f32 {
    Hsv::from(rgb).to_hsl().l
}

#[cfg(test)]
mod tests;
