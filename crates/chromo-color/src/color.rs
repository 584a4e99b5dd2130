// SPDX-License-Identifier: MIT
//
// The `Color` value type.
//
// Colors are stored as gamma-encoded sRGB with straight alpha, four `f64`
// channels that are always inside [0, 1]. Every constructor either validates
// (`new`, `parse`, `from_slice`) or clamps (`clamped`, the HSV/HSL
// adjustments), so no out-of-range value can be observed.
//
// Two families of operations sit on top:
//
//   matplotlib-flavoured   RGBA interpolation, HSV/HSL adjustments with
//                          colorsys semantics, WCAG luminance and contrast
//   perceptual             Oklab/OKLCH conversion, ΔE distance, Oklab mixing,
//                          gamut-mapped OKLCH construction
//
// Equality follows numpy's `isclose` with rtol = atol = 0.01, so two colors
// that render to the same 8-bit value compare equal.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::parse;
use crate::space;

// ─── Level ───────────────────────────────────────────────────────────────────

/// WCAG 2 conformance level for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Minimum contrast: 4.5:1.
    #[default]
    Aa,
    /// Enhanced contrast: 7:1.
    Aaa,
}

impl Level {
    /// Contrast ratio a pair of colors must reach for this level.
    #[must_use]
    pub const fn required_ratio(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl FromStr for Level {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            _ => Err(ColorError::UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with alpha, every channel in [0, 1].
///
/// # Examples
///
/// ```
/// use chromo_color::Color;
///
/// let red: Color = "red".parse().unwrap();
/// let blue = Color::rgb(0.0, 0.0, 1.0).unwrap();
///
/// assert_eq!((red | blue).hex(), "#7f007f");
/// assert_eq!(red.adjust_hue(120.0), Color::rgb(0.0, 1.0, 0.0).unwrap());
/// assert!(Color::BLACK.is_accessible(&Color::WHITE, chromo_color::Level::Aaa));
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from RGBA channels in [0, 1].
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if any channel is outside [0, 1] or NaN.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        for (channel, value) in [("red", r), ("green", g), ("blue", b), ("alpha", a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange { channel, value });
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Create an opaque color from RGB channels in [0, 1].
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if any channel is outside [0, 1].
    pub fn rgb(r: f64, g: f64, b: f64) -> Result<Self> {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color, clamping every channel into [0, 1]. NaN becomes 0.
    #[must_use]
    pub fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        let c = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self { r: c(r), g: c(g), b: c(b), a: c(a) }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit channels with alpha.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Create a color from a sequence of 3 or 4 floats.
    ///
    /// A fourth value is the alpha, unless `alpha` overrides it.
    ///
    /// # Errors
    ///
    /// [`ColorError::TooFewComponents`] for fewer than three values and
    /// [`ColorError::OutOfRange`] for values outside [0, 1].
    pub fn from_slice(values: &[f64], alpha: Option<f64>) -> Result<Self> {
        let [r, g, b, rest @ ..] = values else {
            return Err(ColorError::TooFewComponents(values.len()));
        };
        let a = alpha.or_else(|| rest.first().copied()).unwrap_or(1.0);
        Self::new(*r, *g, *b, a)
    }

    /// Parse a color string. See [`crate::parse`] for the accepted formats.
    ///
    /// # Errors
    ///
    /// [`ColorError::Unrecognized`] if the string is not a color, or the
    /// errors of [`parse::parse_rgb_function`].
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with_alpha(s, None)
    }

    /// Parse a color string, replacing its alpha when `alpha` is given.
    ///
    /// # Errors
    ///
    /// Same as [`Color::parse`], plus [`ColorError::OutOfRange`] for an
    /// override alpha outside [0, 1].
    pub fn parse_with_alpha(s: &str, alpha: Option<f64>) -> Result<Self> {
        let [r, g, b, a] =
            parse::to_rgba(s)?.ok_or_else(|| ColorError::Unrecognized(s.to_string()))?;
        Self::new(r, g, b, alpha.unwrap_or(a))
    }

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Fully transparent black, the color of `"none"`.
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    // ─── Channels ────────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn r(self) -> f64 {
        self.r
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> f64 {
        self.g
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> f64 {
        self.b
    }

    #[inline]
    #[must_use]
    pub const fn a(self) -> f64 {
        self.a
    }

    /// Return a copy with the given alpha, clamped to [0, 1].
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::clamped(self.r, self.g, self.b, alpha)
    }

    // ─── Formats ─────────────────────────────────────────────────────────

    /// `(r, g, b, a)` as floats.
    #[must_use]
    pub const fn tup(self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }

    /// `(r, g, b, a)` as bytes, each channel truncated from `x * 255`.
    #[must_use]
    pub fn hexatup(self) -> (u8, u8, u8, u8) {
        (trunc_u8(self.r), trunc_u8(self.g), trunc_u8(self.b), trunc_u8(self.a))
    }

    /// `(r, g, b)` as bytes.
    #[must_use]
    pub fn hextup(self) -> (u8, u8, u8) {
        let (r, g, b, _) = self.hexatup();
        (r, g, b)
    }

    /// Alias of [`Color::hextup`].
    #[must_use]
    pub fn rgbtup(self) -> (u8, u8, u8) {
        self.hextup()
    }

    /// `(r, g, b)` bytes with the float alpha.
    #[must_use]
    pub fn rgbatup(self) -> (u8, u8, u8, f64) {
        let (r, g, b) = self.rgbtup();
        (r, g, b, self.a)
    }

    /// `#rrggbb`.
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.hextup();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbbaa`.
    #[must_use]
    pub fn hexa(self) -> String {
        let (r, g, b, a) = self.hexatup();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// CSS `rgb(r, g, b)`.
    #[must_use]
    pub fn rgb_string(self) -> String {
        let (r, g, b) = self.rgbtup();
        format!("rgb({r}, {g}, {b})")
    }

    /// CSS `rgba(r, g, b, a)` with alpha to one decimal.
    #[must_use]
    pub fn rgba_string(self) -> String {
        let (r, g, b, a) = self.rgbatup();
        format!("rgba({r}, {g}, {b}, {a:.1})")
    }

    // ─── Interpolation ───────────────────────────────────────────────────

    /// Channel-wise linear interpolation of RGBA. `factor` 0 gives `self`,
    /// 1 gives `other`.
    #[must_use]
    pub fn interpolate(self, other: &Self, factor: f64) -> Self {
        let lerp = |a: f64, b: f64| (b - a).mul_add(factor, a);
        Self::clamped(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    // ─── HSV / HSL ───────────────────────────────────────────────────────

    /// `(hue in degrees, saturation, value)`.
    #[must_use]
    pub fn hsv(self) -> (f64, f64, f64) {
        let (h, s, v) = space::rgb_to_hsv(self.r, self.g, self.b);
        (h * 360.0, s, v)
    }

    /// `(hue in degrees, saturation, lightness)`.
    #[must_use]
    pub fn hsl(self) -> (f64, f64, f64) {
        let (h, l, s) = space::rgb_to_hls(self.r, self.g, self.b);
        (h * 360.0, s, l)
    }

    fn rebuild_hsv(self, h_deg: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = space::hsv_to_rgb(space::normalize_hue(h_deg) / 360.0, s, v);
        Self::clamped(r, g, b, self.a)
    }

    /// Rotate the HSV hue by `degrees`, wrapping modulo 360.
    #[must_use]
    pub fn adjust_hue(self, degrees: f64) -> Self {
        let (h, s, v) = self.hsv();
        self.rebuild_hsv(h + degrees, s, v)
    }

    /// Multiply the HSV saturation by `factor`, clamped to [0, 1].
    #[must_use]
    pub fn adjust_saturation(self, factor: f64) -> Self {
        let (h, s, v) = self.hsv();
        self.rebuild_hsv(h, (s * factor).clamp(0.0, 1.0), v)
    }

    /// Multiply the HSV value by `factor`, clamped to [0, 1].
    #[must_use]
    pub fn adjust_brightness(self, factor: f64) -> Self {
        let (h, s, v) = self.hsv();
        self.rebuild_hsv(h, s, (v * factor).clamp(0.0, 1.0))
    }

    /// Multiply the HSL lightness by `factor`, clamped to [0, 1].
    #[must_use]
    pub fn adjust_lightness(self, factor: f64) -> Self {
        let (h, s, l) = self.hsl();
        let (r, g, b) = space::hls_to_rgb(h / 360.0, (l * factor).clamp(0.0, 1.0), s);
        Self::clamped(r, g, b, self.a)
    }

    /// Replace any of the HSV components; `None` keeps the current one.
    #[must_use]
    pub fn set_hsv(self, h: Option<f64>, s: Option<f64>, v: Option<f64>) -> Self {
        let (ch, cs, cv) = self.hsv();
        self.rebuild_hsv(
            h.unwrap_or(ch),
            s.unwrap_or(cs).clamp(0.0, 1.0),
            v.unwrap_or(cv).clamp(0.0, 1.0),
        )
    }

    // ─── Harmony ─────────────────────────────────────────────────────────

    /// The color opposite on the HSV wheel.
    #[must_use]
    pub fn complementary(self) -> Self {
        self.adjust_hue(180.0)
    }

    /// The two colors 120° and 240° away.
    #[must_use]
    pub fn triadic(self) -> (Self, Self) {
        (self.adjust_hue(120.0), self.adjust_hue(240.0))
    }

    /// The two neighbours `angle` degrees either side.
    #[must_use]
    pub fn analogous(self, angle: f64) -> (Self, Self) {
        (self.adjust_hue(angle), self.adjust_hue(-angle))
    }

    // ─── WCAG ────────────────────────────────────────────────────────────

    /// WCAG 2 relative luminance.
    #[must_use]
    pub fn luminance(self) -> f64 {
        let linearize = |c: f64| {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.0722f64.mul_add(
            linearize(self.b),
            0.2126f64.mul_add(linearize(self.r), 0.7152 * linearize(self.g)),
        )
    }

    /// WCAG contrast ratio, from 1 (identical) to 21 (black on white).
    #[must_use]
    pub fn contrast_ratio(self, other: &Self) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// Whether the pair meets the contrast ratio `level` requires.
    #[must_use]
    pub fn is_accessible(self, other: &Self, level: Level) -> bool {
        self.contrast_ratio(other) >= level.required_ratio()
    }

    // ─── Perceptual ──────────────────────────────────────────────────────

    /// Oklab `(L, a, b)`.
    #[must_use]
    pub fn to_oklab(self) -> (f64, f64, f64) {
        space::srgb_to_oklab(self.r, self.g, self.b)
    }

    /// OKLCH `(L, C, hue in degrees)`.
    #[must_use]
    pub fn to_oklch(self) -> (f64, f64, f64) {
        let (l, a, b) = self.to_oklab();
        space::oklab_to_oklch(l, a, b)
    }

    /// Build a color from OKLCH, reducing chroma until it fits in sRGB.
    ///
    /// Lightness and hue are kept; only chroma is sacrificed.
    #[must_use]
    pub fn from_oklch(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        let l = l.clamp(0.0, 1.0);
        let fits = |c: f64| {
            let (r, g, b) = space::oklch_to_srgb(l, c, h);
            space::in_gamut(r, g, b)
        };

        let mut chroma = c.max(0.0);
        if !fits(chroma) {
            let mut lo = 0.0;
            let mut hi = chroma;
            for _ in 0..24 {
                let mid = (lo + hi) * 0.5;
                if fits(mid) {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            chroma = lo;
        }

        let (r, g, b) = space::oklch_to_srgb(l, chroma, h);
        Self::clamped(r, g, b, alpha)
    }

    /// Perceptual distance (Euclidean ΔE in Oklab). Below ~0.02 is
    /// generally imperceptible.
    #[must_use]
    pub fn distance(self, other: &Self) -> f64 {
        let (l1, a1, b1) = self.to_oklab();
        let (l2, a2, b2) = other.to_oklab();
        let dl = l1 - l2;
        let da = a1 - a2;
        let db = b1 - b2;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    /// Mix in Oklab. Smoother midpoints than RGB interpolation, with no
    /// muddy grays between complementary hues.
    #[must_use]
    pub fn mix_oklab(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (l1, a1, b1) = self.to_oklab();
        let (l2, a2, b2) = other.to_oklab();
        let lerp = |x: f64, y: f64| (y - x).mul_add(t, x);
        let (r, g, b) = space::oklab_to_srgb(lerp(l1, l2), lerp(a1, a2), lerp(b1, b2));
        Self::clamped(r, g, b, lerp(self.a, other.a))
    }

    /// Mix in OKLCH, turning the hue along the shorter arc. A gray end has
    /// no hue of its own and takes the other end's.
    #[must_use]
    pub fn mix_oklch(self, other: &Self, t: f64) -> Self {
        const ACHROMATIC: f64 = 1e-4;
        let t = t.clamp(0.0, 1.0);
        let (l1, c1, mut h1) = self.to_oklch();
        let (l2, c2, mut h2) = other.to_oklch();
        if c1 < ACHROMATIC {
            h1 = h2;
        }
        if c2 < ACHROMATIC {
            h2 = h1;
        }
        let lerp = |x: f64, y: f64| (y - x).mul_add(t, x);
        let hue = space::interpolate_hue(h1, h2, t);
        Self::from_oklch(lerp(l1, l2), lerp(c1, c2), hue, lerp(self.a, other.a))
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn trunc_u8(v: f64) -> u8 {
    // Channels are in [0, 1], so the product is in [0, 255].
    (v * 255.0) as u8
}

// ─── Traits ──────────────────────────────────────────────────────────────────

impl BitOr for Color {
    type Output = Self;

    /// Midpoint of the two colors.
    fn bitor(self, rhs: Self) -> Self {
        self.interpolate(&rhs, 0.5)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.hexa())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const TOL: f64 = 0.01;
        let close = |a: f64, b: f64| (a - b).abs() <= TOL.mul_add(b.abs(), TOL);
        close(self.r, other.r)
            && close(self.g, other.g)
            && close(self.b, other.b)
            && close(self.a, other.a)
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn c(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_rejects_out_of_range() {
        let err = Color::new(1.2, 0.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ColorError::OutOfRange { channel: "red", .. }));
        assert!(Color::new(0.0, 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn from_slice_uses_fourth_value_as_alpha() {
        let col = Color::from_slice(&[0.2, 0.4, 0.6, 0.5], None).unwrap();
        assert!(approx_eq(col.a(), 0.5, 1e-12));
        let col = Color::from_slice(&[0.2, 0.4, 0.6, 0.5], Some(0.9)).unwrap();
        assert!(approx_eq(col.a(), 0.9, 1e-12));
        let col = Color::from_slice(&[0.2, 0.4, 0.6], None).unwrap();
        assert!(approx_eq(col.a(), 1.0, 1e-12));
    }

    #[test]
    fn from_slice_too_short() {
        assert_eq!(
            Color::from_slice(&[0.1, 0.2], None).unwrap_err(),
            ColorError::TooFewComponents(2)
        );
    }

    #[test]
    fn parse_with_alpha_overrides() {
        let col = Color::parse_with_alpha("#ff000080", Some(1.0)).unwrap();
        assert!(approx_eq(col.a(), 1.0, 1e-12));
    }

    #[test]
    fn parse_unrecognized() {
        assert_eq!(
            Color::parse("notacolor").unwrap_err(),
            ColorError::Unrecognized("notacolor".to_string())
        );
    }

    #[test]
    fn clamped_handles_nan_and_overflow() {
        let col = Color::clamped(f64::NAN, 2.0, -1.0, 0.5);
        assert_eq!(col.tup(), (0.0, 1.0, 0.0, 0.5));
    }

    // ── Formats ──────────────────────────────────────────────────────

    #[test]
    fn format_accessors() {
        let col = Color::new(1.0, 0.5, 0.0, 0.5).unwrap();
        assert_eq!(col.hexatup(), (255, 127, 0, 127));
        assert_eq!(col.hex(), "#ff7f00");
        assert_eq!(col.hexa(), "#ff7f007f");
        assert_eq!(col.rgb_string(), "rgb(255, 127, 0)");
        assert_eq!(col.rgba_string(), "rgba(255, 127, 0, 0.5)");
        assert_eq!(col.rgbatup(), (255, 127, 0, 0.5));
    }

    #[test]
    fn display_and_debug() {
        let red = c("red");
        assert_eq!(red.to_string(), "#ff0000");
        assert_eq!(format!("{red:?}"), "Color(#ff0000ff)");
    }

    // ── Interpolation ────────────────────────────────────────────────

    #[test]
    fn interpolate_midpoint() {
        let mid = c("red").interpolate(&c("blue"), 0.5);
        assert_eq!(mid.tup(), (0.5, 0.0, 0.5, 1.0));
        assert_eq!(c("red") | c("blue"), mid);
    }

    #[test]
    fn interpolate_endpoints() {
        let red = c("red");
        let blue = c("blue");
        assert_eq!(red.interpolate(&blue, 0.0).tup(), red.tup());
        assert_eq!(red.interpolate(&blue, 1.0).tup(), blue.tup());
    }

    // ── HSV / HSL ────────────────────────────────────────────────────

    #[test]
    fn hsv_in_degrees() {
        let (h, s, v) = c("blue").hsv();
        assert!(approx_eq(h, 240.0, 1e-9));
        assert!(approx_eq(s, 1.0, 1e-9));
        assert!(approx_eq(v, 1.0, 1e-9));
    }

    #[test]
    fn hsl_of_red() {
        let (h, s, l) = c("red").hsl();
        assert!(approx_eq(h, 0.0, 1e-9));
        assert!(approx_eq(s, 1.0, 1e-9));
        assert!(approx_eq(l, 0.5, 1e-9));
    }

    #[test]
    fn adjust_hue_wraps_and_keeps_alpha() {
        let red = c("red").with_alpha(0.4);
        let green = red.adjust_hue(120.0);
        assert_eq!(green, Color::new(0.0, 1.0, 0.0, 0.4).unwrap());
        assert_eq!(red.adjust_hue(-240.0), green);
        assert_eq!(red.adjust_hue(360.0), red);
    }

    #[test]
    fn adjust_saturation_and_brightness_clamp() {
        let red = c("red");
        assert_eq!(red.adjust_saturation(0.0), Color::WHITE);
        assert_eq!(red.adjust_brightness(0.5), Color::rgb(0.5, 0.0, 0.0).unwrap());
        assert_eq!(red.adjust_brightness(10.0), red);
    }

    #[test]
    fn adjust_lightness_darkens() {
        let red = c("red");
        assert_eq!(red.adjust_lightness(0.0), Color::BLACK);
        assert_eq!(red.adjust_lightness(2.0), Color::WHITE);
        let (_, _, l) = red.adjust_lightness(0.8).hsl();
        assert!(approx_eq(l, 0.4, 1e-9));
    }

    #[test]
    fn set_hsv_partial() {
        let blue = c("red").set_hsv(Some(240.0), None, None);
        assert_eq!(blue, c("blue"));
        let dim = c("red").set_hsv(None, None, Some(0.5));
        assert_eq!(dim, Color::rgb(0.5, 0.0, 0.0).unwrap());
    }

    #[test]
    fn harmony_helpers() {
        let red = c("red");
        assert_eq!(red.complementary(), c("cyan"));
        let (a, b) = red.triadic();
        assert_eq!(a, Color::rgb(0.0, 1.0, 0.0).unwrap());
        assert_eq!(b, c("blue"));
        let (plus, minus) = red.analogous(30.0);
        assert!(approx_eq(plus.hsv().0, 30.0, 1e-6));
        assert!(approx_eq(minus.hsv().0, 330.0, 1e-6));
    }

    // ── WCAG ─────────────────────────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(Color::BLACK.luminance(), 0.0, 1e-12));
        assert!(approx_eq(Color::WHITE.luminance(), 1.0, 1e-12));
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "ratio = {ratio}");
        assert!(approx_eq(Color::WHITE.contrast_ratio(&Color::BLACK), ratio, 1e-12));
    }

    #[test]
    fn contrast_same_color_is_1() {
        let gray = c("gray");
        assert!(approx_eq(gray.contrast_ratio(&gray), 1.0, 1e-12));
    }

    #[test]
    fn accessibility_levels() {
        let gray = c("#767676");
        assert!(gray.is_accessible(&Color::WHITE, Level::Aa));
        assert!(!gray.is_accessible(&Color::WHITE, Level::Aaa));
    }

    #[test]
    fn level_parsing() {
        assert_eq!("aa".parse::<Level>().unwrap(), Level::Aa);
        assert_eq!("AAA".parse::<Level>().unwrap(), Level::Aaa);
        assert!("A".parse::<Level>().is_err());
        assert_eq!(Level::default(), Level::Aa);
    }

    // ── Equality ─────────────────────────────────────────────────────

    #[test]
    fn equality_is_tolerant() {
        let a = Color::rgb(0.5, 0.5, 0.5).unwrap();
        let b = Color::rgb(0.505, 0.5, 0.5).unwrap();
        let far = Color::rgb(0.6, 0.5, 0.5).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, far);
    }

    // ── Perceptual ───────────────────────────────────────────────────

    #[test]
    fn oklch_roundtrip() {
        let orange = c("orange");
        let (l, ch, h) = orange.to_oklch();
        assert_eq!(Color::from_oklch(l, ch, h, 1.0), orange);
    }

    #[test]
    fn from_oklch_maps_into_gamut() {
        let vivid = Color::from_oklch(0.7, 0.5, 150.0, 1.0);
        let (r, g, b, _) = vivid.tup();
        for v in [r, g, b] {
            assert!((0.0..=1.0).contains(&v));
        }
        let (l, _, _) = vivid.to_oklch();
        assert!(approx_eq(l, 0.7, 0.02), "lightness drifted to {l}");
    }

    #[test]
    fn distance_properties() {
        let red = c("red");
        assert!(approx_eq(red.distance(&red), 0.0, 1e-12));
        assert!(approx_eq(red.distance(&c("blue")), c("blue").distance(&red), 1e-12));
        assert!(Color::BLACK.distance(&Color::WHITE) > 0.9);
    }

    #[test]
    fn mix_oklab_endpoints() {
        let red = c("red");
        let blue = c("blue");
        assert_eq!(red.mix_oklab(&blue, 0.0), red);
        assert_eq!(red.mix_oklab(&blue, 1.0), blue);
    }

    #[test]
    fn mix_oklch_turns_the_short_way() {
        let red = c("red");
        let blue = c("blue");
        let (_, _, h_red) = red.to_oklch();
        let (_, _, h_blue) = blue.to_oklch();
        // Red sits near 29°, blue near 264°: the short arc passes through magenta.
        let (_, _, h_mid) = red.mix_oklch(&blue, 0.5).to_oklch();
        let expected = space::interpolate_hue(h_red, h_blue, 0.5);
        assert!(expected > 300.0, "expected = {expected}");
        assert!(approx_eq(h_mid, expected, 1.0), "h_mid = {h_mid}");
        assert!(red.mix_oklch(&blue, 0.0).distance(&red) < 1e-3);
        assert!(red.mix_oklch(&blue, 1.0).distance(&blue) < 1e-3);
    }

    #[test]
    fn mix_oklch_gray_end_borrows_hue() {
        let blue = c("blue");
        let (_, _, h_blue) = blue.to_oklch();
        let (_, chroma, h_mid) = Color::WHITE.mix_oklch(&blue, 0.5).to_oklch();
        assert!(chroma > 0.05);
        assert!(approx_eq(h_mid, h_blue, 1.0), "h_mid = {h_mid}");
    }
}
