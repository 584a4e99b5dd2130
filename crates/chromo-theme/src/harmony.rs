//! Color-harmony palettes and palette analysis.
//!
//! Each scheme starts from a base color and adds hue rotations on the HSV
//! wheel, then pads with saturation or brightness variants of the base. The
//! first color of every palette is the base itself.

use std::fmt;
use std::str::FromStr;

use chromo_color::Color;
use serde::Serialize;

use crate::error::ThemeError;

/// A harmony rule for [`generate_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Base, its complement, then darker variants of the base.
    #[default]
    Complementary,
    /// Base, +120°, +240°, then desaturated variants.
    Triadic,
    /// Equal hue steps of 30° (or 60° spread over the whole palette).
    Analogous,
    /// Brightness ramp of the base hue.
    Monochromatic,
    /// Base, +150°, +210°, then desaturated variants.
    SplitComplementary,
}

impl Scheme {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::SplitComplementary => "split_complementary",
        }
    }

    /// Parse a scheme name, case-insensitive, with `-` or `_` separators.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase().replace('-', "_");
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Triadic,
            Self::Analogous,
            Self::Monochromatic,
            Self::SplitComplementary,
        ]
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|s| s.name()).collect()
    }
}

impl FromStr for Scheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, ThemeError> {
        Self::from_name(s).ok_or_else(|| ThemeError::UnknownScheme(s.to_string()))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Linear ramp used to pad palettes: `start + i·span/(n − 1)`, or `start`
/// alone when there is only one slot.
fn ramp(start: f64, span: f64, i: usize, slots: usize) -> f64 {
    if slots > 1 {
        start + i as f64 * span / (slots - 1) as f64
    } else {
        start
    }
}

/// Build a `count`-color palette around `base`.
///
/// `count == 0` yields an empty palette. Triadic palettes always contain
/// their three anchor hues before truncation, so a count below 3 returns a
/// prefix of `[base, +120°, +240°]`.
#[must_use]
pub fn generate_palette(base: Color, scheme: Scheme, count: usize) -> Vec<Color> {
    let mut colors = vec![base];

    match scheme {
        Scheme::Complementary => {
            if count > 1 {
                colors.push(base.complementary());
            }
            let pad = count.saturating_sub(2);
            colors.extend((0..pad).map(|i| base.adjust_brightness(ramp(0.7, 0.3, i, pad))));
        }
        Scheme::Triadic => {
            let (a, b) = base.triadic();
            colors.extend([a, b]);
            let pad = count.saturating_sub(3);
            colors.extend((0..pad).map(|i| base.adjust_saturation(ramp(0.6, 0.4, i, pad))));
        }
        Scheme::Analogous => {
            let step = if count <= 5 { 30.0 } else { 60.0 / (count - 1) as f64 };
            colors.extend((1..count).map(|i| base.adjust_hue(step * i as f64)));
        }
        Scheme::Monochromatic => {
            colors.extend((1..count).map(|i| {
                let factor = 0.3 + i as f64 * 0.7 / (count - 1) as f64;
                base.adjust_brightness(factor)
            }));
        }
        Scheme::SplitComplementary => {
            if count > 1 {
                colors.push(base.adjust_hue(150.0));
            }
            if count > 2 {
                colors.push(base.adjust_hue(210.0));
            }
            let pad = count.saturating_sub(3);
            colors.extend((0..pad).map(|i| base.adjust_saturation(ramp(0.5, 0.5, i, pad))));
        }
    }

    colors.truncate(count);
    colors
}

// ─── Analysis ────────────────────────────────────────────────────────────────

/// Pairwise statistics of a palette.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HarmonyReport {
    pub average_contrast: f64,
    pub min_contrast: f64,
    pub max_contrast: f64,
    /// Share of pairs with at least AA (4.5:1) contrast.
    pub accessibility_score: f64,
    /// HSV hues in degrees, ascending.
    pub hue_distribution: Vec<f64>,
    pub saturation_range: (f64, f64),
    pub brightness_range: (f64, f64),
}

/// Contrast and HSV spread of a palette. Fewer than two colors yield zeros
/// and an empty hue list.
#[must_use]
pub fn analyze_harmony(colors: &[Color]) -> HarmonyReport {
    if colors.len() < 2 {
        return HarmonyReport::default();
    }

    let contrasts: Vec<f64> = colors
        .iter()
        .enumerate()
        .flat_map(|(i, a)| colors[i + 1..].iter().map(move |b| a.contrast_ratio(b)))
        .collect();
    let pairs = contrasts.len() as f64;
    let accessible = contrasts
        .iter()
        .filter(|&&c| c >= chromo_color::Level::Aa.required_ratio())
        .count();

    let hsv: Vec<(f64, f64, f64)> = colors.iter().map(|c| c.hsv()).collect();
    let mut hues: Vec<f64> = hsv.iter().map(|&(h, _, _)| h).collect();
    hues.sort_by(f64::total_cmp);

    let range = |values: &mut dyn Iterator<Item = f64>| {
        values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
    };

    HarmonyReport {
        average_contrast: contrasts.iter().sum::<f64>() / pairs,
        min_contrast: contrasts.iter().copied().fold(f64::INFINITY, f64::min),
        max_contrast: contrasts.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        accessibility_score: accessible as f64 / pairs,
        hue_distribution: hues,
        saturation_range: range(&mut hsv.iter().map(|&(_, s, _)| s)),
        brightness_range: range(&mut hsv.iter().map(|&(_, _, v)| v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn c(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.hex()).collect()
    }

    // ── Scheme names ────────────────────────────────────────────────

    #[test]
    fn scheme_name_roundtrip() {
        for &scheme in Scheme::all() {
            assert_eq!(Scheme::from_name(scheme.name()), Some(scheme));
        }
    }

    #[test]
    fn scheme_accepts_dashes_and_case() {
        assert_eq!(Scheme::from_name("Split-Complementary"), Some(Scheme::SplitComplementary));
        assert_eq!(Scheme::from_name("rainbow"), None);
        assert!("rainbow".parse::<Scheme>().is_err());
    }

    // ── Palettes ────────────────────────────────────────────────────

    #[test]
    fn complementary_three() {
        let palette = generate_palette(c("red"), Scheme::Complementary, 3);
        assert_eq!(hexes(&palette), vec!["#ff0000", "#00ffff", "#b20000"]);
    }

    #[test]
    fn complementary_five_brightness_ramp() {
        let palette = generate_palette(c("red"), Scheme::Complementary, 5);
        assert_eq!(palette.len(), 5);
        let values: Vec<f64> = palette[2..].iter().map(|c| c.hsv().2).collect();
        assert!(approx_eq(values[0], 0.7, 1e-9));
        assert!(approx_eq(values[1], 0.85, 1e-9));
        assert!(approx_eq(values[2], 1.0, 1e-9));
    }

    #[test]
    fn triadic_keeps_anchors_then_desaturates() {
        let palette = generate_palette(c("red"), Scheme::Triadic, 5);
        assert_eq!(&hexes(&palette)[..3], ["#ff0000", "#00ff00", "#0000ff"]);
        assert!(approx_eq(palette[3].hsv().1, 0.6, 1e-9));
        assert!(approx_eq(palette[4].hsv().1, 1.0, 1e-9));
    }

    #[test]
    fn triadic_truncates() {
        let palette = generate_palette(c("red"), Scheme::Triadic, 2);
        assert_eq!(hexes(&palette), vec!["#ff0000", "#00ff00"]);
    }

    #[test]
    fn analogous_steps() {
        let small = generate_palette(c("red"), Scheme::Analogous, 3);
        assert!(approx_eq(small[1].hsv().0, 30.0, 1e-6));
        assert!(approx_eq(small[2].hsv().0, 60.0, 1e-6));

        let large = generate_palette(c("red"), Scheme::Analogous, 7);
        assert!(approx_eq(large[1].hsv().0, 10.0, 1e-6));
        assert!(approx_eq(large[6].hsv().0, 60.0, 1e-6));
    }

    #[test]
    fn monochromatic_ramp_ends_at_full_brightness() {
        let palette = generate_palette(c("red"), Scheme::Monochromatic, 4);
        assert_eq!(palette.len(), 4);
        assert!(approx_eq(palette[1].hsv().2, 0.3 + 0.7 / 3.0, 1e-9));
        assert!(approx_eq(palette[3].hsv().2, 1.0, 1e-9));
    }

    #[test]
    fn split_complementary_hues() {
        let palette = generate_palette(c("red"), Scheme::SplitComplementary, 4);
        assert!(approx_eq(palette[1].hsv().0, 150.0, 1e-6));
        assert!(approx_eq(palette[2].hsv().0, 210.0, 1e-6));
        assert!(approx_eq(palette[3].hsv().1, 0.5, 1e-9));
    }

    #[test]
    fn zero_count_is_empty() {
        for &scheme in Scheme::all() {
            assert!(generate_palette(c("red"), scheme, 0).is_empty(), "{scheme}");
        }
    }

    #[test]
    fn first_color_is_base() {
        let base = c("tab:purple");
        for &scheme in Scheme::all() {
            assert_eq!(generate_palette(base, scheme, 6)[0], base, "{scheme}");
        }
    }

    // ── Analysis ────────────────────────────────────────────────────

    #[test]
    fn analysis_of_primaries() {
        let report = analyze_harmony(&[c("red"), c("#00ff00"), c("blue")]);
        let expected_avg = (c("red").contrast_ratio(&c("#00ff00"))
            + c("red").contrast_ratio(&c("blue"))
            + c("#00ff00").contrast_ratio(&c("blue")))
            / 3.0;
        assert!(approx_eq(report.average_contrast, expected_avg, 1e-9));
        assert!(approx_eq(report.accessibility_score, 1.0 / 3.0, 1e-9));
        assert_eq!(report.hue_distribution.len(), 3);
        assert!(approx_eq(report.hue_distribution[2], 240.0, 1e-9));
        assert_eq!(report.saturation_range, (1.0, 1.0));
    }

    #[test]
    fn analysis_of_single_color_is_empty() {
        assert_eq!(analyze_harmony(&[c("red")]), HarmonyReport::default());
    }
}
