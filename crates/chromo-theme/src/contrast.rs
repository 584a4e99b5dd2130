//! WCAG contrast checks and searches for higher-contrast colors.
//!
//! Contrast is always measured with WCAG 2 relative luminance. The searches
//! differ in what they move and how:
//!
//! - [`find_accessible_color`] nudges by a fixed 10% per step until the
//!   required ratio is met (the cheapest "just make it pass" fix);
//! - [`maximize_contrast_iterative`] walks up then down while each step
//!   still improves contrast;
//! - [`maximize_contrast_binary_search`] bisects the scale factor on the
//!   lighter side `[1, 3]` and the darker side `[0.1, 1]`;
//! - [`maximize_contrast_optimization`] runs a golden-section search over
//!   both HSL lightness and HSV brightness at once;
//! - [`ensure_contrast_oklch`] moves OKLCH lightness only, keeping hue and
//!   chroma, and stops as close to the original as the ratio allows.

use std::str::FromStr;

use chromo_color::Color;
pub use chromo_color::Level;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ThemeError;

// ─── Basic checks ────────────────────────────────────────────────────────────

/// WCAG contrast ratio in [1, 21]; argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    a.contrast_ratio(&b)
}

/// Whether the pair reaches the ratio `level` requires.
#[must_use]
pub fn is_accessible(a: Color, b: Color, level: Level) -> bool {
    a.is_accessible(&b, level)
}

// ─── Adjustment ──────────────────────────────────────────────────────────────

/// Which scalar the searches scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjustment {
    /// HSL lightness.
    #[default]
    Lightness,
    /// HSV value.
    Brightness,
}

impl Adjustment {
    /// Scale `color`'s lightness or brightness by `factor`.
    #[must_use]
    pub fn apply(self, color: Color, factor: f64) -> Color {
        match self {
            Self::Lightness => color.adjust_lightness(factor),
            Self::Brightness => color.adjust_brightness(factor),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Brightness => "brightness",
        }
    }
}

impl FromStr for Adjustment {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, ThemeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lightness" | "light" | "hsl" => Ok(Self::Lightness),
            "brightness" | "bright" | "value" | "hsv" => Ok(Self::Brightness),
            _ => Err(ThemeError::UnknownAdjustment(s.to_string())),
        }
    }
}

// ─── Step search ─────────────────────────────────────────────────────────────

/// Step cap shared by the fixed-factor searches.
pub const MAX_ATTEMPTS: usize = 50;

/// Move `base` away from `target` in 10% steps until the pair meets `level`.
///
/// A base already compliant is returned unchanged. A base brighter than the
/// target is scaled by 1.1, otherwise by 0.9, for at most
/// [`MAX_ATTEMPTS`] steps. The result is not guaranteed to comply: a
/// mid-gray against a mid-gray background may never get there.
#[must_use]
pub fn find_accessible_color(
    base: Color,
    target: Color,
    level: Level,
    adjustment: Adjustment,
) -> Color {
    let required = level.required_ratio();
    if base.contrast_ratio(&target) >= required {
        return base;
    }

    let factor = if base.luminance() > target.luminance() { 1.1 } else { 0.9 };

    let mut current = base;
    let mut attempts = 0;
    while current.contrast_ratio(&target) < required && attempts < MAX_ATTEMPTS {
        current = adjustment.apply(current, factor);
        attempts += 1;
    }

    debug!(
        base = %base,
        result = %current,
        attempts,
        ratio = current.contrast_ratio(&target),
        "find_accessible_color"
    );
    current
}

/// Tuning for [`maximize_contrast_iterative`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterativeOptions {
    /// Relative change per step: factors are `1 + step` and `1 - step`.
    pub step_size: f64,
    /// Step cap per direction.
    pub max_attempts: usize,
}

impl Default for IterativeOptions {
    fn default() -> Self {
        Self { step_size: 0.1, max_attempts: MAX_ATTEMPTS }
    }
}

/// Greedy walk for the highest contrast reachable from `base`.
///
/// Walks upward (`1 + step`) first, then downward (`1 − step`) from the
/// original base. A direction stops at its first step that fails to beat
/// the best contrast seen so far in either direction.
#[must_use]
pub fn maximize_contrast_iterative(
    base: Color,
    target: Color,
    adjustment: Adjustment,
    options: IterativeOptions,
) -> Color {
    let mut best = base;
    let mut best_contrast = base.contrast_ratio(&target);

    for factor in [1.0 + options.step_size, 1.0 - options.step_size] {
        let mut current = base;
        for step in 0..options.max_attempts {
            let next = adjustment.apply(current, factor);
            let contrast = next.contrast_ratio(&target);
            trace!(factor, step, contrast, "iterative step");
            if contrast <= best_contrast {
                break;
            }
            best_contrast = contrast;
            best = next;
            current = next;
        }
    }

    debug!(base = %base, result = %best, contrast = best_contrast, "maximize_contrast_iterative");
    best
}

// ─── Bisection ───────────────────────────────────────────────────────────────

/// Default interval width at which bisection stops.
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Bisect the scale factor on each side of 1 for the highest contrast.
///
/// The lighter side searches `[1, 3]` and the darker side `[0.1, 1]`. At each
/// midpoint the candidate is kept if it beats the best contrast so far; the
/// level's required ratio steers which half survives (toward the extreme
/// while compliant, back toward 1 when not).
#[must_use]
pub fn maximize_contrast_binary_search(
    base: Color,
    target: Color,
    level: Level,
    adjustment: Adjustment,
    precision: f64,
) -> Color {
    let required = level.required_ratio();
    let precision = precision.max(1e-9);

    let mut best = base;
    let mut best_contrast = base.contrast_ratio(&target);

    for lighter in [true, false] {
        let (mut low, mut high) = if lighter { (1.0, 3.0) } else { (0.1, 1.0) };
        while high - low > precision {
            let mid = (low + high) * 0.5;
            let candidate = adjustment.apply(base, mid);
            let contrast = candidate.contrast_ratio(&target);
            trace!(lighter, mid, contrast, "bisection step");

            if contrast > best_contrast {
                best_contrast = contrast;
                best = candidate;
            }

            let compliant = contrast >= required;
            match (lighter, compliant) {
                (true, true) | (false, false) => low = mid,
                (true, false) | (false, true) => high = mid,
            }
        }
    }

    debug!(
        base = %base,
        result = %best,
        contrast = best_contrast,
        "maximize_contrast_binary_search"
    );
    best
}

// ─── Golden section ──────────────────────────────────────────────────────────

/// Strategy for [`maximize_contrast_optimization`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    GoldenSection,
    /// Falls back to [`maximize_contrast_iterative`] with lightness and
    /// default options.
    Iterative,
}

impl FromStr for Method {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, ThemeError> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "golden_section" | "golden" => Ok(Self::GoldenSection),
            "iterative" => Ok(Self::Iterative),
            _ => Err(ThemeError::UnknownMethod(s.to_string())),
        }
    }
}

/// Maximize contrast over a scale factor in `[0.1, 3]`.
///
/// With [`Method::GoldenSection`] the objective at factor `f` is the better
/// of scaling HSL lightness and scaling HSV brightness by `f`. After the
/// search converges (interval below `1e-5`) whichever adjustment wins at the
/// best factor is returned.
#[must_use]
pub fn maximize_contrast_optimization(base: Color, target: Color, method: Method) -> Color {
    if method == Method::Iterative {
        let options = IterativeOptions::default();
        return maximize_contrast_iterative(base, target, Adjustment::Lightness, options);
    }

    let objective = |f: f64| {
        let by_lightness = Adjustment::Lightness.apply(base, f).contrast_ratio(&target);
        let by_brightness = Adjustment::Brightness.apply(base, f).contrast_ratio(&target);
        by_lightness.max(by_brightness)
    };

    let factor = golden_section_max(objective, 0.1, 3.0, 1e-5);

    let by_lightness = Adjustment::Lightness.apply(base, factor);
    let by_brightness = Adjustment::Brightness.apply(base, factor);
    let result = if by_lightness.contrast_ratio(&target) > by_brightness.contrast_ratio(&target) {
        by_lightness
    } else {
        by_brightness
    };
    debug!(base = %base, result = %result, factor, "maximize_contrast_optimization");
    result
}

/// Golden-section search for the argmax of `f` on `[a, b]`.
///
/// Returns the best point evaluated, not merely the final bracket midpoint, so
/// plateaus (where contrast saturates at black or white) resolve to the
/// first factor that reached them.
fn golden_section_max(f: impl Fn(f64) -> f64, mut a: f64, mut b: f64, tol: f64) -> f64 {
    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let resphi = 2.0 - phi;

    let mut x1 = resphi.mul_add(b - a, a);
    let mut x2 = (1.0 - resphi).mul_add(b - a, a);
    let mut f1 = f(x1);
    let mut f2 = f(x2);

    let mut best_x = if f1 > f2 { x1 } else { x2 };
    let mut best_f = f1.max(f2);

    while (b - a).abs() > tol {
        if f1 > f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = resphi.mul_add(b - a, a);
            f1 = f(x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - resphi).mul_add(b - a, a);
            f2 = f(x2);
        }

        let current_f = f1.max(f2);
        if current_f > best_f {
            best_f = current_f;
            best_x = if f1 > f2 { x1 } else { x2 };
        }
    }

    best_x
}

// ─── OKLCH lightness ─────────────────────────────────────────────────────────

/// Move `fg`'s OKLCH lightness until it has `min_ratio` contrast with `bg`.
///
/// The foreground moves toward white when white contrasts more with the
/// background than black does, and toward black otherwise. Hue and chroma
/// are kept (chroma is reduced only to stay in gamut). A binary search finds
/// the compliant lightness closest to the original. When even the extreme
/// cannot comply, the extreme is returned.
#[must_use]
pub fn ensure_contrast_oklch(fg: Color, bg: Color, min_ratio: f64) -> Color {
    if fg.contrast_ratio(&bg) >= min_ratio {
        return fg;
    }

    let (l, c, h) = fg.to_oklch();
    let lighten = Color::WHITE.contrast_ratio(&bg) >= Color::BLACK.contrast_ratio(&bg);
    let (mut lo, mut hi) = if lighten { (l, 1.0) } else { (0.0, l) };

    let extreme = Color::from_oklch(if lighten { 1.0 } else { 0.0 }, c, h, fg.a());
    let mut best = extreme;
    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let candidate = Color::from_oklch(mid, c, h, fg.a());
        if candidate.contrast_ratio(&bg) >= min_ratio {
            best = candidate;
            // Stay as close to the original lightness as possible.
            if lighten {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if lighten {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best
}

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Contrast statistics for a set of colors against one background.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContrastSummary {
    pub average_contrast: f64,
    pub min_contrast: f64,
    pub max_contrast: f64,
    pub accessible_aa_count: usize,
    pub accessible_aaa_count: usize,
    pub accessibility_aa_score: f64,
    pub accessibility_aaa_score: f64,
    pub contrasts: Vec<f64>,
}

impl ContrastSummary {
    /// Measure each of `colors` against `background`. Empty input yields
    /// all zeros.
    #[must_use]
    pub fn against<'a>(colors: impl IntoIterator<Item = &'a Color>, background: Color) -> Self {
        let contrasts: Vec<f64> = colors
            .into_iter()
            .map(|c| c.contrast_ratio(&background))
            .collect();
        Self::from_contrasts(contrasts)
    }

    /// Build the statistics from precomputed ratios.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_contrasts(contrasts: Vec<f64>) -> Self {
        if contrasts.is_empty() {
            return Self::default();
        }
        let n = contrasts.len() as f64;
        let aa = contrasts.iter().filter(|&&c| c >= Level::Aa.required_ratio()).count();
        let aaa = contrasts.iter().filter(|&&c| c >= Level::Aaa.required_ratio()).count();
        Self {
            average_contrast: contrasts.iter().sum::<f64>() / n,
            min_contrast: contrasts.iter().copied().fold(f64::INFINITY, f64::min),
            max_contrast: contrasts.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            accessible_aa_count: aa,
            accessible_aaa_count: aaa,
            accessibility_aa_score: aa as f64 / n,
            accessibility_aaa_score: aaa as f64 / n,
            contrasts,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

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

    // ── Basic checks ────────────────────────────────────────────────

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
        assert!(is_accessible(Color::BLACK, Color::WHITE, Level::Aaa));
    }

    #[test]
    fn adjustment_parsing() {
        assert_eq!("HSV".parse::<Adjustment>().unwrap(), Adjustment::Brightness);
        assert_eq!("lightness".parse::<Adjustment>().unwrap(), Adjustment::Lightness);
        assert!("chroma".parse::<Adjustment>().is_err());
    }

    #[test]
    fn method_parsing() {
        assert_eq!("golden-section".parse::<Method>().unwrap(), Method::GoldenSection);
        assert_eq!("iterative".parse::<Method>().unwrap(), Method::Iterative);
        assert!("gradient_descent".parse::<Method>().is_err());
    }

    // ── find_accessible_color ───────────────────────────────────────

    #[test]
    fn compliant_base_is_returned_unchanged() {
        let base = c("black");
        let out = find_accessible_color(base, Color::WHITE, Level::Aa, Adjustment::Lightness);
        assert_eq!(out.tup(), base.tup());
    }

    #[test]
    fn gray_on_white_gets_darker_and_passes() {
        let base = c("#888888");
        let out = find_accessible_color(base, Color::WHITE, Level::Aa, Adjustment::Lightness);
        assert!(out.luminance() < base.luminance());
        let ratio = out.contrast_ratio(&Color::WHITE);
        assert!(ratio >= 4.5, "ratio {ratio}");
    }

    #[test]
    fn gray_on_white_stops_at_first_passing_step() {
        // l = 0.533 → ×0.9 = 0.48 (4.3:1, fails) → ×0.9 = 0.432 (5.1:1, passes).
        let out =
            find_accessible_color(c("#888888"), Color::WHITE, Level::Aa, Adjustment::Lightness);
        assert_eq!(out.hex(), "#6e6e6e");
    }

    #[test]
    fn gray_on_black_gets_lighter() {
        let base = c("#444444");
        let out = find_accessible_color(base, Color::BLACK, Level::Aaa, Adjustment::Brightness);
        assert!(out.luminance() > base.luminance());
        assert!(out.contrast_ratio(&Color::BLACK) >= 7.0);
    }

    // ── Iterative ───────────────────────────────────────────────────

    #[test]
    fn iterative_reaches_black_on_white() {
        let out = maximize_contrast_iterative(
            c("#888888"),
            Color::WHITE,
            Adjustment::Lightness,
            IterativeOptions::default(),
        );
        assert!(out.contrast_ratio(&Color::WHITE) > 15.0, "got {out}");
    }

    #[test]
    fn iterative_never_worse_than_base() {
        let base = c("tab:orange");
        let bg = c("#336699");
        let options = IterativeOptions::default();
        let out = maximize_contrast_iterative(base, bg, Adjustment::Brightness, options);
        assert!(out.contrast_ratio(&bg) >= base.contrast_ratio(&bg));
    }

    #[test]
    fn iterative_zero_attempts_returns_base() {
        let base = c("#888888");
        let opts = IterativeOptions { step_size: 0.1, max_attempts: 0 };
        let out = maximize_contrast_iterative(base, Color::WHITE, Adjustment::Lightness, opts);
        assert_eq!(out.tup(), base.tup());
    }

    // ── Binary search ───────────────────────────────────────────────

    #[test]
    fn binary_search_improves_contrast() {
        let base = c("#888888");
        let out = maximize_contrast_binary_search(
            base,
            Color::WHITE,
            Level::Aa,
            Adjustment::Lightness,
            DEFAULT_PRECISION,
        );
        assert!(out.contrast_ratio(&Color::WHITE) > base.contrast_ratio(&Color::WHITE));
        assert!(out.contrast_ratio(&Color::WHITE) >= 4.5);
    }

    #[test]
    fn binary_search_survives_zero_precision() {
        let out = maximize_contrast_binary_search(
            c("#777777"),
            Color::BLACK,
            Level::Aaa,
            Adjustment::Brightness,
            0.0,
        );
        assert!(out.contrast_ratio(&Color::BLACK) >= c("#777777").contrast_ratio(&Color::BLACK));
    }

    // ── Golden section ──────────────────────────────────────────────

    #[test]
    fn golden_section_finds_parabola_peak() {
        let x = golden_section_max(|x| -(x - 1.7) * (x - 1.7), 0.1, 3.0, 1e-7);
        assert!(approx_eq(x, 1.7, 1e-4), "peak at {x}");
    }

    #[test]
    fn optimization_beats_base() {
        let base = c("#888888");
        let out = maximize_contrast_optimization(base, Color::WHITE, Method::GoldenSection);
        assert!(out.contrast_ratio(&Color::WHITE) > base.contrast_ratio(&Color::WHITE));
        assert!(out.contrast_ratio(&Color::WHITE) >= 7.0, "got {out}");
    }

    #[test]
    fn optimization_iterative_delegates() {
        let base = c("#888888");
        let a = maximize_contrast_optimization(base, Color::WHITE, Method::Iterative);
        let options = IterativeOptions::default();
        let b = maximize_contrast_iterative(base, Color::WHITE, Adjustment::Lightness, options);
        assert_eq!(a.tup(), b.tup());
    }

    // ── OKLCH ───────────────────────────────────────────────────────

    #[test]
    fn oklch_keeps_compliant_color() {
        let fg = c("#000000");
        assert_eq!(ensure_contrast_oklch(fg, Color::WHITE, 4.5).tup(), fg.tup());
    }

    #[test]
    fn oklch_lightens_on_dark_background() {
        let fg = c("#3050a0");
        let bg = c("#101010");
        let out = ensure_contrast_oklch(fg, bg, 5.5);
        assert!(out.contrast_ratio(&bg) >= 5.5, "ratio {}", out.contrast_ratio(&bg));
        assert!(out.to_oklch().0 > fg.to_oklch().0);
    }

    #[test]
    fn oklch_darkens_on_light_background() {
        let fg = c("#88aaff");
        let bg = c("#fafafa");
        let out = ensure_contrast_oklch(fg, bg, 4.5);
        assert!(out.contrast_ratio(&bg) >= 4.5);
        assert!(out.to_oklch().0 < fg.to_oklch().0);
    }

    // ── Summary ─────────────────────────────────────────────────────

    #[test]
    fn summary_of_black_and_white_on_white() {
        let summary = ContrastSummary::against(&[Color::BLACK, Color::WHITE], Color::WHITE);
        assert_eq!(summary.accessible_aa_count, 1);
        assert_eq!(summary.accessible_aaa_count, 1);
        assert!(approx_eq(summary.min_contrast, 1.0, 1e-9));
        assert!(approx_eq(summary.max_contrast, 21.0, 1e-9));
        assert!(approx_eq(summary.average_contrast, 11.0, 1e-9));
        assert!(approx_eq(summary.accessibility_aa_score, 0.5, 1e-12));
    }

    #[test]
    fn summary_empty_is_zero() {
        let summary = ContrastSummary::against(&[], Color::WHITE);
        assert_eq!(summary, ContrastSummary::default());
    }
}
