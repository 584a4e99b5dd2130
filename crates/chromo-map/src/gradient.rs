// SPDX-License-Identifier: MIT
//
// Gradient: a named, non-empty, ordered list of colors that behaves like a
// matplotlib colormap built with `from_list`, where the N colors sit at
// evenly spaced anchors `k / (N − 1)`.

use std::fmt;
use std::ops::{Add, BitOr, Div, Index, Mul};
use std::str::FromStr;

use chromo_color::term::{self, ColorMode};
use chromo_color::{Color, Level};
use chromo_theme::ContrastSummary;
use chromo_theme::contrast::{
    self, Adjustment, IterativeOptions, Method, find_accessible_color,
    maximize_contrast_binary_search, maximize_contrast_iterative, maximize_contrast_optimization,
};
use tracing::trace;

use crate::catalog::Catalog;
use crate::error::{MapError, Result};
use crate::segment::SegmentData;

/// Name given to gradients built without one.
pub const DEFAULT_NAME: &str = "custom";

/// Most blocks drawn by [`Gradient::terminal_repr`] at the default width.
pub const TERMINAL_MAX_CHARS: usize = 64;

/// Interpolation space for [`Gradient::interpolated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    /// Channel-wise sRGB, matching matplotlib.
    #[default]
    Rgb,
    /// Perceptual mixing in Oklab.
    Oklab,
    /// Polar Oklab, hue turning along the shorter arc.
    Oklch,
}

impl Space {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }
}

impl FromStr for Space {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" | "srgb" => Ok(Self::Rgb),
            "oklab" => Ok(Self::Oklab),
            "oklch" => Ok(Self::Oklch),
            _ => Err(MapError::UnknownSpace(s.to_string())),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Gradient {
    name: String,
    colors: Vec<Color>,
}

// ─── Construction ────────────────────────────────────────────────────────────

impl Gradient {
    /// A gradient over `colors`. Empty input is rejected.
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(MapError::Empty);
        }
        Ok(Self { name: name.into(), colors })
    }

    /// A gradient named `custom`.
    pub fn custom(colors: Vec<Color>) -> Result<Self> {
        Self::new(DEFAULT_NAME, colors)
    }

    /// Parse every entry with [`Color::parse`].
    pub fn from_strs(name: impl Into<String>, specs: &[&str]) -> Result<Self> {
        let colors = specs
            .iter()
            .map(|s| Color::parse(s))
            .collect::<chromo_color::Result<Vec<_>>>()?;
        Self::new(name, colors)
    }

    /// Like [`Gradient::new`] with every alpha replaced by `alpha`.
    pub fn with_alpha_override(
        name: impl Into<String>,
        colors: Vec<Color>,
        alpha: f64,
    ) -> Result<Self> {
        Self::new(name, colors.into_iter().map(|c| c.with_alpha(alpha)).collect())
    }

    /// Expand matplotlib segment data into `n` colors.
    pub fn from_segments(name: impl Into<String>, data: &SegmentData, n: usize) -> Result<Self> {
        let colors = data
            .lookup_table(n)?
            .into_iter()
            .map(|[r, g, b, a]| Color::clamped(r, g, b, a))
            .collect();
        Self::new(name, colors)
    }

    /// A matplotlib colormap from the catalog. A trailing `_r` reverses it.
    pub fn named(name: &str) -> Result<Self> {
        Catalog::global()
            .matplotlib_cmap(name)
            .ok_or_else(|| MapError::UnknownColormap(name.to_string()))
    }

}

// ─── Access ──────────────────────────────────────────────────────────────────

impl Gradient {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    #[must_use]
    pub fn first(&self) -> Color {
        self.colors[0]
    }

    #[must_use]
    pub fn last(&self) -> Color {
        self.colors[self.colors.len() - 1]
    }

    /// Color at a fractional anchor position `t ∈ [0, N − 1]`.
    fn position(&self, t: f64, space: Space) -> Color {
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        // Truncation is the intended floor for the non-negative `t`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = (t.max(0.0).floor() as usize).min(n - 2);
        let frac = (t - i as f64).clamp(0.0, 1.0);
        let (a, b) = (self.colors[i], self.colors[i + 1]);
        match space {
            Space::Rgb => a.interpolate(&b, frac),
            Space::Oklab => a.mix_oklab(&b, frac),
            Space::Oklch => a.mix_oklch(&b, frac),
        }
    }

    /// Interpolated color at `x ∈ [0, 1]`; the ends are returned exactly.
    pub fn at(&self, x: f64) -> Result<Color> {
        if !(0.0..=1.0).contains(&x) {
            return Err(MapError::IndexOutOfRange(x.to_string()));
        }
        if x >= 1.0 {
            return Ok(self.last());
        }
        if x <= 0.0 {
            return Ok(self.first());
        }
        Ok(self.position(x * (self.colors.len() - 1) as f64, Space::Rgb))
    }

    /// A `custom` gradient of the colors at each position.
    pub fn sample(&self, positions: &[f64]) -> Result<Self> {
        let colors = positions.iter().map(|&x| self.at(x)).collect::<Result<Vec<_>>>()?;
        Self::custom(colors)
    }

    /// `num` evenly spaced samples from `start` to `stop` (defaults 0, 1 and
    /// the current length).
    pub fn slice(&self, start: Option<f64>, stop: Option<f64>, num: Option<usize>) -> Result<Self> {
        let positions =
            linspace(start.unwrap_or(0.0), stop.unwrap_or(1.0), num.unwrap_or(self.len()));
        self.sample(&positions)
    }

    /// matplotlib colormap call: `N` equal bins over `[0, 1]`, values below
    /// and above clamp to the ends, NaN is transparent.
    #[must_use]
    pub fn lookup(&self, x: f64) -> Color {
        if x.is_nan() {
            return Color::TRANSPARENT;
        }
        let n = self.colors.len();
        let scaled = x * n as f64;
        if scaled < 0.0 {
            return self.first();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bin = (scaled as usize).min(n - 1);
        self.colors[bin]
    }
}

fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { (i as f64).mul_add(step, start) })
                .collect()
        }
    }
}

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

const fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

// ─── Resampling ──────────────────────────────────────────────────────────────

impl Gradient {
    fn resampled_colors(&self, n: usize, space: Space) -> Vec<Color> {
        let m = self.colors.len();
        match n {
            0 => Vec::new(),
            1 => vec![self.last()],
            _ => {
                let scale = (m - 1) as f64 / (n - 1) as f64;
                (0..n)
                    .map(|k| {
                        if k == n - 1 {
                            self.last()
                        } else {
                            self.position(k as f64 * scale, space)
                        }
                    })
                    .collect()
            }
        }
    }

    /// `n` colors sampled piecewise-linearly at `k / (n − 1)`, keeping the
    /// name. A single color yields the last one.
    pub fn resize(&self, n: usize) -> Result<Self> {
        self.interpolated(n, Space::Rgb)
    }

    /// [`Gradient::resize`] with a choice of interpolation space.
    pub fn interpolated(&self, n: usize, space: Space) -> Result<Self> {
        trace!(name = %self.name, from = self.len(), to = n, ?space, "resample");
        Self::new(self.name.clone(), self.resampled_colors(n, space))
    }

    /// Colors in reverse order; the name defaults to `<name>_r`.
    #[must_use]
    pub fn reversed(&self, name: Option<&str>) -> Self {
        let name = name.map_or_else(|| format!("{}_r", self.name), str::to_string);
        Self { name, colors: self.colors.iter().rev().copied().collect() }
    }

    #[must_use]
    pub fn rename(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), colors: self.colors.clone() }
    }

    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        self.map_colors(self.name.clone(), |c| c.with_alpha(alpha))
    }

    /// The colors repeated `times` times. Zero repetitions leave nothing.
    pub fn repeat(&self, times: usize) -> Result<Self> {
        Self::new(self.name.clone(), self.colors.repeat(times))
    }

    /// Keep `trunc(factor · N)` evenly spaced samples. A count of zero or
    /// less keeps `N`.
    #[must_use]
    pub fn divide(&self, factor: f64) -> Self {
        let wanted = (factor * self.len() as f64).trunc();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let num = if wanted >= 1.0 { wanted as usize } else { self.len() };
        let colors = linspace(0.0, 1.0, num)
            .into_iter()
            .map(|x| self.at(x).unwrap_or_else(|_| self.last()))
            .collect();
        Self { name: self.name.clone(), colors }
    }

    /// Resize both to the least common multiple of their lengths and take
    /// pairwise midpoints.
    #[must_use]
    pub fn blend(&self, other: &Self) -> Self {
        let n = lcm(self.len(), other.len());
        let a = self.resampled_colors(n, Space::Rgb);
        let b = other.resampled_colors(n, Space::Rgb);
        Self {
            name: format!("{} | {}", self.name, other.name),
            colors: a.into_iter().zip(b).map(|(x, y)| x | y).collect(),
        }
    }

    /// Concatenation named `"a + b"`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            name: format!("{} + {}", self.name, other.name),
            colors: self.colors.iter().chain(&other.colors).copied().collect(),
        }
    }
}

// ─── Bulk adjustments ────────────────────────────────────────────────────────

impl Gradient {
    fn map_colors(&self, name: String, f: impl Fn(Color) -> Color) -> Self {
        Self { name, colors: self.colors.iter().map(|&c| f(c)).collect() }
    }

    #[must_use]
    pub fn adjust_hue(&self, degrees: f64) -> Self {
        self.map_colors(format!("{}_hue{degrees:+.0}", self.name), |c| c.adjust_hue(degrees))
    }

    #[must_use]
    pub fn adjust_saturation(&self, factor: f64) -> Self {
        self.map_colors(format!("{}_sat{factor:.1}", self.name), |c| c.adjust_saturation(factor))
    }

    #[must_use]
    pub fn adjust_brightness(&self, factor: f64) -> Self {
        self.map_colors(format!("{}_bright{factor:.1}", self.name), |c| c.adjust_brightness(factor))
    }

    #[must_use]
    pub fn adjust_lightness(&self, factor: f64) -> Self {
        self.map_colors(format!("{}_light{factor:.1}", self.name), |c| c.adjust_lightness(factor))
    }

    /// Every hue rotated by 180°.
    #[must_use]
    pub fn complementary(&self) -> Self {
        self.map_colors(format!("{}_complementary", self.name), Color::complementary)
    }

    /// Step each color's lightness until it meets `level` on `background`.
    #[must_use]
    pub fn make_accessible(&self, background: Color, level: Level) -> Self {
        self.map_colors(format!("{}_accessible", self.name), |c| {
            find_accessible_color(c, background, level, Adjustment::Lightness)
        })
    }

    /// Same as [`Gradient::make_accessible`].
    #[must_use]
    pub fn find_accessible_version(&self, background: Color, level: Level) -> Self {
        self.make_accessible(background, level)
    }

    #[must_use]
    pub fn maximize_contrast_iterative(
        &self,
        background: Color,
        adjustment: Adjustment,
        options: IterativeOptions,
    ) -> Self {
        self.map_colors(format!("{}_max_contrast_iterative", self.name), |c| {
            maximize_contrast_iterative(c, background, adjustment, options)
        })
    }

    #[must_use]
    pub fn maximize_contrast_binary_search(
        &self,
        background: Color,
        level: Level,
        adjustment: Adjustment,
        precision: f64,
    ) -> Self {
        self.map_colors(format!("{}_max_contrast_binary", self.name), |c| {
            maximize_contrast_binary_search(c, background, level, adjustment, precision)
        })
    }

    #[must_use]
    pub fn maximize_contrast_optimization(&self, background: Color, method: Method) -> Self {
        self.map_colors(format!("{}_max_contrast_optimization", self.name), |c| {
            maximize_contrast_optimization(c, background, method)
        })
    }

    /// Contrast of every color against `background`.
    #[must_use]
    pub fn analyze_contrast(&self, background: Color) -> ContrastSummary {
        ContrastSummary::against(&self.colors, background)
    }

    /// Share of colors meeting `level` on `background`.
    #[must_use]
    pub fn accessible_share(&self, background: Color, level: Level) -> f64 {
        let ok = self
            .colors
            .iter()
            .filter(|&&c| contrast::is_accessible(c, background, level))
            .count();
        ok as f64 / self.len() as f64
    }
}

// ─── Channel lists ───────────────────────────────────────────────────────────

impl Gradient {
    #[must_use]
    pub fn hexes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hex()).collect()
    }

    #[must_use]
    pub fn hexas(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hexa()).collect()
    }

    #[must_use]
    pub fn tups(&self) -> Vec<(f64, f64, f64, f64)> {
        self.colors.iter().map(|c| c.tup()).collect()
    }

    #[must_use]
    pub fn rgba_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.rgba_string()).collect()
    }
}

// ─── Display ─────────────────────────────────────────────────────────────────

impl Gradient {
    /// Background-colored blocks followed by ` Gradient(name, N colors)`.
    ///
    /// At most `max_chars` colors are drawn (resampled when longer). Up to 32
    /// shown colors get two cells each, more get one. Plain mode prints the
    /// label alone.
    #[must_use]
    pub fn terminal_repr(&self, mode: ColorMode, max_chars: usize) -> String {
        if mode == ColorMode::Plain {
            return self.to_string();
        }
        let max_chars = max_chars.max(1);
        let shown = if self.len() > max_chars {
            self.resampled_colors(max_chars, Space::Rgb)
        } else {
            self.colors.clone()
        };
        let cell = if shown.len() <= 32 { "  " } else { " " };

        let mut out: String = shown.iter().map(|&c| term::paint_bg(cell, c, mode)).collect();
        out.push(' ');
        out.push_str(&self.to_string());
        out
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gradient({}, {} colors)", self.name, self.colors.len())
    }
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl Index<usize> for Gradient {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl IntoIterator for Gradient {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

// ─── Operators ───────────────────────────────────────────────────────────────

impl Add for &Gradient {
    type Output = Gradient;

    fn add(self, rhs: Self) -> Gradient {
        self.concat(rhs)
    }
}

impl Add for Gradient {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.concat(&rhs)
    }
}

impl Mul<usize> for &Gradient {
    type Output = Result<Gradient>;

    fn mul(self, rhs: usize) -> Result<Gradient> {
        self.repeat(rhs)
    }
}

impl Div<f64> for &Gradient {
    type Output = Gradient;

    fn div(self, rhs: f64) -> Gradient {
        self.divide(rhs)
    }
}

impl BitOr for &Gradient {
    type Output = Gradient;

    fn bitor(self, rhs: Self) -> Gradient {
        self.blend(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn rgb() -> Gradient {
        Gradient::from_strs("rGb", &["#ff0000", "#00ff00", "#0000ff"]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(Gradient::new("x", Vec::new()), Err(MapError::Empty)));
        assert!(matches!(Gradient::from_strs("x", &[]), Err(MapError::Empty)));
    }

    #[test]
    fn bad_color_is_reported() {
        let err = Gradient::from_strs("x", &["red", "notacolor"]).unwrap_err();
        assert!(matches!(err, MapError::Color(_)), "{err}");
    }

    #[test]
    fn alpha_override_applies_to_all() {
        let g = Gradient::with_alpha_override("x", vec![Color::WHITE, Color::BLACK], 0.5).unwrap();
        assert!(g.iter().all(|c| approx_eq(c.a(), 0.5, 1e-12)));
    }

    #[test]
    fn custom_default_name() {
        assert_eq!(Gradient::custom(vec![Color::WHITE]).unwrap().name(), "custom");
    }

    #[test]
    fn from_segments_builds_table() {
        let ramp = vec![(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];
        let data = SegmentData::new(ramp.clone(), ramp.clone(), ramp);
        let g = Gradient::from_segments("gray", &data, 256).unwrap();
        assert_eq!(g.len(), 256);
        assert_eq!(g.first(), Color::BLACK);
        assert_eq!(g.last(), Color::WHITE);
    }

    // ── Indexing ────────────────────────────────────────────────────

    #[test]
    fn float_index_interpolates() {
        let g = rgb();
        assert_eq!(g.at(0.0).unwrap().hex(), "#ff0000");
        assert_eq!(g.at(1.0).unwrap().hex(), "#0000ff");
        let quarter = g.at(0.25).unwrap();
        assert!(approx_eq(quarter.r(), 0.5, 1e-12));
        assert!(approx_eq(quarter.g(), 0.5, 1e-12));
        assert!(g.at(1.5).is_err());
        assert!(g.at(-0.1).is_err());
    }

    #[test]
    fn integer_index() {
        let g = rgb();
        assert_eq!(g[1].hex(), "#00ff00");
        assert_eq!(g.get(3), None);
    }

    #[test]
    fn slice_defaults_to_full_range() {
        let g = rgb();
        assert_eq!(g.slice(None, None, None).unwrap(), g);
        let half = g.slice(Some(0.5), None, Some(2)).unwrap();
        assert_eq!(half.name(), "custom");
        assert_eq!(half.hexes(), vec!["#00ff00", "#0000ff"]);
    }

    #[test]
    fn sample_rejects_out_of_range() {
        assert!(rgb().sample(&[0.0, 2.0]).is_err());
        assert!(matches!(rgb().sample(&[]), Err(MapError::Empty)));
    }

    #[test]
    fn lookup_follows_colormap_bins() {
        let g = rgb();
        assert_eq!(g.lookup(0.0).hex(), "#ff0000");
        assert_eq!(g.lookup(0.34).hex(), "#00ff00");
        assert_eq!(g.lookup(0.99).hex(), "#0000ff");
        assert_eq!(g.lookup(1.0).hex(), "#0000ff");
        assert_eq!(g.lookup(-3.0).hex(), "#ff0000");
        assert_eq!(g.lookup(7.0).hex(), "#0000ff");
        assert_eq!(g.lookup(f64::NAN), Color::TRANSPARENT);
    }

    // ── Resampling ──────────────────────────────────────────────────

    #[test]
    fn resize_keeps_name_and_ends() {
        let g = rgb().resize(5).unwrap();
        assert_eq!(g.name(), "rGb");
        assert_eq!(g.len(), 5);
        assert_eq!(g.first().hex(), "#ff0000");
        assert_eq!(g[2].hex(), "#00ff00");
        assert_eq!(g.last().hex(), "#0000ff");
    }

    #[test]
    fn resize_edges() {
        assert_eq!(rgb().resize(1).unwrap().hexes(), vec!["#0000ff"]);
        assert!(matches!(rgb().resize(0), Err(MapError::Empty)));
        let single = Gradient::custom(vec![Color::WHITE]).unwrap().resize(3).unwrap();
        assert_eq!(single.len(), 3);
    }

    #[test]
    fn oklab_interpolation_differs_in_the_middle() {
        let g = Gradient::from_strs("bw", &["blue", "yellow"]).unwrap();
        let linear = g.interpolated(3, Space::Rgb).unwrap();
        let perceptual = g.interpolated(3, Space::Oklab).unwrap();
        assert_eq!(linear.first(), perceptual.first());
        assert_ne!(linear[1].hex(), perceptual[1].hex());
    }

    #[test]
    fn oklch_interpolation_keeps_chroma_between_complements() {
        let g = Gradient::from_strs("bw", &["blue", "yellow"]).unwrap();
        let lab = g.interpolated(3, Space::Oklab).unwrap();
        let lch = g.interpolated(3, Space::Oklch).unwrap();
        let (_, lab_chroma, _) = lab[1].to_oklch();
        let (_, lch_chroma, _) = lch[1].to_oklch();
        assert!(lch_chroma > lab_chroma, "{lch_chroma} <= {lab_chroma}");
        assert_eq!(lch.last().hex(), "#ffff00");
    }

    #[test]
    fn space_parses_by_name() {
        assert_eq!("OKLCH".parse::<Space>().unwrap(), Space::Oklch);
        assert_eq!(" srgb ".parse::<Space>().unwrap(), Space::Rgb);
        assert_eq!(Space::Oklab.to_string(), "oklab");
        assert!(matches!("hsv".parse::<Space>(), Err(MapError::UnknownSpace(_))));
    }

    #[test]
    fn reversed_names() {
        let g = rgb();
        assert_eq!(g.reversed(None).name(), "rGb_r");
        assert_eq!(g.reversed(Some("back")).name(), "back");
        assert_eq!(g.reversed(None).first().hex(), "#0000ff");
    }

    // ── Operators ───────────────────────────────────────────────────

    #[test]
    fn add_concatenates() {
        let a = rgb();
        let b = Gradient::from_strs("bw", &["black", "white"]).unwrap();
        let sum = &a + &b;
        assert_eq!(sum.name(), "rGb + bw");
        assert_eq!(sum.len(), 5);
    }

    #[test]
    fn mul_repeats() {
        let g = (&rgb() * 2).unwrap();
        assert_eq!(g.len(), 6);
        assert_eq!(g.name(), "rGb");
        assert!((&rgb() * 0).is_err());
    }

    #[test]
    fn div_keeps_a_fraction() {
        let g = rgb().resize(10).unwrap();
        assert_eq!((&g / 0.5).len(), 5);
        assert_eq!((&g / 0.0).len(), 10);
        assert_eq!((&g / 0.5).last(), g.last());
    }

    #[test]
    fn bitor_blends_on_lcm() {
        let a = Gradient::from_strs("a", &["black", "white"]).unwrap();
        let b = Gradient::from_strs("b", &["white", "black", "white"]).unwrap();
        let mixed = &a | &b;
        assert_eq!(mixed.name(), "a | b");
        assert_eq!(mixed.len(), 6);
        assert!(approx_eq(mixed.first().r(), 0.5, 1e-12));
    }

    // ── Adjustments ─────────────────────────────────────────────────

    #[test]
    fn adjustment_names() {
        let g = rgb();
        assert_eq!(g.adjust_hue(30.0).name(), "rGb_hue+30");
        assert_eq!(g.adjust_hue(-45.0).name(), "rGb_hue-45");
        assert_eq!(g.adjust_saturation(0.5).name(), "rGb_sat0.5");
        assert_eq!(g.adjust_brightness(1.2).name(), "rGb_bright1.2");
        assert_eq!(g.adjust_lightness(0.7).name(), "rGb_light0.7");
        assert_eq!(g.complementary().name(), "rGb_complementary");
        assert_eq!(g.make_accessible(Color::WHITE, Level::Aa).name(), "rGb_accessible");
        let options = IterativeOptions::default();
        assert_eq!(
            g.maximize_contrast_iterative(Color::WHITE, Adjustment::Lightness, options).name(),
            "rGb_max_contrast_iterative"
        );
        assert_eq!(
            g.maximize_contrast_binary_search(Color::WHITE, Level::Aa, Adjustment::Lightness, 0.001)
                .name(),
            "rGb_max_contrast_binary"
        );
        assert_eq!(
            g.maximize_contrast_optimization(Color::WHITE, Method::GoldenSection).name(),
            "rGb_max_contrast_optimization"
        );
    }

    #[test]
    fn complementary_of_rgb() {
        assert_eq!(rgb().complementary().hexes(), vec!["#00ffff", "#ff00ff", "#ffff00"]);
    }

    #[test]
    fn accessible_version_passes_on_white() {
        let pastels = Gradient::from_strs("Pastels", &["#ffcccc", "#ccffcc", "#ccccff"]).unwrap();
        let fixed = pastels.find_accessible_version(Color::WHITE, Level::Aa);
        assert!(approx_eq(fixed.accessible_share(Color::WHITE, Level::Aa), 1.0, 1e-12));
    }

    #[test]
    fn analyze_grayscale_on_white() {
        let g = Gradient::from_strs("Grayscale", &["#000000", "#808080", "#ffffff"]).unwrap();
        let summary = g.analyze_contrast(Color::WHITE);
        assert!(approx_eq(summary.average_contrast, 8.65, 0.01), "{}", summary.average_contrast);
        assert_eq!(summary.accessible_aa_count, 1);
        assert_eq!(summary.contrasts.len(), 3);
    }

    // ── Lists and display ───────────────────────────────────────────

    #[test]
    fn pass_through_lists() {
        let g = rgb().with_alpha(0.5);
        assert_eq!(g.hexas()[0], "#ff00007f");
        assert_eq!(g.tups()[1], (0.0, 1.0, 0.0, 0.5));
        assert_eq!(g.rgba_strings()[2], "rgba(0, 0, 255, 0.5)");
    }

    #[test]
    fn display_label() {
        assert_eq!(rgb().to_string(), "Gradient(rGb, 3 colors)");
    }

    #[test]
    fn terminal_repr_cells() {
        let g = rgb();
        assert_eq!(g.terminal_repr(ColorMode::Plain, 64), "Gradient(rGb, 3 colors)");

        let drawn = g.terminal_repr(ColorMode::TrueColor, 64);
        assert_eq!(drawn.matches("\x1b[48;2;").count(), 3);
        assert!(drawn.contains("\x1b[48;2;255;0;0m  \x1b[0m"));
        assert!(drawn.ends_with(" Gradient(rGb, 3 colors)"));

        let long = g.resize(100).unwrap().terminal_repr(ColorMode::TrueColor, 64);
        assert_eq!(long.matches("\x1b[48;2;").count(), 64);
        assert!(long.ends_with("Gradient(rGb, 100 colors)"));
    }

    #[test]
    fn equality_is_tolerant() {
        let a = Gradient::from_strs("a", &["#ff0000"]).unwrap();
        let b = Gradient::new("b", vec![Color::clamped(0.995, 0.0, 0.0, 1.0)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, rgb());
    }
}
