// SPDX-License-Identifier: MIT
//
// Swatch: an ordered collection of gradients shown together. `maxn` caps how
// many colors each gradient draws when rendered.

use chromo_color::{Color, Level};
use chromo_theme::ContrastSummary;
use chromo_theme::contrast::{Adjustment, IterativeOptions, Method};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::gradient::Gradient;

/// Colors drawn per gradient unless set otherwise.
pub const DEFAULT_MAXN: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    gradients: Vec<Gradient>,
    maxn: usize,
}

/// One gradient's line in a [`SwatchContrastReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientContrast {
    pub name: String,
    pub analysis: ContrastSummary,
}

/// Per-gradient contrast plus totals over every color in the swatch.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SwatchContrastReport {
    pub gradients: Vec<GradientContrast>,
    pub total_colors: usize,
    pub overall: ContrastSummary,
}

impl Default for Swatch {
    fn default() -> Self {
        Self { gradients: Vec::new(), maxn: DEFAULT_MAXN }
    }
}

impl Swatch {
    #[must_use]
    pub const fn new(gradients: Vec<Gradient>) -> Self {
        Self { gradients, maxn: DEFAULT_MAXN }
    }

    /// One gradient per entry, named by its key.
    pub fn from_map(map: IndexMap<String, Vec<Color>>) -> Result<Self> {
        let gradients = map
            .into_iter()
            .map(|(name, colors)| Gradient::new(name, colors))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(gradients))
    }

    /// Gradient name → colors. Later gradients win on duplicate names.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, Vec<Color>> {
        self.gradients
            .iter()
            .map(|g| (g.name().to_string(), g.colors().to_vec()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    #[must_use]
    pub const fn maxn(&self) -> usize {
        self.maxn
    }

    #[must_use]
    pub fn gradients(&self) -> &[Gradient] {
        &self.gradients
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gradient> {
        self.gradients.iter()
    }

    pub fn push(&mut self, gradient: Gradient) {
        self.gradients.push(gradient);
    }

    /// The same gradients with a different display cap.
    #[must_use]
    pub fn with_max(&self, maxn: usize) -> Self {
        Self { gradients: self.gradients.clone(), maxn }
    }

    fn map_gradients(&self, f: impl Fn(&Gradient) -> Gradient) -> Self {
        Self { gradients: self.gradients.iter().map(f).collect(), maxn: self.maxn }
    }

    // ─── Bulk adjustments ────────────────────────────────────────────────

    #[must_use]
    pub fn adjust_hue(&self, degrees: f64) -> Self {
        self.map_gradients(|g| g.adjust_hue(degrees))
    }

    #[must_use]
    pub fn adjust_saturation(&self, factor: f64) -> Self {
        self.map_gradients(|g| g.adjust_saturation(factor))
    }

    #[must_use]
    pub fn adjust_brightness(&self, factor: f64) -> Self {
        self.map_gradients(|g| g.adjust_brightness(factor))
    }

    #[must_use]
    pub fn adjust_lightness(&self, factor: f64) -> Self {
        self.map_gradients(|g| g.adjust_lightness(factor))
    }

    #[must_use]
    pub fn complementary(&self) -> Self {
        self.map_gradients(Gradient::complementary)
    }

    #[must_use]
    pub fn make_accessible(&self, background: Color, level: Level) -> Self {
        self.map_gradients(|g| g.make_accessible(background, level))
    }

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
        self.map_gradients(|g| g.maximize_contrast_iterative(background, adjustment, options))
    }

    #[must_use]
    pub fn maximize_contrast_binary_search(
        &self,
        background: Color,
        level: Level,
        adjustment: Adjustment,
        precision: f64,
    ) -> Self {
        self.map_gradients(|g| {
            g.maximize_contrast_binary_search(background, level, adjustment, precision)
        })
    }

    #[must_use]
    pub fn maximize_contrast_optimization(&self, background: Color, method: Method) -> Self {
        self.map_gradients(|g| g.maximize_contrast_optimization(background, method))
    }

    /// Contrast of every gradient against `background`, with totals.
    #[must_use]
    pub fn analyze_contrast(&self, background: Color) -> SwatchContrastReport {
        let gradients: Vec<GradientContrast> = self
            .gradients
            .iter()
            .map(|g| GradientContrast {
                name: g.name().to_string(),
                analysis: g.analyze_contrast(background),
            })
            .collect();
        let all: Vec<f64> = gradients
            .iter()
            .flat_map(|g| g.analysis.contrasts.iter().copied())
            .collect();

        SwatchContrastReport {
            total_colors: all.len(),
            overall: ContrastSummary::from_contrasts(all),
            gradients,
        }
    }
}

impl<'a> IntoIterator for &'a Swatch {
    type Item = &'a Gradient;
    type IntoIter = std::slice::Iter<'a, Gradient>;

    fn into_iter(self) -> Self::IntoIter {
        self.gradients.iter()
    }
}

impl FromIterator<Gradient> for Swatch {
    fn from_iter<I: IntoIterator<Item = Gradient>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
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

    fn sample() -> Swatch {
        let mut map = IndexMap::new();
        map.insert("warm".to_string(), vec![c("red"), c("orange")]);
        map.insert("gray".to_string(), vec![c("black"), c("#808080"), c("white")]);
        Swatch::from_map(map).unwrap()
    }

    #[test]
    fn from_map_keeps_order_and_names() {
        let swatch = sample();
        let names: Vec<&str> = swatch.iter().map(Gradient::name).collect();
        assert_eq!(names, vec!["warm", "gray"]);
        assert_eq!(swatch.maxn(), DEFAULT_MAXN);
    }

    #[test]
    fn from_map_rejects_empty_entry() {
        let mut map = IndexMap::new();
        map.insert("nothing".to_string(), Vec::new());
        assert!(Swatch::from_map(map).is_err());
    }

    #[test]
    fn to_map_roundtrip() {
        let swatch = sample();
        assert_eq!(Swatch::from_map(swatch.to_map()).unwrap(), swatch);
    }

    #[test]
    fn push_and_with_max() {
        let mut swatch = Swatch::default();
        assert!(swatch.is_empty());
        swatch.push(Gradient::from_strs("rgb", &["red", "green", "blue"]).unwrap());
        let capped = swatch.with_max(8);
        assert_eq!(capped.len(), 1);
        assert_eq!(capped.maxn(), 8);
    }

    #[test]
    fn bulk_adjustments_keep_maxn() {
        let swatch = sample().with_max(5);
        let shifted = swatch.adjust_hue(90.0);
        assert_eq!(shifted.maxn(), 5);
        assert_eq!(shifted.gradients()[0].name(), "warm_hue+90");
        assert_eq!(swatch.complementary().gradients()[1].name(), "gray_complementary");
        assert_eq!(swatch.adjust_lightness(0.8).gradients()[0].name(), "warm_light0.8");
        assert_eq!(
            swatch.make_accessible(Color::WHITE, Level::Aa).gradients()[0].name(),
            "warm_accessible"
        );
    }

    #[test]
    fn analyze_contrast_totals() {
        let report = sample().analyze_contrast(Color::WHITE);
        assert_eq!(report.gradients.len(), 2);
        assert_eq!(report.gradients[1].name, "gray");
        assert_eq!(report.total_colors, 5);
        assert_eq!(report.overall.contrasts.len(), 5);
        assert!(approx_eq(report.overall.max_contrast, 21.0, 1e-9));
        assert!(approx_eq(report.overall.min_contrast, 1.0, 1e-9));
    }

    #[test]
    fn analyze_empty_swatch_is_zero() {
        let report = Swatch::default().analyze_contrast(Color::WHITE);
        assert_eq!(report, SwatchContrastReport::default());
    }

    #[test]
    fn collect_into_swatch() {
        let swatch: Swatch = sample().iter().map(|g| g.reversed(None)).collect();
        assert_eq!(swatch.gradients()[0].name(), "warm_r");
    }
}
