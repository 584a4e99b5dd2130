// SPDX-License-Identifier: MIT
//
// The unified colormap catalog.
//
// Three sources feed it: matplotlib (grouped `type / name`), Plotly and
// Palettable (both grouped `type / palette / name`). Each source is exposed
// three ways:
//
//   by_type_by_palette_name   the full tree
//   by_palette_name           flat, later duplicates replace earlier ones
//   by_type                   `type / name`
//
// `all` flattens every source into lower-cased names, keeping one
// representative per name by quality score.

pub mod matplotlib;
pub mod palettable;
pub mod plotly;
pub mod tables;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::Result;
use crate::gradient::Gradient;
use crate::render;
use crate::swatch::Swatch;

// ─── Sources ─────────────────────────────────────────────────────────────────

/// Where a catalog entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Matplotlib,
    Plotly,
    Palettable,
}

impl Source {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Matplotlib => "matplotlib",
            Self::Plotly => "plotly",
            Self::Palettable => "palettable",
        }
    }

    /// Parse a source from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Matplotlib, Self::Plotly, Self::Palettable]
    }

    /// Rank in pattern search. Higher wins.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Palettable => 3,
            Self::Matplotlib => 2,
            Self::Plotly => 1,
        }
    }

    /// Bonus in the quality score used to pick `all` representatives.
    const fn score(self) -> f64 {
        match self {
            Self::Matplotlib => 30.0,
            Self::Plotly => 25.0,
            Self::Palettable => 20.0,
        }
    }
}

/// Names starting with `_` are private and names ending in `_r` are
/// reversed copies; neither is catalogued.
#[must_use]
pub fn is_public_name(name: &str) -> bool {
    !name.starts_with('_') && !name.ends_with("_r")
}

/// How good a representative a colormap is for its name.
///
/// `len` is the number of colors and `spec_len` the width of the first
/// color as the source stores it.
#[must_use]
pub fn quality_score(len: usize, spec_len: usize, source: Source) -> f64 {
    let mut score = (len as f64 / 10.0).min(1.0) * 20.0;
    score += source.score();
    score -= spec_len as f64 / 50.0 * 5.0;
    if len >= 3 {
        score += 10.0;
    }
    score
}

// ─── ColorMapDict ────────────────────────────────────────────────────────────

/// One value in a [`ColorMapDict`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Gradient(Gradient),
    Group(ColorMapDict),
}

impl Node {
    #[must_use]
    pub const fn as_gradient(&self) -> Option<&Gradient> {
        match self {
            Self::Gradient(g) => Some(g),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub const fn as_group(&self) -> Option<&ColorMapDict> {
        match self {
            Self::Group(d) => Some(d),
            Self::Gradient(_) => None,
        }
    }
}

/// An ordered tree of gradients keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMapDict {
    entries: IndexMap<String, Node>,
}

impl ColorMapDict {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Follow `path` through nested groups.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Node> {
        let (last, parents) = path.split_last()?;
        let mut dict = self;
        for key in parents {
            dict = dict.get(key)?.as_group()?;
        }
        dict.get(last)
    }

    /// The gradient directly under `key`, if that entry is one.
    #[must_use]
    pub fn gradient(&self, key: &str) -> Option<&Gradient> {
        self.get(key).and_then(Node::as_gradient)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        self.entries.insert(key.into(), node);
    }

    /// Store `gradient` at `path`, creating groups on the way. A gradient
    /// sitting where a group is needed is replaced by the group.
    pub fn insert_path(&mut self, path: &[&str], gradient: Gradient) {
        match path {
            [] => {}
            [leaf] => self.insert(*leaf, Node::Gradient(gradient)),
            [head, rest @ ..] => {
                let node = self
                    .entries
                    .entry((*head).to_string())
                    .or_insert_with(|| Node::Group(Self::new()));
                if !matches!(node, Node::Group(_)) {
                    *node = Node::Group(Self::new());
                }
                if let Node::Group(group) = node {
                    group.insert_path(rest, gradient);
                }
            }
        }
    }

    /// Every gradient in the tree with the key it is stored under, depth
    /// first in insertion order.
    #[must_use]
    pub fn leaves(&self) -> Vec<(&str, &Gradient)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(&'a str, &'a Gradient)>) {
        for (key, node) in &self.entries {
            match node {
                Node::Gradient(g) => out.push((key.as_str(), g)),
                Node::Group(d) => d.collect_leaves(out),
            }
        }
    }

    #[must_use]
    pub fn gradients(&self) -> Vec<&Gradient> {
        self.leaves().into_iter().map(|(_, g)| g).collect()
    }

    #[must_use]
    pub fn to_swatch(&self) -> Swatch {
        self.gradients().into_iter().cloned().collect()
    }

    /// A swatch of every gradient below this node, or a placeholder when
    /// there are none.
    pub fn to_html(&self, as_png: bool) -> Result<String> {
        let swatch = self.to_swatch();
        if swatch.is_empty() {
            return Ok(format!("<div>Empty ColorMapDict with {} categories</div>", self.len()));
        }
        render::swatch_html(&swatch, as_png)
    }
}

impl<'a> IntoIterator for &'a ColorMapDict {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Node)> for ColorMapDict {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl FromIterator<(String, Gradient)> for ColorMapDict {
    fn from_iter<I: IntoIterator<Item = (String, Gradient)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, g)| (k, Node::Gradient(g))).collect()
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The three arrangements of one source.
#[derive(Debug, Clone, Default)]
pub struct Views {
    pub by_type_by_palette_name: ColorMapDict,
    pub by_palette_name: ColorMapDict,
    pub by_type: ColorMapDict,
}

/// One built colormap before it is placed into views.
struct Entry {
    source: Source,
    kind: String,
    /// Empty for matplotlib, which has no palette level.
    palette: String,
    gradient: Gradient,
    spec_len: usize,
}

impl Entry {
    fn name(&self) -> &str {
        self.gradient.name()
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    matplotlib: Views,
    plotly: Views,
    palettable: Views,
    all: ColorMapDict,
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

impl Catalog {
    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Build every view from the embedded colormap data.
    #[must_use]
    pub fn build() -> Self {
        let matplotlib = matplotlib_entries();
        let plotly = plotly_entries();
        let palettable = palettable_entries();
        debug!(
            matplotlib = matplotlib.len(),
            plotly = plotly.len(),
            palettable = palettable.len(),
            "catalog built"
        );

        let all = best_by_name(matplotlib.iter().chain(&plotly).chain(&palettable));
        Self {
            matplotlib: arrange(&matplotlib),
            plotly: arrange(&plotly),
            palettable: arrange(&palettable),
            all,
        }
    }

    #[must_use]
    pub const fn views(&self, source: Source) -> &Views {
        match source {
            Source::Matplotlib => &self.matplotlib,
            Source::Plotly => &self.plotly,
            Source::Palettable => &self.palettable,
        }
    }

    /// matplotlib colormaps by type.
    #[must_use]
    pub const fn matplotlib(&self) -> &ColorMapDict {
        &self.matplotlib.by_type_by_palette_name
    }

    /// Plotly scales by type, then palette.
    #[must_use]
    pub const fn plotly(&self) -> &ColorMapDict {
        &self.plotly.by_type_by_palette_name
    }

    /// Palettable palettes by type, then palette module.
    #[must_use]
    pub const fn palettable(&self) -> &ColorMapDict {
        &self.palettable.by_type_by_palette_name
    }

    /// One representative per lower-cased name across all sources.
    #[must_use]
    pub const fn all(&self) -> &ColorMapDict {
        &self.all
    }

    /// A matplotlib colormap by exact name. `<name>_r` gives the reversed
    /// map, named `<name>_r`.
    #[must_use]
    pub fn matplotlib_cmap(&self, name: &str) -> Option<Gradient> {
        let flat = &self.matplotlib.by_palette_name;
        if let Some(g) = flat.gradient(name) {
            return Some(g.clone());
        }
        let base = name.strip_suffix("_r")?;
        flat.gradient(base).map(|g| g.reversed(Some(name)))
    }

    /// Best gradient whose key or name matches `pattern`.
    ///
    /// The pattern is a regex, case-insensitive unless `case_sensitive`; an
    /// invalid regex is matched literally. Palettable beats matplotlib beats
    /// Plotly, then longer gradients win. Blank patterns match nothing.
    #[must_use]
    pub fn get_gradient(&self, pattern: &str, case_sensitive: bool) -> Option<Gradient> {
        if pattern.trim().is_empty() {
            return None;
        }
        let re = &compile(pattern, case_sensitive)?;

        let sources = [Source::Palettable, Source::Matplotlib, Source::Plotly];
        let mut matches: Vec<(u8, usize, &Gradient)> = sources
            .into_iter()
            .flat_map(|source| {
                self.views(source)
                    .by_type_by_palette_name
                    .leaves()
                    .into_iter()
                    .filter(move |(key, g)| re.is_match(key) || re.is_match(g.name()))
                    .map(move |(_, g)| (source.priority(), g.len(), g))
            })
            .collect();

        matches.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
        debug!(pattern, candidates = matches.len(), "gradient search");
        matches.first().map(|(_, _, g)| (*g).clone())
    }
}

/// [`Catalog::get_gradient`] on the global catalog.
#[must_use]
pub fn get_gradient(pattern: &str, case_sensitive: bool) -> Option<Gradient> {
    Catalog::global().get_gradient(pattern, case_sensitive)
}

fn compile(pattern: &str, case_sensitive: bool) -> Option<Regex> {
    let build = |p: &str| RegexBuilder::new(p).case_insensitive(!case_sensitive).build();
    match build(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(pattern, %err, "invalid regex, matching literally");
            build(&regex::escape(pattern)).ok()
        }
    }
}

// ─── Builders ────────────────────────────────────────────────────────────────

fn matplotlib_entries() -> Vec<Entry> {
    let mut out = Vec::new();
    for (title, maps) in matplotlib::CATEGORIES {
        let kind = matplotlib::category_type(title);
        for (name, data) in *maps {
            if !is_public_name(name) {
                continue;
            }
            match data.build(name) {
                Ok(gradient) => out.push(Entry {
                    source: Source::Matplotlib,
                    kind: kind.to_string(),
                    palette: String::new(),
                    gradient,
                    spec_len: data.spec_len(),
                }),
                Err(err) => warn!(name, %err, "skipping matplotlib colormap"),
            }
        }
    }
    out
}

fn plotly_entries() -> Vec<Entry> {
    let mut out = Vec::new();
    for (path, colors) in plotly::SCALES {
        if !path.iter().all(|p| is_public_name(p)) {
            continue;
        }
        let Some((kind, palette, name)) = plotly::catalog_key(path) else {
            continue;
        };
        match Gradient::from_strs(name, colors) {
            Ok(gradient) => out.push(Entry {
                source: Source::Plotly,
                kind: kind.to_string(),
                palette: palette.to_string(),
                gradient,
                spec_len: colors.first().map_or(0, |c| c.len()),
            }),
            Err(err) => warn!(?path, %err, "skipping plotly scale"),
        }
    }
    out
}

fn palettable_entries() -> Vec<Entry> {
    // (type, module, name) → longest colors seen so far
    let mut longest: IndexMap<(String, String, String), &[&str]> = IndexMap::new();
    for (path, colors) in palettable::PALETTES {
        if !path.iter().all(|p| is_public_name(p)) {
            continue;
        }
        let Some(key) = palettable::catalog_key(path) else {
            continue;
        };
        let slot = longest.entry(key).or_insert(*colors);
        if colors.len() > slot.len() {
            *slot = *colors;
        }
    }

    let mut out = Vec::new();
    for ((kind, palette, name), colors) in longest {
        match Gradient::from_strs(name.as_str(), colors) {
            Ok(gradient) => out.push(Entry {
                source: Source::Palettable,
                kind,
                palette,
                gradient,
                spec_len: palettable::SPEC_LEN,
            }),
            Err(err) => warn!(name = %name, %err, "skipping palettable palette"),
        }
    }
    out
}

fn arrange(entries: &[Entry]) -> Views {
    let mut views = Views::default();
    for e in entries {
        let name = e.name();
        if e.palette.is_empty() {
            views.by_type_by_palette_name.insert_path(&[e.kind.as_str(), name], e.gradient.clone());
        } else {
            views
                .by_type_by_palette_name
                .insert_path(&[e.kind.as_str(), e.palette.as_str(), name], e.gradient.clone());
        }
        views.by_palette_name.insert(name, Node::Gradient(e.gradient.clone()));
        views.by_type.insert_path(&[e.kind.as_str(), name], e.gradient.clone());
    }
    views
}

/// Lower-cased name → highest scoring entry. The first entry wins a tie.
fn best_by_name<'a>(entries: impl Iterator<Item = &'a Entry>) -> ColorMapDict {
    let mut best: IndexMap<String, (f64, &Entry)> = IndexMap::new();
    for e in entries {
        let score = quality_score(e.gradient.len(), e.spec_len, e.source);
        let key = e.name().to_lowercase();
        match best.get_mut(&key) {
            Some(slot) if score > slot.0 => *slot = (score, e),
            Some(_) => {}
            None => {
                best.insert(key, (score, e));
            }
        }
    }
    best.into_iter().map(|(key, (_, e))| (key, e.gradient.clone())).collect()
}
