// SPDX-License-Identifier: MIT
//
// Subcommand bodies. Each writes to an `io::Write` so the binary prints to
// stdout and the tests read back a buffer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chromo_color::{Color, ColorMode, Level};
use chromo_map::render::{self, PNG_SIZE};
use chromo_map::{Catalog, Gradient, Node, Source, Space, Swatch, get_gradient};
use chromo_theme::contrast::{
    Adjustment, Method, ensure_contrast_oklch, find_accessible_color,
    maximize_contrast_binary_search, maximize_contrast_iterative, maximize_contrast_optimization,
};
use chromo_theme::{Scheme, analyze_harmony, generate_palette};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::config::Config;

/// Settings shared by every subcommand.
pub struct Session {
    pub mode: ColorMode,
    pub json: bool,
    pub config: Config,
}

/// How `contrast --fix` repairs the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Fix {
    /// Step lightness until the level passes.
    Accessible,
    /// Greedy walk for maximum contrast.
    Iterative,
    /// Bisection for maximum contrast.
    Binary,
    /// Golden-section search over lightness and brightness.
    Golden,
    /// Move OKLCH lightness until the level passes.
    Oklch,
}

impl Fix {
    const fn name(self) -> &'static str {
        match self {
            Self::Accessible => "accessible",
            Self::Iterative => "iterative",
            Self::Binary => "binary",
            Self::Golden => "golden",
            Self::Oklch => "oklch",
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

// ─── show ────────────────────────────────────────────────────────────────────

pub fn show(session: &Session, colors: &[Color], out: &mut impl Write) -> Result<()> {
    if session.json {
        let rows: Vec<_> = colors
            .iter()
            .map(|c| {
                json!({
                    "hex": c.hex(),
                    "hexa": c.hexa(),
                    "rgba": c.tup(),
                    "hsv": c.hsv(),
                    "hsl": c.hsl(),
                    "oklch": c.to_oklch(),
                    "luminance": c.luminance(),
                })
            })
            .collect();
        return write_json(out, &rows);
    }

    for c in colors {
        let (h, s, v) = c.hsv();
        writeln!(
            out,
            "{}  {}  hsv({:.1}, {:.2}, {:.2})  luminance {:.4}",
            c.terminal_repr(session.mode),
            c.rgba_string(),
            h,
            s,
            v,
            c.luminance()
        )?;
    }
    Ok(())
}

// ─── contrast ────────────────────────────────────────────────────────────────

pub fn contrast(
    session: &Session,
    fg: Color,
    bg: Color,
    level: Level,
    adjustment: Adjustment,
    fix: Option<Fix>,
    out: &mut impl Write,
) -> Result<()> {
    let ratio = fg.contrast_ratio(&bg);
    let fixed = fix
        .map(|f| Ok::<_, anyhow::Error>((f, repair(session, fg, bg, level, adjustment, f)?)))
        .transpose()?;

    if session.json {
        let mut value = json!({
            "foreground": fg.hexa(),
            "background": bg.hexa(),
            "ratio": ratio,
            "aa": fg.is_accessible(&bg, Level::Aa),
            "aaa": fg.is_accessible(&bg, Level::Aaa),
        });
        if let Some((f, c)) = fixed {
            value["fix"] = json!({
                "method": f.name(),
                "color": c.hexa(),
                "ratio": c.contrast_ratio(&bg),
            });
        }
        return write_json(out, &value);
    }

    writeln!(out, "{fg} on {bg}: {ratio:.2}:1")?;
    for lvl in [Level::Aa, Level::Aaa] {
        writeln!(
            out,
            "  {:<3} {} (needs {}:1)",
            lvl.name(),
            verdict(fg.is_accessible(&bg, lvl)),
            lvl.required_ratio()
        )?;
    }
    if let Some((f, c)) = fixed {
        writeln!(
            out,
            "  fixed ({}): {} {:.2}:1 {}",
            f.name(),
            c.terminal_repr(session.mode),
            c.contrast_ratio(&bg),
            verdict(c.is_accessible(&bg, level))
        )?;
    }
    Ok(())
}

fn repair(
    session: &Session,
    fg: Color,
    bg: Color,
    level: Level,
    adjustment: Adjustment,
    fix: Fix,
) -> Result<Color> {
    let a11y = &session.config.accessibility;
    Ok(match fix {
        Fix::Accessible => find_accessible_color(fg, bg, level, adjustment),
        Fix::Iterative => {
            maximize_contrast_iterative(fg, bg, adjustment, session.config.iterative_options()?)
        }
        Fix::Binary => {
            maximize_contrast_binary_search(fg, bg, level, adjustment, a11y.precision)
        }
        Fix::Golden => maximize_contrast_optimization(fg, bg, Method::GoldenSection),
        Fix::Oklch => ensure_contrast_oklch(fg, bg, level.required_ratio()),
    })
}

// ─── palette / harmony ───────────────────────────────────────────────────────

pub fn palette(
    session: &Session,
    base: Color,
    scheme: Scheme,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    let colors = generate_palette(base, scheme, count);
    if session.json {
        let hexes: Vec<String> = colors.iter().map(|c| c.hex()).collect();
        return write_json(
            out,
            &json!({
                "scheme": scheme.name(),
                "colors": hexes,
                "harmony": analyze_harmony(&colors),
            }),
        );
    }

    writeln!(out, "{scheme} palette from {base}:")?;
    for c in &colors {
        writeln!(out, "  {}", c.terminal_repr(session.mode))?;
    }
    Ok(())
}

pub fn harmony(session: &Session, colors: &[Color], out: &mut impl Write) -> Result<()> {
    let report = analyze_harmony(colors);
    if session.json {
        return write_json(out, &report);
    }

    writeln!(out, "colors:        {}", colors.len())?;
    writeln!(
        out,
        "contrast:      avg {:.2}  min {:.2}  max {:.2}",
        report.average_contrast, report.min_contrast, report.max_contrast
    )?;
    writeln!(out, "AA pairs:      {:.0}%", report.accessibility_score * 100.0)?;
    let hues: Vec<String> = report.hue_distribution.iter().map(|h| format!("{h:.0}")).collect();
    writeln!(out, "hues:          {}", hues.join(", "))?;
    let (s_lo, s_hi) = report.saturation_range;
    let (b_lo, b_hi) = report.brightness_range;
    writeln!(out, "saturation:    {s_lo:.2}..{s_hi:.2}")?;
    writeln!(out, "brightness:    {b_lo:.2}..{b_hi:.2}")?;
    Ok(())
}

// ─── gradient ────────────────────────────────────────────────────────────────

/// Options for the `gradient` subcommand.
#[derive(Debug, Default)]
pub struct GradientRequest {
    pub pattern: String,
    pub case_sensitive: bool,
    pub resize: Option<usize>,
    pub space: Space,
    pub reverse: bool,
    pub contrast: Option<Color>,
    /// Level for the readable share; the configured one when unset.
    pub level: Option<Level>,
    pub html: Option<PathBuf>,
    pub svg: Option<PathBuf>,
    pub png: Option<PathBuf>,
}

fn find(pattern: &str, case_sensitive: bool) -> Result<Gradient> {
    get_gradient(pattern, case_sensitive)
        .with_context(|| format!("no colormap matches '{pattern}'"))
}

pub fn gradient(session: &Session, req: &GradientRequest, out: &mut impl Write) -> Result<()> {
    let mut g = find(&req.pattern, req.case_sensitive)?;
    if let Some(n) = req.resize {
        g = g.interpolated(n, req.space)?;
    }
    if req.reverse {
        g = g.reversed(None);
    }

    let display = &session.config.display;
    if let Some(path) = &req.html {
        let body = render::gradient_html(&g, None, false)?;
        write_file(path, render::html_document(g.name(), &body).as_bytes())?;
    }
    if let Some(path) = &req.svg {
        let svg = render::gradient_svg(&g, display.svg_width, display.svg_height);
        write_file(path, svg.as_bytes())?;
    }
    if let Some(path) = &req.png {
        write_file(path, &render::gradient_png(&g, PNG_SIZE.0, PNG_SIZE.1)?)?;
    }

    let level = match req.level {
        Some(level) => level,
        None => session.config.level()?,
    };
    let analysis = req.contrast.map(|bg| g.analyze_contrast(bg));
    let share = req.contrast.map(|bg| g.accessible_share(bg, level));
    if session.json {
        return write_json(
            out,
            &json!({
                "name": g.name(),
                "colors": g.hexas(),
                "contrast": analysis,
                "accessible_share": share,
            }),
        );
    }

    writeln!(out, "{}", g.terminal_repr(session.mode, display.max_terminal_colors))?;
    if let (Some(bg), Some(a)) = (req.contrast, analysis) {
        writeln!(
            out,
            "against {bg}: avg {:.2}  min {:.2}  max {:.2}  AA {}/{}  AAA {}/{}",
            a.average_contrast,
            a.min_contrast,
            a.max_contrast,
            a.accessible_aa_count,
            g.len(),
            a.accessible_aaa_count,
            g.len()
        )?;
    }
    if let Some(share) = share {
        writeln!(out, "readable at {level}: {:.0}%", share * 100.0)?;
    }
    Ok(())
}

// ─── list ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Listed<'a> {
    source: &'static str,
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    colors: usize,
}

pub fn list(
    session: &Session,
    source: Option<Source>,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = Catalog::global();
    let sources = source.map_or_else(|| Source::all().to_vec(), |s| vec![s]);

    let mut rows = Vec::new();
    for s in sources {
        for (kind, node) in &catalog.views(s).by_type {
            if category.is_some_and(|c| !c.eq_ignore_ascii_case(kind)) {
                continue;
            }
            let Node::Group(group) = node else { continue };
            for (name, g) in group.leaves() {
                rows.push(Listed { source: s.name(), kind, name, colors: g.len() });
            }
        }
    }

    if session.json {
        return write_json(out, &rows);
    }
    for row in &rows {
        writeln!(out, "{}/{}/{}  ({} colors)", row.source, row.kind, row.name, row.colors)?;
    }
    Ok(())
}

// ─── swatch ──────────────────────────────────────────────────────────────────

/// Options for the `swatch` subcommand.
#[derive(Debug, Default)]
pub struct SwatchRequest {
    pub patterns: Vec<String>,
    pub case_sensitive: bool,
    pub contrast: Option<Color>,
    pub html: Option<PathBuf>,
    pub png_images: bool,
}

pub fn swatch(session: &Session, req: &SwatchRequest, out: &mut impl Write) -> Result<()> {
    let display = &session.config.display;
    let swatch = req
        .patterns
        .iter()
        .map(|p| find(p, req.case_sensitive))
        .collect::<Result<Swatch>>()?
        .with_max(display.swatch_maxn);

    if let Some(path) = &req.html {
        let body = render::swatch_html(&swatch, req.png_images)?;
        write_file(path, render::html_document("chromo swatch", &body).as_bytes())?;
    }

    let report = req.contrast.map(|bg| swatch.analyze_contrast(bg));
    if session.json {
        let names: Vec<&str> = swatch.iter().map(Gradient::name).collect();
        return write_json(out, &json!({ "gradients": names, "contrast": report }));
    }

    for g in &swatch {
        writeln!(out, "{}", g.terminal_repr(session.mode, display.max_terminal_colors))?;
    }
    if let Some(r) = report {
        writeln!(
            out,
            "overall: {} colors, avg {:.2}, AA {:.0}%",
            r.total_colors,
            r.overall.average_contrast,
            r.overall.accessibility_aa_score * 100.0
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(json: bool) -> Session {
        Session { mode: ColorMode::Plain, json, config: Config::default() }
    }

    fn c(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chromo-cmd-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn show_prints_one_line_per_color() {
        let text = run(|out| show(&session(false), &[c("red"), c("#00f8")], out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Color(#ff0000)"), "{text}");
        assert!(lines[1].contains("rgba(0, 0, 255,"), "{text}");
    }

    #[test]
    fn show_json_has_fields() {
        let text = run(|out| show(&session(true), &[c("white")], out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["hex"], "#ffffff");
        assert!((value[0]["luminance"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_reports_levels() {
        let text = run(|out| {
            let lightness = Adjustment::Lightness;
            contrast(&session(false), c("black"), c("white"), Level::Aa, lightness, None, out)
        });
        assert!(text.starts_with("#000000 on #ffffff: 21.00:1"), "{text}");
        assert!(text.contains("AA  pass"), "{text}");
        assert!(text.contains("AAA pass"), "{text}");
    }

    #[test]
    fn contrast_fix_reaches_level() {
        for fix in [Fix::Accessible, Fix::Oklch] {
            let text = run(|out| {
                let (fg, bg) = (c("#999999"), c("white"));
                let lightness = Adjustment::Lightness;
                contrast(&session(true), fg, bg, Level::Aa, lightness, Some(fix), out)
            });
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value["aa"], false);
            assert_eq!(value["fix"]["method"], fix.name());
            assert!(value["fix"]["ratio"].as_f64().unwrap() >= 4.5, "{text}");
        }
    }

    #[test]
    fn palette_lists_count_colors() {
        let text = run(|out| palette(&session(false), c("#3366cc"), Scheme::Triadic, 5, out));
        assert_eq!(text.lines().count(), 6, "{text}");
        assert!(text.starts_with("triadic palette from #3366cc:"), "{text}");
    }

    #[test]
    fn harmony_json_is_report() {
        let text = run(|out| harmony(&session(true), &[c("black"), c("white")], out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!((value["max_contrast"].as_f64().unwrap() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn gradient_resizes_and_reverses() {
        let req = GradientRequest {
            pattern: "viridis".into(),
            resize: Some(4),
            reverse: true,
            ..Default::default()
        };
        let text = run(|out| gradient(&session(true), &req, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "viridis_r");
        assert_eq!(value["colors"].as_array().unwrap().len(), 4);
        assert!(value["contrast"].is_null());
        assert!(value["accessible_share"].is_null());
    }

    #[test]
    fn gradient_resizes_in_oklch() {
        let colors = |space: Space| {
            let req = GradientRequest {
                pattern: "Set1".into(),
                case_sensitive: true,
                resize: Some(17),
                space,
                ..Default::default()
            };
            let text = run(|out| gradient(&session(true), &req, out));
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            value["colors"].as_array().unwrap().clone()
        };
        let rgb = colors(Space::Rgb);
        let lch = colors(Space::Oklch);
        assert_eq!(rgb.len(), 17);
        assert_eq!(lch.len(), 17);
        // Halfway from red to blue: a muddy purple in sRGB, magenta in OKLCH.
        assert_ne!(rgb[1], lch[1]);
    }

    #[test]
    fn gradient_reports_readable_share() {
        let req = GradientRequest {
            pattern: "Greys".into(),
            case_sensitive: true,
            resize: Some(4),
            contrast: Some(Color::WHITE),
            level: Some(Level::Aa),
            ..Default::default()
        };
        let text = run(|out| gradient(&session(false), &req, out));
        // White, a light gray, a dark gray and black: the dark half passes.
        assert!(text.contains("readable at AA: 50%"), "{text}");

        let json = run(|out| gradient(&session(true), &req, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!((value["accessible_share"].as_f64().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn gradient_writes_files() {
        let req = GradientRequest {
            pattern: "viridis".into(),
            svg: Some(temp_path("viridis.svg")),
            png: Some(temp_path("viridis.png")),
            html: Some(temp_path("viridis.html")),
            ..Default::default()
        };
        run(|out| gradient(&session(false), &req, out));
        let svg = std::fs::read_to_string(temp_path("viridis.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
        let png = std::fs::read(temp_path("viridis.png")).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
        let html = std::fs::read_to_string(temp_path("viridis.html")).unwrap();
        assert!(html.contains("<title>viridis</title>"));
    }

    #[test]
    fn unknown_gradient_is_an_error() {
        let req = GradientRequest { pattern: "no-such-map".into(), ..Default::default() };
        let err = gradient(&session(false), &req, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no-such-map"));
    }

    #[test]
    fn list_filters_source_and_category() {
        let text = run(|out| list(&session(false), Some(Source::Matplotlib), Some("cyclic"), out));
        assert!(text.lines().all(|l| l.starts_with("matplotlib/cyclic/")), "{text}");
        assert!(text.contains("matplotlib/cyclic/hsv  (256 colors)"), "{text}");
    }

    #[test]
    fn swatch_collects_patterns() {
        let req = SwatchRequest {
            patterns: vec!["viridis".into(), "Blues".into()],
            contrast: Some(Color::WHITE),
            ..Default::default()
        };
        let text = run(|out| swatch(&session(true), &req, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["gradients"].as_array().unwrap().len(), 2);
        assert_eq!(value["contrast"]["gradients"].as_array().unwrap().len(), 2);
    }
}
