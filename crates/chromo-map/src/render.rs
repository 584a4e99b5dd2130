// SPDX-License-Identifier: MIT
//
// HTML, SVG and PNG output for colors, gradients and swatches.
//
// Every HTML fragment carries its own <style> block scoped to a fresh
// element id, so fragments can be pasted side by side into one page.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chromo_color::Color;
use image::{ImageFormat, Rgba, RgbaImage};
use uuid::Uuid;

use crate::error::Result;
use crate::gradient::Gradient;
use crate::swatch::Swatch;

/// PNG size used for embedded gradient images, as matplotlib draws them.
pub const PNG_SIZE: (u32, u32) = (512, 64);

/// Default SVG canvas.
pub const SVG_SIZE: (u32, u32) = (500, 50);

/// Width of a gradient row in rem (500px at 16px per rem).
const GRADIENT_WIDTH_REM: f64 = 500.0 / 16.0;

fn element_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// A 2rem × 1.5rem tile with a hover tooltip giving RGBA and HEXA.
#[must_use]
pub fn color_html(color: Color) -> String {
    let id = element_id();
    let rgba = color.rgba_string();
    let channels = rgba.trim_start_matches("rgba(").trim_end_matches(')');
    let hexa = color.hexa();
    format!(
        r#"<div>
<style>
    #_{id} {{
        position: relative;
        display: inline-block;
        cursor: pointer;
        background: {rgba};
        width: 2rem; height: 1.5rem;
    }}
    #_{id}::after {{
        content: attr(data-tooltip);
        position: absolute;
        bottom: 50%;
        left: 0%;
        transform: translateY(50%);
        padding: 0.125rem;
        white-space: pre;
        font-size: 0.75rem;
        font-family: monospace;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(0.25rem);
        color: white;
        border-radius: 0.25rem;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.1s ease-in-out;
        z-index: -1;
    }}
    #_{id}:hover::after {{
        opacity: 1;
        z-index: 1;
    }}
</style>
<div id="_{id}" class="color" data-tooltip="RGBA: {channels}
HEXA: {hexa}"></div>
</div>
"#
    )
}

// ─── Gradients ───────────────────────────────────────────────────────────────

/// The gradient name over a row of color tiles, or over its PNG when
/// `as_png`. Gradients longer than `maxn` are resized first.
pub fn gradient_html(gradient: &Gradient, maxn: Option<usize>, as_png: bool) -> Result<String> {
    let shown = match maxn {
        Some(max) if gradient.len() > max => gradient.resize(max)?,
        _ => gradient.clone(),
    };

    let body = if as_png {
        png_div(&shown)?
    } else {
        let tiles: String = shown.iter().map(|&c| color_html(c)).collect();
        format!("<div id=\"_{}\" class=\"color-map\">\n{tiles}</div>\n", element_id())
    };

    let id = element_id();
    let name = escape(shown.name());
    Ok(format!(
        r#"<div class="gradient">
<style>
    #_{id} {{
        display: flex; gap: 0rem; width: {GRADIENT_WIDTH_REM}rem;
    }}
    #_{id} div {{ flex: 1 1 0; }}
    #_{id} div.color {{ width: 100%; height: 100%; }}
    #_{id} div.cmap {{ width: 100%; height: auto; }}
    #_{id} div.cmap > img {{ width: 100%; height: 100%; }}
</style>
<strong>{name}</strong>
{body}</div>
"#
    ))
}

/// RGBA PNG, each column colored by the colormap at `x / (width − 1)`.
pub fn gradient_png(gradient: &Gradient, width: u32, height: u32) -> Result<Vec<u8>> {
    let span = f64::from(width.saturating_sub(1).max(1));
    let columns: Vec<Rgba<u8>> = (0..width)
        .map(|x| {
            let (r, g, b, a) = gradient.lookup(f64::from(x) / span).hexatup();
            Rgba([r, g, b, a])
        })
        .collect();
    let img = RgbaImage::from_fn(width, height, |x, _| columns[x as usize]);

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// The gradient's PNG as a base64 data URI inside `<div class="cmap">`.
pub fn png_div(gradient: &Gradient) -> Result<String> {
    let png = gradient_png(gradient, PNG_SIZE.0, PNG_SIZE.1)?;
    Ok(format!(
        "<div class=\"cmap\"><img src=\"data:image/png;base64,{}\"></div>\n",
        STANDARD.encode(png)
    ))
}

/// One rect per color. Edges are truncated to whole pixels and each rect
/// overlaps the next by one pixel so no gaps show.
#[must_use]
pub fn gradient_svg(gradient: &Gradient, width: u32, height: u32) -> String {
    let rect_width = f64::from(width) / gradient.len() as f64;
    let mut out = format!(
        "<svg baseProfile=\"tiny\" height=\"{height}\" version=\"1.2\" width=\"{width}\" \
         xmlns=\"http://www.w3.org/2000/svg\"><defs />"
    );

    let mut left = 0_i64;
    for (i, color) in gradient.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let right = ((i + 1) as f64 * rect_width) as i64;
        let actual = right - left + 1;
        out.push_str(&format!(
            "<rect fill=\"{}\" fill-opacity=\"{}\" height=\"{height}\" width=\"{actual}\" \
             x=\"{left}\" y=\"0\" />",
            color.hex(),
            color.a()
        ));
        left = right;
    }
    out.push_str("</svg>");
    out
}

// ─── Swatches ────────────────────────────────────────────────────────────────

/// A responsive grid of gradient blocks, each capped at the swatch's `maxn`.
/// An empty swatch renders as nothing.
pub fn swatch_html(swatch: &Swatch, as_png: bool) -> Result<String> {
    if swatch.is_empty() {
        return Ok(String::new());
    }

    let blocks = swatch
        .iter()
        .map(|g| gradient_html(g, Some(swatch.maxn()), as_png))
        .collect::<Result<String>>()?;

    let id = element_id();
    Ok(format!(
        r#"<div id="_{id}" class="color-swatch">
<style>
    #_{id} {{
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
        gap: 0.5rem 1rem;
        justify-content: space-between;
        overflow: hidden;
        resize: both;
        width: min(65rem, 100%);
    }}
    #_{id} div {{
        width: 100%;
    }}
    #_{id} > div.gradient {{
        width: 100%;
        height: min(4rem, 100%);
        display: grid;
        gap: 0.2rem;
        grid-template-rows: 1rem auto;
    }}
    #_{id} .color {{
        height: minmax(1.5rem, 100%);
    }}
    #_{id} > div.gradient > strong {{
        margin: 0;
        padding: 0;
    }}
    #_{id} img {{height: 100%;}}
</style>
{blocks}</div>
"#
    ))
}

/// Wrap fragments in a standalone page.
#[must_use]
pub fn html_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n\
         <body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb() -> Gradient {
        Gradient::from_strs("rGb", &["#ff0000", "#00ff00", "#0000ff"]).unwrap()
    }

    #[test]
    fn color_tile_has_tooltip_and_background() {
        let html = color_html(Color::parse("red").unwrap());
        assert!(html.contains("background: rgba(255, 0, 0, 1.0);"), "{html}");
        assert!(html.contains("data-tooltip=\"RGBA: 255, 0, 0, 1.0\nHEXA: #ff0000ff\""), "{html}");
        assert!(html.contains("class=\"color\""));
    }

    #[test]
    fn tiles_get_distinct_ids() {
        let a = color_html(Color::WHITE);
        let b = color_html(Color::WHITE);
        assert_ne!(a, b);
    }

    #[test]
    fn gradient_html_lists_tiles() {
        let html = gradient_html(&rgb(), None, false).unwrap();
        assert!(html.starts_with("<div class=\"gradient\">"));
        assert!(html.contains("<strong>rGb</strong>"));
        assert!(html.contains("width: 31.25rem;"));
        assert_eq!(html.matches("class=\"color\"").count(), 3);
    }

    #[test]
    fn gradient_html_caps_at_maxn() {
        let long = rgb().resize(40).unwrap();
        let html = gradient_html(&long, Some(8), false).unwrap();
        assert_eq!(html.matches("class=\"color\"").count(), 8);
    }

    #[test]
    fn gradient_html_as_png() {
        let html = gradient_html(&rgb(), None, true).unwrap();
        assert!(html.contains("<div class=\"cmap\"><img src=\"data:image/png;base64,"));
        assert!(!html.contains("class=\"color\""));
    }

    #[test]
    fn gradient_name_is_escaped() {
        let g = rgb().rename("a < b");
        let html = gradient_html(&g, None, false).unwrap();
        assert!(html.contains("<strong>a &lt; b</strong>"));
    }

    #[test]
    fn png_has_signature_and_size() {
        let bytes = gradient_png(&rgb(), 16, 4).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (16, 4));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(15, 3).0, [0, 0, 255, 255]);
    }

    #[test]
    fn svg_rects_cover_width() {
        let svg = gradient_svg(&rgb(), 500, 50);
        assert_eq!(svg.matches("<rect").count(), 3);
        let first = "fill=\"#ff0000\" fill-opacity=\"1\" height=\"50\" width=\"167\" x=\"0\"";
        assert!(svg.contains(first), "{svg}");
        assert!(svg.contains("width=\"168\" x=\"166\""), "{svg}");
        assert!(svg.contains("x=\"333\""), "{svg}");
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn swatch_grid_wraps_each_gradient() {
        let swatch = Swatch::new(vec![rgb(), rgb().reversed(None)]).with_max(2);
        let html = swatch_html(&swatch, false).unwrap();
        assert!(html.contains("class=\"color-swatch\""));
        assert_eq!(html.matches("<div class=\"gradient\">").count(), 2);
        assert_eq!(html.matches("class=\"color\"").count(), 4);
    }

    #[test]
    fn empty_swatch_renders_nothing() {
        assert_eq!(swatch_html(&Swatch::default(), false).unwrap(), "");
    }

    #[test]
    fn document_wraps_body() {
        let page = html_document("x & y", "<p>hi</p>\n");
        assert!(page.contains("<title>x &amp; y</title>"));
        assert!(page.contains("<body>\n<p>hi</p>\n</body>"));
    }
}
