// SPDX-License-Identifier: MIT
//
// Color string parsing with matplotlib's rules.
//
// Accepted spellings, tried in this order:
//
//   "none"                      fully transparent black
//   "#rgb" "#rgba"              short hex (the leading '#' is required)
//   "#rrggbb" "#rrggbbaa"       long hex
//   "0.75"                      grayscale level in [0, 1]
//   "C0" … "C9"                 the default property cycle
//   "r" "g" "b" "c" …           matplotlib's single-letter base colors
//   "tab:blue" …                the Tableau palette
//   "orange" "rebeccapurple" …  CSS4 color names
//   "rgb(r, g, b)"              0–255 integers
//   "rgba(r, g, b, a)"          0–255 integers plus alpha in [0, 1]
//
// Single-letter names are case-sensitive, everything else is not.

use tracing::trace;

use crate::error::{ColorError, Result};

/// An RGBA quadruple with every channel in [0, 1].
pub type Rgba = [f64; 4];

/// matplotlib `BASE_COLORS`.
const BASE_COLORS: [(char, Rgba); 8] = [
    ('b', [0.0, 0.0, 1.0, 1.0]),
    ('g', [0.0, 0.5, 0.0, 1.0]),
    ('r', [1.0, 0.0, 0.0, 1.0]),
    ('c', [0.0, 0.75, 0.75, 1.0]),
    ('m', [0.75, 0.0, 0.75, 1.0]),
    ('y', [0.75, 0.75, 0.0, 1.0]),
    ('k', [0.0, 0.0, 0.0, 1.0]),
    ('w', [1.0, 1.0, 1.0, 1.0]),
];

/// The Tableau 10 palette, which is also matplotlib's default color cycle.
pub const TABLEAU_COLORS: [(&str, &str); 10] = [
    ("blue", "#1f77b4"),
    ("orange", "#ff7f0e"),
    ("green", "#2ca02c"),
    ("red", "#d62728"),
    ("purple", "#9467bd"),
    ("brown", "#8c564b"),
    ("pink", "#e377c2"),
    ("gray", "#7f7f7f"),
    ("olive", "#bcbd22"),
    ("cyan", "#17becf"),
];

/// Parse any supported color string into RGBA.
///
/// Returns `Ok(None)` when the string is not a color at all, and an error
/// when it looks like a functional `rgba(...)` string with bad components.
///
/// # Errors
///
/// [`ColorError::AlphaOutOfRange`] or [`ColorError::InvalidComponent`] for a
/// malformed `rgb()`/`rgba()` string.
pub fn to_rgba(s: &str) -> Result<Option<Rgba>> {
    if let Some(rgba) = parse_hex_or_name(s) {
        return Ok(Some(rgba));
    }
    let parsed = parse_rgb_function(s)?;
    if parsed.is_none() {
        trace!(input = s, "not a color string");
    }
    Ok(parsed)
}

/// Parse hex strings, grayscale levels and color names.
///
/// This is the subset matplotlib's `to_rgba` understands; functional
/// `rgb(...)` strings are handled by [`parse_rgb_function`].
#[must_use]
pub fn parse_hex_or_name(s: &str) -> Option<Rgba> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Some([0.0, 0.0, 0.0, 0.0]);
    }
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(gray) = parse_grayscale(trimmed) {
        return Some(gray);
    }
    if let Some(cycle) = parse_cycle(trimmed) {
        return Some(cycle);
    }
    if let Some(base) = parse_base_letter(trimmed) {
        return Some(base);
    }
    let lower = trimmed.to_ascii_lowercase();
    if let Some(name) = lower.strip_prefix("tab:") {
        let name = if name == "grey" { "gray" } else { name };
        return TABLEAU_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, hex)| parse_hex(&hex[1..]));
    }
    parse_css_name(&lower)
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)` strings.
///
/// Only the prefix is matched: trailing text after the closing parenthesis
/// is ignored. Returns `Ok(None)` if the string does not start with `rgb(`
/// or `rgba(`.
///
/// # Errors
///
/// [`ColorError::InvalidComponent`] for non-integer or out-of-range RGB
/// components and [`ColorError::AlphaOutOfRange`] for alpha outside [0, 1].
pub fn parse_rgb_function(s: &str) -> Result<Option<Rgba>> {
    let s = s.trim_start();
    let Some(body) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) else {
        return Ok(None);
    };
    let Some(end) = body.find(')') else {
        return Ok(None);
    };
    let parts: Vec<&str> = body[..end].split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) || parts.iter().any(|p| p.is_empty()) {
        return Ok(None);
    }

    let channel = |text: &str| -> Result<f64> {
        let v: u8 = text
            .parse()
            .map_err(|_| ColorError::InvalidComponent(text.to_string()))?;
        Ok(f64::from(v) / 255.0)
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(text) => {
            let a: f64 = text
                .parse()
                .map_err(|_| ColorError::InvalidComponent((*text).to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorError::AlphaOutOfRange(a));
            }
            a
        }
        None => 1.0,
    };
    Ok(Some([r, g, b, a]))
}

// ─── Pieces ──────────────────────────────────────────────────────────────────

/// Parse the digits of a hex color (without the '#').
fn parse_hex(s: &str) -> Option<Rgba> {
    let bytes = s.as_bytes();
    let expand = |d: u8| d << 4 | d;
    let to_unit = |v: u8| f64::from(v) / 255.0;

    match bytes.len() {
        3 | 4 => {
            let mut out = [1.0; 4];
            for (slot, &c) in out.iter_mut().zip(bytes) {
                *slot = to_unit(expand(parse_hex_digit(c)?));
            }
            Some(out)
        }
        6 | 8 => {
            let mut out = [1.0; 4];
            for (slot, pair) in out.iter_mut().zip(bytes.chunks(2)) {
                *slot = to_unit(parse_hex_byte(pair)?);
            }
            Some(out)
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// `"0.5"` → 50% gray. Only plain decimals in [0, 1].
fn parse_grayscale(s: &str) -> Option<Rgba> {
    if !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let v: f64 = s.parse().ok()?;
    (0.0..=1.0).contains(&v).then_some([v, v, v, 1.0])
}

/// `"C3"` → the fourth color of the default cycle (wraps modulo 10).
fn parse_cycle(s: &str) -> Option<Rgba> {
    let digits = s.strip_prefix('C')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = digits.parse().ok()?;
    let (_, hex) = TABLEAU_COLORS[n % TABLEAU_COLORS.len()];
    parse_hex(&hex[1..])
}

fn parse_base_letter(s: &str) -> Option<Rgba> {
    let mut chars = s.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    BASE_COLORS.iter().find(|(k, _)| *k == c).map(|(_, rgba)| *rgba)
}

/// CSS4 color names. Restricted to alphabetic input so the CSS parser's
/// other syntaxes (hsl(), bare hex) don't leak in.
fn parse_css_name(lower: &str) -> Option<Rgba> {
    if lower.is_empty() || !lower.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let parsed = csscolorparser::parse(lower).ok()?;
    Some([parsed.r, parsed.g, parsed.b, parsed.a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_rgba(actual: Rgba, expected: Rgba) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn hex_long_and_short() {
        approx_rgba(parse_hex_or_name("#ff0000").unwrap(), [1.0, 0.0, 0.0, 1.0]);
        approx_rgba(parse_hex_or_name("#F00").unwrap(), [1.0, 0.0, 0.0, 1.0]);
        approx_rgba(parse_hex_or_name("#00ff0080").unwrap(), [0.0, 1.0, 0.0, 128.0 / 255.0]);
        approx_rgba(parse_hex_or_name("#0f08").unwrap(), [0.0, 1.0, 0.0, 136.0 / 255.0]);
    }

    #[test]
    fn hex_requires_hash() {
        assert!(parse_hex_or_name("ff0000").is_none());
    }

    #[test]
    fn hex_rejects_bad_digits_and_lengths() {
        assert!(parse_hex_or_name("#gg0000").is_none());
        assert!(parse_hex_or_name("#12345").is_none());
    }

    #[test]
    fn css_names_case_insensitive() {
        approx_rgba(parse_hex_or_name("orange").unwrap(), [1.0, 165.0 / 255.0, 0.0, 1.0]);
        approx_rgba(parse_hex_or_name("Orange").unwrap(), [1.0, 165.0 / 255.0, 0.0, 1.0]);
    }

    #[test]
    fn base_letters_use_matplotlib_values() {
        approx_rgba(parse_hex_or_name("g").unwrap(), [0.0, 0.5, 0.0, 1.0]);
        approx_rgba(parse_hex_or_name("k").unwrap(), [0.0, 0.0, 0.0, 1.0]);
        // Single letters are case-sensitive.
        assert!(parse_hex_or_name("G").is_none());
    }

    #[test]
    fn tableau_and_cycle_agree() {
        let tab = parse_hex_or_name("tab:orange").unwrap();
        let cycle = parse_hex_or_name("C1").unwrap();
        approx_rgba(tab, cycle);
        approx_rgba(parse_hex_or_name("C10").unwrap(), parse_hex_or_name("C0").unwrap());
        assert!(parse_hex_or_name("tab:grey").is_some());
        assert!(parse_hex_or_name("tab:mauve").is_none());
    }

    #[test]
    fn grayscale_strings() {
        approx_rgba(parse_hex_or_name("0.25").unwrap(), [0.25, 0.25, 0.25, 1.0]);
        assert!(parse_hex_or_name("1.5").is_none());
    }

    #[test]
    fn none_is_transparent() {
        approx_rgba(parse_hex_or_name("none").unwrap(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn rgb_function_without_alpha() {
        let rgba = parse_rgb_function("rgb(0, 0, 255)").unwrap().unwrap();
        approx_rgba(rgba, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn rgba_function_with_alpha() {
        let rgba = parse_rgb_function("rgba(255,128,0,0.5)").unwrap().unwrap();
        approx_rgba(rgba, [1.0, 128.0 / 255.0, 0.0, 0.5]);
    }

    #[test]
    fn rgba_alpha_out_of_range_is_an_error() {
        let err = parse_rgb_function("rgba(0, 0, 0, 1.5)").unwrap_err();
        assert_eq!(err, ColorError::AlphaOutOfRange(1.5));
    }

    #[test]
    fn rgb_float_component_is_an_error() {
        let err = parse_rgb_function("rgb(0.5, 0, 0)").unwrap_err();
        assert!(matches!(err, ColorError::InvalidComponent(_)));
    }

    #[test]
    fn rgb_function_not_matched() {
        assert_eq!(parse_rgb_function("hsl(0, 0%, 0%)").unwrap(), None);
        assert_eq!(parse_rgb_function("rgb(1, 2)").unwrap(), None);
    }

    #[test]
    fn to_rgba_tries_both() {
        assert!(to_rgba("#123456").unwrap().is_some());
        assert!(to_rgba("rgb(1, 2, 3)").unwrap().is_some());
        assert_eq!(to_rgba("definitely not a color").unwrap(), None);
    }
}
