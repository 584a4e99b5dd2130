// SPDX-License-Identifier: MIT
//
// Terminal rendering of colors.
//
// Pure functions that write SGR escape sequences to any `fmt::Write`, plus
// the xterm 256-color palette and a perceptual nearest match into it.
//
// The 256-color palette:
//   0–15     standard + bright colors (xterm defaults)
//   16–231   6×6×6 RGB cube with levels 0, 95, 135, 175, 215, 255
//   232–255  24-step grayscale ramp, 8 + 10·i

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::color::Color;
use crate::error::ColorError;
use crate::space;

// ─── ColorMode ───────────────────────────────────────────────────────────────

/// How much color the output terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// 24-bit `38;2;r;g;b` sequences.
    #[default]
    TrueColor,
    /// 256-color palette indices.
    Ansi256,
    /// No escapes at all.
    Plain,
}

impl ColorMode {
    /// Detect the mode from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Detect the mode from an arbitrary variable lookup.
    ///
    /// `NO_COLOR` (any value) wins, then `COLORTERM=truecolor|24bit`, then a
    /// `TERM` containing `256color`. A `dumb` or missing `TERM` is plain.
    pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if lookup("NO_COLOR").is_some() {
            return Self::Plain;
        }
        if let Some(ct) = lookup("COLORTERM") {
            let ct = ct.to_ascii_lowercase();
            if ct == "truecolor" || ct == "24bit" {
                return Self::TrueColor;
            }
        }
        match lookup("TERM") {
            Some(term) if term.contains("256color") => Self::Ansi256,
            Some(term) if !term.is_empty() && term != "dumb" => Self::TrueColor,
            _ => Self::Plain,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrueColor => "truecolor",
            Self::Ansi256 => "ansi256",
            Self::Plain => "plain",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => Ok(Self::TrueColor),
            "ansi256" | "256" => Ok(Self::Ansi256),
            "plain" | "none" | "off" => Ok(Self::Plain),
            _ => Err(ColorError::Unrecognized(s.to_string())),
        }
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// The standard ANSI-16 palette (xterm defaults).
pub const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Convert an ANSI-256 palette index to RGB bytes.
#[must_use]
pub fn ansi256_to_rgb(idx: u8) -> (u8, u8, u8) {
    match idx {
        0..=15 => ANSI16_RGB[idx as usize],
        16..=231 => {
            let idx = idx - 16;
            let level = |i: u8| if i == 0 { 0 } else { 55 + 40 * i };
            (level(idx / 36), level((idx % 36) / 6), level(idx % 6))
        }
        232..=255 => {
            let v = 8 + 10 * (idx - 232);
            (v, v, v)
        }
    }
}

/// Nearest ANSI-256 index by Oklab distance.
#[must_use]
pub fn nearest_ansi256(color: Color) -> u8 {
    let (l1, a1, b1) = color.to_oklab();

    let mut best_idx: u8 = 0;
    let mut best_dist = f64::MAX;

    for idx in 0u8..=255 {
        let (r, g, b) = ansi256_to_rgb(idx);
        let (l2, a2, b2) = space::srgb_to_oklab(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        );
        let dl = l1 - l2;
        let da = a1 - a2;
        let db = b1 - b2;
        let dist = db.mul_add(db, dl.mul_add(dl, da * da));
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    best_idx
}

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Write the foreground SGR sequence for `color`.
pub fn fg(w: &mut impl Write, color: Color, mode: ColorMode) -> fmt::Result {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.rgbtup();
            write!(w, "\x1b[38;2;{r};{g};{b}m")
        }
        ColorMode::Ansi256 => write!(w, "\x1b[38;5;{}m", nearest_ansi256(color)),
        ColorMode::Plain => Ok(()),
    }
}

/// Write the background SGR sequence for `color`.
pub fn bg(w: &mut impl Write, color: Color, mode: ColorMode) -> fmt::Result {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.rgbtup();
            write!(w, "\x1b[48;2;{r};{g};{b}m")
        }
        ColorMode::Ansi256 => write!(w, "\x1b[48;5;{}m", nearest_ansi256(color)),
        ColorMode::Plain => Ok(()),
    }
}

/// Write the SGR reset, unless in plain mode.
pub fn reset(w: &mut impl Write, mode: ColorMode) -> fmt::Result {
    match mode {
        ColorMode::Plain => Ok(()),
        _ => w.write_str("\x1b[0m"),
    }
}

/// `text` drawn in `color`.
#[must_use]
pub fn paint_fg(text: &str, color: Color, mode: ColorMode) -> String {
    let mut out = String::with_capacity(text.len() + 24);
    // Writing to a String cannot fail.
    let _ = fg(&mut out, color, mode);
    out.push_str(text);
    let _ = reset(&mut out, mode);
    out
}

/// `text` drawn on a `color` background.
#[must_use]
pub fn paint_bg(text: &str, color: Color, mode: ColorMode) -> String {
    let mut out = String::with_capacity(text.len() + 24);
    let _ = bg(&mut out, color, mode);
    out.push_str(text);
    let _ = reset(&mut out, mode);
    out
}

impl Color {
    /// `██ Color(#rrggbb)` with the block painted in this color.
    #[must_use]
    pub fn terminal_repr(self, mode: ColorMode) -> String {
        format!("{} Color({})", paint_fg("██", self, mode), self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
    }

    #[test]
    fn detect_no_color_wins() {
        let mode = ColorMode::detect_with(env(&[("NO_COLOR", "1"), ("COLORTERM", "truecolor")]));
        assert_eq!(mode, ColorMode::Plain);
    }

    #[test]
    fn detect_colorterm() {
        let mode = ColorMode::detect_with(env(&[("COLORTERM", "24bit"), ("TERM", "xterm")]));
        assert_eq!(mode, ColorMode::TrueColor);
    }

    #[test]
    fn detect_term_256() {
        let mode = ColorMode::detect_with(env(&[("TERM", "xterm-256color")]));
        assert_eq!(mode, ColorMode::Ansi256);
    }

    #[test]
    fn detect_dumb_or_missing() {
        assert_eq!(ColorMode::detect_with(env(&[("TERM", "dumb")])), ColorMode::Plain);
        assert_eq!(ColorMode::detect_with(env(&[])), ColorMode::Plain);
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("ANSI256".parse::<ColorMode>().unwrap(), ColorMode::Ansi256);
        assert_eq!("plain".parse::<ColorMode>().unwrap(), ColorMode::Plain);
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test]
    fn palette_cube_and_ramp() {
        assert_eq!(ansi256_to_rgb(16), (0, 0, 0));
        assert_eq!(ansi256_to_rgb(231), (255, 255, 255));
        assert_eq!(ansi256_to_rgb(196), (255, 0, 0));
        assert_eq!(ansi256_to_rgb(232), (8, 8, 8));
        assert_eq!(ansi256_to_rgb(255), (238, 238, 238));
    }

    #[test]
    fn nearest_exact_matches() {
        // Index 9 and 196 are both pure red; the first one wins.
        assert_eq!(nearest_ansi256(Color::from_rgb8(255, 0, 0)), 9);
        assert_eq!(nearest_ansi256(Color::BLACK), 0);
        assert_eq!(nearest_ansi256(Color::from_rgb8(95, 135, 175)), 67);
    }

    #[test]
    fn fg_truecolor_sequence() {
        let mut out = String::new();
        fg(&mut out, Color::from_rgb8(1, 2, 3), ColorMode::TrueColor).unwrap();
        assert_eq!(out, "\x1b[38;2;1;2;3m");
    }

    #[test]
    fn bg_ansi256_sequence() {
        let mut out = String::new();
        bg(&mut out, Color::from_rgb8(255, 0, 0), ColorMode::Ansi256).unwrap();
        assert_eq!(out, "\x1b[48;5;9m");
    }

    #[test]
    fn paint_plain_is_untouched() {
        assert_eq!(paint_fg("hi", Color::WHITE, ColorMode::Plain), "hi");
        assert_eq!(paint_bg("hi", Color::WHITE, ColorMode::Plain), "hi");
    }

    #[test]
    fn paint_resets() {
        let s = paint_fg("x", Color::WHITE, ColorMode::TrueColor);
        assert!(s.starts_with("\x1b[38;2;255;255;255m"));
        assert!(s.ends_with("x\x1b[0m"));
    }

    #[test]
    fn terminal_repr_plain() {
        assert_eq!(Color::WHITE.terminal_repr(ColorMode::Plain), "██ Color(#ffffff)");
    }
}
