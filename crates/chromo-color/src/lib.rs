// SPDX-License-Identifier: MIT
//
// chromo-color: the color value type underneath chromo.
//
// A `Color` is four f64 channels of gamma-encoded sRGB plus alpha, always in
// [0, 1]. It parses every string matplotlib's `to_rgba` accepts (plus CSS
// `rgb()`/`rgba()`), converts to HSV/HSL with colorsys semantics and to
// Oklab/OKLCH for perceptual work, and knows the WCAG luminance formula.
//
//   parse.rs   strings → RGBA
//   space.rs   pure conversion math
//   color.rs   the Color type and its operations
//   term.rs    ANSI escapes and the xterm-256 palette
//   error.rs   ColorError

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;
pub mod parse;
pub mod space;
pub mod term;

pub use color::{Color, Level};
pub use error::{ColorError, Result};
pub use term::ColorMode;
