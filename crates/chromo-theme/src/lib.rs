//! # chromo-theme: accessibility and harmony on top of `chromo-color`
//!
//! Two independent toolkits that take colors in and give colors back:
//!
//! ```text
//! Color + background + Level
//!     │
//!     ▼
//! contrast.rs: WCAG ratio, step / greedy / bisection / golden-section
//!              searches, OKLCH lightness fix, ContrastSummary
//!
//! Color + Scheme + count
//!     │
//!     ▼
//! harmony.rs:  hue rotations padded with saturation/brightness ramps,
//!              HarmonyReport for any palette
//! ```
//!
//! Nothing here allocates beyond the returned palettes and reports; every
//! search is a pure function of its inputs.

// Mathematical code uses small integer-to-float casts (loop indices, counts).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod error;
pub mod harmony;

pub use contrast::{Adjustment, ContrastSummary, IterativeOptions, Level, Method};
pub use error::ThemeError;
pub use harmony::{HarmonyReport, Scheme, analyze_harmony, generate_palette};
