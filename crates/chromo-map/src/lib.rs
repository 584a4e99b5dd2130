//! # chromo-map: gradients, swatches and the colormap catalog
//!
//! ```text
//! strings / Colors ──► Gradient ──► Swatch
//!                        │  ▲          │
//!          segment.rs ◄──┘  │          ▼
//!     (matplotlib LUTs)     │      render.rs: HTML, SVG, PNG
//!                           │
//!        catalog/ ──────────┘
//!          matplotlib.rs   embedded categories and tables
//!          plotly.rs       embedded Plotly scales
//!          palettable.rs   embedded Palettable palettes
//!          mod.rs          ColorMapDict views, `all`, regex search
//! ```
//!
//! The catalog is built once on first use and shared by every caller.

// Index/count to float conversions are everywhere in colormap math.
#![allow(clippy::cast_precision_loss)]

pub mod catalog;
pub mod error;
pub mod gradient;
pub mod render;
pub mod segment;
pub mod swatch;

pub use catalog::{Catalog, ColorMapDict, Node, Source, get_gradient};
pub use error::{MapError, Result};
pub use gradient::{Gradient, Space};
pub use segment::SegmentData;
pub use swatch::{GradientContrast, Swatch, SwatchContrastReport};
