// SPDX-License-Identifier: MIT
//
// Errors raised while constructing or parsing colors.

use thiserror::Error;

/// Everything that can go wrong turning user input into a [`Color`].
///
/// [`Color`]: crate::color::Color
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A channel fell outside `[0, 1]` (or was NaN).
    #[error("color values must be between 0 and 1 (got {channel} = {value})")]
    OutOfRange { channel: &'static str, value: f64 },

    /// The alpha component of an `rgba(...)` string was outside `[0, 1]`.
    #[error("alpha must be between 0 and 1 (got {0})")]
    AlphaOutOfRange(f64),

    /// A sequence had fewer than the three RGB components.
    #[error("color sequence must have at least 3 values (RGB), got {0}")]
    TooFewComponents(usize),

    /// One component of a functional color string could not be read.
    #[error("invalid color component '{0}'")]
    InvalidComponent(String),

    /// A WCAG level name other than `AA` or `AAA`.
    #[error("unknown WCAG level '{0}' (expected AA or AAA)")]
    UnknownLevel(String),

    /// The string is not any color format we understand.
    #[error("invalid color input '{0}'")]
    Unrecognized(String),
}

/// Result alias for color construction.
pub type Result<T> = std::result::Result<T, ColorError>;
