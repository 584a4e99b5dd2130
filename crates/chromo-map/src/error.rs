// SPDX-License-Identifier: MIT
//
// Errors raised by gradients, segment data, rendering and catalog lookups.

use chromo_color::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    /// A gradient needs at least one color.
    #[error("no valid colors found")]
    Empty,

    /// A float position outside [0, 1] or an integer past the end.
    #[error("invalid index: {0}")]
    IndexOutOfRange(String),

    /// Segment anchors that matplotlib would reject.
    #[error("invalid segment data for {channel}: {reason}")]
    InvalidSegments { channel: &'static str, reason: String },

    /// No catalog entry with that name.
    #[error("unknown colormap '{0}'")]
    UnknownColormap(String),

    /// Not one of `rgb`, `oklab` or `oklch`.
    #[error("unknown interpolation space '{0}'")]
    UnknownSpace(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_passes_through() {
        let err: MapError = ColorError::Unrecognized("nope".into()).into();
        assert_eq!(err.to_string(), "invalid color input 'nope'");
    }

    #[test]
    fn segment_error_names_channel() {
        let err = MapError::InvalidSegments { channel: "red", reason: "x must start at 0".into() };
        let msg = err.to_string();
        assert!(msg.contains("red") && msg.contains("start at 0"), "{msg}");
    }
}
