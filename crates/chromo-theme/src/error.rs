// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from parsing theme-level options.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error(
        "unknown color scheme '{0}' (expected one of: {schemes})",
        schemes = crate::harmony::Scheme::names().join(", ")
    )]
    UnknownScheme(String),

    #[error("unknown optimization method '{0}' (expected golden_section or iterative)")]
    UnknownMethod(String),

    #[error("unknown adjustment '{0}' (expected lightness or brightness)")]
    UnknownAdjustment(String),
}
