//! Error types for datetint-core.
//!
//! Style and theme computation is pure and total; the only fallible surface
//! is loading a palette-override file from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in datetint-core.
#[derive(Debug, Error)]
pub enum Error {
    /// The theme override file does not exist.
    #[error("theme file not found: {0}")]
    ThemeFileNotFound(PathBuf),

    /// Failed to read the theme override file.
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// The theme override file is not valid TOML (or names unknown slots).
    #[error("failed to parse theme file: {0}")]
    ThemeParse(#[from] toml::de::Error),
}

/// Convenience result type for datetint-core operations.
pub type Result<T> = std::result::Result<T, Error>;
