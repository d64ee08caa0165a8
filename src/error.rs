//! # Error Types
//!
//! This module defines error types used throughout the og-image library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for og-image operations
#[derive(Debug, Error)]
pub enum OgImageError {
    /// The logo file is missing from its fixed location
    #[error("mia-logo.png not found at {}", .0.display())]
    LogoNotFound(PathBuf),

    /// The image codec needed for the logo is not compiled in
    #[error("PNG codec unavailable ({0}); enable the `png` feature of `image`")]
    CodecUnavailable(String),

    /// The logo exists but could not be decoded
    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// PNG encoding error
    #[error("Image encoding error: {0}")]
    Encode(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
