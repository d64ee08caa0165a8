//! PNG output.
//!
//! The image is encoded entirely in memory before anything is written, so an
//! encoding failure never leaves a partial file on disk.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::OgImageError;

/// Encode an opaque RGB image as PNG with the smallest-output settings.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, OgImageError> {
    let mut png_bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut png_bytes, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| OgImageError::Encode(e.to_string()))?;
    Ok(png_bytes)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn write_png(path: &Path, image: &RgbImage) -> Result<(), OgImageError> {
    let png_bytes = encode_png(image)?;
    fs::write(path, &png_bytes)?;
    log::debug!("Wrote {} bytes to {}", png_bytes.len(), path.display());
    Ok(())
}
