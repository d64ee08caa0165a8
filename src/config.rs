//! # Canvas Configuration
//!
//! Hard-coded geometry for the generated preview image.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── 600 ────────────────┐
//! │ 120                                 │
//! │     ┌────────── 360 ──────────┐     │
//! │     │                         │     │
//! │     │          logo           │     │
//! │     │                         │     │
//! │     └─────────────────────────┘     │
//! │                                 120 │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use og_image::config::OgImageConfig;
//!
//! let config = OgImageConfig::MIA;
//! assert_eq!(config.logo_size(), 360);
//! assert_eq!(config.logo_offset(), (120, 120));
//! ```

use crate::color::Color;

/// # Preview Image Configuration
///
/// - **size**: Side length of the square canvas in pixels
/// - **background**: Solid fill behind the logo
/// - **logo_scale_percent**: Logo side length as a percentage of `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OgImageConfig {
    /// Canvas side length in pixels
    pub size: u32,

    /// Background fill color
    pub background: Color,

    /// Logo side length, percent of the canvas
    pub logo_scale_percent: u32,
}

impl OgImageConfig {
    /// # Mia Link Preview
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Canvas | 600 × 600 |
    /// | Background | #06050A |
    /// | Logo | 60% (360 × 360) |
    pub const MIA: Self = Self {
        size: 600,
        background: Color::BRAND_DARK,
        logo_scale_percent: 60,
    };

    /// Logo side length after resizing.
    #[inline]
    pub fn logo_size(&self) -> u32 {
        self.size * self.logo_scale_percent / 100
    }

    /// Top-left corner of the centered logo.
    #[inline]
    pub fn logo_offset(&self) -> (u32, u32) {
        let margin = (self.size - self.logo_size()) / 2;
        (margin, margin)
    }
}

impl Default for OgImageConfig {
    fn default() -> Self {
        Self::MIA
    }
}
