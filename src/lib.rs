//! # og-image - Link Preview Generator
//!
//! Renders the Open Graph preview image shown by link-unfurling services: the
//! brand logo, resized and centered on a solid dark square, written as an
//! opaque PNG.
//!
//! ## Quick Start
//!
//! ```no_run
//! use og_image::{AssetPaths, OgImageConfig, generate};
//!
//! let paths = AssetPaths::under(".");
//! let report = generate(&OgImageConfig::MIA, &paths)?;
//! println!("{}", report);
//!
//! # Ok::<(), og_image::OgImageError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Canvas size, background, logo scale |
//! | [`color`] | Opaque sRGB colors |
//! | [`paths`] | Fixed input/output locations |
//! | [`compose`] | Background, resize, masked paste, flatten |
//! | [`encode`] | Optimized PNG output |
//! | [`generate`] | End-to-end pipeline |
//! | [`error`] | Error types |

pub mod color;
pub mod compose;
pub mod config;
pub mod encode;
pub mod error;
pub mod generate;
pub mod paths;

pub use color::Color;
pub use config::OgImageConfig;
pub use error::OgImageError;
pub use generate::{Report, generate};
pub use paths::AssetPaths;
