//! The end-to-end pipeline: locate, load, compose, write.

use std::fmt;
use std::path::PathBuf;

use crate::compose;
use crate::config::OgImageConfig;
use crate::encode;
use crate::error::OgImageError;
use crate::paths::AssetPaths;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saved: {} ({}x{}px)",
            self.output.display(),
            self.width,
            self.height
        )
    }
}

/// Generate the preview image described by `config` from the files in `paths`.
///
/// Fails with [`OgImageError::LogoNotFound`] before touching the output path
/// when the logo is absent.
pub fn generate(config: &OgImageConfig, paths: &AssetPaths) -> Result<Report, OgImageError> {
    let logo_path = paths.locate_logo()?;
    log::info!("Loading logo from {}", logo_path.display());
    let logo = compose::load_logo(logo_path)?;
    log::debug!("Logo is {}x{}", logo.width(), logo.height());

    let image = compose::compose(config, &logo);
    encode::write_png(&paths.output, &image)?;

    Ok(Report {
        output: paths.output.clone(),
        width: image.width(),
        height: image.height(),
    })
}
