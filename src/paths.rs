//! Fixed input and output locations, relative to the frontend root.

use std::path::{Path, PathBuf};

use crate::error::OgImageError;

/// Logo location under the frontend root.
pub const LOGO_RELATIVE_PATH: &str = "public/icons/mia-logo.png";

/// Output location under the frontend root.
pub const OUTPUT_RELATIVE_PATH: &str = "public/og-image.png";

/// Resolved input and output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub logo: PathBuf,
    pub output: PathBuf,
}

impl AssetPaths {
    /// Resolve the fixed paths under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            logo: root.join(LOGO_RELATIVE_PATH),
            output: root.join(OUTPUT_RELATIVE_PATH),
        }
    }

    /// Return the logo path, or fail if no file exists there.
    ///
    /// Anything at the path that is not a regular file (a directory, say)
    /// counts as missing and yields [`OgImageError::LogoNotFound`].
    pub fn locate_logo(&self) -> Result<&Path, OgImageError> {
        if self.logo.is_file() {
            Ok(&self.logo)
        } else {
            Err(OgImageError::LogoNotFound(self.logo.clone()))
        }
    }
}
