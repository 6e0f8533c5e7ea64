// Asset loading functionality

use super::AssetError;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Directory under the asset root holding sprite sheets
const SHEET_DIRECTORY: &str = "animations";

/// Asset loader responsible for finding and decoding sprite sheets
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a sprite sheet
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(SHEET_DIRECTORY).join(name)
    }

    /// Load and decode a sprite sheet as RGBA
    pub fn load_sheet(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let img = image::open(&path).map_err(|source| AssetError::Decode {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(img.to_rgba8())
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
