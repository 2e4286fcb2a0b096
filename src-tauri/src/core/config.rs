//! Runtime configuration: where persisted lists live and where exports go.

use std::path::{Path, PathBuf};

use directories::UserDirs;

use super::selection::DEFAULT_FONT_SIZE;

/// Environment variable overriding the directory holding the JSON files.
pub const DATA_DIR_ENV: &str = "FONT_VIEWER_DATA_DIR";

/// File name of the favorites list inside the data directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// File name of the presets mapping inside the data directory.
pub const PRESETS_FILE: &str = "presets.json";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Directory containing `favorites.json` and `presets.json`.
    pub data_dir: PathBuf,
    /// Point size applied at startup and by a settings reset.
    pub default_size: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::with_data_dir(".")
    }
}

impl ViewerConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            default_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Reads `FONT_VIEWER_DATA_DIR`, falling back to the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => {
                log::info!("Using data directory from {}: {:?}", DATA_DIR_ENV, dir);
                Self::with_data_dir(dir)
            }
            _ => Self::default(),
        }
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir.join(FAVORITES_FILE)
    }

    pub fn presets_path(&self) -> PathBuf {
        self.data_dir.join(PRESETS_FILE)
    }

    /// Default destination for exported images: the user's pictures folder.
    pub fn image_export_dir(&self) -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.picture_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| self.data_dir.clone())
    }

    /// Default destination for text reports: the user's documents folder.
    pub fn report_dir(&self) -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| self.data_dir.clone())
    }
}
