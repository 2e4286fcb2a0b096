use std::path::{Path, PathBuf};

/// Errors raised by catalog, persistence, preset and export operations.
///
/// Every variant is local to the action that triggered it; none of them is
/// fatal to the process. Serialized to the frontend as its `Display` string
/// via the custom `Serialize` impl below.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The platform font enumeration facility failed or is missing.
    #[error("font enumeration unavailable: {0}")]
    PlatformUnavailable(String),

    /// Reading or writing a file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A persisted JSON file exists but could not be parsed.
    #[error("{path} contains invalid data: {source}")]
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// In-memory data could not be encoded as JSON.
    #[error("failed to encode data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The family is not in the current font catalog.
    #[error("font is not installed: {0}")]
    UnknownFont(String),

    /// No preset with this name exists in the presets file.
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// Preset names must contain at least one non-whitespace character.
    #[error("preset name must not be empty")]
    InvalidPresetName,

    /// Requested font size is outside the supported range.
    #[error("font size {size} is outside the supported range {min}-{max}")]
    InvalidSize { size: u32, min: u32, max: u32 },

    /// The shared viewer state could not be locked.
    #[error("viewer state unavailable: {0}")]
    StateUnavailable(String),

    /// Export parameters were rejected or rendering failed.
    #[error("export failed: {0}")]
    Export(String),

    /// This build was compiled without image export support.
    #[error("image export is not available in this build. {hint}")]
    ExportUnavailable { hint: String },
}

impl ViewerError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn corrupt(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::CorruptData {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Serializes the error as its `Display` string so the frontend receives a
/// single human-readable message rather than a tagged enum structure.
impl serde::Serialize for ViewerError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type for viewer operations.
pub type ViewerResult<T> = Result<T, ViewerError>;
