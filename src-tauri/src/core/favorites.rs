//! Favorite font families persisted as a JSON array.

use std::path::{Path, PathBuf};

use super::error::{ViewerError, ViewerResult};

/// Ordered, duplicate-free favorites list backed by a JSON file.
///
/// The file is rewritten after every toggle. If the write fails the
/// in-memory list keeps the toggle, so memory and disk may diverge until the
/// next successful save.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    fonts: Vec<String>,
}

impl FavoritesStore {
    /// Creates an empty store that will persist to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fonts: Vec::new(),
        }
    }

    /// Reads the favorites file. A missing file yields an empty list; an
    /// unreadable or malformed file is an error.
    pub fn load(path: impl Into<PathBuf>) -> ViewerResult<Self> {
        let path = path.into();
        if !path.exists() {
            log::debug!("No favorites file at {:?}, starting empty", path);
            return Ok(Self::empty(path));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ViewerError::io(&path, e))?;
        let mut fonts: Vec<String> =
            serde_json::from_str(&content).map_err(|e| ViewerError::corrupt(&path, e))?;

        // Keep the first occurrence if the file was edited by hand
        let mut seen = std::collections::HashSet::new();
        fonts.retain(|f| seen.insert(f.clone()));

        log::info!("Loaded {} favorites from {:?}", fonts.len(), path);
        Ok(Self { path, fonts })
    }

    /// Moves a favorites file that failed to parse to `favorites.json.bak`
    /// so the next save cannot overwrite the only copy.
    pub fn quarantine(path: &Path) -> ViewerResult<PathBuf> {
        let backup = path.with_extension("json.bak");
        std::fs::rename(path, &backup).map_err(|e| ViewerError::io(path, e))?;
        log::warn!("Moved unreadable favorites file {:?} to {:?}", path, backup);
        Ok(backup)
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    pub fn contains(&self, family: &str) -> bool {
        self.fonts.iter().any(|f| f == family)
    }

    /// Removes `family` if present, appends it otherwise, then saves.
    ///
    /// Returns whether `family` is a favorite after the toggle. On a save
    /// error the toggle is still applied in memory.
    pub fn toggle(&mut self, family: &str) -> ViewerResult<bool> {
        let now_favorite = if let Some(pos) = self.fonts.iter().position(|f| f == family) {
            self.fonts.remove(pos);
            false
        } else {
            self.fonts.push(family.to_string());
            true
        };

        self.save()?;
        Ok(now_favorite)
    }

    /// Writes the full list as an indented JSON array.
    pub fn save(&self) -> ViewerResult<()> {
        let content = serde_json::to_string_pretty(&self.fonts)?;
        std::fs::write(&self.path, content).map_err(|e| ViewerError::io(&self.path, e))?;
        log::debug!("Saved {} favorites to {:?}", self.fonts.len(), self.path);
        Ok(())
    }
}
