//! Named presets persisted as a JSON object `name -> preset`.
//!
//! The file is re-read on every operation so that a preset saved by another
//! run is visible immediately. Writes overwrite the file directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ViewerError, ViewerResult};
use super::selection::{Selection, StyleFlags};

/// A restorable snapshot of the selection and sample text.
///
/// Field names match the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub font_family: String,
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub overstrike: bool,
    pub sample_text: String,
}

impl Preset {
    pub fn capture(selection: &Selection, sample_text: &str) -> Self {
        Self {
            font_family: selection.family.clone(),
            font_size: selection.size,
            bold: selection.style.bold,
            italic: selection.style.italic,
            underline: selection.style.underline,
            overstrike: selection.style.strikethrough,
            sample_text: sample_text.trim().to_string(),
        }
    }

    pub fn style(&self) -> StyleFlags {
        StyleFlags {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strikethrough: self.overstrike,
        }
    }
}

/// Presets keyed by name, in the order they were first saved.
type PresetMap = Map<String, Value>;

/// Preset names are stored trimmed; lookups trim the same way.
fn normalize_name(name: &str) -> ViewerResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ViewerError::InvalidPresetName);
    }
    Ok(name)
}

#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the whole mapping. A missing file is an empty mapping.
    fn read_all(&self) -> ViewerResult<PresetMap> {
        if !self.path.exists() {
            return Ok(PresetMap::new());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ViewerError::io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| ViewerError::corrupt(&self.path, e))
    }

    fn write_all(&self, presets: &PresetMap) -> ViewerResult<()> {
        let content = serde_json::to_string_pretty(presets)?;
        std::fs::write(&self.path, content).map_err(|e| ViewerError::io(&self.path, e))
    }

    /// Moves an unparsable presets file aside so a save does not destroy it.
    fn quarantine_corrupt_file(&self) -> ViewerResult<PathBuf> {
        let backup = self.path.with_extension("json.bak");
        std::fs::rename(&self.path, &backup).map_err(|e| ViewerError::io(&self.path, e))?;
        Ok(backup)
    }

    /// Stores `preset` under `name`, replacing any preset with that name in
    /// place.
    ///
    /// A corrupt presets file is renamed to `presets.json.bak` and the save
    /// starts from an empty mapping.
    pub fn save(&self, name: &str, preset: &Preset) -> ViewerResult<()> {
        let name = normalize_name(name)?;

        let mut presets = match self.read_all() {
            Ok(presets) => presets,
            Err(ViewerError::CorruptData { source, .. }) => {
                let backup = self.quarantine_corrupt_file()?;
                log::warn!(
                    "Presets file {:?} was unreadable ({}); moved to {:?}",
                    self.path,
                    source,
                    backup
                );
                PresetMap::new()
            }
            Err(e) => return Err(e),
        };

        presets.insert(name.to_string(), serde_json::to_value(preset)?);
        self.write_all(&presets)?;
        log::info!("Saved preset '{}' to {:?}", name, self.path);
        Ok(())
    }

    /// Preset names in the order they were first saved.
    pub fn list(&self) -> ViewerResult<Vec<String>> {
        Ok(self.read_all()?.keys().cloned().collect())
    }

    pub fn load(&self, name: &str) -> ViewerResult<Preset> {
        let name = normalize_name(name)?;
        let value = self
            .read_all()?
            .remove(name)
            .ok_or_else(|| ViewerError::PresetNotFound(name.to_string()))?;
        serde_json::from_value(value).map_err(|e| ViewerError::corrupt(&self.path, e))
    }

    pub fn delete(&self, name: &str) -> ViewerResult<()> {
        let name = normalize_name(name)?;
        let presets = self.read_all()?;
        if !presets.contains_key(name) {
            return Err(ViewerError::PresetNotFound(name.to_string()));
        }
        let remaining: PresetMap = presets.into_iter().filter(|(key, _)| key != name).collect();
        self.write_all(&remaining)?;
        log::info!("Deleted preset '{}'", name);
        Ok(())
    }
}
