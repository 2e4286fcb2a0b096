//! Comparison mode: a transient accumulator of up to four families that are
//! rendered side by side when the mode is left.

use serde::Serialize;

/// Maximum number of families shown in the comparison view.
pub const MAX_COMPARE: usize = 4;

/// What leaving comparison mode should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "fonts", rename_all = "camelCase")]
pub enum CompareOutcome {
    /// Nothing was collected, or the mode was not active.
    Nothing,
    /// Exactly one family was collected; it becomes the selection.
    Select(String),
    /// Two or more families were collected; show them side by side.
    ShowComparison(Vec<String>),
}

/// Result of toggling a family in the comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompareToggle {
    Added,
    Removed,
    /// The set is full or comparison mode is inactive; nothing changed.
    Ignored,
}

/// Counts backing the "(n/4)" indicator on the comparison button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareStatus {
    pub active: bool,
    pub count: usize,
    pub capacity: usize,
}

/// Two-state machine (inactive/active) owning the comparison set.
#[derive(Debug, Clone, Default)]
pub struct CompareMode {
    active: bool,
    fonts: Vec<String>,
}

impl CompareMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    /// Activates the mode and clears any earlier set, even when already active.
    pub fn enter(&mut self) {
        self.active = true;
        self.fonts.clear();
    }

    /// Deactivates the mode and hands the collected set to the caller.
    pub fn exit(&mut self) -> CompareOutcome {
        if !self.active {
            return CompareOutcome::Nothing;
        }
        self.active = false;

        let mut fonts = std::mem::take(&mut self.fonts);
        match fonts.len() {
            0 => CompareOutcome::Nothing,
            1 => CompareOutcome::Select(fonts.remove(0)),
            _ => {
                fonts.truncate(MAX_COMPARE);
                CompareOutcome::ShowComparison(fonts)
            }
        }
    }

    /// Removes `family` if present, appends it otherwise. Additions beyond
    /// `MAX_COMPARE` are ignored.
    pub fn toggle(&mut self, family: &str) -> CompareToggle {
        if !self.active {
            return CompareToggle::Ignored;
        }
        if let Some(pos) = self.fonts.iter().position(|f| f == family) {
            self.fonts.remove(pos);
            CompareToggle::Removed
        } else if self.fonts.len() >= MAX_COMPARE {
            CompareToggle::Ignored
        } else {
            self.fonts.push(family.to_string());
            CompareToggle::Added
        }
    }

    pub fn status(&self) -> CompareStatus {
        CompareStatus {
            active: self.active,
            count: self.fonts.len(),
            capacity: MAX_COMPARE,
        }
    }
}
