//! IPC commands for named presets.

use tauri::State;

use crate::commands::state::ViewerState;
use crate::core::{Preset, ViewerError};

/// Saves the current selection and sample text as `name`, replacing any
/// preset with the same name.
#[tauri::command]
pub fn save_preset(state: State<'_, ViewerState>, name: String) -> Result<Preset, ViewerError> {
    state.lock()?.save_preset(&name)
}

#[tauri::command]
pub fn list_presets(state: State<'_, ViewerState>) -> Result<Vec<String>, ViewerError> {
    state.lock()?.list_presets()
}

/// Returns a preset's contents without applying it.
#[tauri::command]
pub fn get_preset(state: State<'_, ViewerState>, name: String) -> Result<Preset, ViewerError> {
    state.lock()?.load_preset(&name)
}

/// Loads `name` and applies it to the selection and sample text.
#[tauri::command]
pub fn load_preset(state: State<'_, ViewerState>, name: String) -> Result<Preset, ViewerError> {
    state.lock()?.apply_preset(&name)
}

#[tauri::command]
pub fn delete_preset(state: State<'_, ViewerState>, name: String) -> Result<(), ViewerError> {
    state.lock()?.delete_preset(&name)
}
