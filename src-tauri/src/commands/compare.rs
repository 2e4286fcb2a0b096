//! IPC commands for comparison mode.

use tauri::State;

use crate::commands::state::ViewerState;
use crate::core::{CompareOutcome, CompareStatus, CompareToggle, ViewerError};

#[tauri::command]
pub fn enter_compare_mode(state: State<'_, ViewerState>) -> Result<CompareStatus, ViewerError> {
    let mut viewer = state.lock()?;
    viewer.enter_compare_mode();
    Ok(viewer.compare_status())
}

/// Leaves comparison mode. The frontend opens the comparison view for
/// `showComparison` outcomes.
#[tauri::command]
pub fn exit_compare_mode(state: State<'_, ViewerState>) -> Result<CompareOutcome, ViewerError> {
    Ok(state.lock()?.exit_compare_mode())
}

#[tauri::command]
pub fn toggle_compare_font(
    state: State<'_, ViewerState>,
    family: String,
) -> Result<CompareToggle, ViewerError> {
    Ok(state.lock()?.toggle_compare_member(&family))
}

#[tauri::command]
pub fn get_compare_status(state: State<'_, ViewerState>) -> Result<CompareStatus, ViewerError> {
    Ok(state.lock()?.compare_status())
}

/// Families of the last comparison view.
#[tauri::command]
pub fn get_comparison(state: State<'_, ViewerState>) -> Result<Vec<String>, ViewerError> {
    Ok(state.lock()?.comparison().to_vec())
}
