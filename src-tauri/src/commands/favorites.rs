//! IPC commands for the favorites list.

use serde::Serialize;
use tauri::State;

use crate::commands::state::ViewerState;
use crate::core::ViewerError;

/// Outcome of a favorite toggle.
///
/// Unknown fonts are rejected with an error. Otherwise `saved` is false when
/// the list could not be written; the toggle still applies for this session
/// and `error` carries the message to display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub is_favorite: bool,
    pub saved: bool,
    pub error: Option<String>,
}

#[tauri::command]
pub fn toggle_favorite(
    state: State<'_, ViewerState>,
    family: String,
) -> Result<FavoriteToggle, ViewerError> {
    let mut viewer = state.lock()?;
    let result = match viewer.toggle_favorite(&family) {
        Err(e @ ViewerError::UnknownFont(_)) => return Err(e),
        other => other,
    };
    Ok(FavoriteToggle {
        is_favorite: viewer.is_favorite(&family),
        saved: result.is_ok(),
        error: result.err().map(|e| e.to_string()),
    })
}

#[tauri::command]
pub fn get_favorites(state: State<'_, ViewerState>) -> Result<Vec<String>, ViewerError> {
    Ok(state.lock()?.favorites().to_vec())
}

#[tauri::command]
pub fn is_favorite(state: State<'_, ViewerState>, family: String) -> Result<bool, ViewerError> {
    Ok(state.lock()?.is_favorite(&family))
}
