//! IPC commands for the font list, selection and sample text.

use std::path::PathBuf;

use serde::Serialize;
use tauri::State;

use crate::commands::state::ViewerState;
use crate::core::{Category, FontPick, StyleFlag, ViewerError, ViewerSnapshot};

/// Category picker entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
}

/// Returns the categories in picker order.
#[tauri::command]
pub fn list_categories() -> Vec<CategoryInfo> {
    Category::ALL
        .iter()
        .map(|category| CategoryInfo {
            category: *category,
            label: category.label(),
        })
        .collect()
}

/// Returns the current state snapshot, used for the initial render.
#[tauri::command]
pub fn get_viewer_state(state: State<'_, ViewerState>) -> Result<ViewerSnapshot, ViewerError> {
    Ok(state.lock()?.snapshot())
}

/// Returns startup problems (e.g. a corrupt favorites file) to show once.
#[tauri::command]
pub fn get_startup_notices(state: State<'_, ViewerState>) -> Result<Vec<String>, ViewerError> {
    Ok(state.lock()?.notices().to_vec())
}

/// Re-enumerates system fonts and returns the new full list.
#[tauri::command]
pub fn refresh_fonts(state: State<'_, ViewerState>) -> Result<Vec<String>, ViewerError> {
    let mut viewer = state.lock()?;
    viewer.refresh_catalog();
    Ok(viewer.catalog().to_vec())
}

/// Returns the members of a category. May be empty; the frontend keeps
/// its current selection in that case.
#[tauri::command]
pub fn filter_fonts_by_category(
    state: State<'_, ViewerState>,
    category: Category,
) -> Result<Vec<String>, ViewerError> {
    Ok(state.lock()?.filter_by_category(category))
}

/// Returns the members of `category` containing `term`, ignoring case.
/// An empty term returns the whole category.
#[tauri::command]
pub fn search_fonts(
    state: State<'_, ViewerState>,
    term: String,
    category: Category,
) -> Result<Vec<String>, ViewerError> {
    Ok(state.lock()?.filter_by_search(&term, category))
}

/// Handles a pick from the font list. In comparison mode this toggles
/// the font's membership in the comparison set instead of selecting it.
#[tauri::command]
pub fn pick_font(state: State<'_, ViewerState>, family: String) -> Result<FontPick, ViewerError> {
    state.lock()?.pick_font(&family)
}

#[tauri::command]
pub fn set_font_size(state: State<'_, ViewerState>, size: u32) -> Result<(), ViewerError> {
    state.lock()?.set_size(size)
}

#[tauri::command]
pub fn set_font_style(
    state: State<'_, ViewerState>,
    flag: StyleFlag,
    value: bool,
) -> Result<(), ViewerError> {
    state.lock()?.set_style(flag, value);
    Ok(())
}

#[tauri::command]
pub fn get_recent_fonts(state: State<'_, ViewerState>) -> Result<Vec<String>, ViewerError> {
    Ok(state.lock()?.recent().to_vec())
}

#[tauri::command]
pub fn set_sample_text(state: State<'_, ViewerState>, text: String) -> Result<(), ViewerError> {
    state.lock()?.set_sample_text(text);
    Ok(())
}

/// Replaces the sample text with the contents of a UTF-8 file.
#[tauri::command]
pub fn import_sample_text(state: State<'_, ViewerState>, path: String) -> Result<(), ViewerError> {
    state.lock()?.import_sample_text(&PathBuf::from(path))
}

/// Restores default size, style flags and sample text.
#[tauri::command]
pub fn reset_settings(state: State<'_, ViewerState>) -> Result<(), ViewerError> {
    state.lock()?.reset_settings();
    Ok(())
}
