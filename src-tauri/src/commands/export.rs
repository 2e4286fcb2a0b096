//! IPC commands for text reports and image export.
//!
//! Paths are optional: without one, a timestamped file name is generated in
//! the user's documents (reports) or pictures (images) folder. Rendering runs
//! on a blocking worker against an owned snapshot, never under the state lock.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tauri::State;

use crate::commands::state::ViewerState;
use crate::core::export::{
    default_comparison_file_name, default_image_file_name, export_comparison, export_preview,
};
use crate::core::report::{default_report_file_name, save_report};
use crate::core::{ImageExportOptions, ViewerError, ViewerResult};

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn path_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

/// Runs `work` on the blocking pool and returns the written path.
async fn run_export<F>(path: PathBuf, work: F) -> ViewerResult<String>
where
    F: FnOnce(&PathBuf) -> ViewerResult<()> + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(move || work(&path).map(|_| path))
        .await
        .map_err(|e| ViewerError::Export(format!("export task failed: {}", e)))?
        .map(path_string)
}

/// Returns the report text for the current selection.
#[tauri::command]
pub fn generate_report(state: State<'_, ViewerState>) -> Result<String, ViewerError> {
    Ok(state.lock()?.generate_report(now()))
}

/// Writes the report for the current selection and returns the file path.
#[tauri::command]
pub fn save_font_report(
    state: State<'_, ViewerState>,
    path: Option<String>,
) -> Result<String, ViewerError> {
    let viewer = state.lock()?;
    let at = now();
    let path = path.map(PathBuf::from).unwrap_or_else(|| {
        viewer
            .config()
            .report_dir()
            .join(default_report_file_name(&viewer.selection().family, at))
    });
    save_report(&path, &viewer.generate_report(at))?;
    Ok(path_string(path))
}

/// Renders the sample text in the current font and returns the file path.
#[tauri::command]
pub async fn export_preview_image(
    state: State<'_, ViewerState>,
    options: Option<ImageExportOptions>,
    path: Option<String>,
) -> Result<String, ViewerError> {
    let (job, path) = {
        let viewer = state.lock()?;
        let path = path.map(PathBuf::from).unwrap_or_else(|| {
            viewer
                .config()
                .image_export_dir()
                .join(default_image_file_name(&viewer.selection().family, now()))
        });
        (viewer.preview_job(options.unwrap_or_default()), path)
    };
    run_export(path, move |path| export_preview(&job, path)).await
}

/// Renders the last comparison view and returns the file path.
#[tauri::command]
pub async fn export_comparison_image(
    state: State<'_, ViewerState>,
    path: Option<String>,
) -> Result<String, ViewerError> {
    let (job, path) = {
        let viewer = state.lock()?;
        let job = viewer.comparison_job()?;
        let path = path.map(PathBuf::from).unwrap_or_else(|| {
            viewer
                .config()
                .image_export_dir()
                .join(default_comparison_file_name(now()))
        });
        (job, path)
    };
    run_export(path, move |path| export_comparison(&job, path)).await
}
