pub mod core;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
use tauri::Manager;

#[cfg(feature = "desktop")]
use commands::{EventEmitter, ViewerState};
#[cfg(feature = "desktop")]
use crate::core::{FontViewer, SystemFontSource, ViewerConfig};

/// Entry point for the Tauri application.
///
/// Loads favorites and the system font catalog before the window opens,
/// injects the viewer state, subscribes the webview to state-change events
/// and mounts all IPC command handlers.
#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logger for RUST_LOG environment variable support
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Font Viewer starting up...");

    let config = ViewerConfig::from_env();
    let viewer = FontViewer::new(config, Box::new(SystemFontSource));
    for notice in viewer.notices() {
        log::warn!("{}", notice);
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(ViewerState::new(viewer))
        .setup(|app| {
            let emitter = EventEmitter::new(app.handle().clone());
            app.state::<ViewerState>().lock()?.subscribe(Box::new(emitter));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Font list & selection
            commands::fonts::list_categories,
            commands::fonts::get_viewer_state,
            commands::fonts::get_startup_notices,
            commands::fonts::refresh_fonts,
            commands::fonts::filter_fonts_by_category,
            commands::fonts::search_fonts,
            commands::fonts::pick_font,
            commands::fonts::set_font_size,
            commands::fonts::set_font_style,
            commands::fonts::get_recent_fonts,
            commands::fonts::set_sample_text,
            commands::fonts::import_sample_text,
            commands::fonts::reset_settings,
            // Favorites
            commands::favorites::toggle_favorite,
            commands::favorites::get_favorites,
            commands::favorites::is_favorite,
            // Comparison mode
            commands::compare::enter_compare_mode,
            commands::compare::exit_compare_mode,
            commands::compare::toggle_compare_font,
            commands::compare::get_compare_status,
            commands::compare::get_comparison,
            // Presets
            commands::presets::save_preset,
            commands::presets::list_presets,
            commands::presets::get_preset,
            commands::presets::load_preset,
            commands::presets::delete_preset,
            // Reports & export
            commands::export::generate_report,
            commands::export::save_font_report,
            commands::export::export_preview_image,
            commands::export::export_comparison_image,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Font Viewer");
}
