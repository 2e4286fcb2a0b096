//! Tauri build script.
//!
//! Only the desktop build needs Tauri's code generation; the core library
//! builds without a webview toolkit.

fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
