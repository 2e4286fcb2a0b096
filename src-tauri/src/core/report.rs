//! Plain-text font report generation.

use std::path::Path;

use chrono::NaiveDateTime;

use super::error::{ViewerError, ViewerResult};
use super::selection::Selection;

/// Character sets listed at the end of every report.
pub const REPORT_CHARSETS: &[(&str, &str)] = &[
    ("Letters", "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"),
    ("Digits", "0123456789"),
    ("Punctuation", "!@#$%^&*()_+-=[]{}|;:,.<>?"),
    ("Chinese", "中文测试字体显示效果"),
];

/// Timestamp suffix used in exported file names.
pub(crate) const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Replaces characters that are not allowed in file names on common platforms.
pub(crate) fn sanitize_file_component(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn generate_report(selection: &Selection, generated_at: NaiveDateTime) -> String {
    let mut report = format!(
        "Font Report\nGenerated: {}\n\nFont:\n- Name: {}\n- Size: {}pt\n- Style: {}\n\nCharacter sets:\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        selection.family,
        selection.size,
        selection.info_label(),
    );
    for (label, chars) in REPORT_CHARSETS {
        report.push_str(&format!("\n{}:\n{}\n", label, chars));
    }
    report
}

pub fn default_report_file_name(family: &str, at: NaiveDateTime) -> String {
    format!(
        "font_report_{}_{}.txt",
        sanitize_file_component(family),
        at.format(FILE_TIMESTAMP_FORMAT)
    )
}

pub fn save_report(path: &Path, report: &str) -> ViewerResult<()> {
    std::fs::write(path, report).map_err(|e| ViewerError::io(path, e))?;
    log::info!("Saved font report to {:?}", path);
    Ok(())
}
