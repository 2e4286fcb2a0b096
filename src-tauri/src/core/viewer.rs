//! Application state: catalog, lists, selection and comparison mode.
//!
//! `FontViewer` is constructed once at startup and owned by whoever drives
//! the UI (the Tauri command layer wraps it in a mutex). Every mutating
//! operation publishes a [`StateChange`] to the registered observers so the
//! presentation layer can re-render.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::compare::{CompareMode, CompareOutcome, CompareStatus, CompareToggle};
use super::config::ViewerConfig;
use super::error::{ViewerError, ViewerResult};
use super::export::{ComparisonJob, ImageExportOptions, PreviewJob};
use super::favorites::FavoritesStore;
use super::filter;
use super::font_catalog::{categorize, load_catalog, Category, CategoryBuckets, FontSource};
use super::presets::{Preset, PresetStore};
use super::recent::RecentFonts;
use super::report;
use super::sample_text::{default_sample_text, import_sample_text};
use super::selection::{Selection, StyleFlag};

/// Families tried, in order, for the initial selection.
pub const STARTUP_FONTS: &[&str] = &[
    "Microsoft YaHei",
    "Arial",
    "SimSun",
    "Times New Roman",
    "Segoe UI",
];

/// Kind of state mutation carried by a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StateChange {
    Catalog,
    Selection,
    Size,
    Style,
    Favorites,
    CompareMode,
    CompareSet,
    SampleText,
    Preset,
    Reset,
}

/// Frontend-visible view of the state, sent with every notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSnapshot {
    pub selection: Selection,
    pub font_info: String,
    pub sample_text: String,
    pub is_favorite: bool,
    pub favorites: Vec<String>,
    pub recent: Vec<String>,
    pub compare: CompareStatus,
    pub compare_fonts: Vec<String>,
}

/// Receives a notification after every mutating operation.
pub trait StateObserver: Send {
    fn state_changed(&self, change: StateChange, snapshot: &ViewerSnapshot);
}

/// What a "font chosen" event from the picker did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "toggle", rename_all = "camelCase")]
pub enum FontPick {
    Selected,
    Compare(CompareToggle),
}

pub struct FontViewer {
    config: ViewerConfig,
    source: Box<dyn FontSource>,
    catalog: Vec<String>,
    buckets: CategoryBuckets,
    favorites: FavoritesStore,
    recent: RecentFonts,
    compare: CompareMode,
    /// Families shown by the most recent comparison view.
    comparison: Vec<String>,
    selection: Selection,
    sample_text: String,
    presets: PresetStore,
    observers: Vec<Box<dyn StateObserver>>,
    notices: Vec<String>,
}

impl FontViewer {
    /// Loads favorites and the font catalog and picks the startup font.
    ///
    /// A corrupt or unreadable favorites file does not prevent startup: the
    /// list starts empty and the problem is kept in [`FontViewer::notices`].
    /// A file that failed to parse is first moved to `favorites.json.bak`.
    pub fn new(config: ViewerConfig, source: Box<dyn FontSource>) -> Self {
        let mut notices = Vec::new();
        let favorites_path = config.favorites_path();
        let favorites = match FavoritesStore::load(&favorites_path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Starting with empty favorites: {}", e);
                let mut notice = format!("Favorites were reset: {}", e);
                if matches!(e, ViewerError::CorruptData { .. }) {
                    match FavoritesStore::quarantine(&favorites_path) {
                        Ok(backup) => notice.push_str(&format!(" (saved a copy to {:?})", backup)),
                        Err(e) => log::warn!("Could not back up favorites: {}", e),
                    }
                }
                notices.push(notice);
                FavoritesStore::empty(favorites_path)
            }
        };

        let catalog = load_catalog(source.as_ref());
        let buckets = categorize(&catalog, favorites.fonts());

        let startup = STARTUP_FONTS
            .iter()
            .find(|name| catalog.iter().any(|f| f == *name))
            .map(|name| name.to_string())
            .or_else(|| catalog.first().cloned())
            .unwrap_or_default();
        log::info!("Initial font: '{}'", startup);

        let mut recent = RecentFonts::new();
        if !startup.is_empty() {
            recent.promote(&startup);
        }

        Self {
            presets: PresetStore::new(config.presets_path()),
            selection: Selection::new(startup, config.default_size),
            config,
            source,
            catalog,
            buckets,
            favorites,
            recent,
            compare: CompareMode::new(),
            comparison: Vec::new(),
            sample_text: default_sample_text(),
            observers: Vec::new(),
            notices,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self, change: StateChange) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.state_changed(change, &snapshot);
        }
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            selection: self.selection.clone(),
            font_info: self.font_info(),
            sample_text: self.sample_text.clone(),
            is_favorite: self.favorites.contains(&self.selection.family),
            favorites: self.favorites.fonts().to_vec(),
            recent: self.recent.as_slice().to_vec(),
            compare: self.compare.status(),
            compare_fonts: self.compare_fonts().to_vec(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Startup problems the user should be told about.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    // ========== Catalog & filtering ==========

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Whether `family` is in the current catalog.
    pub fn is_installed(&self, family: &str) -> bool {
        self.catalog
            .binary_search_by(|f| f.as_str().cmp(family))
            .is_ok()
    }

    fn require_installed(&self, family: &str) -> ViewerResult<()> {
        if self.is_installed(family) {
            Ok(())
        } else {
            Err(ViewerError::UnknownFont(family.to_string()))
        }
    }

    /// Re-enumerates system fonts. Favorites, recents and the selection are
    /// kept even if they name fonts that disappeared.
    pub fn refresh_catalog(&mut self) {
        self.catalog = load_catalog(self.source.as_ref());
        self.buckets = categorize(&self.catalog, self.favorites.fonts());
        self.notify(StateChange::Catalog);
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<String> {
        filter::filter_by_category(&self.buckets, category)
    }

    pub fn filter_by_search(&self, term: &str, base: Category) -> Vec<String> {
        filter::filter_by_search(&self.buckets, term, base)
    }

    // ========== Selection ==========

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn font_info(&self) -> String {
        self.selection.info_label()
    }

    /// Makes `family` the selection; outside comparison mode it also becomes
    /// the most recent font. Only catalog members can be selected.
    pub fn select(&mut self, family: &str) -> ViewerResult<()> {
        self.require_installed(family)?;
        self.selection.family = family.to_string();
        if !self.is_comparing() {
            self.recent.promote(family);
        }
        log::debug!("Selected '{}'", family);
        self.notify(StateChange::Selection);
        Ok(())
    }

    /// Handles a pick from the font list: toggles comparison membership while
    /// comparison mode is active, selects otherwise.
    pub fn pick_font(&mut self, family: &str) -> ViewerResult<FontPick> {
        if self.is_comparing() {
            Ok(FontPick::Compare(self.toggle_compare_member(family)))
        } else {
            self.select(family)?;
            Ok(FontPick::Selected)
        }
    }

    pub fn set_size(&mut self, size: u32) -> ViewerResult<()> {
        self.selection.size = Selection::validate_size(size)?;
        self.notify(StateChange::Size);
        Ok(())
    }

    pub fn set_style(&mut self, flag: StyleFlag, value: bool) {
        self.selection.style.set(flag, value);
        self.notify(StateChange::Style);
    }

    pub fn recent(&self) -> &[String] {
        self.recent.as_slice()
    }

    // ========== Favorites ==========

    pub fn favorites(&self) -> &[String] {
        self.favorites.fonts()
    }

    pub fn is_favorite(&self, family: &str) -> bool {
        self.favorites.contains(family)
    }

    /// Toggles `family` and persists the list. On a write error the toggle
    /// is kept in memory and the error is returned for display.
    ///
    /// Only catalog members can be added; a favorite that is no longer
    /// installed can still be removed.
    pub fn toggle_favorite(&mut self, family: &str) -> ViewerResult<bool> {
        if !self.favorites.contains(family) {
            self.require_installed(family)?;
        }
        let result = self.favorites.toggle(family);
        self.buckets.set_favorites(self.favorites.fonts());
        if let Err(e) = &result {
            log::warn!("Favorites not saved: {}", e);
        }
        self.notify(StateChange::Favorites);
        result
    }

    // ========== Comparison mode ==========

    pub fn is_comparing(&self) -> bool {
        self.compare.is_active()
    }

    pub fn compare_status(&self) -> CompareStatus {
        self.compare.status()
    }

    pub fn compare_fonts(&self) -> &[String] {
        self.compare.fonts()
    }

    pub fn enter_compare_mode(&mut self) {
        self.compare.enter();
        log::debug!("Comparison mode on");
        self.notify(StateChange::CompareMode);
    }

    /// Leaves comparison mode. A single collected font becomes the
    /// selection; two or more are kept for the comparison view.
    pub fn exit_compare_mode(&mut self) -> CompareOutcome {
        let outcome = self.compare.exit();
        match &outcome {
            CompareOutcome::Select(family) => {
                self.selection.family = family.clone();
            }
            CompareOutcome::ShowComparison(families) => {
                self.comparison = families.clone();
            }
            CompareOutcome::Nothing => {}
        }
        log::debug!("Comparison mode off: {:?}", outcome);
        self.notify(StateChange::CompareMode);
        outcome
    }

    /// Adds or removes `family` from the comparison set. Families outside
    /// the catalog are ignored unless already collected.
    pub fn toggle_compare_member(&mut self, family: &str) -> CompareToggle {
        if !self.compare_fonts().iter().any(|f| f == family) && !self.is_installed(family) {
            log::debug!("Ignoring comparison pick of unknown font '{}'", family);
            return CompareToggle::Ignored;
        }
        let toggle = self.compare.toggle(family);
        if toggle != CompareToggle::Ignored {
            self.notify(StateChange::CompareSet);
        }
        toggle
    }

    /// Families of the last comparison view.
    pub fn comparison(&self) -> &[String] {
        &self.comparison
    }

    // ========== Sample text ==========

    pub fn sample_text(&self) -> &str {
        &self.sample_text
    }

    pub fn set_sample_text(&mut self, text: impl Into<String>) {
        self.sample_text = text.into();
        self.notify(StateChange::SampleText);
    }

    /// Replaces the sample text with a file's contents. The text is left
    /// unchanged if the file cannot be read.
    pub fn import_sample_text(&mut self, path: &Path) -> ViewerResult<()> {
        let text = import_sample_text(path)?;
        self.set_sample_text(text);
        Ok(())
    }

    /// Restores default size, clears style flags and restores the default
    /// sample text. The family and all lists are untouched.
    pub fn reset_settings(&mut self) {
        self.selection.size = self.config.default_size;
        self.selection.style = Default::default();
        self.sample_text = default_sample_text();
        self.notify(StateChange::Reset);
    }

    // ========== Presets ==========

    /// Saves the current selection and sample text under `name`.
    pub fn save_preset(&self, name: &str) -> ViewerResult<Preset> {
        let preset = Preset::capture(&self.selection, &self.sample_text);
        self.presets.save(name, &preset)?;
        Ok(preset)
    }

    pub fn list_presets(&self) -> ViewerResult<Vec<String>> {
        self.presets.list()
    }

    pub fn load_preset(&self, name: &str) -> ViewerResult<Preset> {
        self.presets.load(name)
    }

    pub fn delete_preset(&self, name: &str) -> ViewerResult<()> {
        self.presets.delete(name)
    }

    /// Loads `name` and applies family, size, flags and sample text at once.
    pub fn apply_preset(&mut self, name: &str) -> ViewerResult<Preset> {
        let preset = self.presets.load(name)?;
        let size = Selection::validate_size(preset.font_size)?;
        self.selection = Selection {
            family: preset.font_family.clone(),
            size,
            style: preset.style(),
        };
        self.sample_text = preset.sample_text.clone();
        log::info!("Applied preset '{}'", name);
        self.notify(StateChange::Preset);
        Ok(preset)
    }

    // ========== Reports & export ==========

    pub fn generate_report(&self, generated_at: NaiveDateTime) -> String {
        report::generate_report(&self.selection, generated_at)
    }

    /// Owned snapshot for rendering the preview off the command thread.
    pub fn preview_job(&self, options: ImageExportOptions) -> PreviewJob {
        PreviewJob {
            selection: self.selection.clone(),
            text: self.sample_text.clone(),
            options,
        }
    }

    /// Snapshot for rendering the last comparison view, if it had at least
    /// two fonts.
    pub fn comparison_job(&self) -> ViewerResult<ComparisonJob> {
        if self.comparison.len() < 2 {
            return Err(ViewerError::Export(
                "select at least two fonts to compare".to_string(),
            ));
        }
        Ok(ComparisonJob {
            families: self.comparison.clone(),
            selection: self.selection.clone(),
            text: self.sample_text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare::MAX_COMPARE;
    use crate::core::font_catalog::LOAD_FAILED_PLACEHOLDER;
    use crate::core::recent::MAX_RECENT;
    use crate::core::selection::DEFAULT_FONT_SIZE;
    use std::sync::{Arc, Mutex};
    use tempfile::{tempdir, TempDir};

    struct FixedSource(Vec<String>);

    impl FontSource for FixedSource {
        fn family_names(&self) -> ViewerResult<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl FontSource for BrokenSource {
        fn family_names(&self) -> ViewerResult<Vec<String>> {
            Err(ViewerError::PlatformUnavailable("unavailable".to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<StateChange>>>);

    impl StateObserver for Recorder {
        fn state_changed(&self, change: StateChange, _snapshot: &ViewerSnapshot) {
            self.0.lock().unwrap().push(change);
        }
    }

    impl Recorder {
        fn changes(&self) -> Vec<StateChange> {
            self.0.lock().unwrap().clone()
        }
    }

    const FONTS: &[&str] = &[
        "Arial",
        "Consolas",
        "Courier New",
        "Georgia",
        "KaiTi",
        "Microsoft YaHei",
        "NSimSun",
        "SimSun",
        "Times New Roman",
        "Verdana",
        "Zapfino",
        "Fira Mono",
    ];

    fn viewer_in(dir: &TempDir) -> FontViewer {
        let source = FixedSource(FONTS.iter().map(|s| s.to_string()).collect());
        FontViewer::new(ViewerConfig::with_data_dir(dir.path()), Box::new(source))
    }

    fn recorded(viewer: &mut FontViewer) -> Recorder {
        let recorder = Recorder::default();
        viewer.subscribe(Box::new(recorder.clone()));
        recorder
    }

    #[test]
    fn test_startup_picks_preferred_font() {
        let dir = tempdir().unwrap();
        let viewer = viewer_in(&dir);
        assert_eq!(viewer.selection().family, "Microsoft YaHei");
        assert_eq!(viewer.selection().size, DEFAULT_FONT_SIZE);
        assert_eq!(viewer.recent(), &["Microsoft YaHei"]);
        assert_eq!(viewer.catalog().first().map(String::as_str), Some("Arial"));
    }

    #[test]
    fn test_startup_falls_back_to_first_font() {
        let dir = tempdir().unwrap();
        let source = FixedSource(vec!["Zapfino".to_string(), "Menlo".to_string()]);
        let viewer = FontViewer::new(ViewerConfig::with_data_dir(dir.path()), Box::new(source));
        assert_eq!(viewer.selection().family, "Menlo");
    }

    #[test]
    fn test_platform_failure_leaves_placeholder_selected() {
        let dir = tempdir().unwrap();
        let viewer = FontViewer::new(
            ViewerConfig::with_data_dir(dir.path()),
            Box::new(BrokenSource),
        );
        assert_eq!(viewer.catalog(), &[LOAD_FAILED_PLACEHOLDER]);
        assert_eq!(viewer.selection().family, LOAD_FAILED_PLACEHOLDER);
    }

    #[test]
    fn test_select_promotes_recent_and_notifies() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        let recorder = recorded(&mut viewer);

        viewer.select("Arial").unwrap();
        viewer.select("Georgia").unwrap();
        viewer.select("Arial").unwrap();

        assert_eq!(viewer.selection().family, "Arial");
        assert_eq!(viewer.recent(), &["Arial", "Georgia", "Microsoft YaHei"]);
        assert_eq!(recorder.changes(), vec![StateChange::Selection; 3]);
    }

    #[test]
    fn test_recent_capped() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        for font in FONTS {
            viewer.select(font).unwrap();
        }
        assert_eq!(viewer.recent().len(), MAX_RECENT);
        assert_eq!(viewer.recent()[0], "Fira Mono");
    }

    #[test]
    fn test_size_and_style() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        let recorder = recorded(&mut viewer);

        viewer.set_size(72).unwrap();
        assert!(viewer.set_size(4).is_err());
        viewer.set_style(StyleFlag::Bold, true);
        viewer.set_style(StyleFlag::Strikethrough, true);

        assert_eq!(viewer.selection().size, 72);
        assert_eq!(
            viewer.font_info(),
            "Microsoft YaHei | 72pt | Bold | Strikethrough"
        );
        // the rejected size produced no notification
        assert_eq!(
            recorder.changes(),
            vec![StateChange::Size, StateChange::Style, StateChange::Style]
        );
    }

    #[test]
    fn test_filtering_through_viewer() {
        let dir = tempdir().unwrap();
        let viewer = viewer_in(&dir);
        assert_eq!(
            viewer.filter_by_search("sun", Category::AllFonts),
            vec!["NSimSun", "SimSun"]
        );
        assert_eq!(
            viewer.filter_by_category(Category::Monospace),
            vec!["Consolas", "Courier New", "Fira Mono"]
        );
    }

    #[test]
    fn test_toggle_favorite_twice_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.toggle_favorite("Georgia").unwrap();

        assert!(viewer.toggle_favorite("Arial").unwrap());
        assert!(!viewer.toggle_favorite("Arial").unwrap());

        assert_eq!(viewer.favorites(), &["Georgia"]);
        assert_eq!(viewer.filter_by_category(Category::Favorites), vec!["Georgia"]);
        let on_disk: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("favorites.json")).unwrap())
                .unwrap();
        assert_eq!(on_disk, vec!["Georgia"]);
    }

    #[test]
    fn test_favorites_survive_restart() {
        let dir = tempdir().unwrap();
        {
            let mut viewer = viewer_in(&dir);
            viewer.toggle_favorite("Consolas").unwrap();
        }
        let viewer = viewer_in(&dir);
        assert!(viewer.is_favorite("Consolas"));
        assert_eq!(viewer.filter_by_category(Category::Favorites), vec!["Consolas"]);
    }

    #[test]
    fn test_corrupt_favorites_reported_as_notice() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("favorites.json"), "not json").unwrap();
        let mut viewer = viewer_in(&dir);
        assert!(viewer.favorites().is_empty());
        assert_eq!(viewer.notices().len(), 1);
        assert!(viewer.notices()[0].contains("favorites.json.bak"));

        // the first save after startup leaves the damaged copy alone
        viewer.toggle_favorite("Arial").unwrap();
        let backup = std::fs::read_to_string(dir.path().join("favorites.json.bak")).unwrap();
        assert_eq!(backup, "not json");
    }

    #[test]
    fn test_fonts_outside_catalog_rejected() {
        let dir = tempdir().unwrap();
        let source = FixedSource(vec!["Arial".to_string(), "Georgia".to_string()]);
        let mut viewer = FontViewer::new(ViewerConfig::with_data_dir(dir.path()), Box::new(source));
        let recorder = recorded(&mut viewer);

        assert!(matches!(
            viewer.select("NotInstalled"),
            Err(ViewerError::UnknownFont(name)) if name == "NotInstalled"
        ));
        assert!(matches!(
            viewer.toggle_favorite("AlsoMissing"),
            Err(ViewerError::UnknownFont(_))
        ));
        viewer.enter_compare_mode();
        assert_eq!(viewer.toggle_compare_member("Ghost"), CompareToggle::Ignored);
        assert_eq!(
            viewer.pick_font("Ghost").unwrap(),
            FontPick::Compare(CompareToggle::Ignored)
        );

        assert_eq!(viewer.recent(), &["Arial"]);
        assert!(viewer.favorites().is_empty());
        assert!(viewer.compare_fonts().is_empty());
        assert!(!dir.path().join("favorites.json").exists());
        assert_eq!(recorder.changes(), vec![StateChange::CompareMode]);
    }

    #[test]
    fn test_stale_entries_removable_after_refresh() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.toggle_favorite("Zapfino").unwrap();
        viewer.enter_compare_mode();
        assert_eq!(viewer.toggle_compare_member("Zapfino"), CompareToggle::Added);

        viewer.source = Box::new(FixedSource(vec!["Arial".to_string()]));
        viewer.refresh_catalog();
        assert!(!viewer.is_installed("Zapfino"));

        assert_eq!(viewer.toggle_compare_member("Zapfino"), CompareToggle::Removed);
        assert!(!viewer.toggle_favorite("Zapfino").unwrap());
        viewer.exit_compare_mode();
        assert!(viewer.select("Zapfino").is_err());
    }

    #[test]
    fn test_every_mutation_notifies() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.save_preset("P1").unwrap();
        let sample = dir.path().join("sample.txt");
        std::fs::write(&sample, "天地玄黄").unwrap();
        let recorder = recorded(&mut viewer);

        viewer.enter_compare_mode();
        viewer.toggle_compare_member("Arial");
        viewer.toggle_compare_member("Georgia");
        viewer.exit_compare_mode();
        viewer.set_sample_text("abc");
        viewer.import_sample_text(&sample).unwrap();
        viewer.reset_settings();
        viewer.apply_preset("P1").unwrap();
        viewer.refresh_catalog();

        assert_eq!(
            recorder.changes(),
            vec![
                StateChange::CompareMode,
                StateChange::CompareSet,
                StateChange::CompareSet,
                StateChange::CompareMode,
                StateChange::SampleText,
                StateChange::SampleText,
                StateChange::Reset,
                StateChange::Preset,
                StateChange::Catalog,
            ]
        );
    }

    #[test]
    fn test_favorite_toggle_kept_when_save_fails() {
        let dir = tempdir().unwrap();
        let config = ViewerConfig::with_data_dir(dir.path().join("does-not-exist"));
        let mut viewer = FontViewer::new(
            config,
            Box::new(FixedSource(vec!["Arial".to_string()])),
        );
        let recorder = recorded(&mut viewer);

        assert!(viewer.toggle_favorite("Arial").is_err());
        assert!(viewer.is_favorite("Arial"));
        assert_eq!(recorder.changes(), vec![StateChange::Favorites]);
    }

    #[test]
    fn test_compare_mode_routes_picks() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.enter_compare_mode();

        assert_eq!(
            viewer.pick_font("Arial").unwrap(),
            FontPick::Compare(CompareToggle::Added)
        );
        assert_eq!(
            viewer.pick_font("Arial").unwrap(),
            FontPick::Compare(CompareToggle::Removed)
        );
        // picks in comparison mode do not touch selection or recents
        assert_eq!(viewer.selection().family, "Microsoft YaHei");
        assert_eq!(viewer.recent(), &["Microsoft YaHei"]);

        viewer.exit_compare_mode();
        assert_eq!(viewer.pick_font("Arial").unwrap(), FontPick::Selected);
        assert_eq!(viewer.selection().family, "Arial");
    }

    #[test]
    fn test_select_in_compare_mode_skips_recent() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.enter_compare_mode();
        viewer.select("Georgia").unwrap();
        assert_eq!(viewer.selection().family, "Georgia");
        assert_eq!(viewer.recent(), &["Microsoft YaHei"]);
    }

    #[test]
    fn test_exit_compare_with_one_font_selects_it() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.enter_compare_mode();
        viewer.toggle_compare_member("Georgia");

        assert_eq!(
            viewer.exit_compare_mode(),
            CompareOutcome::Select("Georgia".to_string())
        );
        assert_eq!(viewer.selection().family, "Georgia");
        assert!(!viewer.is_comparing());
    }

    #[test]
    fn test_exit_compare_with_none_keeps_selection() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.select("Verdana").unwrap();
        viewer.enter_compare_mode();
        assert_eq!(viewer.exit_compare_mode(), CompareOutcome::Nothing);
        assert_eq!(viewer.selection().family, "Verdana");
    }

    #[test]
    fn test_exit_compare_with_many_keeps_comparison() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.enter_compare_mode();
        for font in ["Arial", "Georgia", "KaiTi", "Verdana", "Zapfino"] {
            viewer.toggle_compare_member(font);
        }
        assert_eq!(viewer.compare_status().count, MAX_COMPARE);

        let outcome = viewer.exit_compare_mode();
        assert_eq!(
            outcome,
            CompareOutcome::ShowComparison(
                ["Arial", "Georgia", "KaiTi", "Verdana"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            )
        );
        assert_eq!(viewer.comparison().len(), MAX_COMPARE);
        assert_eq!(viewer.comparison_job().unwrap().families.len(), MAX_COMPARE);
        assert_eq!(viewer.selection().family, "Microsoft YaHei");
    }

    #[test]
    fn test_reenter_compare_clears_set() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.enter_compare_mode();
        viewer.toggle_compare_member("Arial");
        viewer.enter_compare_mode();
        assert!(viewer.compare_fonts().is_empty());
    }

    #[test]
    fn test_preset_round_trip_across_restart() {
        let dir = tempdir().unwrap();
        let saved = {
            let mut viewer = viewer_in(&dir);
            viewer.select("Georgia").unwrap();
            viewer.set_size(36).unwrap();
            viewer.set_style(StyleFlag::Italic, true);
            viewer.set_style(StyleFlag::Underline, true);
            viewer.set_sample_text("Sphinx of black quartz");
            viewer.save_preset("P1").unwrap()
        };

        let mut viewer = viewer_in(&dir);
        assert_eq!(viewer.list_presets().unwrap(), vec!["P1"]);
        assert_eq!(viewer.load_preset("P1").unwrap(), saved);

        let applied = viewer.apply_preset("P1").unwrap();
        assert_eq!(applied, saved);
        assert_eq!(viewer.selection().family, "Georgia");
        assert_eq!(viewer.selection().size, 36);
        assert!(viewer.selection().style.italic);
        assert!(viewer.selection().style.underline);
        assert!(!viewer.selection().style.bold);
        assert_eq!(viewer.sample_text(), "Sphinx of black quartz");
    }

    #[test]
    fn test_apply_missing_preset() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        let before = viewer.selection().clone();
        assert!(matches!(
            viewer.apply_preset("missing"),
            Err(ViewerError::PresetNotFound(_))
        ));
        assert_eq!(viewer.selection(), &before);
    }

    #[test]
    fn test_reset_settings() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.select("Arial").unwrap();
        viewer.set_size(100).unwrap();
        viewer.set_style(StyleFlag::Bold, true);
        viewer.set_sample_text("custom");

        viewer.reset_settings();
        assert_eq!(viewer.selection().family, "Arial");
        assert_eq!(viewer.selection().size, DEFAULT_FONT_SIZE);
        assert!(!viewer.selection().style.bold);
        assert_eq!(viewer.sample_text(), default_sample_text());
    }

    #[test]
    fn test_import_sample_text_failure_keeps_text() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.set_sample_text("keep me");
        assert!(viewer
            .import_sample_text(&dir.path().join("missing.txt"))
            .is_err());
        assert_eq!(viewer.sample_text(), "keep me");
    }

    #[test]
    fn test_refresh_keeps_stale_entries() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.toggle_favorite("Zapfino").unwrap();
        viewer.source = Box::new(FixedSource(vec!["Arial".to_string()]));

        viewer.refresh_catalog();
        assert_eq!(viewer.catalog(), &["Arial"]);
        assert!(viewer.is_favorite("Zapfino"));
        assert_eq!(viewer.selection().family, "Microsoft YaHei");
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let dir = tempdir().unwrap();
        let mut viewer = viewer_in(&dir);
        viewer.toggle_favorite("Microsoft YaHei").unwrap();
        viewer.enter_compare_mode();
        viewer.toggle_compare_member("Arial");

        let snapshot = viewer.snapshot();
        assert!(snapshot.is_favorite);
        assert_eq!(snapshot.compare.count, 1);
        assert!(snapshot.compare.active);
        assert_eq!(snapshot.compare_fonts, vec!["Arial"]);
        assert_eq!(snapshot.font_info, "Microsoft YaHei | 16pt");
    }

    #[test]
    fn test_comparison_job_requires_two_fonts() {
        let dir = tempdir().unwrap();
        let viewer = viewer_in(&dir);
        assert!(viewer.comparison_job().is_err());
    }
}
