pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod favorites;
pub mod filter;
pub mod font_catalog;
pub mod presets;
pub mod recent;
pub mod report;
pub mod sample_text;
pub mod selection;
pub mod viewer;

pub use compare::{CompareMode, CompareOutcome, CompareStatus, CompareToggle, MAX_COMPARE};
pub use config::ViewerConfig;
pub use error::{ViewerError, ViewerResult};
pub use export::{ComparisonJob, ImageExportOptions, PreviewJob};
pub use favorites::FavoritesStore;
pub use font_catalog::{
    categorize, load_catalog, Category, CategoryBuckets, FontSource, SystemFontSource,
    LOAD_FAILED_PLACEHOLDER,
};
pub use presets::{Preset, PresetStore};
pub use recent::{RecentFonts, MAX_RECENT};
pub use selection::{Selection, StyleFlag, StyleFlags};
pub use viewer::{FontPick, FontViewer, StateChange, StateObserver, ViewerSnapshot};
