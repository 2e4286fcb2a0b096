//! System font enumeration and keyword-based categorization using font-kit.
//!
//! The catalog is the sorted list of family names reported by the platform.
//! Categories are computed from it by case-insensitive substring matching
//! against fixed keyword lists; a family may land in several categories.

use std::collections::BTreeMap;
use std::fmt;

use font_kit::source::SystemSource;
use serde::{Deserialize, Serialize};

use super::error::{ViewerError, ViewerResult};

/// Single entry shown when the platform could not enumerate fonts, so the
/// font picker always has a selectable value.
pub const LOAD_FAILED_PLACEHOLDER: &str = "failed to load";

const CHINESE_KEYWORDS: &[&str] = &["song", "hei", "kai", "fang", "sim", "microsoft", "yahei"];
const ENGLISH_KEYWORDS: &[&str] = &["arial", "times", "courier", "verdana", "tahoma", "georgia"];
const MONOSPACE_KEYWORDS: &[&str] = &["mono", "courier", "consolas", "fixedsys"];
const SERIF_KEYWORDS: &[&str] = &["times", "georgia", "宋体", "simsun"];
const SANS_SERIF_KEYWORDS: &[&str] = &["arial", "helvetica", "verdana", "tahoma", "黑体", "yahei"];

/// Font grouping offered by the category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    AllFonts,
    Favorites,
    Chinese,
    English,
    Monospace,
    Serif,
    SansSerif,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Category; 7] = [
        Category::AllFonts,
        Category::Favorites,
        Category::Chinese,
        Category::English,
        Category::Monospace,
        Category::Serif,
        Category::SansSerif,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::AllFonts => "All Fonts",
            Category::Favorites => "Favorites",
            Category::Chinese => "Chinese",
            Category::English => "English",
            Category::Monospace => "Monospace",
            Category::Serif => "Serif",
            Category::SansSerif => "Sans Serif",
        }
    }

    /// Keyword list for keyword-derived categories, `None` for computed ones.
    pub fn keywords(self) -> Option<&'static [&'static str]> {
        match self {
            Category::AllFonts | Category::Favorites => None,
            Category::Chinese => Some(CHINESE_KEYWORDS),
            Category::English => Some(ENGLISH_KEYWORDS),
            Category::Monospace => Some(MONOSPACE_KEYWORDS),
            Category::Serif => Some(SERIF_KEYWORDS),
            Category::SansSerif => Some(SANS_SERIF_KEYWORDS),
        }
    }

    /// Whether a lowercased family name contains one of this category's
    /// keywords. Always false for computed categories.
    fn matches(self, lower: &str) -> bool {
        self.keywords()
            .is_some_and(|keywords| keywords.iter().any(|keyword| lower.contains(keyword)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of installed font family names.
pub trait FontSource: Send {
    fn family_names(&self) -> ViewerResult<Vec<String>>;
}

/// Enumerates families through the platform source (fontconfig,
/// DirectWrite or Core Text, depending on the target).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFontSource;

impl FontSource for SystemFontSource {
    fn family_names(&self) -> ViewerResult<Vec<String>> {
        SystemSource::new()
            .all_families()
            .map_err(|e| ViewerError::PlatformUnavailable(format!("{:?}", e)))
    }
}

/// Queries the source once and returns the sorted family list.
///
/// Enumeration failures never propagate: the list degrades to the single
/// [`LOAD_FAILED_PLACEHOLDER`] entry.
pub fn load_catalog(source: &dyn FontSource) -> Vec<String> {
    match source.family_names() {
        Ok(families) if families.is_empty() => {
            log::warn!("Font enumeration returned no families");
            vec![LOAD_FAILED_PLACEHOLDER.to_string()]
        }
        Ok(mut families) => {
            families.sort();
            families.dedup();
            log::info!("Loaded {} font families", families.len());
            families
        }
        Err(e) => {
            log::warn!("Font enumeration failed: {}", e);
            vec![LOAD_FAILED_PLACEHOLDER.to_string()]
        }
    }
}

/// Family names grouped per [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBuckets {
    buckets: BTreeMap<Category, Vec<String>>,
}

impl CategoryBuckets {
    /// Members of `category`, in catalog order (favorites in toggle order).
    pub fn get(&self, category: Category) -> &[String] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replaces the Favorites bucket after the favorites list changed.
    pub fn set_favorites(&mut self, favorites: &[String]) {
        self.buckets.insert(Category::Favorites, favorites.to_vec());
    }
}

/// Classifies every name into the keyword-derived categories.
///
/// Serif and SansSerif are exclusive: SansSerif keywords are only tested
/// when no Serif keyword matched.
pub fn categorize(names: &[String], favorites: &[String]) -> CategoryBuckets {
    let mut buckets: BTreeMap<Category, Vec<String>> = Category::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for name in names {
        let lower = name.to_lowercase();
        let mut push = |category: Category| {
            if let Some(bucket) = buckets.get_mut(&category) {
                bucket.push(name.clone());
            }
        };

        for category in [Category::Chinese, Category::English, Category::Monospace] {
            if category.matches(&lower) {
                push(category);
            }
        }
        if Category::Serif.matches(&lower) {
            push(Category::Serif);
        } else if Category::SansSerif.matches(&lower) {
            push(Category::SansSerif);
        }
    }

    buckets.insert(Category::AllFonts, names.to_vec());
    buckets.insert(Category::Favorites, favorites.to_vec());
    CategoryBuckets { buckets }
}
