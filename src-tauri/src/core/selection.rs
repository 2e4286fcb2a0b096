//! The active font selection: family, point size and style flags.

use serde::{Deserialize, Serialize};

use super::error::{ViewerError, ViewerResult};

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 200;
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// One of the four independent style modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl StyleFlag {
    pub const ALL: [StyleFlag; 4] = [
        StyleFlag::Bold,
        StyleFlag::Italic,
        StyleFlag::Underline,
        StyleFlag::Strikethrough,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StyleFlag::Bold => "Bold",
            StyleFlag::Italic => "Italic",
            StyleFlag::Underline => "Underline",
            StyleFlag::Strikethrough => "Strikethrough",
        }
    }
}

/// Style modifiers applied on top of the family and size. No combination
/// is mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl StyleFlags {
    pub fn get(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
            StyleFlag::Strikethrough => self.strikethrough,
        }
    }

    pub fn set(&mut self, flag: StyleFlag, value: bool) {
        match flag {
            StyleFlag::Bold => self.bold = value,
            StyleFlag::Italic => self.italic = value,
            StyleFlag::Underline => self.underline = value,
            StyleFlag::Strikethrough => self.strikethrough = value,
        }
    }

    /// Labels of the active flags, in `StyleFlag::ALL` order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        StyleFlag::ALL
            .iter()
            .filter(|flag| self.get(**flag))
            .map(|flag| flag.label())
            .collect()
    }
}

/// Frontend-visible selection. There is always exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub family: String,
    pub size: u32,
    pub style: StyleFlags,
}

impl Selection {
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
            style: StyleFlags::default(),
        }
    }

    /// Accepts sizes in `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
    pub fn validate_size(size: u32) -> ViewerResult<u32> {
        if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            Ok(size)
        } else {
            Err(ViewerError::InvalidSize {
                size,
                min: MIN_FONT_SIZE,
                max: MAX_FONT_SIZE,
            })
        }
    }

    /// Summary line such as `Arial | 16pt | Bold | Underline`.
    pub fn info_label(&self) -> String {
        let size = format!("{}pt", self.size);
        let mut parts = vec![self.family.as_str(), size.as_str()];
        parts.extend(self.style.active_labels());
        parts.join(" | ")
    }
}
