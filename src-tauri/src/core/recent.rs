/// Maximum number of entries kept in the recently-used list.
pub const MAX_RECENT: usize = 10;

/// Most-recently-used font families, newest first. In-memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentFonts {
    fonts: Vec<String>,
}

impl RecentFonts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `family` to the front, inserting it if absent, and drops the
    /// oldest entries beyond `MAX_RECENT`.
    pub fn promote(&mut self, family: &str) {
        self.fonts.retain(|f| f != family);
        self.fonts.insert(0, family.to_string());
        self.fonts.truncate(MAX_RECENT);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
