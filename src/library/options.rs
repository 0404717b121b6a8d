//! Options for adding icons to a library.

use chrono::NaiveDate;

/// Tag applied to new icons when none are given.
pub const DEFAULT_TAG: &str = "custom";

/// Options for [`add_icons_to_library`](super::add_icons_to_library).
///
/// # Example
///
/// ```rust
/// use iconlib::AddOptions;
///
/// let options = AddOptions::new()
///     .languages(["", "ENG", "DEU"])
///     .tags(["custom", "garden"])
///     .force(true);
/// assert_eq!(options.languages.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOptions {
    /// Tags written to every new catalog entry.
    pub tags: Vec<String>,
    /// Value of the `line` attribute.
    pub line: bool,
    /// Value of the `filled` attribute.
    pub filled: bool,
    /// Overwrite existing SVGs and replace existing catalog entries.
    pub force: bool,
    /// Catalog languages; `""` selects the base catalog.
    pub languages: Vec<String>,
    /// Date written to the version entry. Defaults to today (local time).
    pub version_date: Option<NaiveDate>,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self {
            tags: vec![DEFAULT_TAG.to_string()],
            line: true,
            filled: true,
            force: false,
            languages: vec![String::new()],
            version_date: None,
        }
    }
}

impl AddOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tags for new catalog entries.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the `line` attribute.
    pub fn line(mut self, line: bool) -> Self {
        self.line = line;
        self
    }

    /// Sets the `filled` attribute.
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Enables overwriting existing entries.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Sets the catalog languages to update.
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Pins the date written to the version entry.
    pub fn version_date(mut self, date: NaiveDate) -> Self {
        self.version_date = Some(date);
        self
    }

    /// Returns the version stamp these options produce.
    pub fn version_stamp(&self) -> String {
        self.version_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
            .format("%Y%m%d")
            .to_string()
    }
}
