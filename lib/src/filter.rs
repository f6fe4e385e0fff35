//! Which files in a directory count as media

use wildmatch::WildMatch;

use crate::config::{MediaSettings, PlaylistSettings};

/// Provider of file name patterns for recognized media files, like `*.mp3`.
pub trait MediaFilter {
    /// The glob patterns, matched case-insensitively against the file name only
    fn patterns(&self) -> &[String];

    /// Check if the given file name matches any of the [`patterns`](MediaFilter::patterns)
    fn matches(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();

        self.patterns()
            .iter()
            .any(|pat| WildMatch::new(&pat.to_lowercase()).matches(&file_name))
    }
}

/// A [`MediaFilter`] with a fixed list of patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaNameFilter {
    patterns: Vec<String>,
}

impl MediaNameFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for MediaNameFilter {
    fn default() -> Self {
        Self::from(&MediaSettings::default())
    }
}

impl From<&MediaSettings> for MediaNameFilter {
    fn from(value: &MediaSettings) -> Self {
        Self::new(value.name_patterns.iter().cloned())
    }
}

impl From<&PlaylistSettings> for MediaNameFilter {
    fn from(value: &PlaylistSettings) -> Self {
        Self::from(&value.media)
    }
}

impl MediaFilter for MediaNameFilter {
    fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
