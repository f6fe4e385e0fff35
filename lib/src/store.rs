//! Generic structured key-value storage for named playlists
//!
//! A store holds named arrays, each element being a small map of string fields.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use figment::{
    providers::{Format, Toml},
    Figment,
};

use crate::config::StoreSettings;

/// A single element of a stored array, field name to value
pub type StoreEntry = BTreeMap<String, String>;

/// Structured key-value store that can hold named arrays of [`StoreEntry`].
pub trait StructuredStore {
    /// Replace the array `name` with the given entries, in order
    fn write_array(&mut self, name: &str, entries: Vec<StoreEntry>);
    /// Read the array `name` in index order, a unknown name results in a empty array
    fn read_array(&self, name: &str) -> Vec<StoreEntry>;
}

/// In-memory [`StructuredStore`] that can be persisted as a TOML file.
///
/// Each array is written as a TOML array of tables:
///
/// ```toml
/// [[favorites]]
/// mrl = "/music/one.mp3"
/// name = "One"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TomlStore {
    sections: BTreeMap<String, Vec<StoreEntry>>,
}

impl TomlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a store from a toml file
    ///
    /// A non-existing file results in a empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let sections: BTreeMap<String, Vec<StoreEntry>> = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| path.display().to_string())?;

        debug!("Opened store {:#?} with {} sections", path, sections.len());

        Ok(Self { sections })
    }

    /// Save the whole store as a toml file, creating parent directories as needed
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|v| !v.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating store directory {}", parent.display()))?;
        }

        std::fs::write(path, toml::to_string(&self.sections)?)
            .with_context(|| path.display().to_string())?;

        Ok(())
    }

    /// Read the store at the path configured in `settings`
    pub fn open_configured(settings: &StoreSettings) -> Result<Self> {
        Self::open(&settings.path)
    }

    /// Save the whole store at the path configured in `settings`
    pub fn save_configured(&self, settings: &StoreSettings) -> Result<()> {
        self.save_file(&settings.path)
    }

    /// Iterate over the names of all arrays in this store
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Remove the array `name`, returns `true` if it existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.sections.remove(name).is_some()
    }
}

impl StructuredStore for TomlStore {
    fn write_array(&mut self, name: &str, entries: Vec<StoreEntry>) {
        self.sections.insert(name.to_string(), entries);
    }

    fn read_array(&self, name: &str) -> Vec<StoreEntry> {
        self.sections.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(mrl: &str, name: &str) -> StoreEntry {
        StoreEntry::from([
            ("mrl".to_string(), mrl.to_string()),
            ("name".to_string(), name.to_string()),
        ])
    }

    #[test]
    fn unknown_section_is_empty() {
        let store = TomlStore::new();
        assert!(store.read_array("nothing").is_empty());
    }

    #[test]
    fn write_replaces() {
        let mut store = TomlStore::new();
        store.write_array("pl", vec![entry("a", ""), entry("b", "")]);
        store.write_array("pl", vec![entry("c", "C")]);

        assert_eq!(store.read_array("pl"), vec![entry("c", "C")]);
        assert_eq!(store.section_names().collect::<Vec<_>>(), vec!["pl"]);
        assert!(store.remove("pl"));
        assert!(!store.remove("pl"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("playlists.toml");

        let mut store = TomlStore::new();
        store.write_array("favorites", vec![entry("/music/one.mp3", "One")]);
        store.write_array(
            "radio",
            vec![entry("http://radio.example/stream", ""), entry("x", "y")],
        );
        store.save_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[[favorites]]"));

        let loaded = TomlStore::open(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let settings = StoreSettings {
            path: dir.path().join("store").join("lists.toml"),
        };

        let mut store = TomlStore::open_configured(&settings).unwrap();
        assert_eq!(store, TomlStore::new());

        store.write_array("favorites", vec![entry("/music/one.mp3", "One")]);
        store.save_configured(&settings).unwrap();
        assert!(settings.path.is_file());

        assert_eq!(TomlStore::open_configured(&settings).unwrap(), store);
    }

    #[test]
    fn open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::open(dir.path().join("missing.toml")).unwrap();
        assert_eq!(store, TomlStore::new());
    }
}
