//! Settings of the library, read from and written to a toml file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Name of the directory in the os config dir
pub const APP_DIR_NAME: &str = "playlist-io";

/// File name of the settings file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the default playlist store
pub const STORE_FILE_NAME: &str = "playlists.toml";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
#[allow(clippy::module_name_repetitions)]
pub struct PlaylistSettings {
    pub media: MediaSettings,
    pub store: StoreSettings,
}

impl PlaylistSettings {
    /// Read the settings from a toml file
    ///
    /// A non-existing file results in the default settings, missing fields are filled with their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data: Self = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| path.display().to_string())?;

        Ok(data)
    }

    /// Save the settings as a toml file, creating parent directories as needed
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|v| !v.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        std::fs::write(path, toml::to_string(self)?)
            .with_context(|| path.display().to_string())?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct MediaSettings {
    /// Glob patterns of files that are picked up when loading a whole directory
    pub name_patterns: Vec<String>,
}

/// Extensions of files that are considered media when scanning a directory
#[rustfmt::skip]
const MEDIA_EXTENSIONS: &[&str] = &[
    // audio
    "mp3", "aiff", "aif", "aifc", "flac", "m4a", "aac", "opus", "ogg", "oga", "wav", "wma", "ape", "mka",
    // video
    "mkv", "webm", "mp4", "m4v", "avi", "mov", "wmv", "mpg", "mpeg", "ogv", "flv", "ts",
];

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            name_patterns: MEDIA_EXTENSIONS
                .iter()
                .map(|ext| format!("*.{ext}"))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct StoreSettings {
    /// Path of the TOML file named playlists are stored in
    pub path: PathBuf,
}

/// Get `file_name` in the OS-specific config dir, or in the current directory if there is none
fn app_config_file(file_name: &str) -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(file_name),
        |mut v| {
            v.push(APP_DIR_NAME);
            v.push(file_name);
            v
        },
    )
}

/// Get the default path of the settings file
pub fn default_config_path() -> PathBuf {
    app_config_file(CONFIG_FILE_NAME)
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: app_config_file(STORE_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = PlaylistSettings::from_file(dir.path().join("missing.toml")).unwrap();
        assert_eq!(settings, PlaylistSettings::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\npath = \"/srv/playlists.toml\"\n").unwrap();

        let settings = PlaylistSettings::from_file(&path).unwrap();
        assert_eq!(settings.store.path, PathBuf::from("/srv/playlists.toml"));
        assert_eq!(settings.media, MediaSettings::default());
    }

    #[test]
    fn save_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut settings = PlaylistSettings::default();
        settings.media.name_patterns = vec!["*.opus".to_string()];
        settings.store.path = dir.path().join("store.toml");
        settings.save_file(&path).unwrap();

        assert_eq!(PlaylistSettings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[media]\nname_patterns = 1\n").unwrap();

        assert!(PlaylistSettings::from_file(&path).is_err());
    }

    #[test]
    fn default_paths() {
        assert!(default_config_path().ends_with(CONFIG_FILE_NAME));
        assert!(StoreSettings::default().path.ends_with(STORE_FILE_NAME));
    }
}
