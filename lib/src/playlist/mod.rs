//! Ordered lists of media references and their PLS / M3U(8) file representations
//!
//! The format of a file is taken from its extension unless given explicitly,
//! see [`PlaylistFormat::detect`].

mod directory;
pub mod m3u;
mod persist;
pub mod pls;

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::encoding::TextEncoding;
use crate::error::PlaylistError;
use crate::mrl::{MediaReference, Mrl};
use crate::utils::file_suffix;

pub use persist::{FIELD_MRL, FIELD_NAME};

/// The file formats a [`Playlist`] can be read from and written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaylistFormat {
    /// INI-like `[playlist]` with `FileN=` keys
    Pls,
    /// Extended M3U, read with the requested encoding
    M3u,
    /// Extended M3U, always read as UTF-8
    M3u8,
    /// Not known yet, or not a playlist
    #[default]
    Unknown,
}

impl PlaylistFormat {
    /// Get the format from the extension of a file name, case-insensitive.
    ///
    /// Everything that is not `pls`, `m3u` or `m3u8` is [`PlaylistFormat::Unknown`].
    pub fn detect<P: AsRef<Path>>(file_name: P) -> Self {
        let Some(suffix) = file_suffix(file_name.as_ref()) else {
            return Self::Unknown;
        };

        match suffix.to_lowercase().as_str() {
            "pls" => Self::Pls,
            "m3u" => Self::M3u,
            "m3u8" => Self::M3u8,
            _ => Self::Unknown,
        }
    }

    /// Return `self`, or if it is [`PlaylistFormat::Unknown`] the format detected from `file_name`
    #[must_use]
    pub fn or_detect<P: AsRef<Path>>(self, file_name: P) -> Self {
        match self {
            Self::Unknown => Self::detect(file_name),
            v => v,
        }
    }

    /// The file extension for this format, without a leading `.`
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Pls => Some("pls"),
            Self::M3u => Some("m3u"),
            Self::M3u8 => Some("m3u8"),
            Self::Unknown => None,
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl Display for PlaylistFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pls => "PLS",
            Self::M3u => "M3U",
            Self::M3u8 => "M3U8",
            Self::Unknown => "Unknown",
        };

        f.write_str(name)
    }
}

/// A ordered list of media references.
///
/// The order is the playback order and is kept as-is when saving, entries are not deduplicated.
/// Every `load*` function replaces the whole content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist<M = Mrl> {
    items: Vec<M>,
}

impl<M> Default for Playlist<M> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<M> Playlist<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a playlist containing only `mrl`
    pub fn from_mrl(mrl: M) -> Self {
        Self { items: vec![mrl] }
    }

    #[inline]
    pub fn push(&mut self, mrl: M) {
        self.items.push(mrl);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_inner(self) -> Vec<M> {
        self.items
    }
}

impl<M: MediaReference> Playlist<M> {
    /// Write the playlist to `path`, truncating any existing file.
    ///
    /// If `format` is [`PlaylistFormat::Unknown`] it is detected from `path`.
    /// When the format is still unknown after that, a error is returned before
    /// the file is opened, so a existing file is left untouched.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
        format: PlaylistFormat,
    ) -> Result<(), PlaylistError> {
        let path = path.as_ref();
        let format = format.or_detect(path);
        if !format.is_known() {
            error!("Cannot save playlist {:#?}, unknown format", path);
            return Err(PlaylistError::UnknownFormat(Some(path.to_path_buf())));
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.save_to_writer(&mut writer, format)?;
        writer.flush()?;

        info!(
            "Saved {} entries as {} to {:#?}",
            self.items.len(),
            format,
            path
        );

        Ok(())
    }

    /// Write the playlist in the given `format` to `writer`
    pub fn save_to_writer<W: Write>(
        &self,
        writer: &mut W,
        format: PlaylistFormat,
    ) -> Result<(), PlaylistError> {
        let content = self.encode(format)?;
        writer.write_all(content.as_bytes())?;

        Ok(())
    }

    /// Encode the playlist in the given `format`
    pub fn encode(&self, format: PlaylistFormat) -> Result<String, PlaylistError> {
        match format {
            PlaylistFormat::Pls => Ok(pls::encode(&self.items)),
            PlaylistFormat::M3u | PlaylistFormat::M3u8 => Ok(m3u::encode(&self.items)),
            PlaylistFormat::Unknown => Err(PlaylistError::UnknownFormat(None)),
        }
    }

    /// Replace the content with the playlist file at `path`.
    ///
    /// `encoding` is a label like `UTF-8`, `ISO-8859-1` or `EUC-KR`, [`None`] means UTF-8.
    /// If `format` is [`PlaylistFormat::Unknown`] it is detected from `path`.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        path: P,
        encoding: Option<&str>,
        format: PlaylistFormat,
    ) -> Result<(), PlaylistError> {
        let path = path.as_ref();
        self.clear();

        let mut file = File::open(path).inspect_err(|err| {
            error!("Cannot open playlist {:#?}: {}", path, err);
        })?;

        let format = format.or_detect(path);
        if !format.is_known() {
            error!("Cannot load playlist {:#?}, unknown format", path);
            return Err(PlaylistError::UnknownFormat(Some(path.to_path_buf())));
        }

        self.load_from_reader(&mut file, encoding, format)?;

        info!(
            "Loaded {} entries as {} from {:#?}",
            self.items.len(),
            format,
            path
        );

        Ok(())
    }

    /// Replace the content with the playlist read from the start of `reader`.
    ///
    /// The position of `reader` is the same after this function as before.
    /// The `format` has to be known as there is no file name to detect it from.
    pub fn load_from_reader<R: Read + Seek>(
        &mut self,
        reader: &mut R,
        encoding: Option<&str>,
        format: PlaylistFormat,
    ) -> Result<(), PlaylistError> {
        self.clear();

        if !format.is_known() {
            return Err(PlaylistError::UnknownFormat(None));
        }

        let pos = reader.stream_position()?;
        reader.rewind()?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        reader.seek(SeekFrom::Start(pos))?;

        self.decode(&bytes, encoding, format);

        Ok(())
    }

    /// Replace the content with the playlist `mrl` points to.
    ///
    /// Only local files are supported, any remote reference is a error.
    pub fn load_mrl(
        &mut self,
        mrl: &M,
        encoding: Option<&str>,
        format: PlaylistFormat,
    ) -> Result<(), PlaylistError> {
        self.clear();

        match mrl.to_local_file() {
            Some(path) if mrl.is_local_file() => self.load(path, encoding, format),
            _ => {
                error!("Cannot load playlist from remote {:#?}", mrl.locator());
                Err(PlaylistError::RemoteReference(mrl.locator().into_owned()))
            }
        }
    }

    /// Decode `bytes` in the given known `format` and append the entries
    fn decode(&mut self, bytes: &[u8], encoding: Option<&str>, format: PlaylistFormat) {
        let text_encoding = match format {
            PlaylistFormat::M3u8 => TextEncoding::utf8(),
            _ => TextEncoding::from_hint(encoding),
        };
        let content = text_encoding.decode(bytes);

        match format {
            PlaylistFormat::Pls => {
                let items = pls::decode(&content);
                self.items.reserve(items.len());
                for item in items {
                    self.items.push(M::from_locator(&item.url, ""));
                }
            }
            PlaylistFormat::M3u | PlaylistFormat::M3u8 => {
                let items = m3u::decode(&content);
                self.items.reserve(items.len());
                for item in items {
                    self.items.push(M::from_locator(&item.url, &item.title));
                }
            }
            PlaylistFormat::Unknown => {}
        }
    }
}

impl<M> Deref for Playlist<M> {
    type Target = [M];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<M> DerefMut for Playlist<M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<M> From<Vec<M>> for Playlist<M> {
    fn from(value: Vec<M>) -> Self {
        Self { items: value }
    }
}

impl<M> FromIterator<M> for Playlist<M> {
    fn from_iter<T: IntoIterator<Item = M>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<M> Extend<M> for Playlist<M> {
    fn extend<T: IntoIterator<Item = M>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<M> IntoIterator for Playlist<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Playlist<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
