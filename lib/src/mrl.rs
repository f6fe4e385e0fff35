//! Media references as stored in a playlist

use std::borrow::Cow;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// The capabilities a playlist needs from a media reference.
///
/// Construction must not fail, a reference that could not be understood is simply [`is_empty`](MediaReference::is_empty).
pub trait MediaReference: Sized {
    /// Create a reference from a raw locator (a path or a URI) and a display name, which may be empty
    fn from_locator(locator: &str, name: &str) -> Self;
    /// The locator as it should be written to a playlist
    fn locator(&self) -> Cow<'_, str>;
    /// The display name, empty if there is none
    fn name(&self) -> &str;
    fn is_empty(&self) -> bool;
    fn is_local_file(&self) -> bool;
    /// Get the local path of this reference, [`None`] if it is not a local file
    fn to_local_file(&self) -> Option<PathBuf>;
}

/// Media Resource Locator, a local path or a URI plus a optional display name.
///
/// The locator is kept verbatim, no normalization is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mrl {
    location: String,
    name: String,
}

impl Mrl {
    pub fn new<L: Into<String>>(location: L) -> Self {
        Self {
            location: location.into(),
            name: String::new(),
        }
    }

    pub fn with_name<L: Into<String>, N: Into<String>>(location: L, name: N) -> Self {
        Self {
            location: location.into(),
            name: name.into(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.location
    }

    /// Get the URI scheme (lowercased), if the locator has one.
    ///
    /// Only `scheme://` forms are considered, so `C:\music` is a path.
    pub fn scheme(&self) -> Option<String> {
        let (scheme, _) = self.location.split_once("://")?;

        let mut chars = scheme.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

        valid.then(|| scheme.to_ascii_lowercase())
    }
}

impl MediaReference for Mrl {
    fn from_locator(locator: &str, name: &str) -> Self {
        Self::with_name(locator, name)
    }

    fn locator(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.location)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_empty(&self) -> bool {
        self.location.is_empty()
    }

    fn is_local_file(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        self.scheme().map_or(true, |v| v == "file")
    }

    fn to_local_file(&self) -> Option<PathBuf> {
        if !self.is_local_file() {
            return None;
        }

        let Some((_, remainder)) = self.location.split_once("://") else {
            return Some(PathBuf::from(&self.location));
        };

        // "file://localhost/path" and "file:///path" are the same file
        let remainder = remainder.strip_prefix("localhost").unwrap_or(remainder);
        let decoded = percent_decode_str(remainder).decode_utf8_lossy();

        Some(PathBuf::from(decoded.as_ref()))
    }
}

impl Display for Mrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.location)
    }
}

impl From<PathBuf> for Mrl {
    fn from(value: PathBuf) -> Self {
        Self::new(value.to_string_lossy())
    }
}

impl From<&Path> for Mrl {
    fn from(value: &Path) -> Self {
        Self::new(value.to_string_lossy())
    }
}

impl From<&str> for Mrl {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Mrl {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
