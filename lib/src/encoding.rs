//! Turn raw playlist bytes into text according to a encoding hint

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

/// A text encoding playlists can be read as, resolved from a label like `UTF-8`, `ISO-8859-1` or `EUC-KR`.
///
/// Labels follow the WHATWG encoding standard, see <https://encoding.spec.whatwg.org/#names-and-labels>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    #[inline]
    pub fn utf8() -> Self {
        Self(UTF_8)
    }

    /// Parse a encoding label.
    ///
    /// Returns [`None`] for labels that are not known.
    pub fn from_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self)
    }

    /// Resolve a optional encoding hint, falling back to UTF-8 if there is no hint or it is unknown
    pub fn from_hint(hint: Option<&str>) -> Self {
        let Some(hint) = hint.filter(|v| !v.trim().is_empty()) else {
            return Self::default();
        };

        Self::from_label(hint).unwrap_or_else(|| {
            warn!("Unknown encoding {:#?}, reading as UTF-8", hint);
            Self::default()
        })
    }

    /// The canonical name of the encoding
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Decode the given bytes into text, invalid sequences are replaced and never fail the decode.
    ///
    /// A UTF-8 or UTF-16 Byte-Order-Mark takes precedence over this encoding and is removed.
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        let (text, used, had_errors) = self.0.decode(bytes);

        if used != self.0 {
            debug!(
                "Byte-Order-Mark found, reading as {} instead of {}",
                used.name(),
                self.0.name()
            );
        }
        if had_errors {
            warn!("Playlist is not valid {}, replaced invalid sequences", used.name());
        }

        text
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels() {
        assert_eq!(TextEncoding::from_label("UTF-8"), Some(TextEncoding::utf8()));
        assert_eq!(TextEncoding::from_label(" utf8 "), Some(TextEncoding::utf8()));
        assert_eq!(
            TextEncoding::from_label("EUC-KR").map(TextEncoding::name),
            Some("EUC-KR")
        );
        assert!(TextEncoding::from_label("Shift_JIS").is_some());
        assert_eq!(TextEncoding::from_label("not-a-charset"), None);
    }

    #[test]
    fn hint_fallback() {
        assert_eq!(TextEncoding::from_hint(None), TextEncoding::utf8());
        assert_eq!(TextEncoding::from_hint(Some("")), TextEncoding::utf8());
        assert_eq!(
            TextEncoding::from_hint(Some("not-a-charset")),
            TextEncoding::utf8()
        );
        assert_ne!(TextEncoding::from_hint(Some("latin1")), TextEncoding::utf8());
    }

    #[test]
    fn decode_latin1() {
        let bytes = b"/music/caf\xe9.mp3";
        let latin1 = TextEncoding::from_label("ISO-8859-1").unwrap();
        assert_eq!(latin1.decode(bytes), "/music/café.mp3");
        // the same bytes are not valid utf8
        assert_eq!(TextEncoding::utf8().decode(bytes), "/music/caf\u{FFFD}.mp3");
    }

    #[test]
    fn decode_euc_kr() {
        let euc_kr = TextEncoding::from_label("EUC-KR").unwrap();
        assert_eq!(euc_kr.decode(b"/\xc0\xbd\xbe\xc7.mp3"), "/음악.mp3");
    }

    #[test]
    fn decode_utf8_bom() {
        let bytes = b"\xEF\xBB\xBF#EXTM3U\n";
        assert_eq!(TextEncoding::utf8().decode(bytes), "#EXTM3U\n");
    }

    #[test]
    fn utf16_bom_wins_over_hint() {
        // "#E\n" as UTF-16LE with BOM
        let bytes = b"\xFF\xFE#\x00E\x00\n\x00";
        let latin1 = TextEncoding::from_label("latin1").unwrap();
        assert_eq!(latin1.decode(bytes), "#E\n");
    }
}
