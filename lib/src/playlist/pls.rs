//! Encode and decode the `File` entries of PLS playlist files

use std::fmt::Write;

use crate::mrl::MediaReference;

/// Line ending used when writing PLS files, follows the platform convention
#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Value written for every `Length` key, durations are not stored
const UNKNOWN_LENGTH: i32 = -1;

/// The PLS version written in the footer
const PLS_VERSION: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct PLSItem {
    pub url: String,
}

/// Encode the given references as a PLS file, numbered from 1 in order.
pub fn encode<M: MediaReference>(items: &[M]) -> String {
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = write!(
        out,
        "[playlist]{LINE_ENDING}NumberOfEntries={}{LINE_ENDING}{LINE_ENDING}",
        items.len()
    );
    for (idx, item) in items.iter().enumerate() {
        let num = idx + 1;
        let _ = write!(
            out,
            "File{num}={}{LINE_ENDING}Length{num}={UNKNOWN_LENGTH}{LINE_ENDING}{LINE_ENDING}",
            item.locator()
        );
    }
    let _ = write!(out, "Version={PLS_VERSION}{LINE_ENDING}");

    out
}

/// PLS is a file format similar in style to INI (but does not have a official standard).
/// Each entry is numbered in the key like `File1`, only `File` is used here.
///
/// Entries are returned in the order they appear in the text, not sorted by their number.
/// The header, `NumberOfEntries`, `Length`, `Title` and `Version` are not checked, so this never fails.
///
/// <https://en.wikipedia.org/wiki/PLS_(file_format)>
pub fn decode(content: &str) -> Vec<PLSItem> {
    let mut list = Vec::new();

    for line in content.lines() {
        if line.is_empty() {
            continue;
        }

        let Some(remainder) = line.strip_prefix("File") else {
            continue;
        };

        let Some(url) = parse_id(remainder) else {
            trace!("Skipping PLS line {:#?}", line);
            continue;
        };

        list.push(PLSItem {
            url: url.to_string(),
        });
    }

    list
}

/// Parse a `<digits>=<value>` remainder, returning the value.
///
/// Requires at least one digit and a non-empty value, the value is not trimmed.
fn parse_id(val: &str) -> Option<&str> {
    let (id, remainder) = val.split_once('=')?;

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        warn!("Malformed PLS entry id {:#?}", id);
        return None;
    }

    if remainder.is_empty() {
        return None;
    }

    Some(remainder)
}
