//! Encode and decode extended M3U (and M3U8) playlist files

use std::sync::LazyLock;

use regex::Regex;

use crate::mrl::MediaReference;

/// Matches a `#EXTINF:<duration>,<name>` directive, the duration is not used
static RE_EXTINF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#EXTINF\s*:\s*-?[0-9]+\s*,\s*(?P<name>.*)\s*$").expect("Regex error")
});

#[derive(Debug, Clone, PartialEq)]
pub struct M3UItem {
    pub url: String,
    /// The name from the `#EXTINF` directive, empty if there was none
    pub title: String,
}

/// Encode the given references as a extended M3U file.
///
/// Every entry gets a `#EXTINF` with duration 0 and no name, lines always end in `\n`.
pub fn encode<M: MediaReference>(items: &[M]) -> String {
    let mut out = String::from("#EXTM3U\n");
    for item in items {
        out.push_str("#EXTINF:0,\n");
        out.push_str(&item.locator());
        out.push('\n');
    }
    out
}

/// M3U(8) is a de-facto standard (meaning there is no formal standard), where `#` lines are directives or comments
///
/// A `#EXTINF` directive names the entry whose location is the next line that is neither empty nor starts with `#`.
/// Other `#` lines are ignored.
///
/// NOTE: a plain location line (one not following a `#EXTINF`) is not used itself,
/// instead the next location line after it is taken, so of `a`, `b`, `c`, `d` only `b` and `d` are returned.
///
/// <https://en.wikipedia.org/wiki/M3U#Extended_M3U>
pub fn decode(content: &str) -> Vec<M3UItem> {
    let mut lines = content.lines().map(str::trim);
    let mut list = vec![];

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }

        let (title, url) = if line.starts_with('#') {
            let Some(caps) = RE_EXTINF.captures(line) else {
                trace!("Ignoring M3U comment {:#?}", line);
                continue;
            };

            let title = caps.name("name").map_or("", |v| v.as_str());
            (title, next_location(&mut lines))
        } else {
            debug!("Skipping plain M3U line {:#?} for the next location", line);
            ("", next_location(&mut lines))
        };

        let Some(url) = url else {
            warn!("M3U entry {:#?} has no location, excluding!", title);
            continue;
        };

        list.push(M3UItem {
            url: url.to_string(),
            title: title.to_string(),
        });
    }

    list
}

/// Advance `lines` to the next line that is not empty and not a comment / directive
fn next_location<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Option<&'a str> {
    lines.find(|line| !line.is_empty() && !line.starts_with('#'))
}
