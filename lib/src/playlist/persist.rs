use super::Playlist;
use crate::mrl::MediaReference;
use crate::store::{StoreEntry, StructuredStore};

/// Field of a stored entry holding the locator
pub const FIELD_MRL: &str = "mrl";
/// Field of a stored entry holding the display name
pub const FIELD_NAME: &str = "name";

impl<M: MediaReference> Playlist<M> {
    /// Write the playlist as array `section` into `store`, replacing what was there before.
    pub fn save_to_store<S: StructuredStore + ?Sized>(&self, section: &str, store: &mut S) {
        let entries = self
            .items
            .iter()
            .map(|item| {
                StoreEntry::from([
                    (FIELD_MRL.to_string(), item.locator().into_owned()),
                    (FIELD_NAME.to_string(), item.name().to_string()),
                ])
            })
            .collect();

        store.write_array(section, entries);
    }

    /// Replace the content with the array `section` from `store`.
    ///
    /// Entries that result in a empty reference (like a missing `mrl` field) are skipped.
    pub fn load_from_store<S: StructuredStore + ?Sized>(&mut self, section: &str, store: &S) {
        self.clear();

        for (idx, entry) in store.read_array(section).iter().enumerate() {
            let mrl = M::from_locator(field(entry, FIELD_MRL), field(entry, FIELD_NAME));
            if mrl.is_empty() {
                debug!("Stored entry {} in {:#?} is empty, skipping", idx, section);
                continue;
            }

            self.items.push(mrl);
        }
    }
}

/// Get the value of `key`, or a empty string if the entry does not have it
#[inline]
fn field<'a>(entry: &'a StoreEntry, key: &str) -> &'a str {
    entry.get(key).map_or("", String::as_str)
}
