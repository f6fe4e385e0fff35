use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::Playlist;
use crate::filter::MediaFilter;
use crate::mrl::MediaReference;
use crate::utils::absolute_path;

impl<M: MediaReference> Playlist<M> {
    /// Replace the content with all media files directly in `dir`, sorted by file name.
    ///
    /// Only regular files (following symlinks) whose name matches `filter` are added, with their absolute path.
    /// Hidden files (name starting with `.`) are skipped.
    /// Sub-directories are not descended into. A unreadable `dir` results in a empty playlist.
    pub fn load_all<F: MediaFilter + ?Sized>(&mut self, dir: &Path, filter: &F) -> &mut Self {
        self.clear();

        let dir = match absolute_path(dir) {
            Ok(v) => v,
            Err(err) => {
                error!("Cannot resolve directory {:#?}: {}", dir, err);
                return self;
            }
        };

        let files: Vec<PathBuf> = WalkDir::new(&dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| {
                entry
                    .inspect_err(|err| warn!("Skipping entry in {:#?}: {}", dir, err))
                    .ok()
            })
            .filter(|f| f.file_type().is_file())
            .filter(|f| {
                f.file_name()
                    .to_str()
                    .is_some_and(|name| !name.starts_with('.') && filter.matches(name))
            })
            .map(walkdir::DirEntry::into_path)
            .collect();

        debug!("Found {} media files in {:#?}", files.len(), dir);

        self.items.reserve(files.len());
        for file in files {
            self.items.push(M::from_locator(&file.to_string_lossy(), ""));
        }

        self
    }
}
