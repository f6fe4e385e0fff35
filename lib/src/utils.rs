use std::borrow::Cow;
use std::path::Path;

/// Absolutize a given path with the current working directory.
///
/// This function, unlike [`std::fs::canonicalize`] does *not* hit the filesystem and so does not require the input path to exist yet.
///
/// Examples:
/// `./somewhere` -> `/absolute/./somewhere`
/// `.\somewhere` -> `C:\somewhere`
///
/// in the future consider replacing with [`std::path::absolute`]
pub fn absolute_path(path: &Path) -> std::io::Result<Cow<'_, Path>> {
    if path.is_absolute() {
        Ok(Cow::Borrowed(path))
    } else {
        Ok(Cow::Owned(std::env::current_dir()?.join(path)))
    }
}

/// Get the last `.` separated part of the file name of `path`, if there is one.
///
/// Unlike [`Path::extension`], a leading dot counts (`.pls` has the suffix `pls`).
pub fn file_suffix(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    file_name.rsplit_once('.').map(|(_, suffix)| suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absolute_stays() {
        let path = std::env::current_dir().unwrap().join("a.mp3");
        assert_eq!(absolute_path(&path).unwrap(), Cow::Borrowed(path.as_path()));
    }

    #[test]
    fn relative_gets_cwd() {
        let abs = absolute_path(Path::new("music/a.mp3")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("music/a.mp3"));
    }

    #[test]
    fn suffix() {
        assert_eq!(file_suffix(Path::new("/x/list.m3u8")), Some("m3u8"));
        assert_eq!(file_suffix(Path::new("archive.tar.PLS")), Some("PLS"));
        assert_eq!(file_suffix(Path::new(".pls")), Some("pls"));
        assert_eq!(file_suffix(Path::new("trailing.")), Some(""));
        assert_eq!(file_suffix(Path::new("noext")), None);
        assert_eq!(file_suffix(Path::new("dir.d/noext")), None);
    }
}
