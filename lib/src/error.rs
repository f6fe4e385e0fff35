use std::path::PathBuf;

/// Error for when loading or saving a [`Playlist`](crate::Playlist) fails
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    /// The format was not given and could not be inferred from the file name
    #[error("Unknown playlist format for {}", display_path(.0.as_ref()))]
    UnknownFormat(Option<PathBuf>),
    /// Only local references can be loaded, fetching remote ones is not supported
    #[error("Cannot load playlist from non-local reference \"{0}\"")]
    RemoteReference(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn display_path(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) => format!("{:#?}", path.display().to_string()),
        None => "<stream>".to_string(),
    }
}
