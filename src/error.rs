use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Cannot read metadata for \"{}\": {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot resolve symlink \"{}\": {source}", path.display())]
    Symlink {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid event \"{input}\" (expected \"activated\", \"saved\" or \"toggle\")")]
    UnknownEvent { input: String },

    #[error("Malformed event line: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
