use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreeclipError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Terminal I/O error: {0}")]
    Terminal(#[source] std::io::Error),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("No suitable clipboard mechanism found")]
    NoClipboard,
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
impl TreeclipError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeclipError::Io {
            path: path.into(),
            source,
        }
    }
}
