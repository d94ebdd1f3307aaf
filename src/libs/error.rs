use std::path::PathBuf;
use thiserror::Error;

/// Why a single library could not be copied
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source directory '{0}' does not exist")]
    SourceMissing(PathBuf),

    #[error("source '{0}' is not a directory")]
    SourceNotDirectory(PathBuf),

    #[error("failed to {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl CopyError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
