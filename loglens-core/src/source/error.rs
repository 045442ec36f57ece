use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported file type '{extension}' for {path} (expected .jsonl)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read from log source: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
