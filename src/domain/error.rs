use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffError {
    /// One of the source documents could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The destination could not be created or written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiffError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::Write {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            DiffError::FileAccess { path, .. } | DiffError::Write { path, .. } => path,
        }
    }
}
