use crate::domain::error::DiffError;
use std::path::{Path, PathBuf};

/// A text file split into lines, each line keeping its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: Box<Path>,
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DiffError> {
        let path = path.as_ref();

        let content =
            std::fs::read_to_string(path).map_err(|e| DiffError::file_access(path, e))?;
        let lines = split_lines(&content);

        log::debug!("read {} lines from {}", lines.len(), path.display());

        Ok(SourceDocument {
            path: PathBuf::from(path).into_boxed_path(),
            lines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Splits text the way a text-mode reader does: `\r\n` and lone `\r` become
/// `\n`, and every line keeps its terminator except possibly the last one.
pub fn split_lines(content: &str) -> Vec<String> {
    let normalized = if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content.to_string()
    };

    normalized
        .split_inclusive('\n')
        .map(str::to_string)
        .collect()
}
