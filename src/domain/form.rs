use crate::domain::error::DiffError;
use crate::domain::extractor::extract_additions;
use crate::domain::output::write_diff;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// At least one of the input fields is empty; nothing was read.
    NotReady,
    /// No save location was chosen; nothing was read or written.
    Cancelled,
    Saved { path: PathBuf, additions: usize },
}

/// The two inputs of a diff request. Submitting is only possible once both
/// are filled in, and a successful submission clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffForm {
    base: PathBuf,
    altered: PathBuf,
}

impl DiffForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_base(&mut self, path: impl Into<PathBuf>) {
        self.base = path.into();
    }

    pub fn set_altered(&mut self, path: impl Into<PathBuf>) {
        self.altered = path.into();
    }

    pub fn clear(&mut self) {
        self.base = PathBuf::new();
        self.altered = PathBuf::new();
    }

    pub fn is_ready(&self) -> bool {
        !self.base.as_os_str().is_empty() && !self.altered.as_os_str().is_empty()
    }

    /// Extracts the additions and saves them to `save_path`.
    ///
    /// The fields are left untouched unless the output was written.
    pub fn submit(&mut self, save_path: Option<&Path>) -> Result<Submission, DiffError> {
        if !self.is_ready() {
            return Ok(Submission::NotReady);
        }

        let save_path = match save_path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                log::warn!("no save location selected");
                return Ok(Submission::Cancelled);
            }
        };

        let added = extract_additions(&self.base, &self.altered)?;
        let path = write_diff(&added, save_path)?;

        self.clear();

        Ok(Submission::Saved {
            path,
            additions: added.len(),
        })
    }
}
