use crate::domain::DEFAULT_OUTPUT_EXTENSION;
use crate::domain::form::{DiffForm, Submission};
use crate::session::Session;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub base: PathBuf,
    pub altered: PathBuf,
    pub output: PathBuf,
}

impl Session {
    pub fn extract(&self, opts: &ExtractOptions) -> anyhow::Result<()> {
        let mut form = DiffForm::new();
        form.set_base(&opts.base);
        form.set_altered(&opts.altered);

        let save_path = with_default_extension(&opts.output);

        match form.submit(Some(save_path.as_path()))? {
            Submission::Saved { path, additions } => {
                log::debug!("{additions} added lines saved");
                writeln!(self.writer(), "Differences saved to: {}", path.display())?;
            }
            Submission::Cancelled => anyhow::bail!("No save location selected!"),
            Submission::NotReady => {
                anyhow::bail!("Both a base file and an altered file must be selected")
            }
        }

        Ok(())
    }
}

/// Appends `.txt` to a save path that has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() || path.extension().is_some() {
        return path.to_path_buf();
    }

    let mut path = path.to_path_buf();
    path.set_extension(DEFAULT_OUTPUT_EXTENSION);
    path
}
