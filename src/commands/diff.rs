use crate::domain::diff::Edit;
use crate::domain::diff::unified::{DiffLine, UnifiedDiff};
use crate::domain::document::SourceDocument;
use crate::session::Session;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub base: PathBuf,
    pub altered: PathBuf,
    pub context: usize,
}

impl Session {
    pub fn diff(&self, opts: &DiffOptions) -> anyhow::Result<()> {
        let base = SourceDocument::read(&opts.base)?;
        let altered = SourceDocument::read(&opts.altered)?;

        let diff = UnifiedDiff::new(base.lines(), altered.lines())
            .context(opts.context)
            .labels(
                base.path().display().to_string(),
                altered.path().display().to_string(),
            );

        for line in diff.stream() {
            self.print_diff_line(&line)?;
        }

        Ok(())
    }

    fn print_diff_line(&self, line: &DiffLine<String>) -> anyhow::Result<()> {
        let text = line.to_string();
        let text = text.strip_suffix('\n').unwrap_or(&text);

        match line {
            DiffLine::FromFile(_) | DiffLine::ToFile(_) => {
                writeln!(self.writer(), "{}", text.bold())?
            }
            DiffLine::HunkHeader(_) => writeln!(self.writer(), "{}", text.cyan())?,
            DiffLine::Edit(Edit::Delete { .. }) => writeln!(self.writer(), "{}", text.red())?,
            DiffLine::Edit(Edit::Insert { .. }) => writeln!(self.writer(), "{}", text.green())?,
            DiffLine::Edit(Edit::Equal { .. }) => writeln!(self.writer(), "{}", text)?,
        }

        Ok(())
    }
}
