use crate::domain::diff::unified::UnifiedDiff;
use crate::domain::document::SourceDocument;
use crate::domain::error::DiffError;
use std::path::Path;

/// Lines of the unified diff stream that start with `+` but not `+++`, in
/// stream order, marker stripped and original terminator kept.
///
/// The `+++` test drops the file header, and with it any added line whose
/// text itself starts with `++`.
pub fn additions(base: &[String], altered: &[String]) -> Vec<String> {
    UnifiedDiff::new(base, altered)
        .stream()
        .iter()
        .map(ToString::to_string)
        .filter(|line| line.starts_with('+') && !line.starts_with("+++"))
        .map(|line| line[1..].to_string())
        .collect()
}

/// Reads both files and returns the lines added in `altered_path`.
///
/// Both documents are read before diffing; if either cannot be read the
/// error names the offending path.
pub fn extract_additions(
    base_path: impl AsRef<Path>,
    altered_path: impl AsRef<Path>,
) -> Result<Vec<String>, DiffError> {
    let base = SourceDocument::read(base_path)?;
    let altered = SourceDocument::read(altered_path)?;

    let added = additions(base.lines(), altered.lines());
    log::info!(
        "{} lines added between {} and {}",
        added.len(),
        base.path().display(),
        altered.path().display()
    );

    Ok(added)
}
