use crate::domain::error::DiffError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Written after the added lines: one empty line, then `save`.
pub const TRAILER: [&str; 2] = ["\n", "save\n"];

/// Writes `lines` verbatim to `destination` followed by the trailer,
/// creating or truncating the file. Returns the path written once the file
/// has been flushed and closed.
///
/// A failure midway leaves whatever was already written in place.
pub fn write_diff<S: AsRef<str>>(
    lines: &[S],
    destination: impl AsRef<Path>,
) -> Result<PathBuf, DiffError> {
    let destination = destination.as_ref();
    let to_write_error = |e| DiffError::write(destination, e);

    let file = File::create(destination).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(to_write_error)?;
    }
    for line in TRAILER {
        writer.write_all(line.as_bytes()).map_err(to_write_error)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| to_write_error(e.into_error()))?;
    file.sync_all().map_err(to_write_error)?;

    log::info!("wrote {} lines to {}", lines.len(), destination.display());

    Ok(destination.to_path_buf())
}
