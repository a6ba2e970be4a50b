//! Writing and checking the generated source file

use std::{
    fs,
    io::ErrorKind,
    path::Path,
};

use log::{debug, info};

use crate::error::{Result, TableError};

/// Write `contents` to `path`, replacing any existing file.
pub fn write_module(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| TableError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Whether the file at `path` already holds exactly `contents`.
///
/// A missing file is stale, not an error.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => {
            let fresh = existing == contents;
            debug!("{} is {}", path.display(), if fresh { "current" } else { "stale" });
            Ok(fresh)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist", path.display());
            Ok(false)
        }
        Err(source) => Err(TableError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
