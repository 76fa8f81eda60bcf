//! Fuzz corpus listing.
//!
//! Produces the comma separated list of seed files a fuzzer takes on its
//! command line. Only direct children are considered; subdirectories are
//! skipped, and symlinks count when they resolve to a regular file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ListerConfig;
use crate::error::{DevtoolsError, Result};

/// Return every regular file directly inside `dir`, in directory order.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    debug!(dir = %dir.display(), "listing corpus directory");
    let entries = fs::read_dir(dir).map_err(|e| DevtoolsError::from_io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DevtoolsError::from_io(dir, e))?;
        let path = dir.join(entry.file_name());
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => debug!(path = %path.display(), "skipping non-file entry"),
            Err(err) => debug!(path = %path.display(), %err, "skipping unreadable entry"),
        }
    }
    debug!(count = files.len(), "corpus files found");
    Ok(files)
}

/// Join paths with commas. No paths gives the empty string. Names that are
/// not UTF-8 are replaced lossily and logged at `warn`.
pub fn join_paths<P: AsRef<Path>>(paths: &[P]) -> String {
    paths
        .iter()
        .map(|p| {
            let p = p.as_ref();
            let text = p.to_string_lossy();
            if p.to_str().is_none() {
                warn!(path = ?p, "path is not valid UTF-8; printed form will not resolve");
            }
            text
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// List the configured corpus directory as one comma separated string.
pub fn corpus_csv(config: &ListerConfig) -> Result<String> {
    let mut files = list_files(&config.directory)?;
    if config.sorted {
        files.sort();
    }
    Ok(join_paths(&files))
}
