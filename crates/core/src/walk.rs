//! Source file discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ProcessOptions;
use crate::error::DecommentError;

/// Resolve `target` to the list of files to process, sorted by path.
///
/// A file target is returned as-is whatever its extension. A directory is
/// walked recursively, pruning [`ProcessOptions::skip_dirs`] and keeping
/// files with a configured extension. Entries that cannot be read are logged
/// and skipped.
pub fn collect_files(
    target: &Path,
    options: &ProcessOptions,
) -> Result<Vec<PathBuf>, DecommentError> {
    let meta = fs::metadata(target).map_err(|err| metadata_error(target, err))?;
    if !meta.is_dir() {
        return Ok(vec![target.to_path_buf()]);
    }

    let walker = WalkDir::new(target).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !(entry.file_type().is_dir() && options.skips_dir(entry.file_name()))
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && options.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(root = %target.display(), count = files.len(), "collected source files");
    Ok(files)
}

/// Only a missing path is `NotFound`; anything else keeps the OS error.
fn metadata_error(target: &Path, err: io::Error) -> DecommentError {
    let path = target.to_path_buf();
    match err.kind() {
        io::ErrorKind::NotFound => DecommentError::NotFound { path },
        _ => DecommentError::Access { path, source: err },
    }
}
