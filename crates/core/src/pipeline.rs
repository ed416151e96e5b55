//! Read → strip → tidy → write, for one file or many.
//!
//! Files are independent, so a batch is processed in parallel. A file is only
//! replaced after its full new text exists: the text goes to a temporary file
//! in the same directory which is then renamed over the original.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use decomment_strip::{Stripped, strip_comments_with, tidy};
use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::config::ProcessOptions;
use crate::error::DecommentError;
use crate::report::{BatchReport, FileReport, Outcome, SkipReason};
use crate::walk::collect_files;

/// Strip comments from `source`, then tidy the result if configured.
pub fn clean_source(source: &str, options: &ProcessOptions) -> Stripped {
    let mut stripped = strip_comments_with(source, &options.strip);
    if options.tidy {
        stripped.text = tidy(&stripped.text);
    }
    stripped
}

/// Process every file under `target`.
pub fn process_path(
    target: &Path,
    options: &ProcessOptions,
) -> Result<BatchReport, DecommentError> {
    let files = collect_files(target, options)?;
    let report = BatchReport {
        files: process_files(&files, options),
    };
    tracing::info!(
        root = %target.display(),
        files = report.files.len(),
        modified = report.modified(),
        failed = report.failed(),
        bytes_removed = report.bytes_removed(),
        dry_run = options.dry_run,
        "finished"
    );
    Ok(report)
}

/// Process files in parallel. Reports come back in the order of `paths`.
pub fn process_files(paths: &[PathBuf], options: &ProcessOptions) -> Vec<FileReport> {
    paths
        .par_iter()
        .map(|path| process_file(path, options))
        .collect()
}

/// Process one file. Failures are captured in the report, never returned.
pub fn process_file(path: &Path, options: &ProcessOptions) -> FileReport {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            tracing::warn!(path = %path.display(), error = %source, "read failed");
            let error = DecommentError::Read {
                path: path.to_path_buf(),
                source,
            };
            return FileReport::new(path.to_path_buf(), Outcome::Failed { error });
        }
    };

    let Ok(original) = String::from_utf8(bytes) else {
        tracing::warn!(path = %path.display(), "skipping file that is not valid UTF-8");
        return FileReport::new(
            path.to_path_buf(),
            Outcome::Skipped {
                reason: SkipReason::NotUtf8,
            },
        );
    };

    let cleaned = clean_source(&original, options);
    let outcome = if cleaned.text == original {
        Outcome::Unchanged
    } else {
        let bytes_removed = original.len().saturating_sub(cleaned.text.len());
        let written = !options.dry_run;
        if written {
            if let Err(source) = write_atomic(path, &cleaned.text) {
                tracing::warn!(path = %path.display(), error = %source, "write failed");
                let error = DecommentError::Write {
                    path: path.to_path_buf(),
                    source,
                };
                return FileReport::new(path.to_path_buf(), Outcome::Failed { error });
            }
        }
        tracing::debug!(path = %path.display(), bytes_removed, written, "stripped comments");
        Outcome::Modified {
            bytes_removed,
            written,
        }
    };

    let mut report = FileReport::new(path.to_path_buf(), outcome);
    report.stats = cleaned.stats;
    for diagnostic in &cleaned.diagnostics {
        tracing::debug!(path = %path.display(), %diagnostic, "scanner diagnostic");
    }
    if options.keep_source.wants(&cleaned.diagnostics) {
        report.source = Some(original);
    }
    report.diagnostics = cleaned.diagnostics;
    report
}

/// Replace `path` with `contents` via a temporary sibling file, keeping the
/// original permissions. Symlinks are resolved so the link itself survives.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceRetention;

    const SOURCE: &str = "// header\nconst a = 1; /* note */\n\n\n\n\nexport default a;   \n";

    #[test]
    fn clean_source_strips_and_tidies() {
        let out = clean_source(SOURCE, &ProcessOptions::default());
        assert_eq!(out.text, "\nconst a = 1;\n\n\nexport default a;\n");
        assert_eq!(out.stats.removed(), 2);
    }

    #[test]
    fn clean_source_without_tidy() {
        let mut options = ProcessOptions::default();
        options.tidy = false;
        let out = clean_source(SOURCE, &options);
        assert_eq!(out.text, "\nconst a = 1; \n\n\n\n\nexport default a;   \n");
    }

    #[test]
    fn rewrites_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.js");
        fs::write(&path, SOURCE).unwrap();

        let report = process_file(&path, &ProcessOptions::default());
        assert!(report.is_modified());
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(after, "\nconst a = 1;\n\n\nexport default a;\n");
        assert_eq!(report.bytes_removed(), SOURCE.len() - after.len());
        assert!(report.source.is_none());

        let again = process_file(&path, &ProcessOptions::default());
        assert!(matches!(again.outcome, Outcome::Unchanged));
    }

    #[test]
    fn dry_run_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, SOURCE).unwrap();

        let mut options = ProcessOptions::default();
        options.dry_run = true;
        let report = process_file(&path, &options);
        assert!(matches!(
            report.outcome,
            Outcome::Modified { written: false, .. }
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
    }

    #[test]
    fn non_utf8_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.js");
        fs::write(&path, [0x2f, 0x2f, 0xff, 0xfe, 0x0a]).unwrap();

        let report = process_file(&path, &ProcessOptions::default());
        assert!(matches!(
            report.outcome,
            Outcome::Skipped {
                reason: SkipReason::NotUtf8
            }
        ));
        assert_eq!(fs::read(&path).unwrap(), [0x2f, 0x2f, 0xff, 0xfe, 0x0a]);
    }

    #[test]
    fn missing_file_is_a_failure_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let report = process_file(&dir.path().join("gone.js"), &ProcessOptions::default());
        assert!(report.is_failed());
    }

    #[test]
    fn diagnostics_keep_source_for_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.js");
        fs::write(&path, "const s = 'open\n/* never closed").unwrap();

        let report = process_file(&path, &ProcessOptions::default());
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(
            report.source.as_deref(),
            Some("const s = 'open\n/* never closed")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "const s = 'open\n");
    }

    #[test]
    fn informational_diagnostics_drop_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.tsx");
        fs::write(&path, "const v = <div>\n  hi\n</div>;\n").unwrap();

        let report = process_file(&path, &ProcessOptions::default());
        assert!(matches!(report.outcome, Outcome::Unchanged));
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.source.is_none());

        let mut options = ProcessOptions::default();
        options.keep_source = SourceRetention::All;
        let report = process_file(&path, &options);
        assert!(report.source.is_some());
    }

    #[test]
    fn never_retention_keeps_diagnostics_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.js");
        fs::write(&path, "let s = 'open\n").unwrap();

        let mut options = ProcessOptions::default();
        options.keep_source = SourceRetention::Never;
        let report = process_file(&path, &options);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.source.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn permissions_survive_rewrite() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.mjs");
        fs::write(&path, SOURCE).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o754)).unwrap();

        process_file(&path, &ProcessOptions::default());
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o754);
    }
}
