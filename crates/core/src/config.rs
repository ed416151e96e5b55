//! Configuration types for the stripping pipeline.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

use decomment_diagnostics::{Diagnostic, Severity};
use decomment_strip::StripOptions;

/// File extensions processed when walking a directory.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs"];

/// Directory names never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "__pycache__",
    ".vscode",
    ".idea",
    "coverage",
];

/// Complete pipeline configuration: which files, and what to do with them.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Lower-cased extensions with a leading dot (e.g. `.tsx`).
    ///
    /// Only consulted when walking a directory; an explicit file target is
    /// always processed.
    pub extensions: BTreeSet<String>,
    /// Directory names pruned from the walk.
    pub skip_dirs: BTreeSet<String>,
    /// Compute results without writing any file.
    pub dry_run: bool,
    /// Run cosmetic cleanup ([`decomment_strip::tidy`]) after stripping.
    pub tidy: bool,
    /// Scanner options.
    pub strip: StripOptions,
    /// When a [`FileReport`](crate::FileReport) keeps the original text for
    /// rendering its diagnostics.
    pub keep_source: SourceRetention,
}

/// Which diagnostics justify holding on to a file's original text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceRetention {
    /// Never keep it.
    Never,
    /// Keep it when a diagnostic is more than informational.
    #[default]
    Warnings,
    /// Keep it for any diagnostic.
    All,
}

impl SourceRetention {
    /// Whether a file with these diagnostics keeps its source.
    pub fn wants(self, diagnostics: &[Diagnostic]) -> bool {
        match self {
            Self::Never => false,
            Self::Warnings => diagnostics.iter().any(|d| d.severity != Severity::Info),
            Self::All => !diagnostics.is_empty(),
        }
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            dry_run: false,
            tidy: true,
            strip: StripOptions::default(),
            keep_source: SourceRetention::default(),
        }
    }
}

impl ProcessOptions {
    /// Replace the extension set. Entries are accepted with or without the
    /// leading dot and in any case.
    pub fn set_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
    }

    /// Whether `path` has one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                self.extensions
                    .contains(&format!(".{}", ext.to_lowercase()))
            })
    }

    /// Whether a directory with this name is pruned from the walk.
    pub fn skips_dir(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.skip_dirs.contains(n))
    }
}

/// Normalize an extension to lower case with a single leading dot.
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim().trim_start_matches('.').to_lowercase())
}
