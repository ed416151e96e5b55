//! Per-file and per-run results.

use std::path::PathBuf;

use decomment_diagnostics::Diagnostic;
use decomment_strip::StripStats;
use serde::{Serialize, Serializer};

use crate::error::DecommentError;

/// Why a file was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file is not valid UTF-8 text.
    NotUtf8,
}

/// What happened to one file.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Stripping changed the text. `written` is false on a dry run.
    Modified {
        /// Bytes saved (zero if cleanup made the file longer).
        bytes_removed: usize,
        /// Whether the new text was persisted.
        written: bool,
    },
    /// Nothing to strip.
    Unchanged,
    /// Not processed.
    Skipped {
        /// Why.
        reason: SkipReason,
    },
    /// Reading or writing failed.
    Failed {
        /// The failure, serialized with its source chain.
        #[serde(serialize_with = "serialize_error")]
        error: DecommentError,
    },
}

fn serialize_error<S: Serializer>(error: &DecommentError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.describe())
}

/// Result of processing one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The file.
    pub path: PathBuf,
    /// What happened.
    #[serde(flatten)]
    pub outcome: Outcome,
    /// What the scanner removed and kept.
    pub stats: StripStats,
    /// Malformed spans found while scanning.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
    /// Original text, retained only when there are diagnostics to render.
    #[serde(skip)]
    pub source: Option<String>,
}

impl FileReport {
    pub(crate) fn new(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            path,
            outcome,
            stats: StripStats::default(),
            diagnostics: Vec::new(),
            source: None,
        }
    }

    /// Whether the file was (or on a dry run, would be) rewritten.
    pub fn is_modified(&self) -> bool {
        matches!(self.outcome, Outcome::Modified { .. })
    }

    /// Whether processing failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Bytes saved, zero unless modified.
    pub fn bytes_removed(&self) -> usize {
        match self.outcome {
            Outcome::Modified { bytes_removed, .. } => bytes_removed,
            _ => 0,
        }
    }
}

/// Results for every file in a run, in path order.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    /// One entry per discovered file.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Number of files modified (or that would be, on a dry run).
    pub fn modified(&self) -> usize {
        self.files.iter().filter(|f| f.is_modified()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.is_failed()).count()
    }

    /// Total bytes saved across modified files.
    pub fn bytes_removed(&self) -> usize {
        self.files.iter().map(FileReport::bytes_removed).sum()
    }

    /// Scanner counts summed over all files.
    pub fn stats(&self) -> StripStats {
        let mut total = StripStats::default();
        for file in &self.files {
            total += file.stats;
        }
        total
    }
}
