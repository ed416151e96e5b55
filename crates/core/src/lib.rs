//! Decomment core library.
//!
//! Finds JavaScript/TypeScript source files under a path, strips their
//! comments with [`decomment_strip`] and rewrites them in place. The main
//! entry points are [`process_path`] for a whole tree, [`process_file`] for a
//! single file and [`clean_source`] for text already in memory.

#![warn(missing_docs)]

/// Pipeline configuration and defaults.
pub mod config;
/// Pipeline errors.
pub mod error;
/// Reading, stripping and writing files.
pub mod pipeline;
/// Per-file and per-run results.
pub mod report;
/// Source file discovery.
pub mod walk;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use config::{
    DEFAULT_EXTENSIONS, DEFAULT_SKIP_DIRS, ProcessOptions, SourceRetention, normalize_extension,
};
pub use error::DecommentError;
pub use pipeline::{clean_source, process_file, process_files, process_path};
pub use report::{BatchReport, FileReport, Outcome, SkipReason};
pub use walk::collect_files;

// Scanner types, re-exported so callers need only this crate.
pub use decomment_diagnostics::{Diagnostic, Position, Severity, Span, codes};
pub use decomment_strip::{StripOptions, StripStats, Stripped, strip_comments, tidy};
