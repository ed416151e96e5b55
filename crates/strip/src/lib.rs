//! Comment stripping for JavaScript and TypeScript source text.
//!
//! Supports:
//! - `//` line comments (the newline is kept)
//! - `/* ... */` block comments (replaced by the newlines they contained)
//! - JSX comment expressions `{/* ... */}` (removed together with their braces)
//! - string, template literal and regex literal preservation (including escapes)
//! - `${ ... }` interpolations, scanned with the same rules as top-level code
//! - TypeScript triple-slash directives (`/// <reference ... />`), kept verbatim
//!
//! Stripping is total: malformed input (unterminated strings, templates,
//! regexes or comments) never fails. The affected span ends at end of line or
//! end of input and a [`Diagnostic`] is recorded in [`Stripped`].

#![warn(missing_docs)]

mod comment;
mod cursor;
mod literal;
mod regex;
mod scanner;
/// Cosmetic post-processing of stripped text.
pub mod tidy;

use std::ops::AddAssign;

use decomment_diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

use crate::scanner::Scanner;

pub use tidy::tidy;

/// Options controlling how comments are stripped.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptions {
    /// Remove the braces around JSX comment expressions (`{/* ... */}`).
    ///
    /// When disabled, such comments are stripped like any other block comment
    /// and the braces stay in place.
    pub jsx_comments: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self { jsx_comments: true }
    }
}

/// Counts of what a scan removed and kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripStats {
    /// `//` comments removed.
    pub line_comments: usize,
    /// `/* */` comments removed, excluding JSX comment expressions.
    pub block_comments: usize,
    /// `{/* */}` JSX comment expressions removed with their braces.
    pub jsx_comments: usize,
    /// Triple-slash directives kept.
    pub directives: usize,
}

impl StripStats {
    /// Total number of comments removed.
    pub fn removed(&self) -> usize {
        self.line_comments + self.block_comments + self.jsx_comments
    }
}

impl AddAssign for StripStats {
    fn add_assign(&mut self, rhs: Self) {
        self.line_comments += rhs.line_comments;
        self.block_comments += rhs.block_comments;
        self.jsx_comments += rhs.jsx_comments;
        self.directives += rhs.directives;
    }
}

/// Result of a scan: the stripped text plus what was found on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// Source text with comments removed.
    pub text: String,
    /// What was removed and kept.
    pub stats: StripStats,
    /// Warnings for malformed spans the scanner had to close early.
    pub diagnostics: Vec<Diagnostic>,
}

/// Strip comments from JavaScript/TypeScript source using default options.
///
/// Comment-like sequences inside strings, template literals and regex
/// literals are preserved, as are triple-slash directives.
#[must_use]
pub fn strip_comments(source: &str) -> String {
    strip_comments_with(source, &StripOptions::default()).text
}

/// Strip comments from JavaScript/TypeScript source.
#[must_use]
pub fn strip_comments_with(source: &str, options: &StripOptions) -> Stripped {
    Scanner::new(source, options).run()
}
