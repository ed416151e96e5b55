//! Diagnostics for malformed JavaScript/TypeScript found while stripping.
//!
//! The scanner never fails. When a string, template, regex or block comment
//! is left open it closes the construct early and records a [`Diagnostic`]
//! saying where and why. Codes live in [`codes`]; [`explain`] turns a code
//! into a longer description.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use std::fmt;

use serde::Serialize;

/// How much a diagnostic matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A construct was cut short; the output around it is a best guess.
    Warn,
    /// A heuristic guess that usually leaves the text untouched, such as a
    /// JSX closing tag read as the start of a regex.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warn => "warn",
            Severity::Info => "info",
        })
    }
}

/// Byte range `[start, end)` in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Offset of the opening delimiter.
    pub start: usize,
    /// Offset where the scanner gave up on the construct.
    pub end: usize,
}

impl Span {
    /// Span from `start` to `end`, widened so it is never inverted.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }
}

/// 1-based line and column (in bytes) of a span start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Byte column within the line, starting at 1.
    pub column: usize,
}

/// Offsets of every line start, for turning byte offsets into positions.
///
/// Built lazily by the scanner on its first diagnostic, so clean input never
/// pays for it.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Index the line starts of `text`.
    pub fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// Position of byte `offset`. Offsets past the end land on the last line.
    pub fn position(&self, offset: usize) -> Position {
        let line = self.starts.partition_point(|&s| s <= offset).max(1) - 1;
        Position {
            line: line + 1,
            column: offset - self.starts[line] + 1,
        }
    }
}

/// One malformed construct found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Code from [`codes`], e.g. `DCM1001`.
    pub id: &'static str,
    /// How much it matters.
    pub severity: Severity,
    /// One-line description.
    pub message: String,
    /// Where the construct starts and where scanning cut it off.
    pub span: Span,
    /// Line and column of `span.start`.
    #[serde(flatten)]
    pub position: Position,
}

impl Diagnostic {
    /// Longer description of this diagnostic's code.
    pub fn explain(&self) -> Option<&'static str> {
        explain(self.id)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}:{}: {}",
            self.severity, self.id, self.position.line, self.position.column, self.message
        )
    }
}

/// Longer description of a diagnostic code, if it is one of ours.
pub fn explain(id: &str) -> Option<&'static str> {
    codes::EXPLANATIONS
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, text)| *text)
}
