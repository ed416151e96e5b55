//! Top-level dispatch: the scanner state and the loop tying strings,
//! templates, regexes and comments together.

use decomment_diagnostics::{Diagnostic, LineIndex, Severity, Span, codes};

use crate::comment::is_directive;
use crate::cursor::{Cursor, Significant};
use crate::regex::opens_literal;
use crate::{StripOptions, StripStats, Stripped};

/// Where a stretch of code sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    /// Outside any template literal.
    TopLevel,
    /// Inside a `${ ... }` interpolation. Directives and JSX comment
    /// expressions are only recognized at top level.
    Interpolation,
}

/// An open template construct. The innermost one is on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frame {
    /// Inside backticks; `start` is the offset of the opening backtick.
    Template { start: usize },
    /// Inside `${ ... }`; `depth` counts unclosed braces, the `${` included.
    Interpolation { start: usize, depth: u32 },
}

/// Single-pass comment stripper. Owns the output and all lexical state for
/// one input.
pub(crate) struct Scanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) out: String,
    pub(crate) sig: Significant,
    pub(crate) frames: Vec<Frame>,
    pub(crate) stats: StripStats,
    pub(crate) options: &'a StripOptions,
    diagnostics: Vec<Diagnostic>,
    lines: Option<LineIndex>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str, options: &'a StripOptions) -> Self {
        Self {
            cursor: Cursor::new(src),
            out: String::with_capacity(src.len()),
            sig: Significant::default(),
            frames: Vec::new(),
            stats: StripStats::default(),
            options,
            diagnostics: Vec::new(),
            lines: None,
        }
    }

    pub(crate) fn run(mut self) -> Stripped {
        while let Some(ch) = self.cursor.peek() {
            match self.frames.last().copied() {
                None => self.code_step(ch, Context::TopLevel),
                Some(Frame::Template { .. }) => self.template_step(ch),
                Some(Frame::Interpolation { .. }) => self.interpolation_step(ch),
            }
        }

        let open = std::mem::take(&mut self.frames);
        for frame in open {
            match frame {
                Frame::Template { start } => self.report(
                    codes::UNTERMINATED_TEMPLATE,
                    Severity::Warn,
                    "template literal is never closed",
                    start,
                ),
                Frame::Interpolation { start, .. } => self.report(
                    codes::UNTERMINATED_INTERPOLATION,
                    Severity::Warn,
                    "template interpolation is never closed",
                    start,
                ),
            }
        }

        Stripped {
            text: self.out,
            stats: self.stats,
            diagnostics: self.diagnostics,
        }
    }

    /// Dispatch one construct of ordinary code starting at `ch`.
    pub(crate) fn code_step(&mut self, ch: char, ctx: Context) {
        match ch {
            '"' | '\'' => {
                self.scan_string(ch);
                self.sig.reset_to(ch);
            }
            '`' => self.open_template(),
            '/' => self.slash(ctx),
            _ => {
                self.copy();
                self.sig.update(ch);
            }
        }
    }

    fn slash(&mut self, ctx: Context) {
        if ctx == Context::TopLevel && is_directive(self.cursor.rest()) {
            self.copy_directive();
        } else if self.cursor.starts_with("//") {
            self.line_comment();
        } else if self.cursor.starts_with("/*") {
            self.block_comment(ctx);
        } else if self.sig.can_start_regex() && opens_literal(self.cursor.peek_at(1)) {
            self.scan_regex();
            self.sig.reset_to('/');
        } else {
            self.copy();
            self.sig.update('/');
        }
    }

    /// Move one character from the input to the output.
    pub(crate) fn copy(&mut self) {
        if let Some(ch) = self.cursor.bump() {
            self.out.push(ch);
        }
    }

    pub(crate) fn copy_n(&mut self, n: usize) {
        for _ in 0..n {
            self.copy();
        }
    }

    /// Move `len` bytes verbatim. `len` must end on a char boundary.
    pub(crate) fn copy_bytes(&mut self, len: usize) {
        let rest = self.cursor.rest();
        let len = len.min(rest.len());
        self.out.push_str(&rest[..len]);
        self.cursor.skip_bytes(len);
    }

    /// Record a malformed span running from `start` to the cursor.
    pub(crate) fn report(
        &mut self,
        id: &'static str,
        severity: Severity,
        message: impl Into<String>,
        start: usize,
    ) {
        let src = self.cursor.src();
        let position = self
            .lines
            .get_or_insert_with(|| LineIndex::new(src))
            .position(start);
        self.diagnostics.push(Diagnostic {
            id,
            severity,
            message: message.into(),
            span: Span::new(start, self.cursor.pos()),
            position,
        });
    }
}
