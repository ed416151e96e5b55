//! Line comments, block comments (including the JSX `{/* */}` form) and
//! triple-slash directives.

use decomment_diagnostics::{Severity, codes};

use crate::scanner::{Context, Scanner};

const HORIZONTAL_WS: [char; 2] = [' ', '\t'];

/// Directive kinds that make a `///` line meaningful to the compiler.
const DIRECTIVE_MARKERS: &[&str] = &["reference", "amd-module", "amd-dependency"];

/// Whether `rest` starts with a triple-slash directive such as
/// `/// <reference path="..." />`.
pub(crate) fn is_directive(rest: &str) -> bool {
    let Some(after) = rest.strip_prefix("///") else {
        return false;
    };
    let line = after.split('\n').next().unwrap_or_default().trim();
    line.starts_with('<') && DIRECTIVE_MARKERS.iter().any(|m| line.contains(m))
}

impl Scanner<'_> {
    /// Copy a directive line through its newline.
    pub(crate) fn copy_directive(&mut self) {
        let rest = self.cursor.rest();
        let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
        self.copy_bytes(len);
        self.stats.directives += 1;
        self.sig.reset_to('\n');
    }

    /// Drop a `//` comment, keeping the line terminator that ends it.
    pub(crate) fn line_comment(&mut self) {
        let rest = self.cursor.rest();
        let body = rest.find('\n').map_or(rest.len(), |i| {
            // Keep the `\r` of a CRLF terminator with its `\n`.
            if rest[..i].ends_with('\r') { i - 1 } else { i }
        });
        self.cursor.skip_bytes(body);
        if self.cursor.peek() == Some('\r') {
            self.copy();
        }
        if self.cursor.peek() == Some('\n') {
            self.copy();
        }
        self.stats.line_comments += 1;
        self.sig.reset_to('\n');
    }

    /// Drop a `/* */` comment, emitting the newlines it contained.
    ///
    /// At top level a comment written as `{/* ... */}` is a JSX comment
    /// expression: the braces go with it, provided both are only separated
    /// from the comment by horizontal whitespace.
    pub(crate) fn block_comment(&mut self, ctx: Context) {
        let start = self.cursor.pos();
        let rest = self.cursor.rest();
        let close = rest[2..].find("*/").map(|i| i + 2);
        let (body_end, comment_end) = match close {
            Some(i) => (i, i + 2),
            None => (rest.len(), rest.len()),
        };
        let newlines = rest[..body_end].matches('\n').count();

        let jsx = ctx == Context::TopLevel
            && self.options.jsx_comments
            && close.is_some()
            && self.follows_open_brace()
            && rest[comment_end..]
                .trim_start_matches(HORIZONTAL_WS)
                .starts_with('}');

        self.cursor.skip_bytes(comment_end);
        if jsx {
            self.remove_open_brace();
            let after = self.cursor.rest();
            let ws = after.len() - after.trim_start_matches(HORIZONTAL_WS).len();
            self.cursor.skip_bytes(ws + 1);
            self.stats.jsx_comments += 1;
        } else {
            self.stats.block_comments += 1;
        }

        self.out.extend(std::iter::repeat_n('\n', newlines));
        self.sig.clear_word();

        if close.is_none() {
            self.report(
                codes::UNTERMINATED_BLOCK_COMMENT,
                Severity::Warn,
                "block comment is never closed",
                start,
            );
        }
    }

    /// Whether the last non-whitespace character already emitted is `{`.
    fn follows_open_brace(&self) -> bool {
        self.out.trim_end_matches(HORIZONTAL_WS).ends_with('{')
    }

    /// Trim the `{` of a JSX comment expression and the horizontal
    /// whitespace around it from the emitted output.
    fn remove_open_brace(&mut self) {
        let trimmed = self.out.trim_end_matches(HORIZONTAL_WS);
        if let Some(before) = trimmed.strip_suffix('{') {
            let keep = before.trim_end_matches(HORIZONTAL_WS).len();
            self.out.truncate(keep);
        }
    }
}
