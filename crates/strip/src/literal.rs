//! Quoted strings, template literals and `${ ... }` interpolations.
//!
//! Strings are flat and scanned in one call. Templates nest (a template can
//! hold an interpolation holding another template), so they are driven by the
//! scanner's frame stack one character at a time.

use decomment_diagnostics::{Severity, codes};

use crate::scanner::{Context, Frame, Scanner};

impl Scanner<'_> {
    /// Copy a `'` or `"` string. An unescaped newline ends the string early.
    pub(crate) fn scan_string(&mut self, quote: char) {
        let start = self.cursor.pos();
        self.copy();

        loop {
            match self.cursor.peek() {
                None => break,
                Some('\\') if self.cursor.peek_at(1).is_some() => self.copy_n(2),
                Some(ch) if ch == quote => {
                    self.copy();
                    return;
                }
                Some('\n') => {
                    self.copy();
                    break;
                }
                Some(_) => self.copy(),
            }
        }

        self.report(
            codes::UNTERMINATED_STRING,
            Severity::Warn,
            format!("string literal opened with {quote} is not closed on its line"),
            start,
        );
    }

    /// Copy the opening backtick and enter template-body scanning.
    pub(crate) fn open_template(&mut self) {
        let start = self.cursor.pos();
        self.copy();
        self.frames.push(Frame::Template { start });
    }

    /// One step inside a template body.
    pub(crate) fn template_step(&mut self, ch: char) {
        if ch == '\\' && self.cursor.peek_at(1).is_some() {
            self.copy_n(2);
        } else if ch == '`' {
            self.copy();
            self.frames.pop();
            self.sig.reset_to('`');
        } else if self.cursor.starts_with("${") {
            let start = self.cursor.pos();
            self.copy_n(2);
            self.frames.push(Frame::Interpolation { start, depth: 1 });
        } else {
            self.copy();
        }
    }

    /// One step inside an interpolation. Braces adjust the depth; everything
    /// else goes through the shared code dispatch.
    pub(crate) fn interpolation_step(&mut self, ch: char) {
        let Some(Frame::Interpolation { depth, .. }) = self.frames.last_mut() else {
            return;
        };
        match ch {
            '{' => {
                *depth += 1;
                self.copy();
                self.sig.update('{');
            }
            '}' => {
                *depth -= 1;
                let closed = *depth == 0;
                self.copy();
                self.sig.update('}');
                if closed {
                    self.frames.pop();
                }
            }
            _ => self.code_step(ch, Context::Interpolation),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{StripOptions, strip_comments, strip_comments_with};
    use decomment_diagnostics::codes;

    #[test]
    fn escaped_quote_does_not_close_string() {
        let input = r#"const s = "say \"//hi\"" // gone"#;
        assert_eq!(strip_comments(input), r#"const s = "say \"//hi\"" "#);
    }

    #[test]
    fn single_quotes_may_hold_double_quotes() {
        let input = "const s = '\"/* not */\"';";
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn unterminated_string_ends_at_newline() {
        let input = "const s = 'oops\n// comment\nx();";
        let out = strip_comments_with(input, &StripOptions::default());
        assert_eq!(out.text, "const s = 'oops\n\nx();");
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].id, codes::UNTERMINATED_STRING);
    }

    #[test]
    fn template_text_is_verbatim() {
        let input = "const t = `// not a comment /* nor this */`;";
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn template_escaped_backtick_and_dollar() {
        let input = "const t = `a \\` b \\${ /* kept */ }`;";
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn interpolation_comments_are_removed() {
        assert_eq!(
            strip_comments("`a${ /* drop */ b }c`"),
            "`a${  b }c`"
        );
        assert_eq!(
            strip_comments("`a${ b // drop\n}c`"),
            "`a${ b \n}c`"
        );
    }

    #[test]
    fn interpolation_tracks_nested_braces() {
        let input = "`${ {a: 1}['a'] /* x */ }` // y";
        assert_eq!(strip_comments(input), "`${ {a: 1}['a']  }` ");
    }

    #[test]
    fn nested_templates() {
        let input = "`outer ${ `inner ${ x /* c */ } // text` } end` // tail";
        assert_eq!(
            strip_comments(input),
            "`outer ${ `inner ${ x  } // text` } end` "
        );
    }

    #[test]
    fn regex_inside_interpolation() {
        let input = "`${ s.replace(/\\/\\/x/g, '') }`";
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn block_comment_in_interpolation_keeps_newlines() {
        assert_eq!(strip_comments("`${ a /* 1\n2 */ }`"), "`${ a \n }`");
    }

    #[test]
    fn unterminated_template_reports() {
        let out = strip_comments_with("x = `abc ${ y", &StripOptions::default());
        assert_eq!(out.text, "x = `abc ${ y");
        let ids: Vec<&str> = out.diagnostics.iter().map(|d| &*d.id).collect();
        assert_eq!(
            ids,
            [codes::UNTERMINATED_TEMPLATE, codes::UNTERMINATED_INTERPOLATION]
        );
    }
}
