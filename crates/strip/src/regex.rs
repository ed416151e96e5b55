//! Regex-literal disambiguation and scanning.
//!
//! Whether `/` starts a regex depends on what came before it. This is the
//! usual lexer heuristic, not a parse: `x++ /y/` and similar cases stay
//! ambiguous and are resolved by the tables below.

use decomment_diagnostics::{Severity, codes};

use crate::cursor::Significant;
use crate::scanner::Scanner;

/// Characters after which `/` opens a regex literal.
const REGEX_PREV_CHARS: &[char] = &[
    '(', ')', '[', ']', '{', '}', ',', ';', ':', '=', '!', '&', '|', '?', '~', '^', '<', '>', '+',
    '-', '*', '%', '\n', '\r',
];

/// Keywords after which `/` opens a regex literal.
const REGEX_PREV_KEYWORDS: &[&str] = &[
    "return",
    "case",
    "throw",
    "in",
    "instanceof",
    "typeof",
    "void",
    "delete",
    "new",
    "else",
    "do",
    "yield",
    "await",
];

impl Significant {
    /// Whether the recent token history allows a regex literal here.
    pub(crate) fn can_start_regex(&self) -> bool {
        REGEX_PREV_CHARS.contains(&self.last_char()) || REGEX_PREV_KEYWORDS.contains(&self.word())
    }
}

/// Whether the character after a `/` can be the first character of a regex
/// body. `/=`, `//`, `/*` and a slash followed by whitespace are operators or
/// comments.
pub(crate) fn opens_literal(next: Option<char>) -> bool {
    !matches!(next, None | Some('=' | '/' | '*' | ' ' | '\t' | '\n'))
}

impl Scanner<'_> {
    /// Copy a regex literal, flags included.
    ///
    /// An unescaped newline before the closing slash abandons the literal
    /// without consuming the newline.
    pub(crate) fn scan_regex(&mut self) {
        let start = self.cursor.pos();
        self.copy();
        let mut in_class = false;

        loop {
            match self.cursor.peek() {
                None => break,
                Some('\\') if self.cursor.peek_at(1).is_some() => self.copy_n(2),
                Some('[') if !in_class => {
                    in_class = true;
                    self.copy();
                }
                Some(']') if in_class => {
                    in_class = false;
                    self.copy();
                }
                Some('/') if !in_class => {
                    self.copy();
                    while self.cursor.peek().is_some_and(char::is_alphabetic) {
                        self.copy();
                    }
                    return;
                }
                Some('\n') => break,
                Some(_) => self.copy(),
            }
        }

        self.report(
            codes::UNTERMINATED_REGEX,
            Severity::Info,
            "regular expression literal is not closed on its line",
            start,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(code: &str) -> Significant {
        let mut sig = Significant::default();
        for ch in code.chars() {
            sig.update(ch);
        }
        sig
    }

    #[test]
    fn start_of_input_allows_regex() {
        assert!(Significant::default().can_start_regex());
    }

    #[test]
    fn operators_allow_regex() {
        for code in ["x = ", "f(", "[1, ", "a && ", "c ? ", "if (ok) ", "{ "] {
            assert!(after(code).can_start_regex(), "expected regex after {code:?}");
        }
    }

    #[test]
    fn every_listed_char_allows_regex() {
        let expected = "()[]{},;:=!&|?~^<>+-*%\n\r";
        for ch in expected.chars() {
            let mut sig = after("x");
            sig.reset_to(ch);
            assert!(sig.can_start_regex(), "expected regex after {ch:?}");
        }
        assert_eq!(REGEX_PREV_CHARS.len(), expected.chars().count());
        for ch in ['.', '"', '\'', '`', '/', '#', '@'] {
            let mut sig = after("x");
            sig.reset_to(ch);
            assert!(!sig.can_start_regex(), "expected division after {ch:?}");
        }
    }

    #[test]
    fn every_listed_keyword_allows_regex() {
        let expected = [
            "return",
            "case",
            "throw",
            "in",
            "instanceof",
            "typeof",
            "void",
            "delete",
            "new",
            "else",
            "do",
            "yield",
            "await",
        ];
        for kw in expected {
            let code = format!("a.{kw} ");
            assert!(after(&code).can_start_regex(), "expected regex after {kw:?}");
            let code = format!("a.{kw}\r\n");
            assert!(after(&code).can_start_regex(), "expected regex after {kw:?} and CRLF");
        }
        assert_eq!(REGEX_PREV_KEYWORDS.len(), expected.len());
        for word in ["x", "returns", "typeOf", "async", "of", "let"] {
            let code = format!("a.{word} ");
            assert!(!after(&code).can_start_regex(), "expected division after {word:?}");
        }
    }

    #[test]
    fn operands_mean_division() {
        for code in ["obj.returned ", "a.b ", "x = $ ", "a. ", "s = \"x\""] {
            assert!(!after(code).can_start_regex(), "expected division after {code:?}");
        }
    }

    #[test]
    fn identifier_keeps_operator_context() {
        // The operand does not replace the `=`; the next-char rule is what
        // keeps `a / b` a division.
        assert!(after("x = a ").can_start_regex());
        assert!(!opens_literal(Some(' ')));
    }

    #[test]
    fn next_char_rules() {
        assert!(opens_literal(Some('a')));
        assert!(opens_literal(Some('[')));
        assert!(opens_literal(Some('\\')));
        assert!(!opens_literal(Some('=')));
        assert!(!opens_literal(Some(' ')));
        assert!(!opens_literal(Some('\t')));
        assert!(!opens_literal(Some('\n')));
        assert!(!opens_literal(Some('/')));
        assert!(!opens_literal(Some('*')));
        assert!(!opens_literal(None));
    }
}
