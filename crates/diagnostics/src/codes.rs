//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete.

/// A string or character literal reached a newline or end of input before its
/// closing quote.
pub const UNTERMINATED_STRING: &str = "DCM1001";

/// A backtick template literal reached end of input before its closing backtick.
pub const UNTERMINATED_TEMPLATE: &str = "DCM1002";

/// A `${ ... }` interpolation reached end of input before its closing brace.
pub const UNTERMINATED_INTERPOLATION: &str = "DCM1003";

/// A regular expression literal reached a newline or end of input before its
/// closing slash.
pub const UNTERMINATED_REGEX: &str = "DCM1004";

/// A `/* ... */` comment reached end of input before `*/`.
pub const UNTERMINATED_BLOCK_COMMENT: &str = "DCM1005";

/// Every known code paired with its explanation, in ID order.
pub(crate) const EXPLANATIONS: &[(&str, &str)] = &[
    (
        UNTERMINATED_STRING,
        "A quoted string was not closed before the end of its line. The string is treated as \
         ending at the newline and the rest of the file is scanned as code.",
    ),
    (
        UNTERMINATED_TEMPLATE,
        "A template literal was not closed before the end of the input. Everything after the \
         opening backtick was copied verbatim.",
    ),
    (
        UNTERMINATED_INTERPOLATION,
        "A `${` interpolation inside a template literal was never closed by a matching `}`. \
         Comments inside it were still removed.",
    ),
    (
        UNTERMINATED_REGEX,
        "A slash was read as the start of a regular expression literal but no closing slash \
         followed on the same line. The literal is abandoned at the newline; this can also \
         mean a division was misread as a regex.",
    ),
    (
        UNTERMINATED_BLOCK_COMMENT,
        "A block comment has no closing `*/`. Everything from `/*` to the end of the input \
         was removed.",
    ),
];
