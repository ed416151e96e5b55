//! Cosmetic cleanup applied after stripping.
//!
//! Removing comments leaves blank lines and trailing spaces behind. [`tidy`]
//! collapses runs of blank lines, trims line ends and normalizes the end of
//! the file. It knows nothing about JavaScript and never looks inside lines.

/// Maximum number of consecutive blank lines kept.
pub const MAX_BLANK_LINES: usize = 2;

/// Collapse runs of more than [`MAX_BLANK_LINES`] blank lines, strip trailing
/// spaces and tabs from every line, and end the text with exactly one line
/// terminator.
///
/// Whitespace-only input becomes the empty string. CRLF line endings are kept;
/// the final terminator is `\r\n` if the text contains any CRLF.
#[must_use]
pub fn tidy(text: &str) -> String {
    let crlf = text.contains("\r\n");
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;

    for (i, line) in text.split('\n').enumerate() {
        let (body, cr) = match line.strip_suffix('\r') {
            Some(body) => (body, "\r"),
            None => (line, ""),
        };

        let body = if body.trim().is_empty() {
            blank_run += 1;
            if blank_run > MAX_BLANK_LINES {
                continue;
            }
            ""
        } else {
            blank_run = 0;
            body.trim_end_matches([' ', '\t'])
        };

        if i > 0 {
            out.push('\n');
        }
        out.push_str(body);
        out.push_str(cr);
    }

    out.truncate(out.trim_end().len());
    if out.is_empty() {
        return out;
    }
    out.push_str(if crlf { "\r\n" } else { "\n" });
    out
}
