//! Character cursor over the input and the significant-token tracker used to
//! tell a regex literal from a division.

/// Longest keyword that can precede a regex literal (`instanceof`).
const MAX_KEYWORD_LEN: usize = 10;

/// Forward-only position in the source text. Offsets are in bytes and always
/// sit on a `char` boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn src(&self) -> &'a str {
        self.src
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character `n` positions ahead of the current one.
    pub(crate) fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub(crate) fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Consume one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `len` bytes, clamped to the end of input.
    pub(crate) fn skip_bytes(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.src.len());
    }
}

/// Identifier characters for the keyword heuristic.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Recent token history: the last operator/punctuation character and the
/// identifier run that followed it.
///
/// The word survives whitespace (`return /re/`) while any other non-word
/// character replaces the char and clears the word.
#[derive(Debug, Clone)]
pub(crate) struct Significant {
    last_char: char,
    word: String,
}

impl Default for Significant {
    fn default() -> Self {
        Self {
            last_char: '\n',
            word: String::new(),
        }
    }
}

impl Significant {
    /// Feed one character consumed as ordinary code.
    pub(crate) fn update(&mut self, ch: char) {
        if is_word_char(ch) {
            // Past the longest keyword the exact text no longer matters.
            if self.word.len() <= MAX_KEYWORD_LEN {
                self.word.push(ch);
            }
            return;
        }
        if ch.is_whitespace() {
            return;
        }
        self.last_char = ch;
        self.word.clear();
    }

    /// Forget the current word and treat `ch` as the last significant char.
    pub(crate) fn reset_to(&mut self, ch: char) {
        self.last_char = ch;
        self.word.clear();
    }

    pub(crate) fn clear_word(&mut self) {
        self.word.clear();
    }

    pub(crate) fn last_char(&self) -> char {
        self.last_char
    }

    pub(crate) fn word(&self) -> &str {
        &self.word
    }
}
