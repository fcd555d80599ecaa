//! Byte cursor over a source string.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! of the source return `0x00`, so byte-class predicates terminate at EOF
//! without an explicit bounds check at every call site.
//!
//! # Interior Null Bytes
//!
//! A null byte inside the source also reads as `0x00`. The cursor tells the
//! two apart by comparing `pos` against the source length: a null at
//! `pos < len` is ordinary (invalid) input, a null at `pos >= len` is EOF.

/// Cursor over the bytes of a `&str`.
///
/// The cursor is [`Copy`], so the scanner can snapshot it before trying a
/// rule and restore it when the rule does not match.
///
/// # Invariant
///
/// `pos` only ever lands on UTF-8 character boundaries between calls to
/// the public methods, which is what makes [`slice`](Self::slice) total.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Returns the character at the current position, if any.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance the cursor by one byte.
    ///
    /// Callers only use this on ASCII bytes they have already inspected.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The unscanned remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns `true` if the unscanned remainder starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Extract a source substring.
    ///
    /// `start..end` must lie on character boundaries within the source.
    /// This holds for any pair of positions the cursor has visited.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, and `pred` must only accept ASCII
    /// bytes so the cursor never stops inside a multi-byte character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next line terminator (`\n` or `\r`) or EOF using
    /// SIMD-accelerated search.
    ///
    /// Used by the comment rule: the terminator itself is not consumed, so
    /// a `\r\n` pair is left for the whitespace rule.
    pub fn eat_until_line_end(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past a run of whitespace (space, tab, `\r`, `\n`).
    ///
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_whitespace(&mut self) -> usize {
        let start = self.pos;
        self.eat_while(is_whitespace);
        self.pos - start
    }
}

/// Whitespace bytes recognized by the scanner.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}
