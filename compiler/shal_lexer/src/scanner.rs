//! Rule-driven scanner producing classified tokens.
//!
//! The scanner walks the source left to right. At each position it tries the
//! table's [`PatternRule`]s in priority order; the first rule that matches
//! decides the token. When no rule matches, exactly one character becomes an
//! [`Category::Invalid`] token, so every step consumes at least one byte.
//!
//! # Guarantees
//!
//! - Tokens are contiguous and cover the whole source: concatenating their
//!   `text` reproduces the input.
//! - Every token is non-empty; a source of `n` bytes yields at most `n`
//!   tokens.
//! - The scan never fails. Malformed input degrades to `Invalid` tokens.
//!
//! Scanning is lazy: a caller that stops pulling tokens cancels the scan.

use std::iter::FusedIterator;

use tracing::trace;

use crate::cursor::Cursor;
use crate::{Category, PatternRule, RuleTable, Token};

/// Single-pass scanner over one source buffer.
///
/// Holds a shared reference to the [`RuleTable`] and its own cursor; nothing
/// else is mutable. Restart by constructing a new scanner.
#[derive(Clone, Debug)]
pub struct Scanner<'t, 'src> {
    table: &'t RuleTable,
    cursor: Cursor<'src>,
}

impl<'t, 'src> Scanner<'t, 'src> {
    pub fn new(table: &'t RuleTable, source: &'src str) -> Self {
        Self {
            table,
            cursor: Cursor::new(source),
        }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once the whole source has been scanned.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor.is_eof()
    }

    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Skip whitespace and comment tokens.
    pub fn significant(self) -> Significant<'t, 'src> {
        Significant { inner: self }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let table = self.table;
        let category = table
            .rules()
            .iter()
            .find_map(|&rule| self.try_rule(rule))
            .unwrap_or_else(|| self.invalid());
        debug_assert!(self.cursor.pos() > start, "scanner made no progress");

        let token = Token::new(category, self.cursor.slice_from(start), start);
        trace!(%category, start, len = token.len, "token");
        Some(token)
    }

    /// Try one rule at the current position, advancing only on a match.
    fn try_rule(&mut self, rule: PatternRule) -> Option<Category> {
        let mut probe = self.cursor;
        let category = match rule {
            PatternRule::Whitespace => Self::whitespace(&mut probe),
            PatternRule::LineComment => Self::line_comment(&mut probe),
            PatternRule::Word => self.word(&mut probe),
            PatternRule::Bracket => self.bracket(&mut probe),
            PatternRule::Assignment => Self::single(&mut probe, b'=', Category::Operator),
            PatternRule::Number => Self::number(&mut probe),
            PatternRule::Delimiter => Self::single(&mut probe, b';', Category::Delimiter),
        }?;
        self.cursor = probe;
        Some(category)
    }

    // ─── Trivia ─────────────────────────────────────────────────────

    fn whitespace(cursor: &mut Cursor<'src>) -> Option<Category> {
        (cursor.eat_whitespace() > 0).then_some(Category::Whitespace)
    }

    fn line_comment(cursor: &mut Cursor<'src>) -> Option<Category> {
        if !cursor.starts_with("//") {
            return None;
        }
        cursor.eat_until_line_end();
        Some(Category::Comment)
    }

    // ─── Words ──────────────────────────────────────────────────────

    fn word(&self, cursor: &mut Cursor<'src>) -> Option<Category> {
        if !cursor.current().is_ascii_alphabetic() {
            return None;
        }
        let start = cursor.pos();
        cursor.advance();
        cursor.eat_while(is_word_continue);
        Some(self.table.classify_word(cursor.slice_from(start)))
    }

    // ─── Punctuation ────────────────────────────────────────────────

    fn bracket(&self, cursor: &mut Cursor<'src>) -> Option<Category> {
        let (category, _partner) = self.table.match_bracket(cursor.current_char()?)?;
        cursor.advance_char();
        Some(category)
    }

    /// Single-byte token: advance one byte and emit `category`.
    fn single(cursor: &mut Cursor<'src>, byte: u8, category: Category) -> Option<Category> {
        if cursor.current() != byte {
            return None;
        }
        cursor.advance();
        Some(category)
    }

    // ─── Numbers ────────────────────────────────────────────────────

    fn number(cursor: &mut Cursor<'src>) -> Option<Category> {
        if !cursor.current().is_ascii_digit() {
            return None;
        }
        cursor.eat_while(|b| b.is_ascii_digit());
        Some(Category::Number)
    }

    // ─── Fallback ───────────────────────────────────────────────────

    /// Consume exactly one character as [`Category::Invalid`].
    fn invalid(&mut self) -> Category {
        self.cursor.advance_char();
        Category::Invalid
    }
}

impl<'src> Iterator for Scanner<'_, 'src> {
    type Item = Token<'src>;

    #[inline]
    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.source_len() - self.cursor.pos();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Scanner<'_, '_> {}

/// Iterator over the non-trivia tokens of a [`Scanner`].
///
/// Created by [`Scanner::significant`].
#[derive(Clone, Debug)]
pub struct Significant<'t, 'src> {
    inner: Scanner<'t, 'src>,
}

impl<'src> Iterator for Significant<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.inner.find(|token| !token.is_trivia())
    }
}

impl FusedIterator for Significant<'_, '_> {}

/// Returns `true` for bytes that may continue a word: `[a-zA-Z0-9_]`.
#[inline]
fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Tokenize `source` with `table`.
///
/// Returns a lazy scanner; collect it for a `Vec<Token>`.
pub fn tokenize<'t, 'src>(table: &'t RuleTable, source: &'src str) -> Scanner<'t, 'src> {
    Scanner::new(table, source)
}

/// Tokenize `source` with the built-in SHAL table.
pub fn tokenize_shal(source: &str) -> Scanner<'static, '_> {
    Scanner::new(RuleTable::shal(), source)
}

#[cfg(test)]
mod tests;
