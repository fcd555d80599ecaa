//! Classified, positioned spans of source text.

use std::ops::Range;

use crate::Category;

/// A token produced by the [`Scanner`](crate::Scanner).
///
/// `text` borrows the source buffer, so a token outlives the scanner that
/// produced it but not the source. Offsets are in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub category: Category,
    pub text: &'src str,
    /// Byte offset of the first byte of `text` in the source.
    pub start: usize,
    /// Byte length of `text`. Never zero for scanner-produced tokens.
    pub len: usize,
}

impl<'src> Token<'src> {
    pub fn new(category: Category, text: &'src str, start: usize) -> Self {
        Self {
            category,
            text,
            start,
            len: text.len(),
        }
    }

    /// Byte offset one past the last byte of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The token's byte range in the source.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.category.is_trivia()
    }
}
