//! Lexical categories assigned to tokens.

use std::fmt;

/// The lexical class of a token.
///
/// One byte, `Copy`. Consumers map categories to presentation (a
/// highlighter) or to grammar terminals (a parser); the lexer itself only
/// assigns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// Reserved word: `if`, `else`, `on`, `redge`, `fedge`, `toggle`, `set`,
    /// `high`, `low`.
    Keyword = 0,
    /// Type keyword: `input`, `output`, `entity`.
    Type = 1,
    /// Operator word (`and`, `xor`, ...) or the assignment symbol `=`.
    Operator = 2,
    Identifier = 3,
    /// Run of ASCII decimal digits.
    Number = 4,
    /// Statement delimiter `;`.
    Delimiter = 5,
    BracketOpen = 6,
    BracketClose = 7,
    /// Run of space, tab, `\r` and `\n`.
    Whitespace = 8,
    /// `//` line comment, excluding the line terminator.
    Comment = 9,
    /// A single character no rule matched.
    Invalid = 10,
}

impl Category {
    /// Every category, in discriminant order.
    pub const ALL: [Category; 11] = [
        Category::Keyword,
        Category::Type,
        Category::Operator,
        Category::Identifier,
        Category::Number,
        Category::Delimiter,
        Category::BracketOpen,
        Category::BracketClose,
        Category::Whitespace,
        Category::Comment,
        Category::Invalid,
    ];

    /// Conventional token-class name for editor highlighters.
    ///
    /// These are the class names editor tokenizers (Monarch and friends)
    /// use for the same categories, so a theme written for the language's
    /// editor definition applies unchanged. Both bracket categories map to
    /// the label of the built-in `{`/`}` pair; use
    /// [`RuleTable::bracket_label`](crate::RuleTable::bracket_label) for
    /// custom pairs.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Operator => "operator",
            Category::Identifier => "identifier",
            Category::Number => "number",
            Category::Delimiter => "delimiter",
            Category::BracketOpen | Category::BracketClose => "delimiter.curly",
            Category::Whitespace => "white",
            Category::Comment => "comment",
            Category::Invalid => "invalid",
        }
    }

    /// Whitespace and comments: tokens a parser skips.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Category::Whitespace | Category::Comment)
    }

    #[inline]
    pub const fn is_bracket(self) -> bool {
        matches!(self, Category::BracketOpen | Category::BracketClose)
    }

    /// Categories produced by resolving a word against the rule table.
    #[inline]
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            Category::Keyword | Category::Type | Category::Operator | Category::Identifier
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
