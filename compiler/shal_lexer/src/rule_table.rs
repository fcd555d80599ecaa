//! Static classification configuration for the scanner.
//!
//! A [`RuleTable`] holds the word sets, bracket pairs, and the ordered list of
//! pattern rules. It is built once, validated at construction, and shared
//! read-only by any number of scanners (it is `Send + Sync`).
//!
//! # Word Resolution
//!
//! A scanned word is resolved by an ordered predicate chain: keyword, then
//! type keyword, then operator word, else identifier. Word sets are meant to
//! be disjoint; when they are not, the earlier set wins and construction
//! logs a warning.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::cursor::is_whitespace;
use crate::Category;

/// A pattern rule the scanner tries at each position.
///
/// Rules are tried in table order and the first one that matches wins, so
/// the order of [`RuleTable::rules`] is a priority list, not a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternRule {
    /// Longest run of space, tab, `\r`, `\n` → [`Category::Whitespace`].
    Whitespace,
    /// `//` up to the line terminator → [`Category::Comment`].
    LineComment,
    /// `[a-zA-Z][a-zA-Z0-9_]*`, resolved via [`RuleTable::classify_word`].
    Word,
    /// A registered bracket character → `BracketOpen` / `BracketClose`.
    Bracket,
    /// `=` → [`Category::Operator`].
    Assignment,
    /// `[0-9]+` → [`Category::Number`].
    Number,
    /// `;` → [`Category::Delimiter`].
    Delimiter,
}

impl PatternRule {
    /// The SHAL rule order.
    ///
    /// The start chars of these rules are disjoint, so reordering them does
    /// not change the output today. Extensions must not rely on that.
    pub const DEFAULT_ORDER: [PatternRule; 7] = [
        PatternRule::Whitespace,
        PatternRule::LineComment,
        PatternRule::Word,
        PatternRule::Bracket,
        PatternRule::Assignment,
        PatternRule::Number,
        PatternRule::Delimiter,
    ];

    /// Returns `true` if a match of this rule can consume `ch`.
    ///
    /// Covers the whole match, not only its first char: a Word also claims
    /// `[0-9_]`. A line comment claims only its `/` prefix. [`PatternRule::Bracket`]
    /// depends on the table's pairs and claims nothing here.
    pub fn claims(self, ch: char) -> bool {
        let Ok(b) = u8::try_from(ch) else {
            return false;
        };
        match self {
            PatternRule::Whitespace => is_whitespace(b),
            PatternRule::LineComment => b == b'/',
            PatternRule::Word => b.is_ascii_alphanumeric() || b == b'_',
            PatternRule::Bracket => false,
            PatternRule::Assignment => b == b'=',
            PatternRule::Number => b.is_ascii_digit(),
            PatternRule::Delimiter => b == b';',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternRule::Whitespace => "whitespace",
            PatternRule::LineComment => "line comment",
            PatternRule::Word => "word",
            PatternRule::Bracket => "bracket",
            PatternRule::Assignment => "assignment",
            PatternRule::Number => "number",
            PatternRule::Delimiter => "delimiter",
        }
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An open/close bracket pair with its highlighter label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
    pub label: String,
}

impl BracketPair {
    pub fn new(open: char, close: char, label: impl Into<String>) -> Self {
        Self {
            open,
            close,
            label: label.into(),
        }
    }
}

/// The configuration surface of a [`RuleTable`].
///
/// Plain data, so a host can persist and load language definitions in any
/// `serde` format. An empty word list degrades that category to
/// [`Category::Identifier`]; an empty bracket list degrades brackets to
/// [`Category::Invalid`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub keywords: Vec<String>,
    pub type_keywords: Vec<String>,
    pub operator_words: Vec<String>,
    pub brackets: Vec<BracketPair>,
}

impl RuleConfig {
    /// The SHAL language definition.
    pub fn shal() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| (*w).to_owned()).collect()
        }

        Self {
            keywords: words(&[
                "if", "else", "on", "redge", "fedge", "toggle", "set", "high", "low",
            ]),
            type_keywords: words(&["input", "output", "entity"]),
            operator_words: words(&["or", "and", "is", "was", "xor", "not"]),
            brackets: vec![BracketPair::new('{', '}', "delimiter.curly")],
        }
    }
}

/// Configuration errors, reported when a table is built.
///
/// A scan never fails; everything that could make a table unusable is
/// caught here instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rule table has no pattern rules")]
    EmptyRules,
    #[error("pattern rule `{0}` is listed more than once")]
    DuplicateRule(PatternRule),
    #[error("`{word}` is not a word (expected [a-zA-Z][a-zA-Z0-9_]*)")]
    InvalidWord { word: String },
    #[error("bracket character {ch:?} is already matched by the {rule} rule")]
    InvalidBracket { ch: char, rule: PatternRule },
    #[error("bracket character {ch:?} is registered more than once")]
    DuplicateBracket { ch: char },
}

/// Immutable classification configuration shared by scanners.
#[derive(Clone, Debug)]
pub struct RuleTable {
    keywords: FxHashSet<Box<str>>,
    type_keywords: FxHashSet<Box<str>>,
    operator_words: FxHashSet<Box<str>>,
    brackets: SmallVec<[BracketPair; 2]>,
    rules: SmallVec<[PatternRule; 8]>,
}

impl RuleTable {
    /// The built-in SHAL table, built on first use.
    pub fn shal() -> &'static RuleTable {
        static SHAL: OnceLock<RuleTable> = OnceLock::new();
        SHAL.get_or_init(|| Self::build(&RuleConfig::shal(), &PatternRule::DEFAULT_ORDER))
    }

    /// Build a table with the default rule order.
    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        Self::with_rules(config, &PatternRule::DEFAULT_ORDER)
    }

    /// Build a table with a custom rule priority order.
    pub fn with_rules(config: &RuleConfig, rules: &[PatternRule]) -> Result<Self, ConfigError> {
        validate(config, rules)?;
        Ok(Self::build(config, rules))
    }

    fn build(config: &RuleConfig, rules: &[PatternRule]) -> Self {
        let table = Self {
            keywords: word_set(&config.keywords),
            type_keywords: word_set(&config.type_keywords),
            operator_words: word_set(&config.operator_words),
            brackets: config.brackets.iter().cloned().collect(),
            rules: rules.iter().copied().collect(),
        };
        table.warn_on_overlap();
        debug!(
            keywords = table.keywords.len(),
            type_keywords = table.type_keywords.len(),
            operator_words = table.operator_words.len(),
            brackets = table.brackets.len(),
            rules = table.rules.len(),
            "rule table built"
        );
        table
    }

    /// Resolve a word to its category.
    ///
    /// Keyword beats type beats operator; anything else is an identifier.
    /// This order is part of the contract.
    pub fn classify_word(&self, word: &str) -> Category {
        if self.keywords.contains(word) {
            Category::Keyword
        } else if self.type_keywords.contains(word) {
            Category::Type
        } else if self.operator_words.contains(word) {
            Category::Operator
        } else {
            Category::Identifier
        }
    }

    /// Look up a bracket character.
    ///
    /// Returns the bracket category and the partner character: the closing
    /// char for an opener, the opening char for a closer.
    pub fn match_bracket(&self, ch: char) -> Option<(Category, char)> {
        self.brackets.iter().find_map(|pair| {
            if pair.open == ch {
                Some((Category::BracketOpen, pair.close))
            } else if pair.close == ch {
                Some((Category::BracketClose, pair.open))
            } else {
                None
            }
        })
    }

    /// The highlighter label of the pair `ch` belongs to.
    pub fn bracket_label(&self, ch: char) -> Option<&str> {
        self.brackets
            .iter()
            .find(|pair| pair.open == ch || pair.close == ch)
            .map(|pair| pair.label.as_str())
    }

    /// Pattern rules in priority order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn brackets(&self) -> &[BracketPair] {
        &self.brackets
    }

    fn warn_on_overlap(&self) {
        let ordered = [
            (&self.keywords, Category::Keyword),
            (&self.type_keywords, Category::Type),
            (&self.operator_words, Category::Operator),
        ];
        for (i, (later, shadowed)) in ordered.iter().enumerate() {
            for word in later.iter() {
                if let Some((_, winner)) = ordered[..i].iter().find(|(set, _)| set.contains(word)) {
                    warn!(
                        word = &**word,
                        %winner,
                        %shadowed,
                        "word listed in more than one category"
                    );
                }
            }
        }
    }
}

fn word_set(words: &[String]) -> FxHashSet<Box<str>> {
    words.iter().map(|w| Box::from(w.as_str())).collect()
}

/// Returns `true` if `text` is a complete Word: `[a-zA-Z][a-zA-Z0-9_]*`.
pub(crate) fn is_word(text: &str) -> bool {
    let mut bytes = text.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn validate(config: &RuleConfig, rules: &[PatternRule]) -> Result<(), ConfigError> {
    if rules.is_empty() {
        return Err(ConfigError::EmptyRules);
    }
    for (i, rule) in rules.iter().enumerate() {
        if rules[..i].contains(rule) {
            return Err(ConfigError::DuplicateRule(*rule));
        }
    }

    let mut words = config
        .keywords
        .iter()
        .chain(&config.type_keywords)
        .chain(&config.operator_words);
    if let Some(word) = words.find(|w| !is_word(w)) {
        return Err(ConfigError::InvalidWord { word: word.clone() });
    }

    let mut seen = FxHashSet::default();
    for ch in config.brackets.iter().flat_map(|p| [p.open, p.close]) {
        if let Some(rule) = rules.iter().copied().find(|r| r.claims(ch)) {
            return Err(ConfigError::InvalidBracket { ch, rule });
        }
        if !seen.insert(ch) {
            return Err(ConfigError::DuplicateBracket { ch });
        }
    }
    Ok(())
}
