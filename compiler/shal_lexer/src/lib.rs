//! Tokenizer for SHAL, a small hardware description language.
//!
//! Turns source text into a lazy, gap-free stream of classified [`Token`]s
//! for highlighters, linters, and parser front-ends. The crate is standalone
//! and has no knowledge of how its output is rendered or parsed.
//!
//! # Architecture
//!
//! - [`RuleTable`]: immutable word sets, bracket pairs, and the ordered
//!   [`PatternRule`] priority list. Built once, shared across threads.
//! - [`Scanner`]: per-buffer iterator that applies a table to a source
//!   string, one token per step.
//!
//! # Example
//!
//! ```
//! use shal_lexer::{tokenize_shal, Category};
//!
//! let categories: Vec<Category> = tokenize_shal("x = 42;").map(|t| t.category).collect();
//! assert_eq!(
//!     categories,
//!     [
//!         Category::Identifier,
//!         Category::Whitespace,
//!         Category::Operator,
//!         Category::Whitespace,
//!         Category::Number,
//!         Category::Delimiter,
//!     ]
//! );
//! ```
//!
//! Tokenization never fails: unrecognized characters become
//! [`Category::Invalid`] tokens. Configuration mistakes are reported once, as
//! [`ConfigError`], when a custom table is built.

mod category;
mod cursor;
mod rule_table;
mod scanner;
mod token;

pub use category::Category;
pub use rule_table::{BracketPair, ConfigError, PatternRule, RuleConfig, RuleTable};
pub use scanner::{tokenize, tokenize_shal, Scanner, Significant};
pub use token::Token;
