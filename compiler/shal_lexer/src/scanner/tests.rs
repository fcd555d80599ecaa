use pretty_assertions::assert_eq;

use super::*;
use crate::{BracketPair, RuleConfig};

/// Helper: scan with the SHAL table and return `(category, text)` pairs.
fn scan(source: &str) -> Vec<(Category, &str)> {
    tokenize_shal(source)
        .map(|t| (t.category, t.text))
        .collect()
}

/// Helper: scan and return categories only.
fn scan_categories(source: &str) -> Vec<Category> {
    tokenize_shal(source).map(|t| t.category).collect()
}

use Category::{
    BracketClose, BracketOpen, Comment, Delimiter, Identifier, Invalid, Keyword, Number, Operator,
    Type, Whitespace,
};

// ─── Scenarios ─────────────────────────────────────────────────

#[test]
fn entity_block() {
    assert_eq!(
        scan("entity foo { set high; }"),
        vec![
            (Type, "entity"),
            (Whitespace, " "),
            (Identifier, "foo"),
            (Whitespace, " "),
            (BracketOpen, "{"),
            (Whitespace, " "),
            (Keyword, "set"),
            (Whitespace, " "),
            (Keyword, "high"),
            (Delimiter, ";"),
            (Whitespace, " "),
            (BracketClose, "}"),
        ]
    );
}

#[test]
fn assignment_statement() {
    assert_eq!(
        scan("x = 42;"),
        vec![
            (Identifier, "x"),
            (Whitespace, " "),
            (Operator, "="),
            (Whitespace, " "),
            (Number, "42"),
            (Delimiter, ";"),
        ]
    );
}

#[test]
fn comment_then_word() {
    assert_eq!(
        scan("// comment\nfoo"),
        vec![
            (Comment, "// comment"),
            (Whitespace, "\n"),
            (Identifier, "foo"),
        ]
    );
}

#[test]
fn lone_invalid_character() {
    assert_eq!(scan("@"), vec![(Invalid, "@")]);
}

#[test]
fn empty_source_yields_nothing() {
    assert!(scan("").is_empty());
}

// ─── Whitespace & Comments ─────────────────────────────────────

#[test]
fn whitespace_run_is_one_token() {
    assert_eq!(scan(" \t\r\n  \n"), vec![(Whitespace, " \t\r\n  \n")]);
}

#[test]
fn comment_excludes_crlf() {
    assert_eq!(
        scan("// note\r\nset"),
        vec![
            (Comment, "// note"),
            (Whitespace, "\r\n"),
            (Keyword, "set"),
        ]
    );
}

#[test]
fn comment_at_eof() {
    assert_eq!(
        scan("toggle // flip it"),
        vec![
            (Keyword, "toggle"),
            (Whitespace, " "),
            (Comment, "// flip it"),
        ]
    );
}

#[test]
fn comment_swallows_rest_of_line() {
    assert_eq!(scan("//{ set; }"), vec![(Comment, "//{ set; }")]);
}

#[test]
fn single_slash_is_invalid() {
    assert_eq!(
        scan("a / b"),
        vec![
            (Identifier, "a"),
            (Whitespace, " "),
            (Invalid, "/"),
            (Whitespace, " "),
            (Identifier, "b"),
        ]
    );
}

// ─── Words ─────────────────────────────────────────────────────

#[test]
fn words_are_classified() {
    assert_eq!(
        scan_categories("if else on redge fedge"),
        vec![
            Keyword, Whitespace, Keyword, Whitespace, Keyword, Whitespace, Keyword, Whitespace,
            Keyword,
        ]
    );
    assert_eq!(
        scan_categories("input output entity"),
        vec![Type, Whitespace, Type, Whitespace, Type]
    );
    assert_eq!(
        scan_categories("a or b and not c"),
        vec![
            Identifier, Whitespace, Operator, Whitespace, Identifier, Whitespace, Operator,
            Whitespace, Operator, Whitespace, Identifier,
        ]
    );
}

#[test]
fn word_with_digits_and_underscores() {
    assert_eq!(scan("clk_1"), vec![(Identifier, "clk_1")]);
    assert_eq!(scan("led2_"), vec![(Identifier, "led2_")]);
}

#[test]
fn keyword_prefix_is_part_of_longer_word() {
    assert_eq!(scan("settle"), vec![(Identifier, "settle")]);
    assert_eq!(scan("is_high"), vec![(Identifier, "is_high")]);
}

#[test]
fn leading_underscore_is_invalid() {
    assert_eq!(scan("_x"), vec![(Invalid, "_"), (Identifier, "x")]);
}

#[test]
fn number_then_word() {
    assert_eq!(scan("12ab"), vec![(Number, "12"), (Identifier, "ab")]);
}

// ─── Punctuation ───────────────────────────────────────────────

#[test]
fn double_equal_is_two_operators() {
    assert_eq!(scan("=="), vec![(Operator, "="), (Operator, "=")]);
}

#[test]
fn unregistered_brackets_are_invalid() {
    assert_eq!(
        scan_categories("()[]"),
        vec![Invalid, Invalid, Invalid, Invalid]
    );
}

#[test]
fn nested_braces() {
    assert_eq!(
        scan_categories("{{}}"),
        vec![BracketOpen, BracketOpen, BracketClose, BracketClose]
    );
}

// ─── Invalid input ─────────────────────────────────────────────

#[test]
fn invalid_is_one_character_at_a_time() {
    assert_eq!(
        scan("@#"),
        vec![(Invalid, "@"), (Invalid, "#")]
    );
}

#[test]
fn multibyte_invalid_keeps_whole_character() {
    assert_eq!(
        scan("\u{00e9}\u{1F600}x"),
        vec![(Invalid, "\u{00e9}"), (Invalid, "\u{1F600}"), (Identifier, "x")]
    );
}

#[test]
fn interior_null_is_invalid() {
    assert_eq!(
        scan("a\0b"),
        vec![(Identifier, "a"), (Invalid, "\0"), (Identifier, "b")]
    );
}

// ─── Offsets ───────────────────────────────────────────────────

#[test]
fn offsets_are_contiguous() {
    let source = "on redge clk { toggle led; }";
    let mut expected_start = 0;
    for token in tokenize_shal(source) {
        assert_eq!(token.start, expected_start);
        assert_eq!(&source[token.range()], token.text);
        assert!(token.len > 0);
        expected_start = token.end();
    }
    assert_eq!(expected_start, source.len());
}

#[test]
fn offset_tracks_cursor() {
    let mut scanner = tokenize_shal("set x;");
    assert_eq!(scanner.offset(), 0);
    scanner.next();
    assert_eq!(scanner.offset(), 3);
    assert!(!scanner.is_finished());
    let rest: Vec<_> = scanner.by_ref().collect();
    assert_eq!(rest.len(), 3);
    assert!(scanner.is_finished());
    assert_eq!(scanner.next(), None);
}

#[test]
fn size_hint_bounds_token_count() {
    let scanner = tokenize_shal("a b");
    assert_eq!(scanner.size_hint(), (1, Some(3)));
    assert_eq!(tokenize_shal("").size_hint(), (0, Some(0)));
}

#[test]
fn early_stop_leaves_rest_unscanned() {
    let mut scanner = tokenize_shal("set high; set low;");
    let first: Vec<_> = scanner.by_ref().take(2).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(scanner.offset(), 4);
}

// ─── Significant tokens ────────────────────────────────────────

#[test]
fn significant_skips_trivia() {
    let categories: Vec<Category> = tokenize_shal("// led\nset led high; // on\n")
        .significant()
        .map(|t| t.category)
        .collect();
    assert_eq!(categories, vec![Keyword, Identifier, Keyword, Delimiter]);
}

// ─── Custom tables ─────────────────────────────────────────────

#[test]
fn reordered_rules_give_same_tokens() {
    let source = "entity e { input a; a = 1; // c\n}";
    let mut reversed = PatternRule::DEFAULT_ORDER;
    reversed.reverse();
    let table = RuleTable::with_rules(&RuleConfig::shal(), &reversed).unwrap();
    let expected: Vec<Token<'_>> = tokenize_shal(source).collect();
    let actual: Vec<Token<'_>> = tokenize(&table, source).collect();
    assert_eq!(actual, expected);
}

#[test]
fn missing_rule_degrades_to_invalid() {
    let rules = [PatternRule::Whitespace, PatternRule::Word];
    let table = RuleTable::with_rules(&RuleConfig::shal(), &rules).unwrap();
    let tokens: Vec<_> = tokenize(&table, "x = 42;")
        .map(|t| (t.category, t.text))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (Identifier, "x"),
            (Whitespace, " "),
            (Invalid, "="),
            (Whitespace, " "),
            (Invalid, "4"),
            (Invalid, "2"),
            (Invalid, ";"),
        ]
    );
}

#[test]
fn extra_bracket_pair() {
    let mut config = RuleConfig::shal();
    config.brackets.push(BracketPair::new('(', ')', "delimiter.parenthesis"));
    let table = RuleTable::from_config(&config).unwrap();
    let categories: Vec<_> = tokenize(&table, "(a)").map(|t| t.category).collect();
    assert_eq!(categories, vec![BracketOpen, Identifier, BracketClose]);
}

#[test]
fn non_ascii_bracket_pair() {
    let mut config = RuleConfig::shal();
    config.brackets.push(BracketPair::new('\u{27E8}', '\u{27E9}', "angle"));
    let table = RuleTable::from_config(&config).unwrap();
    let tokens: Vec<_> = tokenize(&table, "\u{27E8}x\u{27E9}")
        .map(|t| (t.category, t.text))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (BracketOpen, "\u{27E8}"),
            (Identifier, "x"),
            (BracketClose, "\u{27E9}"),
        ]
    );
}

#[test]
fn empty_config_classifies_words_as_identifiers() {
    let table = RuleTable::from_config(&RuleConfig::default()).unwrap();
    let categories: Vec<_> = tokenize(&table, "set {").map(|t| t.category).collect();
    assert_eq!(categories, vec![Identifier, Whitespace, Invalid]);
}

// ─── Property Tests ────────────────────────────────────────────

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    const FRAGMENTS: &[&str] = &[
        "entity", "set", "xor", "=", ";", "{", "}", "//", "/", "\n", "\r\n", " ",
    ];

    /// Sources biased towards SHAL-looking text.
    fn shal_like() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                proptest::sample::select(FRAGMENTS).prop_map(|s| s.to_owned()),
                "[a-z_0-9]{1,6}",
                any::<char>().prop_map(String::from),
            ],
            0..40,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn tokens_reconstruct_source(source in any::<String>()) {
            let rebuilt: String = tokenize_shal(&source).map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn tokens_reconstruct_shal_like_source(source in shal_like()) {
            let rebuilt: String = tokenize_shal(&source).map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn every_step_makes_progress(source in shal_like()) {
            let tokens: Vec<_> = tokenize_shal(&source).collect();
            prop_assert!(tokens.len() <= source.len());
            for token in &tokens {
                prop_assert!(token.len > 0, "empty token {:?}", token);
            }
        }

        #[test]
        fn scanning_is_idempotent(source in shal_like()) {
            let first: Vec<_> = tokenize_shal(&source).collect();
            let second: Vec<_> = tokenize_shal(&source).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn no_two_adjacent_whitespace_tokens(source in shal_like()) {
            let tokens: Vec<_> = tokenize_shal(&source).collect();
            for pair in tokens.windows(2) {
                prop_assert!(
                    !(pair[0].category == Whitespace && pair[1].category == Whitespace),
                    "split whitespace run at {}",
                    pair[1].start
                );
            }
        }
    }
}
