// Quoted-Join Tests
//
// The core scan with the default configuration.

use crate::{quote_join, QuoteConfig, Quoter};

fn quoter_with(config: QuoteConfig) -> Quoter {
    Quoter::new(config).unwrap()
}

// ==================== BASIC TESTS ====================

#[test]
fn test_single_word() {
    assert_eq!(quote_join("cars").unwrap(), r#""cars""#);
}

#[test]
fn test_three_words() {
    assert_eq!(quote_join("cars class air").unwrap(), r#""cars","class","air""#);
}

#[test]
fn test_single_char_words() {
    assert_eq!(quote_join("a b c").unwrap(), r#""a","b","c""#);
}

#[test]
fn test_single_char_input() {
    assert_eq!(quote_join("x").unwrap(), r#""x""#);
}

#[test]
fn test_case_is_preserved() {
    assert_eq!(quote_join("Cars CLASS air").unwrap(), r#""Cars","CLASS","air""#);
}

#[test]
fn test_punctuation_inside_words_is_kept() {
    assert_eq!(quote_join("sashelp.cars x,y").unwrap(), r#""sashelp.cars","x,y""#);
}

// ==================== WHITESPACE TESTS ====================

#[test]
fn test_irregular_spacing() {
    assert_eq!(quote_join("  a   b  c ").unwrap(), r#""a","b","c""#);
}

#[test]
fn test_runs_collapse_to_same_output() {
    let spaced = quote_join("cars     class  air").unwrap();
    let single = quote_join("cars class air").unwrap();
    assert_eq!(spaced, single);
}

#[test]
fn test_tabs_and_newlines_separate_words() {
    assert_eq!(quote_join("cars\tclass\nair").unwrap(), r#""cars","class","air""#);
}

#[test]
fn test_leading_and_trailing_blanks_ignored() {
    assert_eq!(quote_join("\n\t cars \t\n").unwrap(), r#""cars""#);
}

// ==================== GENERAL FORM TESTS ====================

#[test]
fn test_output_matches_general_form() {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
    for n in 1..=words.len() {
        let input = words[..n].join(" ");
        let expected = words[..n]
            .iter()
            .map(|w| format!("\"{}\"", w))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(quote_join(&input).unwrap(), expected, "input: {}", input);
    }
}

#[test]
fn test_output_has_no_whitespace() {
    let output = quote_join("  one two   three  ").unwrap();
    assert!(!output.chars().any(char::is_whitespace));
}

#[test]
fn test_duplicate_words_kept_in_order() {
    assert_eq!(quote_join("b a b").unwrap(), r#""b","a","b""#);
}

#[test]
fn test_non_ascii_words() {
    assert_eq!(quote_join("ação  café").unwrap(), r#""ação","café""#);
}

// ==================== CUSTOM DELIMITER TESTS ====================

#[test]
fn test_single_quote_character() {
    let quoter = quoter_with(QuoteConfig {
        quote: '\'',
        ..QuoteConfig::default()
    });
    assert_eq!(quoter.quote_join("cars class").unwrap(), "'cars','class'");
}

#[test]
fn test_custom_separator() {
    let quoter = quoter_with(QuoteConfig {
        separator: ';',
        ..QuoteConfig::default()
    });
    assert_eq!(quoter.quote_join("cars class air").unwrap(), r#""cars";"class";"air""#);
}

#[test]
fn test_quoter_is_reusable() {
    let quoter = Quoter::default();
    assert_eq!(quoter.quote_join("a").unwrap(), r#""a""#);
    assert_eq!(quoter.quote_join("b c").unwrap(), r#""b","c""#);
    assert_eq!(quoter.quote_join("a").unwrap(), r#""a""#);
}
