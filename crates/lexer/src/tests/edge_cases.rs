// Edge Case Tests
//
// Empty and blank-only inputs, and other boundary conditions.

use crate::{lex, normalize, TokenStream};

// ==================== EMPTY INPUT TESTS ====================

#[test]
fn test_empty_input() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 0, "Empty input should produce no tokens");
}

#[test]
fn test_only_spaces() {
    assert_eq!(lex("     ").len(), 0);
}

#[test]
fn test_only_tabs() {
    assert_eq!(lex("\t\t\t").len(), 0);
}

#[test]
fn test_mixed_whitespace_only() {
    assert_eq!(lex("  \t\n  \r\n  ").len(), 0);
}

#[test]
fn test_empty_stream() {
    assert_eq!(TokenStream::from("").count(), 0);
    assert_eq!(TokenStream::from(" \n ").count(), 0);
}

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t "), "");
}

// ==================== BOUNDARY TESTS ====================

#[test]
fn test_non_breaking_space_is_part_of_word() {
    // Only ASCII blanks separate words
    assert_eq!(lex("a\u{00A0}b").len(), 1);
}

#[test]
fn test_long_word() {
    let long = "x".repeat(10_000);
    let tokens = lex(&long);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text().len(), 10_000);
}

#[test]
fn test_many_words() {
    let input = vec!["w"; 1_000].join("   ");
    assert_eq!(lex(&input).len(), 1_000);
    assert_eq!(normalize(&input), vec!["w"; 1_000].join(" "));
}

#[test]
fn test_lone_quote_is_a_word() {
    assert_eq!(normalize(" \" "), "\"");
}
