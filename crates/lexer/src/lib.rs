pub mod token;

use logos::{Logos, SpannedIter};
use std::ops::Range;
use token::Token;

/// Byte offsets of a word in the raw input
pub type Span = Range<usize>;

/// A word borrowed from the input, with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Lazily yields the words of an input in order.
///
/// Blank runs of any length (including leading and trailing ones) are
/// absorbed by the lexer, so every yielded word is non-empty and contains
/// no separator character.
pub struct TokenStream<'a> {
    source: &'a str,
    inner: SpannedIter<'a, Token>,
}

impl<'a> From<&'a str> for TokenStream<'a> {
    fn from(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source).spanned(),
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        loop {
            let (result, span) = self.inner.next()?;
            if result.is_ok() {
                return Some(Word {
                    text: &self.source[span.clone()],
                    span,
                });
            }
        }
    }
}

/// Tokenize a source string and return a Vec of tokens
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Collapse every blank run to a single space and drop leading/trailing blanks
pub fn normalize(source: &str) -> String {
    let mut normalized = String::with_capacity(source.len());
    for word in TokenStream::from(source) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word.text);
    }
    normalized
}

/// The blank class the lexer skips between words
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

#[cfg(test)]
mod tests;
