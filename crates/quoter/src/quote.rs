// Quoted-join of whitespace separated words
//
// "cars  class air" -> "cars","class","air"

use crate::config::{EmbeddedQuotes, EmptyInputPolicy, QuoteConfig};
use crate::error::{QuoteError, QuoteResult};
use lexer::{Span, TokenStream, Word};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Quoter {
    config: QuoteConfig,
}

impl Quoter {
    pub fn new(config: QuoteConfig) -> QuoteResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Quote every word of `input` and join them with the separator.
    ///
    /// The input is normalized first (blank runs collapsed, ends trimmed),
    /// then scanned one character at a time: a space closes the current
    /// word and opens the next, the last character closes the list.
    pub fn quote_join(&self, input: &str) -> QuoteResult<String> {
        let words: Vec<Word<'_>> = TokenStream::from(input).collect();
        let normalized = words.iter().map(|w| w.text).collect::<Vec<_>>().join(" ");

        let length = normalized.chars().count();
        if length > self.config.max_input_length {
            warn!(length, max = self.config.max_input_length, "input too long");
            return Err(QuoteError::InputTooLong {
                length,
                max: self.config.max_input_length,
            });
        }

        if words.is_empty() {
            return self.empty_output(input);
        }

        let quote = self.config.quote;
        let last = length - 1;
        let mut current = 0;
        let mut output = Output::new(self.config.max_output_length);

        output.push(quote, &words[current].span)?;
        for (i, c) in normalized.chars().enumerate() {
            let span = &words[current].span;
            if i == last {
                self.push_word_char(&mut output, c, span)?;
                output.push(quote, span)?;
            } else if c == ' ' {
                output.push(quote, span)?;
                output.push(self.config.separator, span)?;
                current += 1;
                output.push(quote, &words[current].span)?;
            } else {
                self.push_word_char(&mut output, c, span)?;
            }
        }

        debug!(words = words.len(), length = output.len, "quoted word list");
        Ok(output.text)
    }

    fn push_word_char(&self, output: &mut Output, c: char, span: &Span) -> QuoteResult<()> {
        if c == self.config.quote && self.config.embedded_quotes == EmbeddedQuotes::Double {
            output.push(c, span)?;
        }
        output.push(c, span)
    }

    fn empty_output(&self, input: &str) -> QuoteResult<String> {
        match self.config.empty_input {
            EmptyInputPolicy::Reject => {
                warn!("input contains no words");
                Err(QuoteError::EmptyInput)
            }
            EmptyInputPolicy::EmptyString => Ok(String::new()),
            EmptyInputPolicy::EmptyQuotes => {
                let mut output = Output::new(self.config.max_output_length);
                let span = 0..input.len();
                output.push(self.config.quote, &span)?;
                output.push(self.config.quote, &span)?;
                Ok(output.text)
            }
        }
    }
}

/// Accumulator that refuses to grow past its limit
struct Output {
    text: String,
    len: usize,
    max: usize,
}

impl Output {
    fn new(max: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            max,
        }
    }

    fn push(&mut self, c: char, span: &Span) -> QuoteResult<()> {
        if self.len + 1 > self.max {
            warn!(max = self.max, "quoted output too long");
            return Err(QuoteError::LengthExceeded {
                length: self.len + 1,
                max: self.max,
                span: span.clone(),
            });
        }
        self.text.push(c);
        self.len += 1;
        Ok(())
    }
}

/// Quote and join with the default configuration
pub fn quote_join(input: &str) -> QuoteResult<String> {
    Quoter::default().quote_join(input)
}

/// Split a quoted list back into its words.
///
/// Undoes `Quoter::quote_join` for the same configuration. Under
/// `EmbeddedQuotes::Verbatim` a word containing the boundary sequence
/// cannot be recovered.
pub fn split_quoted(output: &str, config: &QuoteConfig) -> Vec<String> {
    let quote = config.quote;
    let Some(inner) = output
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
    else {
        return Vec::new();
    };
    if inner.is_empty() {
        return Vec::new();
    }

    if config.embedded_quotes == EmbeddedQuotes::Verbatim {
        return inner.split(config.boundary().as_str()).map(str::to_string).collect();
    }

    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c == quote {
            // Doubled quote inside a word
            if chars.peek() == Some(&quote) {
                chars.next();
                current.push(quote);
                continue;
            }

            // Closing quote, separator, opening quote
            let mut lookahead = chars.clone();
            if lookahead.next() == Some(config.separator) && lookahead.next() == Some(quote) {
                chars = lookahead;
                words.push(std::mem::take(&mut current));
                continue;
            }
        }
        current.push(c);
    }
    words.push(current);

    words
}
