// Configuration for the quoter
//
// Limits default to the buffer sizes the quoted-list function was
// historically declared with: 32 767 characters of working text and a
// 200 character return value.

use crate::error::{QuoteError, QuoteResult};
use lexer::is_separator;

pub const DEFAULT_MAX_INPUT_LENGTH: usize = 32_767;
pub const DEFAULT_MAX_OUTPUT_LENGTH: usize = 200;

/// What to produce when the input holds no words at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Fail with `QuoteError::EmptyInput`
    #[default]
    Reject,
    /// Return `""` (zero characters)
    EmptyString,
    /// Return a lone pair of quotes
    EmptyQuotes,
}

/// How quote characters already present inside a word are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddedQuotes {
    /// Double them, SQL style: `a"b` becomes `"a""b"`
    #[default]
    Double,
    /// Copy them unchanged. The result is malformed if a word holds a quote.
    Verbatim,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteConfig {
    /// Maximum characters in the normalized input (default 32 767)
    pub max_input_length: usize,

    /// Maximum characters in the quoted result (default 200)
    pub max_output_length: usize,

    pub empty_input: EmptyInputPolicy,
    pub embedded_quotes: EmbeddedQuotes,

    /// Wraps every word (default `"`)
    pub quote: char,

    /// Sits between two quoted words (default `,`)
    pub separator: char,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            max_output_length: DEFAULT_MAX_OUTPUT_LENGTH,
            empty_input: EmptyInputPolicy::default(),
            embedded_quotes: EmbeddedQuotes::default(),
            quote: '"',
            separator: ',',
        }
    }
}

impl QuoteConfig {
    pub fn validate(&self) -> QuoteResult<()> {
        if self.max_input_length == 0 {
            return Err(QuoteError::InvalidConfig(
                "max_input_length must be at least 1".to_string(),
            ));
        }
        if self.max_output_length == 0 {
            return Err(QuoteError::InvalidConfig(
                "max_output_length must be at least 1".to_string(),
            ));
        }
        if self.quote == self.separator {
            return Err(QuoteError::InvalidConfig(format!(
                "quote and separator are both {:?}",
                self.quote
            )));
        }
        if is_separator(self.quote) || is_separator(self.separator) {
            return Err(QuoteError::InvalidConfig(
                "quote and separator cannot be whitespace".to_string(),
            ));
        }
        Ok(())
    }

    /// Closing quote, separator, opening quote: what goes between two words
    pub fn boundary(&self) -> String {
        [self.quote, self.separator, self.quote].iter().collect()
    }
}

/// Case change applied by the caller after quoting.
///
/// `Quoter::quote_join` never changes case on its own; callers that feed
/// a case-sensitive catalog (upper-cased table names, say) apply this to the
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseTransform {
    #[default]
    Preserve,
    Upper,
    Lower,
}

impl CaseTransform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseTransform::Preserve => text.to_string(),
            CaseTransform::Upper => text.to_uppercase(),
            CaseTransform::Lower => text.to_lowercase(),
        }
    }
}
