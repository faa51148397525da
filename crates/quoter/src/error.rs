// Error handling for the quoter
//
// Every failure is local to a single call: the caller gets either a complete
// quoted list or one of these.

use lexer::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// No words left after normalization (only under `EmptyInputPolicy::Reject`)
    #[error("input contains no words")]
    EmptyInput,

    /// Normalized input is longer than `max_input_length`
    #[error("input is {length} characters long, limit is {max}")]
    InputTooLong { length: usize, max: usize },

    /// Quoted output would pass `max_output_length`.
    /// `span` is the byte range of the word being written when the limit was hit.
    #[error("quoted output reaches {length} characters, limit is {max}")]
    LengthExceeded { length: usize, max: usize, span: Span },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QuoteError {
    /// Diagnostic code shown in reports
    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::EmptyInput => "E001",
            QuoteError::InputTooLong { .. } => "E002",
            QuoteError::LengthExceeded { .. } => "E003",
            QuoteError::InvalidConfig(_) => "E004",
        }
    }

    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            QuoteError::EmptyInput => 1,
            QuoteError::InputTooLong { .. } => 2,
            QuoteError::LengthExceeded { .. } => 3,
            QuoteError::InvalidConfig(_) => 4,
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            QuoteError::LengthExceeded { span, .. } => Some(span),
            _ => None,
        }
    }
}

/// Convenient Result type for quoter operations
pub type QuoteResult<T> = Result<T, QuoteError>;
