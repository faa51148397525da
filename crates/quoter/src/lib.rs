//! Turns a freeform list of words into a quoted, comma separated list
//! ready to drop inside a SQL `IN(...)` predicate.

pub mod config;
pub mod error;
pub mod error_report;
pub mod quote;

pub use config::{CaseTransform, EmbeddedQuotes, EmptyInputPolicy, QuoteConfig};
pub use error::{QuoteError, QuoteResult};
pub use quote::{quote_join, split_quoted, Quoter};

#[cfg(test)]
mod tests;
