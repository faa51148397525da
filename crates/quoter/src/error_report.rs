// Error reporting with Ariadne
//
// Renders a QuoteError against the text that produced it.

use crate::error::QuoteError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use lexer::Span;
use std::io::{self, IsTerminal};
use std::ops::Range;

/// Print a report for `error` to stderr, colored when stderr is a terminal
pub fn report_error(filename: &str, source: &str, error: &QuoteError) -> io::Result<()> {
    let color = io::stderr().is_terminal();
    build_report(filename, source, error, color).eprint((filename, Source::from(source)))
}

/// Render a report for `error` without colors
pub fn render_error(filename: &str, source: &str, error: &QuoteError) -> io::Result<String> {
    let mut buffer = Vec::new();
    build_report(filename, source, error, false)
        .write((filename, Source::from(source)), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn build_report<'a>(
    filename: &'a str,
    source: &str,
    error: &QuoteError,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let whole = char_span(source, &(0..source.len()));
    let offset = error.span().map(|s| char_span(source, s).start).unwrap_or(0);

    let report = Report::build(ReportKind::Error, filename, offset)
        .with_config(Config::default().with_color(color))
        .with_code(error.code())
        .with_message(error.to_string());

    match error {
        QuoteError::EmptyInput => {
            let report = report.with_help("pass at least one word separated by spaces");
            if whole.is_empty() {
                report.finish()
            } else {
                report
                    .with_label(
                        Label::new((filename, whole))
                            .with_message("only blanks here")
                            .with_color(Color::Red),
                    )
                    .finish()
            }
        }

        QuoteError::InputTooLong { max, .. } => report
            .with_label(
                Label::new((filename, whole))
                    .with_message("this input is too long")
                    .with_color(Color::Red),
            )
            .with_help(format!("raise the input limit above {}", max))
            .finish(),

        QuoteError::LengthExceeded { max, span, .. } => report
            .with_label(
                Label::new((filename, char_span(source, span)))
                    .with_message(format!("output passes {} characters while quoting this word", max))
                    .with_color(Color::Red),
            )
            .with_help("raise the output limit or pass fewer words")
            .finish(),

        QuoteError::InvalidConfig(_) => report.finish(),
    }
}

/// Ariadne counts characters, the lexer counts bytes
fn char_span(source: &str, span: &Span) -> Range<usize> {
    let start = source.get(..span.start).map_or(0, |s| s.chars().count());
    let len = source.get(span.clone()).map_or(0, |s| s.chars().count());
    start..start + len
}
