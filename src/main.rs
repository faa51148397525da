use clap::{Parser, ValueEnum};
use quoter::error_report::report_error;
use quoter::{CaseTransform, EmbeddedQuotes, EmptyInputPolicy, QuoteConfig, QuoteError, Quoter};
use std::io::{self, Read};
use std::process;
use tracing::debug;

/// Exit code when the input itself cannot be read
const EXIT_IO: i32 = 5;

/// Quote whitespace separated words as a comma separated list
#[derive(Parser, Debug)]
#[command(name = "inlist", version, about)]
struct Cli {
    /// Words to quote; read from stdin when omitted
    words: Vec<String>,

    /// Maximum characters of normalized input
    #[arg(long, default_value_t = quoter::config::DEFAULT_MAX_INPUT_LENGTH)]
    max_input_length: usize,

    /// Maximum characters of quoted output
    #[arg(long, default_value_t = quoter::config::DEFAULT_MAX_OUTPUT_LENGTH)]
    max_output_length: usize,

    /// What to print when there are no words
    #[arg(long, value_enum, default_value_t = EmptyArg::Reject)]
    empty: EmptyArg,

    /// How quote characters inside a word are written
    #[arg(long, value_enum, default_value_t = EmbeddedArg::Double)]
    embedded_quotes: EmbeddedArg,

    #[arg(long, default_value_t = '"')]
    quote: char,

    #[arg(long, default_value_t = ',')]
    separator: char,

    /// Case change applied to the result
    #[arg(long, value_enum, default_value_t = CaseArg::Preserve)]
    case: CaseArg,

    /// Wrap the result as IN(...)
    #[arg(long)]
    in_clause: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EmptyArg {
    Reject,
    EmptyString,
    EmptyQuotes,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EmbeddedArg {
    Double,
    Verbatim,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CaseArg {
    Preserve,
    Upper,
    Lower,
}

impl Cli {
    fn config(&self) -> QuoteConfig {
        QuoteConfig {
            max_input_length: self.max_input_length,
            max_output_length: self.max_output_length,
            empty_input: match self.empty {
                EmptyArg::Reject => EmptyInputPolicy::Reject,
                EmptyArg::EmptyString => EmptyInputPolicy::EmptyString,
                EmptyArg::EmptyQuotes => EmptyInputPolicy::EmptyQuotes,
            },
            embedded_quotes: match self.embedded_quotes {
                EmbeddedArg::Double => EmbeddedQuotes::Double,
                EmbeddedArg::Verbatim => EmbeddedQuotes::Verbatim,
            },
            quote: self.quote,
            separator: self.separator,
        }
    }

    fn case(&self) -> CaseTransform {
        match self.case {
            CaseArg::Preserve => CaseTransform::Preserve,
            CaseArg::Upper => CaseTransform::Upper,
            CaseArg::Lower => CaseTransform::Lower,
        }
    }

    /// Returns (source name for diagnostics, source text)
    fn read_input(&self) -> io::Result<(&'static str, String)> {
        if self.words.is_empty() {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(("<stdin>", source))
        } else {
            Ok(("<args>", self.words.join(" ")))
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("inlist=warn,quoter=warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(quoter: &Quoter, cli: &Cli, source: &str) -> Result<String, QuoteError> {
    let quoted = cli.case().apply(&quoter.quote_join(source)?);
    if cli.in_clause {
        Ok(format!("IN({})", quoted))
    } else {
        Ok(quoted)
    }
}

fn fail(filename: &str, source: &str, error: &QuoteError) -> ! {
    if report_error(filename, source, error).is_err() {
        eprintln!("error[{}]: {}", error.code(), error);
    }
    process::exit(error.exit_code());
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let (filename, source) = match cli.read_input() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: cannot read input: {}", err);
            process::exit(EXIT_IO);
        }
    };
    debug!(filename, bytes = source.len(), "read input");

    let quoter = match Quoter::new(cli.config()) {
        Ok(quoter) => quoter,
        Err(err) => fail(filename, &source, &err),
    };

    match run(&quoter, &cli, &source) {
        Ok(output) => println!("{}", output),
        Err(err) => fail(filename, &source, &err),
    }
}
