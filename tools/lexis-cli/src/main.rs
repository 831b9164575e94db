//! Lexis CLI
//!
//! Tokenizes a file, or standard input, with the demonstration rule set
//! and prints one line per token.

mod config;
mod rules;

use std::collections::BTreeMap;
use std::sync::Once;

use lexis_core::{CategoryRegistry, CharCursor, Cursor, Eof, Stop, Token};

use config::CliConfig;
use rules::Value;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber. Logging stays off unless `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn print_usage() {
    println!("Usage: lexis [options] [file]");
    println!();
    println!("Reads standard input when no file (or '-') is given.");
    println!();
    println!("Options:");
    println!("  --no-text      Omit token text from the listing");
    println!("  -s, --summary  Print token counts per category");
    println!("  -h, --help     Show this help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lexis_core=trace) to log each scan step.");
}

fn main() {
    init_tracing();

    let config = match CliConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run 'lexis --help' for usage.");
            std::process::exit(2);
        }
    };
    if config.help {
        print_usage();
        return;
    }

    let source = match config.read_input() {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let lexer = rules::lexer();
    let registry = lexer.registry();
    let mut counts = BTreeMap::new();
    let mut tokens = lexer.tokens(CharCursor::new(&source), &Eof);

    for token in tokens.by_ref() {
        *counts.entry(token.category()).or_insert(0usize) += 1;
        println!("{}", describe(&token, &registry, config.show_text));
    }

    let stop = tokens.finish();
    tracing::debug!(tokens = counts.values().sum::<usize>(), "listing complete");

    if config.summary {
        println!();
        for (category, count) in &counts {
            println!("{:>12} {count}", category_name(&registry, *category));
        }
    }

    if let Stop::Unmatched(pos) = stop {
        let (line, column) = line_column(&source, pos.offset());
        let found = pos.peek().map_or_else(String::new, |c| format!(" {c:?}"));
        eprintln!("error: no rule matches{found} at line {line}, column {column}");
        std::process::exit(1);
    }
}

fn category_name(registry: &CategoryRegistry, category: usize) -> &'static str {
    registry.get(category).map_or("?", lexis_core::RuleType::short_name)
}

/// One listing line: category, byte span, then text and value if any.
fn describe(
    token: &Token<CharCursor<'_>, Value>,
    registry: &CategoryRegistry,
    show_text: bool,
) -> String {
    use std::fmt::Write;

    let mut line = format!(
        "{:>12} {:>5}..{:<5}",
        category_name(registry, token.category()),
        token.begin().offset(),
        token.end().offset()
    );
    // Writing to a String is infallible
    if show_text {
        let _ = write!(line, " {:?}", token.text());
    }
    let _ = match token.value() {
        Value::Vacant => Ok(()),
        Value::Number(Some(n)) => write!(line, " = {n}"),
        Value::Number(None) => write!(line, " = <overflow>"),
        Value::Keyword(keyword) => write!(line, " = keyword {keyword}"),
        Value::Text(text) => write!(line, " = {text:?}"),
    };
    line
}

/// 1-based line and column (in chars) of a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before, |newline| &before[newline + 1..])
        .chars()
        .count()
        + 1;
    (line, column)
}
