//! Citygraph - graph traversal CLI for city distance tables
//!
//! Loads a JSON distance table and runs BFS, DFS, or Dijkstra from a start
//! node read on standard input, printing the resulting node sequence.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use citygraph_core::error::{ExitCode as GraphExitCode, GraphError};
use citygraph_core::format::OutputFormat;
use citygraph_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let graph_error = match err.kind() {
                // Help and version are informational, not errors - let clap handle them
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    err.exit()
                }
                _ => GraphError::BadArguments(error_summary(&err.to_string())),
            };

            if argv_requests_json() {
                eprintln!("{}", graph_error.to_json());
            } else {
                eprintln!("error: {}", graph_error);
            }
            return ExitCode::from(graph_error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            tracing::debug!(error_type = e.error_type(), "run_failed");

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Headline of a clap error without its `error: ` prefix, joined with the
/// indented detail lines that follow it (e.g. the missing argument names).
/// Stops at the first blank line, before the usage block.
fn error_summary(message: &str) -> String {
    let mut lines = message.lines();
    let mut summary = lines
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .trim_end()
        .to_string();
    for detail in lines
        .take_while(|line| !line.trim().is_empty())
        .filter(|line| line.starts_with(char::is_whitespace))
    {
        summary.push(' ');
        summary.push_str(detail.trim());
    }
    summary
}

/// `--format json` may be present even when clap failed to parse the rest
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
