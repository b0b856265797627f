//! Gomoku brain process
//!
//! Speaks the piskvork protocol on stdin/stdout. Logs go to stderr so they
//! never mix with protocol replies.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use gomoku::protocol::{Reader, Writer};
use gomoku::{Outcome, Protocol, ProtocolConfig, MAX_BOARD_SIZE, SIZE_CEILING};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status after a fatal protocol error
const EXIT_PROTOCOL_VIOLATION: u8 = 84;

#[derive(Parser, Debug)]
#[command(name = "pbrain-gomoku-ai", version, about = "Gomoku brain for piskvork managers", long_about = None)]
struct Args {
    /// Tracing filter directive; falls back to RUST_LOG, then "warn"
    #[arg(long)]
    log_filter: Option<String>,

    /// Largest board size accepted by START
    #[arg(
        long,
        default_value_t = MAX_BOARD_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=SIZE_CEILING as u64)
    )]
    max_board_size: usize,
}

fn initialize_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    initialize_tracing(args.log_filter.as_deref());

    let config = ProtocolConfig {
        max_board_size: args.max_board_size,
    };
    info!(?config, "brain ready");

    let mut protocol = Protocol::new(config);
    let mut source = Reader::new(io::stdin().lock());
    let mut sink = Writer::new(io::stdout().lock());

    let outcome = protocol
        .run(&mut source, &mut sink)
        .context("protocol stream failed")?;
    info!(?outcome, "session over");

    Ok(ExitCode::from(exit_status(outcome)))
}

/// Process exit status for the way a session ended
fn exit_status(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Ended | Outcome::EndOfInput => 0,
        Outcome::Aborted => EXIT_PROTOCOL_VIOLATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(Outcome::Ended), 0);
        assert_eq!(exit_status(Outcome::EndOfInput), 0);
        assert_eq!(exit_status(Outcome::Aborted), 84);
    }

    #[test]
    fn test_max_board_size_flag_is_bounded() {
        let args = Args::try_parse_from(["pbrain-gomoku-ai", "--max-board-size", "40"]).unwrap();
        assert_eq!(args.max_board_size, 40);
        assert_eq!(Args::try_parse_from(["pbrain-gomoku-ai"]).unwrap().max_board_size, MAX_BOARD_SIZE);

        assert!(Args::try_parse_from(["pbrain-gomoku-ai", "--max-board-size", "0"]).is_err());
        assert!(Args::try_parse_from(["pbrain-gomoku-ai", "--max-board-size", "1001"]).is_err());
    }
}
