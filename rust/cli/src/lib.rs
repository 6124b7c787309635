//! # holdem CLI Library
//!
//! Command-line host for the `holdem-engine` table: play against bots,
//! simulate bot sessions into JSONL hand histories, deal and inspect a hand,
//! evaluate cards, and show the resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand, writing to
//! the given streams and returning the process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "As", "Ks", "Qs", "Js", "10s"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against bots from stdin
//! - `sim`: Let bots play N hands, optionally recording them as JSONL
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Rank the best hand out of 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Returns `0` on success and `2` on any error. Help and version output go to
/// `out`; usage errors go to `err` followed by the command list.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            hands,
            seats,
            seed,
            ai,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(hands, seats, seed, ai, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            seats,
            seed,
            ai,
            output,
        } => handle_sim_command(hands, seats, seed, ai, output, out, err),
        Commands::Deal { seats, seed } => handle_deal_command(seats, seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut report = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Hold'em CLI")?;
        writeln!(err, "Usage: holdem <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in Commands::NAMES {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: holdem --help")
    };
    let _ = report();
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["holdem", "--help"]);
        assert_eq!(code, 0);
        for c in Commands::NAMES {
            assert!(out.contains(c), "help should list {}", c);
        }
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands_on_stderr() {
        let (code, out, err) = run_args(&["holdem", "bench"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Commands:"));
        assert!(err.contains("  sim"));
    }

    #[test]
    fn command_errors_exit_with_two() {
        let (code, _, err) = run_args(&["holdem", "eval", "As", "Ks"]);
        assert_eq!(code, 2);
        assert!(err.starts_with("Error: "), "{}", err);
    }
}
