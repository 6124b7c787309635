//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Single-table no-limit Texas Hold'em: simulate, play and inspect hands"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against bots, entering your actions on stdin (you sit in seat 0)
    Play {
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy for the bot seats
        #[arg(long)]
        ai: Option<String>,
    },
    /// Let bots play N hands and optionally write the history as JSONL
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one hand and print every seat's hole cards and the full board
    Deal {
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rank the best five-card hand out of 5 to 7 cards, e.g. `eval As Kd 10h 9c 2s`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub const NAMES: &'static [&'static str] = &["play", "sim", "deal", "eval", "cfg"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["holdem", "cfg"],
            vec!["holdem", "play"],
            vec!["holdem", "sim", "--hands", "3", "--seats", "4"],
            vec!["holdem", "deal", "--seed", "1"],
            vec!["holdem", "eval", "As", "Ks", "Qs", "Js", "10s"],
        ];
        for args in commands {
            assert!(HoldemCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn sim_requires_hands_and_eval_requires_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "sim"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "eval"]).is_err());
    }

    #[test]
    fn play_defaults_to_one_hand() {
        let cli = HoldemCli::try_parse_from(["holdem", "play", "--ai", "station"]).unwrap();
        match cli.cmd {
            Commands::Play { hands, ai, .. } => {
                assert_eq!(hands, 1);
                assert_eq!(ai.as_deref(), Some("station"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
