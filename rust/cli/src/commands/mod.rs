//! Command handler modules for the holdem CLI.
//!
//! Each subcommand lives in its own file and exposes a
//! `handle_COMMAND_command(...) -> Result<(), CliError>` taking its output
//! streams as `&mut dyn Write`. Helpers shared by the table-driving commands
//! (`play`, `sim`, `deal`) are defined here.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use std::io::Write;

use holdem_ai::{Strategy, create_strategy};
use holdem_engine::engine::Engine;
use holdem_engine::game::HandResult;
use holdem_engine::player::{ActionKind, PlayerAction};

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Loads the layered configuration and applies command-line flags on top.
/// A missing seed is replaced by a random one so the run can be reproduced
/// from the printed value.
pub(crate) fn resolve_config(
    seats: Option<usize>,
    seed: Option<u64>,
    ai: Option<String>,
) -> Result<Config, CliError> {
    let mut cfg = config::load_with_sources()?.config;
    if let Some(v) = seats {
        cfg.seats = v;
    }
    if let Some(v) = ai {
        cfg.ai = v;
    }
    cfg.seed = Some(seed.or(cfg.seed).unwrap_or_else(rand::random));
    cfg.table_config().validate()?;
    Ok(cfg)
}

/// Builds the bot strategy; the random bot is seeded from the table seed.
pub(crate) fn strategy_for(name: &str, seed: u64) -> Result<Box<dyn Strategy>, CliError> {
    create_strategy(name, seed).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown ai '{}' (expected one of: {})",
            name,
            holdem_ai::STRATEGY_NAMES.join(", ")
        ))
    })
}

/// Asks `bot` for the current actor's move and applies it. A rejected move is
/// replaced by a check, or a fold when checking is not allowed.
pub(crate) fn apply_bot_action(
    engine: &mut Engine,
    bot: &dyn Strategy,
    seat: usize,
) -> Result<PlayerAction, CliError> {
    let action = bot.decide(&engine.snapshot_for(seat), seat);
    match engine.apply_action(seat, action) {
        Ok(()) => Ok(action),
        Err(e) => {
            tracing::warn!(seat, ?action, error = %e, strategy = bot.name(), "bot action rejected");
            let fallback = if engine.legal_actions(seat).contains(&ActionKind::Check) {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
            engine.apply_action(seat, fallback)?;
            Ok(fallback)
        }
    }
}

/// Prints the board, shown hands and who collected what.
pub(crate) fn write_result(
    out: &mut dyn Write,
    engine: &Engine,
    result: &HandResult,
) -> Result<(), CliError> {
    writeln!(out, "Board: {}", ui::format_cards(&result.board))?;
    for entry in &result.showdown {
        writeln!(
            out,
            "Seat {} shows {}: {}",
            entry.seat,
            ui::format_cards(&entry.hole_cards),
            entry.hand
        )?;
    }
    for seat in result.winners() {
        let name = engine.table().seat(seat).map_or("", |s| s.name());
        let how = if result.uncontested {
            "uncontested".to_string()
        } else {
            result
                .showdown
                .iter()
                .find(|e| e.seat == seat)
                .map_or_else(String::new, |e| format!("with {}", e.hand.category.name()))
        };
        writeln!(
            out,
            "Seat {} ({}) wins {} {}",
            seat,
            name,
            result.won_by(seat),
            how
        )?;
    }
    Ok(())
}
