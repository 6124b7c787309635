//! Simulation command handler.
//!
//! Seats one bot per seat and plays `hands` hands back to back. Busted bots
//! buy back in for the starting stack between hands, so the table never
//! breaks up. With `--output`, every hand is appended to a JSONL history
//! that `holdem_engine::logger::read_records` can load again.

use crate::commands::{apply_bot_action, resolve_config, strategy_for};
use crate::error::CliError;
use crate::ui;
use holdem_engine::engine::Engine;
use holdem_engine::logger::HandLogger;
use std::io::Write;

#[derive(Debug, Default)]
struct SimStats {
    hands: u64,
    showdowns: u64,
    uncontested: u64,
    rebuys: u64,
    biggest_pot: u32,
}

/// Handle the sim command.
///
/// # Errors
///
/// `InvalidInput` for zero hands or an unknown strategy, `Engine` for an
/// invalid table, `Io` when the history cannot be written.
pub fn handle_sim_command(
    hands: u64,
    seats: Option<usize>,
    seed: Option<u64>,
    ai: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = resolve_config(seats, seed, ai)?;
    let mut eng = Engine::with_players(cfg.table_config(), cfg.seats)?;
    let bot = strategy_for(&cfg.ai, eng.seed())?;
    let mut logger = output.as_deref().map(HandLogger::create).transpose()?;

    writeln!(
        out,
        "sim: hands={} seats={} seed={} ai={}",
        hands,
        cfg.seats,
        eng.seed(),
        bot.name()
    )?;

    let mut stats = SimStats::default();
    for _ in 0..hands {
        stats.rebuys += rebuy_busted(&mut eng, cfg.starting_stack)?;
        eng.start_hand()?;
        while let Some(seat) = eng.current_actor() {
            apply_bot_action(&mut eng, bot.as_ref(), seat)?;
        }

        if let Some(result) = eng.last_result() {
            stats.hands += 1;
            if result.uncontested {
                stats.uncontested += 1;
            } else {
                stats.showdowns += 1;
            }
            stats.biggest_pot = stats.biggest_pot.max(result.total_paid());
        }
        if let (Some(logger), Some(record)) = (logger.as_mut(), eng.hand_record()) {
            logger.write(record)?;
        }
    }

    writeln!(
        out,
        "Simulated: {} hands (showdowns: {}, uncontested: {}, rebuys: {}, biggest pot: {})",
        stats.hands, stats.showdowns, stats.uncontested, stats.rebuys, stats.biggest_pot
    )?;
    for seat in eng.table().seats() {
        writeln!(out, "Seat {} ({}): {}", seat.id(), seat.name(), seat.stack())?;
    }
    if let Some(path) = output {
        writeln!(out, "Wrote {} hands to {}", stats.hands, path)?;
    }
    Ok(())
}

/// Reseats every bot with an empty stack for `stack` chips.
fn rebuy_busted(eng: &mut Engine, stack: u32) -> Result<u64, CliError> {
    let busted: Vec<(usize, String)> = eng
        .table()
        .seats()
        .filter(|s| s.stack() == 0)
        .map(|s| (s.id(), s.name().to_string()))
        .collect();
    for (id, name) in &busted {
        eng.leave(*id)?;
        eng.sit_with_stack(*id, name.clone(), stack)?;
        tracing::debug!(seat = id, stack, "bot rebought");
    }
    Ok(busted.len() as u64)
}
