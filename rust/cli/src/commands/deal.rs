//! Deal command handler.
//!
//! Deals one hand at a full table of calling stations, so every card comes
//! out, and prints the hole cards, the board and the showdown.

use crate::commands::{apply_bot_action, resolve_config, write_result};
use crate::error::CliError;
use crate::ui;
use holdem_ai::CallingStation;
use holdem_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
pub fn handle_deal_command(
    seats: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(seats, seed, None)?;
    let mut eng = Engine::with_players(cfg.table_config(), cfg.seats)?;
    eng.start_hand()?;

    let snap = eng.snapshot();
    writeln!(out, "Seed: {}", eng.seed())?;
    if let Some(button) = snap.button {
        writeln!(
            out,
            "Button: seat {}  Blinds: {}/{}",
            button, snap.small_blind, snap.big_blind
        )?;
    }
    for seat in &snap.seats {
        let hole = seat.hole_cards.map(|c| ui::format_cards(&c));
        writeln!(
            out,
            "Seat {} ({}): {}",
            seat.id,
            seat.name,
            hole.as_deref().unwrap_or("-")
        )?;
    }

    let station = CallingStation;
    while let Some(seat) = eng.current_actor() {
        apply_bot_action(&mut eng, &station, seat)?;
    }
    if let Some(result) = eng.last_result() {
        write_result(out, &eng, result)?;
    }
    Ok(())
}
