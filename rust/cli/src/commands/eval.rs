//! Hand evaluation command.
//!
//! Takes 5 to 7 cards in any of the accepted notations (`As`, `10h`, `T♥`)
//! and prints the best five-card hand.

use crate::error::CliError;
use crate::ui;
use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate;
use std::io::Write;

/// Handle the eval command. Cards may be passed as separate arguments or as
/// one space- or comma-separated string.
pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let joined = cards.join(" ");
    let parsed = match parse_cards(&joined) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::InvalidInput(e.to_string()));
        }
    };
    let hand = evaluate(&parsed)?;
    writeln!(out, "Cards: {}", ui::format_cards(&parsed))?;
    writeln!(out, "Best hand: {}", hand)?;
    Ok(())
}
