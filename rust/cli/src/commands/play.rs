//! # Play Command
//!
//! Interactive hold'em against bots. The human sits in seat 0 and types one
//! action per line: `fold`, `check`, `call`, `bet N`, `raise N` (raise to a
//! street total of N), `allin` or `quit`. Rejected actions are reported and
//! the prompt is repeated; end of input counts as `quit`.

use crate::commands::{apply_bot_action, resolve_config, strategy_for, write_result};
use crate::error::CliError;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::Strategy;
use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::game::Street;
use holdem_engine::player::ActionKind;
use std::io::{BufRead, Write};

pub const HUMAN_SEAT: usize = 0;

/// Handle the play command: up to `hands` hands, stopping early on `quit`,
/// when the human is broke, or when nobody is left to play against.
pub fn handle_play_command(
    hands: u32,
    seats: Option<usize>,
    seed: Option<u64>,
    ai: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = resolve_config(seats, seed, ai)?;
    let mut eng = Engine::new(cfg.table_config())?;
    eng.sit(HUMAN_SEAT, "You")?;
    for id in 1..cfg.seats {
        eng.sit(id, format!("Bot {}", id))?;
    }
    let bot = strategy_for(&cfg.ai, eng.seed())?;

    writeln!(
        out,
        "play: seats={} hands={} seed={} ai={}",
        cfg.seats,
        hands,
        eng.seed(),
        bot.name()
    )?;

    let mut played = 0u32;
    for _ in 0..hands {
        if stack_of(&eng, HUMAN_SEAT) == 0 {
            writeln!(out, "You are out of chips.")?;
            break;
        }
        match eng.start_hand() {
            Ok(()) => {}
            Err(GameError::InsufficientPlayers { .. }) => {
                writeln!(out, "No opponents left with chips.")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        if !play_hand(&mut eng, bot.as_ref(), out, err, stdin)? {
            writeln!(out, "Quit.")?;
            break;
        }
        played += 1;
    }

    writeln!(
        out,
        "Hands played: {}  Your stack: {}",
        played,
        stack_of(&eng, HUMAN_SEAT)
    )?;
    Ok(())
}

fn stack_of(eng: &Engine, seat: usize) -> u32 {
    eng.table().seat(seat).map_or(0, |s| s.stack())
}

/// Plays the current hand to the end. Returns `false` if the human quit.
fn play_hand(
    eng: &mut Engine,
    bot: &dyn Strategy,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    let view = eng.snapshot_for(HUMAN_SEAT);
    writeln!(
        out,
        "\nHand {}  Button: seat {}  Blinds: {}/{}",
        view.hand_no,
        view.button.map_or_else(|| "-".to_string(), |b| b.to_string()),
        view.small_blind,
        view.big_blind
    )?;
    if let Some(cards) = view.seat(HUMAN_SEAT).and_then(|s| s.hole_cards) {
        writeln!(out, "Your cards: {}", ui::format_cards(&cards))?;
    }

    let mut street = Street::Preflop;
    while let Some(seat) = eng.current_actor() {
        if let Some(now) = eng.street()
            && now != street
        {
            street = now;
            writeln!(out, "--- {:?}: {} ---", street, ui::format_cards(eng.board()))?;
        }

        if seat != HUMAN_SEAT {
            let action = apply_bot_action(eng, bot, seat)?;
            writeln!(out, "Seat {}: {}", seat, ui::format_action(&action))?;
            continue;
        }

        write_prompt(eng, out)?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match parse_player_action(&line) {
            ParseResult::Action(action) => match eng.apply_action(HUMAN_SEAT, action) {
                Ok(()) => writeln!(out, "You: {}", ui::format_action(&action))?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    if let Some(result) = eng.last_result() {
        write_result(out, eng, result)?;
    }
    Ok(true)
}

fn write_prompt(eng: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let legal = eng.legal_actions(HUMAN_SEAT);
    let mut options: Vec<String> = Vec::new();
    for kind in &legal {
        let option = match kind {
            ActionKind::Fold => "fold".to_string(),
            ActionKind::Check => "check".to_string(),
            ActionKind::Call => format!("call {}", eng.to_call(HUMAN_SEAT)),
            ActionKind::Bet => match eng.min_raise_to(HUMAN_SEAT) {
                Some(min) => format!("bet >={}", min),
                None => "bet N".to_string(),
            },
            ActionKind::Raise => match eng.min_raise_to(HUMAN_SEAT) {
                Some(min) => format!("raise >={}", min),
                None => "raise N".to_string(),
            },
            ActionKind::AllIn => "allin".to_string(),
        };
        options.push(option);
    }
    writeln!(
        out,
        "Pot: {}  Stack: {}",
        eng.pots().total(),
        stack_of(eng, HUMAN_SEAT)
    )?;
    write!(out, "Your action ({}, quit): ", options.join(" | "))?;
    out.flush()?;
    Ok(())
}
