//! Terminal output helpers shared by the commands.

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".into();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".into(),
        PlayerAction::Check => "check".into(),
        PlayerAction::Call => "call".into(),
        PlayerAction::Bet(n) => format!("bet {}", n),
        PlayerAction::Raise(n) => format!("raise to {}", n),
        PlayerAction::AllIn => "all-in".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;

    #[test]
    fn formats_cards_and_actions() {
        let cards = parse_cards("As 10h").unwrap();
        assert_eq!(format_cards(&cards), "A♠ 10♥");
        assert_eq!(format_cards(&[]), "-");
        assert_eq!(format_action(&PlayerAction::Raise(60)), "raise to 60");
        assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
    }

    #[test]
    fn error_and_warning_prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\nWARNING: careful\n");
    }
}
