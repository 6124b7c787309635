//! Parsing of interactive player input.

use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    Invalid(String),
}

/// Parses `fold`, `check`, `call`, `bet N`, `raise N` (raise to N), `allin`
/// and `quit`, case-insensitively. Single-letter shortcuts `f`, `k`, `c`
/// and `q` are accepted too.
///
/// ```rust
/// use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("bet 100"), ParseResult::Action(PlayerAction::Bet(100)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    let amount = |what: &str| -> Result<u32, String> {
        match parts.get(1).map(|s| s.parse::<u32>()) {
            None => Err(format!("{} requires an amount (e.g., '{} 100')", what, what)),
            Some(Ok(0)) => Err(format!("{} amount must be positive", what)),
            Some(Ok(n)) => Ok(n),
            Some(Err(_)) => Err(format!("Invalid {} amount", what)),
        }
    };

    let action = match verb {
        "q" | "quit" => return ParseResult::Quit,
        "fold" | "f" => PlayerAction::Fold,
        "check" | "k" => PlayerAction::Check,
        "call" | "c" => PlayerAction::Call,
        "allin" | "all-in" => PlayerAction::AllIn,
        "bet" => match amount("bet") {
            Ok(n) => PlayerAction::Bet(n),
            Err(msg) => return ParseResult::Invalid(msg),
        },
        "raise" => match amount("raise") {
            Ok(n) => PlayerAction::Raise(n),
            Err(msg) => return ParseResult::Invalid(msg),
        },
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}' (try fold, check, call, bet N, raise N, allin, quit)",
                other
            ));
        }
    };

    let expected_words = if matches!(action, PlayerAction::Bet(_) | PlayerAction::Raise(_)) {
        2
    } else {
        1
    };
    if parts.len() > expected_words {
        return ParseResult::Invalid(format!("Unexpected input after '{}'", verb));
    }
    ParseResult::Action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action() {
        assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action(" CHECK "), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("c"), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("raise 60"), ParseResult::Action(PlayerAction::Raise(60)));
        assert_eq!(parse_player_action("all-in"), ParseResult::Action(PlayerAction::AllIn));
        assert_eq!(parse_player_action("quit"), ParseResult::Quit);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["bet", "bet 0", "bet ten", "raise -5", "call 20", ""] {
            assert!(
                matches!(parse_player_action(input), ParseResult::Invalid(_)),
                "{:?} should be rejected",
                input
            );
        }
        match parse_player_action("shove") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
