use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::game::{Phase, Street};
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::table::TableConfig;

fn engine(players: usize, seed: u64) -> Engine {
    let config = TableConfig {
        seats: players,
        seed: Some(seed),
        ..TableConfig::default()
    };
    Engine::with_players(config, players).expect("valid table")
}

#[test]
fn out_of_turn_action_changes_nothing() {
    let mut e = engine(4, 21);
    e.start_hand().unwrap();
    let actor = e.current_actor().unwrap();
    let other = (actor + 1) % 4;
    let before = e.snapshot();
    let err = e.apply_action(other, PlayerAction::Call).unwrap_err();
    assert_eq!(
        err,
        GameError::NotYourTurn {
            expected: actor,
            actual: other
        }
    );
    assert_eq!(e.snapshot(), before);
    assert!(e.legal_actions(other).is_empty());
}

#[test]
fn illegal_action_changes_nothing() {
    let mut e = engine(3, 4);
    e.start_hand().unwrap();
    let actor = e.current_actor().unwrap();
    let before = e.snapshot();
    assert!(matches!(
        e.apply_action(actor, PlayerAction::Check),
        Err(GameError::IllegalAction { .. })
    ));
    assert!(matches!(
        e.apply_action(actor, PlayerAction::Raise(10_000)),
        Err(GameError::InsufficientStack { .. })
    ));
    assert_eq!(e.snapshot(), before);
}

#[test]
fn action_without_a_hand_is_rejected() {
    let mut e = engine(2, 1);
    assert_eq!(
        e.apply_action(0, PlayerAction::Check),
        Err(GameError::NoHandInProgress)
    );
    assert_eq!(e.phase(), Phase::Waiting);
}

#[test]
fn big_blind_gets_the_option_preflop() {
    let mut e = engine(3, 8);
    e.start_hand().unwrap();
    let button = e.button().unwrap();
    let bb = (button + 2) % 3;
    // button and small blind just call
    for _ in 0..2 {
        let seat = e.current_actor().unwrap();
        e.apply_action(seat, PlayerAction::Call).unwrap();
    }
    assert_eq!(e.current_actor(), Some(bb));
    let kinds = e.legal_actions(bb);
    assert!(kinds.contains(&ActionKind::Check));
    assert!(kinds.contains(&ActionKind::Raise));
    e.apply_action(bb, PlayerAction::Check).unwrap();
    assert_eq!(e.street(), Some(Street::Flop));
    assert_eq!(e.board().len(), 3);
}

#[test]
fn postflop_action_starts_left_of_button() {
    let mut e = engine(4, 13);
    e.start_hand().unwrap();
    let button = e.button().unwrap();
    while e.street() == Some(Street::Preflop) {
        let seat = e.current_actor().unwrap();
        let action = if e.to_call(seat) > 0 {
            PlayerAction::Call
        } else {
            PlayerAction::Check
        };
        e.apply_action(seat, action).unwrap();
    }
    assert_eq!(e.current_actor(), Some((button + 1) % 4));
    assert_eq!(e.snapshot().highest_bet, 0);
}

#[test]
fn raise_reopens_action_for_earlier_callers() {
    let mut e = engine(3, 17);
    e.start_hand().unwrap();
    let button = e.button().unwrap();
    let bb = (button + 2) % 3;
    e.apply_action(button, PlayerAction::Call).unwrap();
    e.apply_action((button + 1) % 3, PlayerAction::Call).unwrap();
    e.apply_action(bb, PlayerAction::Raise(80)).unwrap();
    assert_eq!(e.current_actor(), Some(button));
    assert_eq!(e.to_call(button), 60);
    // minimum re-raise is another 60 on top of 80
    assert_eq!(e.min_raise_to(button), Some(140));
    assert!(e
        .apply_action(button, PlayerAction::Raise(120))
        .is_err());
    e.apply_action(button, PlayerAction::Raise(140)).unwrap();
    assert_eq!(e.current_actor(), Some((button + 1) % 3));
}
