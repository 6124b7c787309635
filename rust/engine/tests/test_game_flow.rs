use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::game::{Phase, Street};
use holdem_engine::player::{PlayerAction, SeatStatus};
use holdem_engine::table::TableConfig;

fn engine(players: usize, seed: u64) -> Engine {
    let config = TableConfig {
        seats: players,
        seed: Some(seed),
        ..TableConfig::default()
    };
    Engine::with_players(config, players).unwrap()
}

fn check_or_call_down(e: &mut Engine) {
    while let Some(seat) = e.current_actor() {
        let action = if e.to_call(seat) > 0 {
            PlayerAction::Call
        } else {
            PlayerAction::Check
        };
        e.apply_action(seat, action).unwrap();
    }
}

#[test]
fn hand_progresses_streets_and_completes() {
    let mut e = engine(3, 1);
    e.start_hand().unwrap();
    assert_eq!(e.phase(), Phase::Betting);
    assert_eq!(e.street(), Some(Street::Preflop));
    assert!(e
        .snapshot()
        .seats
        .iter()
        .all(|s| s.hole_cards.is_some()));
    check_or_call_down(&mut e);
    assert_eq!(e.phase(), Phase::Finished);
    let result = e.last_result().unwrap();
    assert_eq!(result.board.len(), 5);
    assert_eq!(result.showdown.len(), 3);
    assert!(!result.uncontested);
    assert_eq!(result.total_paid(), 60);
    let stacks: u32 = e.table().seats().map(|s| s.stack()).sum();
    assert_eq!(stacks, 3_000);
}

#[test]
fn everyone_folds_to_big_blind() {
    let mut e = engine(3, 2);
    e.start_hand().unwrap();
    let button = e.button().unwrap();
    let sb = (button + 1) % 3;
    let bb = (button + 2) % 3;
    e.apply_action(button, PlayerAction::Fold).unwrap();
    e.apply_action(sb, PlayerAction::Fold).unwrap();
    assert_eq!(e.phase(), Phase::Finished);
    let result = e.last_result().unwrap();
    assert!(result.uncontested);
    assert!(result.showdown.is_empty());
    assert!(result.board.is_empty());
    assert_eq!(result.winners(), vec![bb]);
    assert_eq!(e.table().seat(bb).unwrap().stack(), 1_010);
    assert_eq!(e.table().seat(sb).unwrap().stack(), 990);
    assert_eq!(e.table().seat(button).unwrap().stack(), 1_000);
}

#[test]
fn fold_on_the_turn_ends_the_hand() {
    let mut e = engine(2, 6);
    e.start_hand().unwrap();
    while e.street() != Some(Street::Turn) {
        let seat = e.current_actor().unwrap();
        let action = if e.to_call(seat) > 0 {
            PlayerAction::Call
        } else {
            PlayerAction::Check
        };
        e.apply_action(seat, action).unwrap();
    }
    let bettor = e.current_actor().unwrap();
    e.apply_action(bettor, PlayerAction::Bet(60)).unwrap();
    let folder = e.current_actor().unwrap();
    e.apply_action(folder, PlayerAction::Fold).unwrap();
    let result = e.last_result().unwrap();
    assert_eq!(result.winners(), vec![bettor]);
    assert_eq!(result.board.len(), 4);
    assert_eq!(e.table().seat(bettor).unwrap().stack(), 1_020);
    assert_eq!(e.table().seat(folder).unwrap().status(), SeatStatus::Folded);
}

#[test]
fn private_snapshot_hides_other_hole_cards() {
    let mut e = engine(4, 3);
    e.start_hand().unwrap();
    let view = e.snapshot_for(2);
    for seat in &view.seats {
        assert_eq!(seat.hole_cards.is_some(), seat.id == 2);
    }
    check_or_call_down(&mut e);
    let after = e.snapshot_for(2);
    assert!(after.seats.iter().all(|s| s.hole_cards.is_some()));
}

#[test]
fn one_player_cannot_start() {
    let config = TableConfig {
        seats: 6,
        ..TableConfig::default()
    };
    let mut e = Engine::with_players(config, 1).unwrap();
    assert_eq!(
        e.start_hand(),
        Err(GameError::InsufficientPlayers { available: 1 })
    );
}

#[test]
fn sitting_out_and_busted_seats_are_skipped() {
    let config = TableConfig {
        seats: 4,
        seed: Some(8),
        ..TableConfig::default()
    };
    let mut e = Engine::with_players(config, 3).unwrap();
    e.sit_with_stack(3, "broke", 0).unwrap();
    e.sit_out(1).unwrap();
    e.start_hand().unwrap();
    let snap = e.snapshot();
    assert_eq!(snap.seat(1).unwrap().status, SeatStatus::SittingOut);
    assert_eq!(snap.seat(3).unwrap().status, SeatStatus::SittingOut);
    assert!(snap.seat(1).unwrap().hole_cards.is_none());
    let button = e.button().unwrap();
    assert!(button == 0 || button == 2);
    check_or_call_down(&mut e);
    e.sit_in(1).unwrap();
    e.sit_out(0).unwrap();
    e.sit_out(2).unwrap();
    assert_eq!(
        e.start_hand(),
        Err(GameError::InsufficientPlayers { available: 1 })
    );
}

#[test]
fn stacks_carry_over_and_button_rotates() {
    let mut e = engine(5, 77);
    let mut buttons = Vec::new();
    for _ in 0..5 {
        e.start_hand().unwrap();
        buttons.push(e.button().unwrap());
        check_or_call_down(&mut e);
    }
    for pair in buttons.windows(2) {
        assert_eq!(pair[1], (pair[0] + 1) % 5);
    }
    let total: u32 = e.table().seats().map(|s| s.stack()).sum();
    assert_eq!(total, 5_000);
    assert_eq!(e.hand_no(), 5);
}
