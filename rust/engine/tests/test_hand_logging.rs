use std::fs;

use holdem_engine::cards::parse_cards;
use holdem_engine::engine::Engine;
use holdem_engine::game::Street;
use holdem_engine::logger::{read_records, ActionRecord, BlindRecord, HandLogger, HandRecord};
use holdem_engine::player::PlayerAction;
use holdem_engine::table::TableConfig;

fn sample_record() -> HandRecord {
    HandRecord {
        hand_id: None,
        hand_no: 1,
        seed: 1,
        button: 0,
        small_blind: 10,
        big_blind: 20,
        blinds: vec![
            BlindRecord { seat: 1, amount: 10 },
            BlindRecord { seat: 0, amount: 20 },
        ],
        stacks: vec![(0, 1_000), (1, 1_000)],
        actions: vec![ActionRecord {
            seat: 1,
            street: Street::Preflop,
            action: PlayerAction::Fold,
        }],
        board: parse_cards("Ac").unwrap(),
        payouts: Vec::new(),
        showdown: Vec::new(),
        ts: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&sample_record()).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = HandLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn id_and_ts_are_filled_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let first = logger.write(&sample_record()).unwrap();
    let mut explicit = sample_record();
    explicit.hand_id = Some("custom-1".into());
    explicit.ts = Some("2025-01-02T03:04:05Z".into());
    let second = logger.write(&explicit).unwrap();
    assert_eq!(second, "custom-1");

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].hand_id.as_deref(), Some(first.as_str()));
    assert!(records[0].ts.is_some());
    assert_eq!(records[1].ts.as_deref(), Some("2025-01-02T03:04:05Z"));
}

#[test]
fn engine_record_matches_the_played_hand() {
    let config = TableConfig {
        seats: 3,
        seed: Some(9),
        ..TableConfig::default()
    };
    let mut e = Engine::with_players(config, 3).unwrap();
    e.start_hand().unwrap();
    while let Some(seat) = e.current_actor() {
        let action = if e.to_call(seat) > 0 {
            PlayerAction::Call
        } else {
            PlayerAction::Check
        };
        e.apply_action(seat, action).unwrap();
    }
    let record = e.hand_record().unwrap().clone();
    let result = e.last_result().unwrap();
    assert_eq!(record.button, e.button().unwrap());
    assert_eq!(record.blinds.iter().map(|b| b.amount).sum::<u32>(), 30);
    assert_eq!(record.board, result.board);
    assert_eq!(record.payouts, result.payouts);
    assert_eq!(record.showdown.len(), 3);
    // 3 preflop actions, then 3 checks on each of flop, turn and river
    assert_eq!(record.actions.len(), 3 + 9);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).unwrap();
    logger.write(&record).unwrap();
    let back = read_records(&path).unwrap();
    assert_eq!(back[0].actions, record.actions);
    assert_eq!(back[0].showdown, record.showdown);
}
