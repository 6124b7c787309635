//! Trivial strategies, mostly useful as sparring partners in simulations.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use holdem_engine::game::HandSnapshot;
use holdem_engine::player::PlayerAction;

use crate::Strategy;

/// Never folds, never raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn decide(&self, view: &HandSnapshot, seat: usize) -> PlayerAction {
        if view.to_call(seat) == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}

/// Picks uniformly among fold, check/call and a random-sized bet or raise.
/// Never folds when checking is free.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl Strategy for RandomStrategy {
    fn decide(&self, view: &HandSnapshot, seat: usize) -> PlayerAction {
        let Some(me) = view.seat(seat) else {
            return PlayerAction::Fold;
        };
        let to_call = view.to_call(seat);
        let passive = if to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let aggressive = view.min_raise_to.map(|min| {
            if view.highest_bet == 0 {
                PlayerAction::Bet(rng.random_range(min..=me.stack))
            } else {
                let max = me.round_contribution + me.stack;
                PlayerAction::Raise(rng.random_range(min..=max))
            }
        });
        match (rng.random_range(0..3u8), aggressive) {
            (0, _) if to_call > 0 => PlayerAction::Fold,
            (2, Some(action)) => action,
            _ => passive,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
