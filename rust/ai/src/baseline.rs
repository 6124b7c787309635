//! Baseline strategy: rule-based play from hand strength and pot odds.
//!
//! Deterministic, so simulations with a fixed table seed replay exactly.

use holdem_engine::cards::Card;
use holdem_engine::game::{HandSnapshot, Street};
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::player::PlayerAction;

use crate::Strategy;

/// Simple reference bot.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): Raise or call
/// - Medium hands (suited connectors, Ax, small pairs): Call if cheap
/// - Weak hands: Fold to raises, check if free
///
/// **Postflop:**
/// - Strong hands (Two Pair+): Bet or call
/// - Medium hands (One Pair): Check or call small bets
/// - Weak hands: Fold unless the price is very small
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineStrategy;
/// use holdem_ai::Strategy;
/// use holdem_engine::engine::Engine;
/// use holdem_engine::table::TableConfig;
///
/// let bot = BaselineStrategy::new();
/// let config = TableConfig { seats: 2, seed: Some(42), ..TableConfig::default() };
/// let mut engine = Engine::with_players(config, 2).unwrap();
/// engine.start_hand().unwrap();
///
/// let seat = engine.current_actor().unwrap();
/// let action = bot.decide(&engine.snapshot_for(seat), seat);
/// engine.apply_action(seat, action).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineStrategy;

/// What the acting seat faces, pulled out of a snapshot.
#[derive(Debug, Clone, Copy)]
struct Spot {
    to_call: u32,
    stack: u32,
    pot: u32,
    highest_bet: u32,
    round_contribution: u32,
    /// Smallest bet or raise-to, when aggression is allowed at all
    min_raise_to: Option<u32>,
}

impl Spot {
    fn all_in_to(&self) -> u32 {
        self.round_contribution + self.stack
    }

    /// Bets or raises by `size` chips on top of the current bet, clamped to
    /// what is legal; falls back to `otherwise` when aggression is closed.
    fn aggress(&self, size: u32, otherwise: PlayerAction) -> PlayerAction {
        let Some(min) = self.min_raise_to else {
            return otherwise;
        };
        if self.highest_bet == 0 {
            PlayerAction::Bet(size.max(min).min(self.stack))
        } else {
            PlayerAction::Raise((self.highest_bet + size).max(min).min(self.all_in_to()))
        }
    }
}

impl BaselineStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Preflop hand strength on a scale of 0-10.
    ///
    /// - 9-10: Premium hands (AA, KK, QQ, JJ, AKs)
    /// - 7-8: Strong hands (TT-99, AK, AQ, KQs)
    /// - 5-6: Medium hands (88-77, AJ, suited connectors)
    /// - 3-4: Marginal hands (66-22, Ax, suited cards)
    /// - 0-2: Weak hands (offsuit low cards)
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank.value();
        let r2 = hole[1].rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            // broadway
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength on a scale of 0-10 from the best hand so far.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let hand = evaluate(&cards).ok()?;

        let base = match hand.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        // queen-high or better scoring cards add one
        let kicker_boost = u8::from(hand.high_value() >= 12);
        Some((base + kicker_boost).min(10))
    }

    /// Share of the final pot the caller would own: pot / (pot + call).
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn decide_action(strength: u8, spot: Spot) -> PlayerAction {
        if spot.to_call == 0 {
            return match strength {
                9..=10 => spot.aggress(spot.pot * 2 / 3, PlayerAction::Check),
                7..=8 => spot.aggress(spot.pot / 2, PlayerAction::Check),
                _ => PlayerAction::Check,
            };
        }

        if spot.to_call >= spot.stack {
            return if strength >= 7 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        let pot_odds = Self::pot_odds(spot.pot, spot.to_call);
        match strength {
            9..=10 => spot.aggress(spot.pot / 2, PlayerAction::Call),
            7..=8 => PlayerAction::Call,
            5..=6 => {
                if pot_odds >= 0.3 || spot.to_call <= spot.pot / 4 {
                    PlayerAction::Call
                } else {
                    PlayerAction::Fold
                }
            }
            3..=4 => {
                if pot_odds >= 0.4 || spot.to_call <= spot.pot / 6 {
                    PlayerAction::Call
                } else {
                    PlayerAction::Fold
                }
            }
            _ => PlayerAction::Fold,
        }
    }
}

impl Strategy for BaselineStrategy {
    fn decide(&self, view: &HandSnapshot, seat: usize) -> PlayerAction {
        let to_call = view.to_call(seat);
        let passive = if to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        };
        let Some(me) = view.seat(seat) else {
            return passive;
        };
        let Some(hole) = me.hole_cards else {
            return passive;
        };

        let strength = match view.street {
            None | Some(Street::Preflop) => Self::preflop_strength(hole),
            Some(_) => Self::postflop_strength(hole, &view.board)
                .unwrap_or_else(|| Self::preflop_strength(hole)),
        };
        let spot = Spot {
            to_call,
            stack: me.stack,
            pot: view.pots.total(),
            highest_bet: view.highest_bet,
            round_contribution: me.round_contribution,
            min_raise_to: if view.current_actor == Some(seat) {
                view.min_raise_to
            } else {
                None
            },
        };
        Self::decide_action(strength, spot)
    }

    fn name(&self) -> &str {
        "Baseline"
    }
}
