use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Where a seat stands in the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Dealt in and still able to act
    Active,
    /// Committed the whole stack; stays eligible for the pots it reached
    AllIn,
    /// Gave up the hand; chips already committed stay in the pot
    Folded,
    /// Not dealt into the current hand
    SittingOut,
}

/// A player action as submitted by a human or a strategy.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    Fold,
    Check,
    Call,
    /// Open the betting for the street with this many chips
    Bet(u32),
    /// Raise so that this seat's street total becomes the given amount
    Raise(u32),
    /// Commit the whole remaining stack as a call, bet or raise
    AllIn,
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::AllIn => ActionKind::AllIn,
        }
    }
}

/// Action kinds without amounts, as reported by `legal_actions`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

/// Default starting stack for a newly seated player.
pub const DEFAULT_STARTING_STACK: u32 = 1_000;

/// A seat at the table. Persists across hands; per-hand fields are reset by
/// [`Seat::reset_for_hand`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    id: usize,
    name: String,
    stack: u32,
    hole: Option<[Card; 2]>,
    status: SeatStatus,
    round_contribution: u32,
    hand_contribution: u32,
    sitting_out: bool,
}

impl Seat {
    pub fn new(id: usize, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            hole: None,
            status: SeatStatus::SittingOut,
            round_contribution: 0,
            hand_contribution: 0,
            sitting_out: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> SeatStatus {
        self.status
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    /// Chips committed on the current street.
    pub fn round_contribution(&self) -> u32 {
        self.round_contribution
    }
    /// Chips committed over the whole hand.
    pub fn hand_contribution(&self) -> u32 {
        self.hand_contribution
    }
    pub fn is_sitting_out(&self) -> bool {
        self.sitting_out
    }

    /// Still contesting the pot (Active or AllIn).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, SeatStatus::Active | SeatStatus::AllIn)
    }

    /// Can still take a betting action.
    pub fn can_act(&self) -> bool {
        self.status == SeatStatus::Active && self.stack > 0
    }

    /// Will be dealt into the next hand.
    pub fn is_eligible(&self) -> bool {
        !self.sitting_out && self.stack > 0
    }

    pub(crate) fn set_sitting_out(&mut self, sitting_out: bool) {
        self.sitting_out = sitting_out;
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = None;
        self.round_contribution = 0;
        self.hand_contribution = 0;
        self.status = if self.is_eligible() {
            SeatStatus::Active
        } else {
            SeatStatus::SittingOut
        };
    }

    pub(crate) fn deal(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    pub(crate) fn fold(&mut self) {
        self.status = SeatStatus::Folded;
        self.hole = None;
    }

    /// Moves chips from the stack into this seat's contributions.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientStack {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.round_contribution += amount;
        self.hand_contribution += amount;
        if self.stack == 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
        Ok(())
    }

    pub(crate) fn clear_round(&mut self) {
        self.round_contribution = 0;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Clears hand state once chips have been paid out.
    pub(crate) fn finish_hand(&mut self) {
        self.round_contribution = 0;
        self.hand_contribution = 0;
    }
}
