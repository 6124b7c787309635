use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;
use crate::player::SeatStatus;
use crate::pot::{totals_by_seat, Payout, Pots};

/// Lifecycle of a hand at the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// No hand has been started yet
    Waiting,
    /// Blinds are posted and seats are acting
    Betting,
    /// Betting is over; hands are being ranked and pots paid
    Showdown,
    /// Pots are paid out; a new hand may start
    Finished,
}

/// Betting street in Texas Hold'em.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards only
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Community cards dealt when this street opens.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

/// Read-only view of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: usize,
    pub name: String,
    pub stack: u32,
    pub status: SeatStatus,
    pub round_contribution: u32,
    pub hand_contribution: u32,
    /// `None` when folded, not dealt, or hidden from the viewer
    pub hole_cards: Option<[Card; 2]>,
}

/// Everything a display or a strategy may look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub hand_no: u64,
    pub phase: Phase,
    pub street: Option<Street>,
    pub button: Option<usize>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub board: Vec<Card>,
    pub pots: Pots,
    pub current_actor: Option<usize>,
    pub highest_bet: u32,
    /// Smallest legal raise-to total, when a raise is possible at all
    pub min_raise_to: Option<u32>,
    pub seats: Vec<SeatView>,
}

impl HandSnapshot {
    pub fn seat(&self, id: usize) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn to_call(&self, id: usize) -> u32 {
        self.seat(id)
            .map_or(0, |s| self.highest_bet.saturating_sub(s.round_contribution))
    }

    /// Number of seats still contesting the pot.
    pub fn live_seats(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| matches!(s.status, SeatStatus::Active | SeatStatus::AllIn))
            .count()
    }
}

/// A hand shown down at the end of the river.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub hole_cards: [Card; 2],
    pub hand: Hand,
}

/// Outcome of a finished hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_no: u64,
    pub board: Vec<Card>,
    pub pots: Pots,
    pub payouts: Vec<Payout>,
    pub showdown: Vec<ShowdownEntry>,
    /// True when everyone else folded and no hand was evaluated
    pub uncontested: bool,
}

impl HandResult {
    pub fn total_paid(&self) -> u32 {
        self.payouts.iter().map(|p| p.amount).sum()
    }

    pub fn won_by(&self, seat: usize) -> u32 {
        totals_by_seat(&self.payouts).get(&seat).copied().unwrap_or(0)
    }

    /// Seats that collected chips, ascending.
    pub fn winners(&self) -> Vec<usize> {
        totals_by_seat(&self.payouts).into_keys().collect()
    }
}
