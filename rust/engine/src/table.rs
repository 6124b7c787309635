use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{Seat, DEFAULT_STARTING_STACK};

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 9;

/// Stakes and size of a single table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats at the table (2-9)
    pub seats: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Stack handed to players seated without an explicit amount
    pub starting_stack: u32,
    /// Seed for shuffling and the first button draw
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: MAX_SEATS,
            small_blind: 10,
            big_blind: 20,
            starting_stack: DEFAULT_STARTING_STACK,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.seats) {
            return Err(GameError::InvalidConfig(format!(
                "seats must be between {} and {}",
                MIN_SEATS, MAX_SEATS
            )));
        }
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig("small blind must be >0".into()));
        }
        if self.big_blind <= self.small_blind {
            return Err(GameError::InvalidConfig(
                "big blind must be greater than small blind".into(),
            ));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig("starting stack must be >0".into()));
        }
        Ok(())
    }
}

/// Fixed-size seat array, dealer button and community cards.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    seats: Vec<Option<Seat>>,
    button: Option<usize>,
    board: Vec<Card>,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seats = vec![None; config.seats];
        Ok(Self {
            config,
            seats,
            button: None,
            board: Vec::with_capacity(5),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn size(&self) -> usize {
        self.seats.len()
    }
    pub fn button(&self) -> Option<usize> {
        self.button
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn seat(&self, id: usize) -> Option<&Seat> {
        self.seats.get(id).and_then(Option::as_ref)
    }

    pub(crate) fn seat_mut(&mut self, id: usize) -> Option<&mut Seat> {
        self.seats.get_mut(id).and_then(Option::as_mut)
    }

    /// Occupied seats in seat order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().flatten()
    }

    pub(crate) fn seats_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.seats.iter_mut().flatten()
    }

    /// Seat ids clockwise starting after `from` and ending with `from`.
    pub fn clockwise_after(&self, from: usize) -> impl Iterator<Item = usize> {
        let size = self.size();
        (1..=size).map(move |k| (from + k) % size)
    }

    /// First occupied seat after `from` (clockwise) matching `pred`.
    pub fn next_seat(&self, from: usize, pred: impl Fn(&Seat) -> bool) -> Option<usize> {
        self.clockwise_after(from)
            .find(|&id| self.seat(id).is_some_and(&pred))
    }

    pub fn eligible_count(&self) -> usize {
        self.seats().filter(|s| s.is_eligible()).count()
    }

    pub(crate) fn sit(&mut self, id: usize, name: String, stack: u32) -> Result<(), GameError> {
        let slot = self.seats.get_mut(id).ok_or(GameError::InvalidSeat(id))?;
        if slot.is_some() {
            return Err(GameError::SeatOccupied(id));
        }
        *slot = Some(Seat::new(id, name, stack));
        Ok(())
    }

    pub(crate) fn leave(&mut self, id: usize) -> Result<Seat, GameError> {
        let seat = self
            .seats
            .get_mut(id)
            .and_then(Option::take)
            .ok_or(GameError::InvalidSeat(id))?;
        if self.button == Some(id) && self.seats().next().is_none() {
            self.button = None;
        }
        Ok(seat)
    }

    /// Moves the button to the next seat that will be dealt in. The first
    /// hand picks one of those seats uniformly at random.
    pub(crate) fn rotate_button(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let next = match self.button {
            None => {
                let eligible: Vec<usize> = self
                    .seats()
                    .filter(|s| s.is_eligible())
                    .map(|s| s.id())
                    .collect();
                if eligible.is_empty() {
                    None
                } else {
                    Some(eligible[rng.random_range(0..eligible.len())])
                }
            }
            Some(current) => self.next_seat(current, |s| s.is_eligible()),
        };
        if next.is_some() {
            self.button = next;
        }
        next
    }

    pub(crate) fn push_board(&mut self, cards: &[Card]) {
        self.board.extend_from_slice(cards);
    }

    pub(crate) fn clear_board(&mut self) {
        self.board.clear();
    }
}
